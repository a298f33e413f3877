#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Teamdo Web UI.
//!
//! The DOM-free half of the crate (`core`, `features`, `i18n`, `config`)
//! compiles on every target and carries the synchronization, rendering and
//! mutation rules. The wasm32-only half (`app`, `components`, `services`)
//! wires those rules into Yew components and browser APIs.

pub mod config;
pub mod core;
pub mod features;
pub mod i18n;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;
#[cfg(target_arch = "wasm32")]
mod services;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;

#[cfg(test)]
pub(crate) mod testing;
