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
//! Logging primitives shared across the Teamdo workspace.
//!
//! The client runs inside the browser, so the subscriber writes to the
//! developer console on wasm32 and to stderr everywhere else.

#[cfg(target_arch = "wasm32")]
mod console;
mod init;

pub use init::{DEFAULT_LOG_LEVEL, LogFormat, LoggingConfig, build_sha, init_logging};
