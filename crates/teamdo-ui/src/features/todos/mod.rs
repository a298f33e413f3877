//! Todo list feature surface: state, rendering, mutation workflow and views.
//!
//! # Design
//! - The same state and workflow serve the personal list and every team sublist.
//! - Lists are replaced wholesale from the server; nothing is patched locally.

pub mod actions;
pub mod render;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
pub mod workflow;
