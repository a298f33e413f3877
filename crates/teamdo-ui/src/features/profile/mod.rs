//! Profile feature surface: account details, statistics and the todo overview.

pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
pub mod workflow;
