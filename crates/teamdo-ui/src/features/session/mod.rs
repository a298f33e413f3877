//! Session feature surface: login, registration and logout.

pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
pub mod workflow;
