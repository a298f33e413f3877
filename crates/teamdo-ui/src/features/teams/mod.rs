//! Team feature surface: membership, team cards and per-team sublists.
//!
//! # Design
//! - Each team owns a [`crate::features::todos::state::TodoListState`] keyed by its id.
//! - Sublist mutations reuse the todo workflow under `Scope::Team(id)`.

pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
pub mod workflow;
