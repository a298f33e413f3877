//! Todo list actions.
//!
//! # Design
//! - Capture user intent separate from rendering.
//! - Actions carry everything the workflow needs; views never touch the API.

use crate::features::todos::state::TodoDraft;
use teamdo_api_models::TodoId;

/// User intent against one todo list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TodoAction {
    /// Refetch the list.
    Sync,
    /// Submit the new-todo form.
    Create(TodoDraft),
    /// Request a completion state.
    Toggle {
        /// Target todo.
        id: TodoId,
        /// Requested completion state.
        next: bool,
    },
    /// Delete after confirmation.
    Remove(TodoId),
}
