//! Profile view state and derived statistics.

use crate::core::scope::Scope;
use crate::features::todos::state::TodoListState;
use teamdo_api_models::{Profile, Todo};

/// Counts shown on the profile page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TodoStats {
    /// All todos.
    pub total: usize,
    /// Completed todos.
    pub completed: usize,
    /// Open todos.
    pub pending: usize,
}

impl TodoStats {
    /// Count a list.
    #[must_use]
    pub fn from_items(items: &[Todo]) -> Self {
        let total = items.len();
        let completed = items.iter().filter(|todo| todo.completed).count();
        Self {
            total,
            completed,
            pending: total - completed,
        }
    }
}

/// Profile view state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileState {
    /// Account details once loaded.
    pub profile: Option<Profile>,
    /// The user's personal todos.
    pub todos: TodoListState,
    /// Translation key shown instead of the details when they could not be fetched.
    pub inline_error: Option<&'static str>,
}

impl Default for ProfileState {
    fn default() -> Self {
        Self {
            profile: None,
            todos: TodoListState::new(Scope::Personal),
            inline_error: None,
        }
    }
}

impl ProfileState {
    /// Statistics over the current list.
    #[must_use]
    pub fn stats(&self) -> TodoStats {
        TodoStats::from_items(&self.todos.items)
    }
}
