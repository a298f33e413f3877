//! Collection scopes and the endpoints and message keys tied to them.

use std::fmt;
use teamdo_api_models::{TeamId, TodoId};

/// Collection context for a todo list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Scope {
    /// The signed-in user's own todos.
    Personal,
    /// Todos shared within one team.
    Team(TeamId),
}

/// Mutations a scope can receive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MutationKind {
    /// Create a todo.
    Create,
    /// Flip completion.
    Toggle,
    /// Delete a todo.
    Delete,
}

impl Scope {
    /// Collection endpoint (`GET` lists, `POST` creates).
    #[must_use]
    pub fn collection_path(self) -> String {
        match self {
            Self::Personal => "/api/todos".to_string(),
            Self::Team(team) => format!("/api/teams/{team}/todos"),
        }
    }

    /// Item endpoint (`PUT` updates, `DELETE` removes).
    #[must_use]
    pub fn item_path(self, id: TodoId) -> String {
        format!("{}/{id}", self.collection_path())
    }

    /// Translation key for a failed list fetch.
    #[must_use]
    pub const fn fetch_error_key(self) -> &'static str {
        match self {
            Self::Personal => "todos.fetchError",
            Self::Team(_) => "teams.fetchTodosError",
        }
    }

    /// Translation key for a failed mutation.
    #[must_use]
    pub const fn mutation_error_key(self, kind: MutationKind) -> &'static str {
        match (self, kind) {
            (Self::Personal, MutationKind::Create) => "todos.addError",
            (Self::Personal, MutationKind::Toggle) => "todos.toggleError",
            (Self::Personal, MutationKind::Delete) => "todos.deleteError",
            (Self::Team(_), MutationKind::Create) => "teams.addTaskError",
            (Self::Team(_), MutationKind::Toggle) => "teams.updateTaskError",
            (Self::Team(_), MutationKind::Delete) => "teams.deleteTaskError",
        }
    }

    /// Translation key for the delete confirmation prompt.
    #[must_use]
    pub const fn confirm_delete_key(self) -> &'static str {
        match self {
            Self::Personal => "todos.confirmDelete",
            Self::Team(_) => "teams.confirmDeleteTask",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Personal => f.write_str("personal"),
            Self::Team(team) => write!(f, "team:{team}"),
        }
    }
}
