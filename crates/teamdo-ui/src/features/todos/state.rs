//! Per-list state and the new-todo draft.

use crate::core::scope::Scope;
use crate::core::validation::{ValidationError, required};
use teamdo_api_models::{NewTodo, Todo, TodoId};

/// Rendered list for one scope.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TodoListState {
    /// Collection this list mirrors.
    pub scope: Scope,
    /// Items in server response order.
    pub items: Vec<Todo>,
    /// Translation key of an error shown inline above the list.
    pub inline_error: Option<&'static str>,
    /// Whether at least one fetch succeeded.
    pub loaded: bool,
}

impl TodoListState {
    /// Empty, not yet loaded list.
    #[must_use]
    pub const fn new(scope: Scope) -> Self {
        Self {
            scope,
            items: Vec::new(),
            inline_error: None,
            loaded: false,
        }
    }

    /// Replace every item with a fresh server snapshot.
    pub fn replace(&mut self, items: Vec<Todo>) {
        self.items = items;
        self.inline_error = None;
        self.loaded = true;
    }

    /// Look up an item by id.
    #[must_use]
    pub fn find(&self, id: TodoId) -> Option<&Todo> {
        self.items.iter().find(|todo| todo.id == id)
    }

    /// Number of completed items.
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|todo| todo.completed).count()
    }
}

/// Contents of the new-todo form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TodoDraft {
    /// Raw title input.
    pub title: String,
    /// Raw description input.
    pub description: String,
}

impl TodoDraft {
    /// Draft from raw form values.
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    /// Request body with trimmed fields.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::TitleRequired`] for a blank title.
    pub fn validate(&self) -> Result<NewTodo, ValidationError> {
        let title = required(&self.title, ValidationError::TitleRequired)?;
        Ok(NewTodo {
            title,
            description: self.description.trim().to_string(),
        })
    }
}
