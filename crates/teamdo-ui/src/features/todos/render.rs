//! Pure mapping from a todo to what an item row displays.
//!
//! # Design
//! - Labels are resolved here so views only lay out strings.
//! - The toggle affordance carries the negated completion state it will request.

use crate::i18n::Translator;
use teamdo_api_models::{Todo, TodoId};

/// Layout variant of an item row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemVariant {
    /// Personal list; completed items hide their description.
    Main,
    /// Profile overview; description always shown.
    Profile,
    /// Team sublist; description always shown plus the author line.
    Team,
}

/// Toggle button contents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToggleAffordance {
    /// Target todo.
    pub id: TodoId,
    /// Completion state the click will request.
    pub next: bool,
    /// Localized button label.
    pub label: String,
}

/// Delete button contents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeleteAffordance {
    /// Target todo.
    pub id: TodoId,
    /// Localized button label.
    pub label: String,
}

/// Display model for one todo row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TodoItemView {
    /// Todo id.
    pub id: TodoId,
    /// Title text.
    pub title: String,
    /// Description text when shown.
    pub description: Option<String>,
    /// Completion state, used for styling.
    pub completed: bool,
    /// "Created by" line for team items.
    pub author: Option<String>,
    /// Toggle control.
    pub toggle: ToggleAffordance,
    /// Delete control.
    pub delete: DeleteAffordance,
}

/// Render one todo.
#[must_use]
pub fn render_item(todo: &Todo, t: &Translator, variant: ItemVariant) -> TodoItemView {
    let show_description = match variant {
        ItemVariant::Main => !todo.completed,
        ItemVariant::Profile | ItemVariant::Team => true,
    };
    let description = (show_description && todo.has_description()).then(|| todo.description.clone());
    let author = (variant == ItemVariant::Team).then(|| {
        let who = todo
            .created_by
            .clone()
            .unwrap_or_else(|| t.text("teams.unknownAuthor"));
        t.format("teams.createdBy", &[("user", who.as_str())])
    });
    let toggle_key = if todo.completed {
        "todos.undo"
    } else {
        "todos.complete"
    };
    TodoItemView {
        id: todo.id,
        title: todo.title.clone(),
        description,
        completed: todo.completed,
        author,
        toggle: ToggleAffordance {
            id: todo.id,
            next: !todo.completed,
            label: t.text(toggle_key),
        },
        delete: DeleteAffordance {
            id: todo.id,
            label: t.text("todos.delete"),
        },
    }
}

/// Render a whole list in order.
#[must_use]
pub fn render_list(items: &[Todo], t: &Translator, variant: ItemVariant) -> Vec<TodoItemView> {
    items
        .iter()
        .map(|todo| render_item(todo, t, variant))
        .collect()
}
