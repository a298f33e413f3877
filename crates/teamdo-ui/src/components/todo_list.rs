//! Todo rows, the list wrapper and the new-todo form.
//!
//! # Design
//! - Rows display pre-rendered [`TodoItemView`]s; all labels are resolved upstream.
//! - Clicks are turned into [`TodoAction`]s and handed to the owning view.

use crate::features::todos::actions::TodoAction;
use crate::features::todos::render::TodoItemView;
use crate::features::todos::state::TodoDraft;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct TodoItemProps {
    pub(crate) item: TodoItemView,
    pub(crate) on_action: Callback<TodoAction>,
}

#[function_component(TodoItem)]
pub(crate) fn todo_item(props: &TodoItemProps) -> Html {
    let item = &props.item;
    let on_toggle = {
        let on_action = props.on_action.clone();
        let (id, next) = (item.toggle.id, item.toggle.next);
        Callback::from(move |_| on_action.emit(TodoAction::Toggle { id, next }))
    };
    let on_delete = {
        let on_action = props.on_action.clone();
        let id = item.delete.id;
        Callback::from(move |_| on_action.emit(TodoAction::Remove(id)))
    };

    html! {
        <li class={classes!("todo-item", item.completed.then_some("completed"))}>
            <div class="todo-header">
                <h3 class={classes!("todo-title", item.completed.then_some("completed-text"))}>
                    {item.title.clone()}
                </h3>
                <div class="todo-actions">
                    <button class="complete-btn" onclick={on_toggle}>{item.toggle.label.clone()}</button>
                    <button class="delete-btn" onclick={on_delete}>{item.delete.label.clone()}</button>
                </div>
            </div>
            {for item.description.iter().map(|text| html! {
                <p class="todo-description">{text.clone()}</p>
            })}
            {for item.author.iter().map(|line| html! {
                <p class="todo-meta">{line.clone()}</p>
            })}
        </li>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct TodoListProps {
    pub(crate) items: Vec<TodoItemView>,
    pub(crate) empty_label: AttrValue,
    #[prop_or_default]
    pub(crate) inline_error: Option<AttrValue>,
    pub(crate) on_action: Callback<TodoAction>,
}

#[function_component(TodoList)]
pub(crate) fn todo_list(props: &TodoListProps) -> Html {
    html! {
        <>
            {for props.inline_error.iter().map(|err| html! {
                <p class="error-text" role="alert">{err.clone()}</p>
            })}
            {if props.items.is_empty() {
                html! { <p class="todo-item empty-state">{props.empty_label.clone()}</p> }
            } else {
                html! {
                    <ul class="todo-list">
                        {for props.items.iter().map(|item| html! {
                            <TodoItem key={item.id} item={item.clone()} on_action={props.on_action.clone()} />
                        })}
                    </ul>
                }
            }}
        </>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct TodoFormProps {
    pub(crate) title_placeholder: AttrValue,
    pub(crate) description_placeholder: AttrValue,
    pub(crate) submit_label: AttrValue,
    pub(crate) on_submit: Callback<TodoDraft>,
}

#[function_component(TodoForm)]
pub(crate) fn todo_form(props: &TodoFormProps) -> Html {
    let title = use_state(String::new);
    let description = use_state(String::new);

    let on_title = {
        let title = title.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                title.set(input.value());
            }
        })
    };
    let on_description = {
        let description = description.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlTextAreaElement>() {
                description.set(input.value());
            }
        })
    };
    let onsubmit = {
        let title = title.clone();
        let description = description.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(TodoDraft::new((*title).clone(), (*description).clone()));
            title.set(String::new());
            description.set(String::new());
        })
    };

    html! {
        <form class="todo-form" {onsubmit}>
            <input
                type="text"
                value={(*title).clone()}
                placeholder={props.title_placeholder.clone()}
                oninput={on_title}
            />
            <textarea
                value={(*description).clone()}
                placeholder={props.description_placeholder.clone()}
                oninput={on_description}
            />
            <button type="submit" class="solid">{props.submit_label.clone()}</button>
        </form>
    }
}
