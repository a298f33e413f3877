//! Personal todo page.

use crate::components::todo_list::{TodoForm, TodoList};
use crate::components::{PageProps, run_list_action};
use crate::core::auth::AuthGuard;
use crate::core::scope::Scope;
use crate::features::todos::actions::TodoAction;
use crate::features::todos::render::{ItemVariant, render_list};
use crate::features::todos::state::{TodoDraft, TodoListState};
use yew::prelude::*;

#[function_component(TodosPage)]
pub(crate) fn todos_page(props: &PageProps) -> Html {
    let list = use_mut_ref(|| TodoListState::new(Scope::Personal));
    let refresh = use_force_update();
    let on_action = {
        let services = props.services.clone();
        let translator = props.translator.clone();
        let list = list.clone();
        let refresh = refresh.clone();
        Callback::from(move |action: TodoAction| {
            run_list_action(
                services.clone(),
                translator.clone(),
                list.clone(),
                refresh.clone(),
                |state: &mut TodoListState| Some(state),
                action,
            );
        })
    };
    {
        let services = props.services.clone();
        let on_action = on_action.clone();
        use_effect_with_deps(
            move |_| {
                if AuthGuard::new(&services).require_auth().is_authenticated() {
                    on_action.emit(TodoAction::Sync);
                }
                || ()
            },
            (),
        );
    }
    let on_submit = {
        let on_action = on_action.clone();
        Callback::from(move |draft: TodoDraft| on_action.emit(TodoAction::Create(draft)))
    };

    let t = &props.translator;
    let list = list.borrow();
    let items = render_list(&list.items, t, ItemVariant::Main);
    html! {
        <section class="panel todos-page">
            <h2>{t.text("todos.title")}</h2>
            <TodoForm
                title_placeholder={t.text("todos.titlePlaceholder")}
                description_placeholder={t.text("todos.descriptionPlaceholder")}
                submit_label={t.text("todos.add")}
                {on_submit}
            />
            {if list.loaded || list.inline_error.is_some() {
                html! {
                    <TodoList
                        {items}
                        empty_label={t.text("todos.noTodos")}
                        inline_error={list.inline_error.map(|key| AttrValue::from(t.text(key)))}
                        {on_action}
                    />
                }
            } else {
                html! { <p class="muted">{t.text("app.loading")}</p> }
            }}
        </section>
    }
}
