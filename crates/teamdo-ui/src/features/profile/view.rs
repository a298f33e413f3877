//! Profile page: account details, counts and the personal list.

use crate::components::todo_list::TodoList;
use crate::components::{PageProps, run_list_action, surface};
use crate::core::host::Services;
use crate::core::outcome::Outcome;
use crate::features::profile::state::ProfileState;
use crate::features::profile::workflow::ProfileWorkflow;
use crate::features::todos::actions::TodoAction;
use crate::features::todos::render::{ItemVariant, render_list};
use crate::i18n::Translator;
use std::cell::RefCell;
use std::rc::Rc;
use yew::platform::spawn_local;
use yew::prelude::*;

fn load_profile(
    services: Services,
    translator: Translator,
    state: Rc<RefCell<ProfileState>>,
    refresh: UseForceUpdateHandle,
) {
    spawn_local(async move {
        let mut next = state.borrow().clone();
        let outcome = ProfileWorkflow::new(&services, &translator)
            .load(&mut next)
            .await;
        if outcome != Outcome::Redirected {
            *state.borrow_mut() = next;
            refresh.force_update();
        }
        surface(outcome);
    });
}

#[function_component(ProfilePage)]
pub(crate) fn profile_page(props: &PageProps) -> Html {
    let state = use_mut_ref(ProfileState::default);
    let refresh = use_force_update();
    let on_load = {
        let services = props.services.clone();
        let translator = props.translator.clone();
        let state = state.clone();
        let refresh = refresh.clone();
        Callback::from(move |()| {
            load_profile(
                services.clone(),
                translator.clone(),
                state.clone(),
                refresh.clone(),
            );
        })
    };
    {
        let on_load = on_load.clone();
        use_effect_with_deps(
            move |_| {
                on_load.emit(());
                || ()
            },
            (),
        );
    }
    let on_action = {
        let services = props.services.clone();
        let translator = props.translator.clone();
        let state = state.clone();
        let refresh = refresh.clone();
        Callback::from(move |action: TodoAction| {
            run_list_action(
                services.clone(),
                translator.clone(),
                state.clone(),
                refresh.clone(),
                |profile: &mut ProfileState| Some(&mut profile.todos),
                action,
            );
        })
    };

    let t = &props.translator;
    let current = state.borrow();
    let Some(profile) = current.profile.as_ref() else {
        let body = match current.inline_error {
            Some(key) => html! {
                <div class="error-state" role="alert">
                    <p class="error-text">{t.text(key)}</p>
                    <button class="ghost" onclick={on_load.reform(|_| ())}>{t.text("common.retry")}</button>
                </div>
            },
            None => html! { <p class="muted">{t.text("app.loading")}</p> },
        };
        return html! {
            <section class="panel profile-page">
                <h2>{t.text("profile.title")}</h2>
                {body}
            </section>
        };
    };
    let stats = current.stats();
    let items = render_list(&current.todos.items, t, ItemVariant::Profile);

    html! {
        <section class="panel profile-page">
            <h2>{t.text("profile.title")}</h2>
            <dl class="profile-details">
                <dt>{t.text("profile.username")}</dt>
                <dd>{profile.username.clone()}</dd>
                <dt>{t.text("profile.email")}</dt>
                <dd>{profile.email.clone()}</dd>
            </dl>
            <ul class="profile-stats">
                <li><span>{t.text("profile.total")}</span><strong>{stats.total}</strong></li>
                <li><span>{t.text("profile.completed")}</span><strong>{stats.completed}</strong></li>
                <li><span>{t.text("profile.pending")}</span><strong>{stats.pending}</strong></li>
            </ul>
            <h3>{t.text("profile.todos")}</h3>
            <TodoList
                {items}
                empty_label={t.text("todos.noTodos")}
                inline_error={current.todos.inline_error.map(|key| AttrValue::from(t.text(key)))}
                {on_action}
            />
        </section>
    }
}
