//! Teams page: create and join forms, team cards and their task sublists.
//!
//! # Design
//! - Page state lives in one shared cell so sublists can change while a
//!   team-level request is outstanding.
//! - Card operations copy the state when their task starts and merge it back
//!   with [`TeamsState::merge_cards`] as soon as the workflow returns. The team
//!   directory lane serializes them, so no merge replaces a newer result.
//! - Sublist operations write back only their own list.

use crate::components::todo_list::{TodoForm, TodoList};
use crate::components::{PageProps, run_list_action, surface};
use crate::core::auth::AuthGuard;
use crate::core::host::Services;
use crate::core::outcome::Outcome;
use crate::features::teams::state::{JoinState, TeamsState};
use crate::features::teams::workflow::TeamWorkflow;
use crate::features::todos::actions::TodoAction;
use crate::features::todos::render::{ItemVariant, render_list};
use crate::features::todos::state::TodoDraft;
use crate::i18n::Translator;
use std::cell::RefCell;
use std::rc::Rc;
use teamdo_api_models::{Team, TeamId};
use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::prelude::*;

type SharedTeams = Rc<RefCell<TeamsState>>;

enum TeamOp {
    Load,
    Create(String),
    Join(String),
    Delete(TeamId),
}

fn run_team_op(
    services: Services,
    translator: Translator,
    state: SharedTeams,
    refresh: UseForceUpdateHandle,
    op: TeamOp,
) {
    spawn_local(async move {
        let mut snapshot = state.borrow().clone();
        if matches!(op, TeamOp::Join(_)) && snapshot.join != JoinState::Pending {
            state.borrow_mut().join = JoinState::Pending;
            refresh.force_update();
        }
        let workflow = TeamWorkflow::new(&services, &translator);
        let outcome = match op {
            TeamOp::Load => workflow.load(&mut snapshot).await,
            TeamOp::Create(name) => workflow.create(&mut snapshot, &name).await,
            TeamOp::Join(code) => workflow.join(&mut snapshot, &code).await,
            TeamOp::Delete(id) => workflow.delete(&mut snapshot, id).await,
        };
        if outcome != Outcome::Redirected {
            state.borrow_mut().merge_cards(snapshot);
            refresh.force_update();
        }
        surface(outcome);
    });
}

#[function_component(TeamsPage)]
pub(crate) fn teams_page(props: &PageProps) -> Html {
    let state = use_mut_ref(TeamsState::default);
    let refresh = use_force_update();

    let on_op = {
        let services = props.services.clone();
        let translator = props.translator.clone();
        let state = state.clone();
        let refresh = refresh.clone();
        Callback::from(move |op: TeamOp| {
            run_team_op(
                services.clone(),
                translator.clone(),
                state.clone(),
                refresh.clone(),
                op,
            );
        })
    };
    let on_list = {
        let services = props.services.clone();
        let translator = props.translator.clone();
        let state = state.clone();
        let refresh = refresh.clone();
        Callback::from(move |(team, action): (TeamId, TodoAction)| {
            run_list_action(
                services.clone(),
                translator.clone(),
                state.clone(),
                refresh.clone(),
                move |teams: &mut TeamsState| teams.lists.get_mut(&team),
                action,
            );
        })
    };
    {
        let services = props.services.clone();
        let on_op = on_op.clone();
        use_effect_with_deps(
            move |_| {
                if AuthGuard::new(&services).require_auth().is_authenticated() {
                    on_op.emit(TeamOp::Load);
                }
                || ()
            },
            (),
        );
    }
    let on_toggle = {
        let state = state.clone();
        let refresh = refresh.clone();
        let on_list = on_list.clone();
        Callback::from(move |team: TeamId| {
            let expanded = state.borrow_mut().toggle_expanded(team);
            refresh.force_update();
            if expanded {
                on_list.emit((team, TodoAction::Sync));
            }
        })
    };

    let t = &props.translator;
    let current = state.borrow();
    let join_pending = current.join == JoinState::Pending;
    let cards = current.teams.iter().map(|team| {
        render_card(
            team,
            &current,
            t,
            on_toggle.clone(),
            on_op.reform(TeamOp::Delete),
            on_list.clone(),
        )
    });

    html! {
        <section class="panel teams-page">
            <h2>{t.text("teams.title")}</h2>
            <div class="team-forms">
                <SingleFieldForm
                    title={t.text("teams.createTitle")}
                    placeholder={t.text("teams.namePlaceholder")}
                    submit_label={t.text("teams.create")}
                    on_submit={on_op.reform(TeamOp::Create)}
                />
                <SingleFieldForm
                    title={t.text("teams.joinTitle")}
                    placeholder={t.text("teams.codePlaceholder")}
                    submit_label={t.text(if join_pending { "teams.joining" } else { "teams.join" })}
                    disabled={join_pending}
                    on_submit={on_op.reform(TeamOp::Join)}
                />
            </div>
            {for current.inline_error.iter().map(|key| html! {
                <p class="error-text" role="alert">{t.text(key)}</p>
            })}
            {if current.loaded && current.teams.is_empty() {
                html! { <p class="empty-state">{t.text("teams.noTeams")}</p> }
            } else {
                html! { <div class="team-cards">{for cards}</div> }
            }}
        </section>
    }
}

fn render_card(
    team: &Team,
    state: &TeamsState,
    t: &Translator,
    on_toggle: Callback<TeamId>,
    on_delete: Callback<TeamId>,
    on_list: Callback<(TeamId, TodoAction)>,
) -> Html {
    let id = team.id;
    let expanded = state.expanded.contains(&id);
    let toggle_label = if expanded {
        t.text("teams.hideTasks")
    } else {
        t.text("teams.showTasks")
    };
    let sublist = if expanded {
        let list = state.list(id);
        let items = list
            .map(|list| render_list(&list.items, t, ItemVariant::Team))
            .unwrap_or_default();
        let inline_error = list
            .and_then(|list| list.inline_error)
            .map(|key| AttrValue::from(t.text(key)));
        let on_action = on_list.reform(move |action: TodoAction| (id, action));
        let on_submit = on_list.reform(move |draft: TodoDraft| (id, TodoAction::Create(draft)));
        html! {
            <div class="team-tasks">
                <TodoForm
                    title_placeholder={t.text("todos.titlePlaceholder")}
                    description_placeholder={t.text("todos.descriptionPlaceholder")}
                    submit_label={t.text("todos.add")}
                    {on_submit}
                />
                <TodoList {items} empty_label={t.text("teams.noTasks")} {inline_error} {on_action} />
            </div>
        }
    } else {
        html! {}
    };

    html! {
        <article key={id} class="team-card">
            <header class="team-card-header">
                <h3>{team.name.clone()}</h3>
                <span class="team-code">{format!("{}: {}", t.text("teams.code"), team.code)}</span>
            </header>
            <div class="team-card-actions">
                <button class="ghost" onclick={on_toggle.reform(move |_| id)}>{toggle_label}</button>
                <button class="delete-btn" onclick={on_delete.reform(move |_| id)}>{t.text("teams.delete")}</button>
            </div>
            {sublist}
        </article>
    }
}

#[derive(Properties, PartialEq)]
struct SingleFieldFormProps {
    title: AttrValue,
    placeholder: AttrValue,
    submit_label: AttrValue,
    #[prop_or_default]
    disabled: bool,
    on_submit: Callback<String>,
}

#[function_component(SingleFieldForm)]
fn single_field_form(props: &SingleFieldFormProps) -> Html {
    let value = use_state(String::new);
    let oninput = {
        let value = value.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                value.set(input.value());
            }
        })
    };
    let onsubmit = {
        let value = value.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit((*value).clone());
            value.set(String::new());
        })
    };

    html! {
        <form class="team-form" {onsubmit}>
            <h3>{props.title.clone()}</h3>
            <input
                type="text"
                value={(*value).clone()}
                placeholder={props.placeholder.clone()}
                {oninput}
            />
            <button type="submit" class="solid" disabled={props.disabled}>{props.submit_label.clone()}</button>
        </form>
    }
}
