//! List synchronization and mutations for one todo scope.
//!
//! # Design
//! - Updates are authoritative: every successful mutation is followed by a full refetch.
//! - The in-flight permit is held until the refetch settles.
//! - Failures keep the previous list and surface a scope-specific notice.

use crate::core::auth::AuthGuard;
use crate::core::error::ApiError;
use crate::core::host::Services;
use crate::core::inflight::InFlightPermit;
use crate::core::notice::NoticeDraft;
use crate::core::outcome::{Outcome, api_failure};
use crate::core::scope::MutationKind;
use crate::core::transport::decode_todos;
use crate::features::todos::actions::TodoAction;
use crate::features::todos::state::{TodoDraft, TodoListState};
use crate::i18n::Translator;
use teamdo_api_models::{TodoId, UpdateTodo};

/// Translation key for the busy notice.
pub const BUSY_KEY: &str = "common.busy";

/// Drives one [`TodoListState`] against the API.
pub struct TodoWorkflow<'a> {
    services: &'a Services,
    translator: &'a Translator,
}

impl<'a> TodoWorkflow<'a> {
    /// Workflow over shared services.
    #[must_use]
    pub const fn new(services: &'a Services, translator: &'a Translator) -> Self {
        Self {
            services,
            translator,
        }
    }

    fn guard(&self) -> AuthGuard<'a> {
        AuthGuard::new(self.services)
    }

    /// Fetch the scope's collection and replace the list wholesale.
    ///
    /// Skipped while another operation holds the scope; that operation
    /// finishes with its own refetch.
    pub async fn sync(&self, state: &mut TodoListState) -> Outcome {
        let Some(_permit) = self.services.inflight.try_acquire(state.scope) else {
            tracing::debug!(scope = %state.scope, "sync skipped while the scope is busy");
            return Outcome::Unchanged;
        };
        self.refetch(state).await
    }

    async fn refetch(&self, state: &mut TodoListState) -> Outcome {
        let scope = state.scope;
        let key = scope.fetch_error_key();
        let result = self.services.api.list_todos(scope).await;
        match result.and_then(decode_todos) {
            Ok(items) => {
                tracing::debug!(%scope, count = items.len(), "list synchronized");
                state.replace(items);
                Outcome::Applied(None)
            }
            Err(err @ ApiError::Malformed { .. }) => {
                tracing::warn!(%scope, error = %err, "collection body rejected");
                state.inline_error = Some(key);
                Outcome::Rejected(NoticeDraft::error(key))
            }
            Err(err) => api_failure(&self.guard(), &err, key),
        }
    }

    /// Check the credential and claim the scope; `Err` carries the outcome to return.
    fn begin(&self, state: &TodoListState) -> Result<InFlightPermit, Outcome> {
        if !self.guard().require_auth().is_authenticated() {
            return Err(Outcome::Redirected);
        }
        self.services
            .inflight
            .try_acquire(state.scope)
            .ok_or_else(|| {
                tracing::debug!(scope = %state.scope, "mutation refused while another is pending");
                Outcome::Rejected(NoticeDraft::error(BUSY_KEY))
            })
    }

    async fn settle(
        &self,
        state: &mut TodoListState,
        kind: MutationKind,
        result: Result<(), ApiError>,
    ) -> Outcome {
        match result {
            Ok(()) => {
                tracing::info!(scope = %state.scope, ?kind, "mutation applied");
                self.refetch(state).await
            }
            Err(err) => api_failure(&self.guard(), &err, state.scope.mutation_error_key(kind)),
        }
    }

    /// Create a todo from form input.
    pub async fn create(&self, state: &mut TodoListState, draft: &TodoDraft) -> Outcome {
        let body = match draft.validate() {
            Ok(body) => body,
            Err(err) => return Outcome::Rejected(err.notice()),
        };
        let _permit = match self.begin(state) {
            Ok(permit) => permit,
            Err(outcome) => return outcome,
        };
        let result = self.services.api.create_todo(state.scope, &body).await;
        self.settle(state, MutationKind::Create, result).await
    }

    /// Request completion state `next` for `id`, sending the full record.
    pub async fn toggle(&self, state: &mut TodoListState, id: TodoId, next: bool) -> Outcome {
        let Some(todo) = state.find(id).cloned() else {
            tracing::warn!(scope = %state.scope, id, "toggle for unknown todo ignored");
            return Outcome::Unchanged;
        };
        let _permit = match self.begin(state) {
            Ok(permit) => permit,
            Err(outcome) => return outcome,
        };
        let body = UpdateTodo::completion(&todo, next);
        let result = self.services.api.update_todo(state.scope, id, &body).await;
        self.settle(state, MutationKind::Toggle, result).await
    }

    /// Run one user action.
    pub async fn apply(&self, state: &mut TodoListState, action: TodoAction) -> Outcome {
        match action {
            TodoAction::Sync => self.sync(state).await,
            TodoAction::Create(draft) => self.create(state, &draft).await,
            TodoAction::Toggle { id, next } => self.toggle(state, id, next).await,
            TodoAction::Remove(id) => self.remove(state, id).await,
        }
    }

    /// Delete `id` after the user confirms.
    pub async fn remove(&self, state: &mut TodoListState, id: TodoId) -> Outcome {
        let _permit = match self.begin(state) {
            Ok(permit) => permit,
            Err(outcome) => return outcome,
        };
        let prompt = self.translator.text(state.scope.confirm_delete_key());
        if !self.services.confirm.confirm(&prompt) {
            return Outcome::Unchanged;
        }
        let result = self.services.api.delete_todo(state.scope, id).await;
        self.settle(state, MutationKind::Delete, result).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::host::Destination;
    use crate::core::scope::Scope;
    use crate::core::transport::CredentialStore;
    use crate::features::todos::render::{ItemVariant, render_list};
    use crate::testing::{Call, Harness, todo, translator};
    use serde_json::json;
    use teamdo_api_models::NewTodo;

    fn loaded(scope: Scope) -> TodoListState {
        let mut state = TodoListState::new(scope);
        state.replace(vec![todo(1, "Buy milk", false), todo(2, "Walk dog", true)]);
        state
    }

    #[tokio::test]
    async fn sync_replaces_in_response_order() {
        let harness = Harness::signed_in();
        harness
            .api
            .script_list(Ok(json!([{"id": 5, "title": "e"}, {"id": 3, "title": "c"}])));
        let t = translator();
        let mut state = loaded(Scope::Personal);
        let outcome = TodoWorkflow::new(&harness.services, &t).sync(&mut state).await;
        assert_eq!(outcome, Outcome::Applied(None));
        let ids: Vec<_> = state.items.iter().map(|todo| todo.id).collect();
        assert_eq!(ids, vec![5, 3]);
        assert_eq!(harness.api.calls(), vec![Call::ListTodos(Scope::Personal)]);
    }

    #[tokio::test]
    async fn failed_fetch_keeps_previous_list() {
        let harness = Harness::signed_in();
        harness.api.script_list(Err(ApiError::Network {
            detail: "offline".to_string(),
        }));
        let t = translator();
        let mut state = loaded(Scope::Personal);
        let before = state.clone();
        let outcome = TodoWorkflow::new(&harness.services, &t).sync(&mut state).await;
        assert_eq!(outcome.notice().map(|n| n.key), Some("todos.fetchError"));
        assert_eq!(state, before);
    }

    #[tokio::test]
    async fn malformed_collection_sets_inline_error() {
        let harness = Harness::signed_in();
        harness.api.script_list(Ok(json!({"error": "nope"})));
        let t = translator();
        let mut state = loaded(Scope::Team(4));
        let outcome = TodoWorkflow::new(&harness.services, &t).sync(&mut state).await;
        assert!(outcome.is_rejected());
        assert_eq!(state.items.len(), 2);
        assert_eq!(state.inline_error, Some("teams.fetchTodosError"));
    }

    #[tokio::test]
    async fn unparseable_body_sets_inline_error() {
        let harness = Harness::signed_in();
        harness.api.script_list(Err(ApiError::Malformed {
            detail: "expected value at line 1 column 1".to_string(),
        }));
        let t = translator();
        let mut state = loaded(Scope::Personal);
        let outcome = TodoWorkflow::new(&harness.services, &t).sync(&mut state).await;
        assert_eq!(outcome.notice().map(|n| n.key), Some("todos.fetchError"));
        assert_eq!(state.inline_error, Some("todos.fetchError"));
        assert_eq!(state.items.len(), 2);
        assert_eq!(harness.credentials.token().as_deref(), Some("session-token"));
    }

    #[tokio::test]
    async fn sync_is_skipped_while_scope_is_busy() {
        let harness = Harness::signed_in();
        let t = translator();
        let mut state = loaded(Scope::Personal);
        let before = state.clone();
        let pending = harness
            .services
            .inflight
            .try_acquire(Scope::Personal)
            .expect("mutation permit");
        let outcome = TodoWorkflow::new(&harness.services, &t).sync(&mut state).await;
        assert_eq!(outcome, Outcome::Unchanged);
        assert_eq!(state, before);
        assert!(harness.api.calls().is_empty());

        drop(pending);
        TodoWorkflow::new(&harness.services, &t).sync(&mut state).await;
        assert_eq!(harness.api.calls(), vec![Call::ListTodos(Scope::Personal)]);
        assert!(!harness.services.inflight.is_busy(Scope::Personal));
    }

    #[tokio::test]
    async fn empty_title_issues_no_request() {
        let harness = Harness::signed_in();
        let t = translator();
        let mut state = loaded(Scope::Personal);
        let outcome = TodoWorkflow::new(&harness.services, &t)
            .create(&mut state, &TodoDraft::new("   ", "desc"))
            .await;
        assert_eq!(outcome.notice().map(|n| n.key), Some("todos.titleRequired"));
        assert!(harness.api.calls().is_empty());
    }

    #[tokio::test]
    async fn create_posts_then_refetches() {
        let harness = Harness::signed_in();
        harness
            .api
            .script_list(Ok(json!([{"id": 7, "title": "Team sync"}])));
        let t = translator();
        let mut state = TodoListState::new(Scope::Team(2));
        let outcome = TodoWorkflow::new(&harness.services, &t)
            .create(&mut state, &TodoDraft::new(" Team sync ", ""))
            .await;
        assert_eq!(outcome, Outcome::Applied(None));
        assert_eq!(
            harness.api.calls(),
            vec![
                Call::CreateTodo(
                    Scope::Team(2),
                    NewTodo {
                        title: "Team sync".to_string(),
                        description: String::new(),
                    }
                ),
                Call::ListTodos(Scope::Team(2)),
            ]
        );
        assert_eq!(state.items[0].id, 7);
        assert!(!harness.services.inflight.is_busy(Scope::Team(2)));
    }

    #[tokio::test]
    async fn toggle_sends_negated_state_and_renders_refetch() {
        let harness = Harness::signed_in();
        harness.api.script_list(Ok(json!([
            {"id": 1, "title": "Buy milk", "description": "2l", "completed": true}
        ])));
        let t = translator();
        let mut state = TodoListState::new(Scope::Personal);
        let mut open = todo(1, "Buy milk", false);
        open.description = "2l".to_string();
        state.replace(vec![open]);

        let views = render_list(&state.items, &t, ItemVariant::Main);
        let affordance = views[0].toggle.clone();
        let outcome = TodoWorkflow::new(&harness.services, &t)
            .toggle(&mut state, affordance.id, affordance.next)
            .await;
        assert_eq!(outcome, Outcome::Applied(None));

        match &harness.api.calls()[0] {
            Call::UpdateTodo(Scope::Personal, 1, body) => {
                assert!(body.completed);
                assert_eq!(body.title, "Buy milk");
                assert_eq!(body.description, "2l");
            }
            other => panic!("unexpected call {other:?}"),
        }
        let views = render_list(&state.items, &t, ItemVariant::Main);
        assert_eq!(views[0].toggle.label, "Undo");
        assert_eq!(views[0].description, None);
    }

    #[tokio::test]
    async fn toggle_failure_keeps_list_and_notifies() {
        let harness = Harness::signed_in();
        harness
            .api
            .script_write(Err(ApiError::from_status(500, None)));
        let t = translator();
        let mut state = loaded(Scope::Team(3));
        let before = state.clone();
        let outcome = TodoWorkflow::new(&harness.services, &t)
            .toggle(&mut state, 1, true)
            .await;
        assert_eq!(outcome.notice().map(|n| n.key), Some("teams.updateTaskError"));
        assert_eq!(state, before);
        assert_eq!(harness.api.calls().len(), 1);
    }

    #[tokio::test]
    async fn declined_delete_issues_no_request() {
        let harness = Harness::signed_in();
        harness.confirm.decline();
        let t = translator();
        let mut state = loaded(Scope::Personal);
        let before = state.clone();
        let outcome = TodoWorkflow::new(&harness.services, &t)
            .remove(&mut state, 1)
            .await;
        assert_eq!(outcome, Outcome::Unchanged);
        assert!(harness.api.calls().is_empty());
        assert_eq!(state, before);
        assert_eq!(harness.confirm.prompts().len(), 1);
        assert!(!harness.services.inflight.is_busy(Scope::Personal));
    }

    #[tokio::test]
    async fn accepted_delete_removes_then_refetches() {
        let harness = Harness::signed_in();
        harness
            .api
            .script_list(Ok(json!([{"id": 2, "title": "Walk dog", "completed": true}])));
        let t = translator();
        let mut state = loaded(Scope::Personal);
        TodoWorkflow::new(&harness.services, &t)
            .remove(&mut state, 1)
            .await;
        assert_eq!(
            harness.api.calls(),
            vec![
                Call::DeleteTodo(Scope::Personal, 1),
                Call::ListTodos(Scope::Personal)
            ]
        );
        assert_eq!(state.items.len(), 1);
    }

    #[tokio::test]
    async fn second_mutation_in_same_scope_is_busy() {
        let harness = Harness::signed_in();
        let t = translator();
        let mut state = loaded(Scope::Personal);
        let _pending = harness
            .services
            .inflight
            .try_acquire(Scope::Personal)
            .expect("first permit");
        let outcome = TodoWorkflow::new(&harness.services, &t)
            .create(&mut state, &TodoDraft::new("Another", ""))
            .await;
        assert_eq!(outcome.notice().map(|n| n.key), Some(BUSY_KEY));
        assert!(harness.api.calls().is_empty());

        let mut team = loaded(Scope::Team(1));
        let outcome = TodoWorkflow::new(&harness.services, &t)
            .toggle(&mut team, 1, true)
            .await;
        assert_eq!(outcome, Outcome::Applied(None));
    }

    #[tokio::test]
    async fn unauthorized_clears_credential_and_redirects() {
        let harness = Harness::signed_in();
        harness.api.script_write(Err(ApiError::Unauthorized));
        let t = translator();
        let mut state = loaded(Scope::Personal);
        let outcome = TodoWorkflow::new(&harness.services, &t)
            .create(&mut state, &TodoDraft::new("x", ""))
            .await;
        assert_eq!(outcome, Outcome::Redirected);
        assert_eq!(harness.credentials.token(), None);
        assert_eq!(harness.navigation.visits(), vec![Destination::Login]);
    }

    #[tokio::test]
    async fn apply_routes_actions() {
        let harness = Harness::signed_in();
        let t = translator();
        let workflow = TodoWorkflow::new(&harness.services, &t);
        let mut state = loaded(Scope::Personal);
        workflow
            .apply(&mut state, TodoAction::Toggle { id: 2, next: false })
            .await;
        let mut state = loaded(Scope::Personal);
        workflow.apply(&mut state, TodoAction::Sync).await;
        assert!(matches!(
            harness.api.calls().as_slice(),
            [
                Call::UpdateTodo(Scope::Personal, 2, _),
                Call::ListTodos(Scope::Personal),
                Call::ListTodos(Scope::Personal)
            ]
        ));
    }

    #[tokio::test]
    async fn missing_credential_blocks_mutation() {
        let harness = Harness::signed_out();
        let t = translator();
        let mut state = loaded(Scope::Personal);
        let outcome = TodoWorkflow::new(&harness.services, &t)
            .remove(&mut state, 1)
            .await;
        assert_eq!(outcome, Outcome::Redirected);
        assert!(harness.confirm.prompts().is_empty());
        assert!(harness.api.calls().is_empty());
    }
}
