//! In-memory doubles for workflow tests.

use crate::core::error::{ApiError, ApiResult};
use crate::core::host::{Confirm, Destination, Navigation, Services};
use crate::core::inflight::InFlight;
use crate::core::scope::Scope;
use crate::core::transport::{MemoryCredentialStore, TodoApi};
use crate::i18n::{BundleSource, I18nError, LocaleCode, TranslationBundle, Translator};
use async_trait::async_trait;
use serde_json::{Value, json};
use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, VecDeque};
use std::rc::Rc;
use teamdo_api_models::{
    LoginRequest, NewTeam, NewTodo, Profile, RegisterRequest, SessionResponse, Team, TeamId,
    Todo, TodoId, UpdateTodo,
};

/// Request recorded by [`FakeApi`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Call {
    ListTodos(Scope),
    CreateTodo(Scope, NewTodo),
    UpdateTodo(Scope, TodoId, UpdateTodo),
    DeleteTodo(Scope, TodoId),
    ListTeams,
    CreateTeam(NewTeam),
    JoinTeam(String),
    DeleteTeam(TeamId),
    FetchProfile,
    Login(LoginRequest),
    Register(RegisterRequest),
}

/// Recording API with per-operation scripted responses; unscripted calls succeed.
#[derive(Default)]
pub(crate) struct FakeApi {
    calls: RefCell<Vec<Call>>,
    lists: RefCell<VecDeque<ApiResult<Value>>>,
    teams: RefCell<VecDeque<ApiResult<Value>>>,
    writes: RefCell<VecDeque<ApiResult<()>>>,
    created_teams: RefCell<VecDeque<ApiResult<Team>>>,
    joins: RefCell<VecDeque<ApiResult<()>>>,
    profiles: RefCell<VecDeque<ApiResult<Profile>>>,
    logins: RefCell<VecDeque<ApiResult<SessionResponse>>>,
    registrations: RefCell<VecDeque<ApiResult<()>>>,
}

impl FakeApi {
    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub(crate) fn script_list(&self, result: ApiResult<Value>) {
        self.lists.borrow_mut().push_back(result);
    }

    pub(crate) fn script_teams(&self, result: ApiResult<Value>) {
        self.teams.borrow_mut().push_back(result);
    }

    /// Todo create/update/delete and team delete.
    pub(crate) fn script_write(&self, result: ApiResult<()>) {
        self.writes.borrow_mut().push_back(result);
    }

    pub(crate) fn script_create_team(&self, result: ApiResult<Team>) {
        self.created_teams.borrow_mut().push_back(result);
    }

    pub(crate) fn script_join(&self, result: ApiResult<()>) {
        self.joins.borrow_mut().push_back(result);
    }

    pub(crate) fn script_profile(&self, result: ApiResult<Profile>) {
        self.profiles.borrow_mut().push_back(result);
    }

    pub(crate) fn script_login(&self, result: ApiResult<SessionResponse>) {
        self.logins.borrow_mut().push_back(result);
    }

    pub(crate) fn script_register(&self, result: ApiResult<()>) {
        self.registrations.borrow_mut().push_back(result);
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

fn next<T>(queue: &RefCell<VecDeque<ApiResult<T>>>, default: impl FnOnce() -> T) -> ApiResult<T> {
    queue.borrow_mut().pop_front().unwrap_or_else(|| Ok(default()))
}

#[async_trait(?Send)]
impl TodoApi for FakeApi {
    async fn list_todos(&self, scope: Scope) -> ApiResult<Value> {
        self.record(Call::ListTodos(scope));
        next(&self.lists, || json!([]))
    }

    async fn create_todo(&self, scope: Scope, body: &NewTodo) -> ApiResult<()> {
        self.record(Call::CreateTodo(scope, body.clone()));
        next(&self.writes, || ())
    }

    async fn update_todo(&self, scope: Scope, id: TodoId, body: &UpdateTodo) -> ApiResult<()> {
        self.record(Call::UpdateTodo(scope, id, body.clone()));
        next(&self.writes, || ())
    }

    async fn delete_todo(&self, scope: Scope, id: TodoId) -> ApiResult<()> {
        self.record(Call::DeleteTodo(scope, id));
        next(&self.writes, || ())
    }

    async fn list_teams(&self) -> ApiResult<Value> {
        self.record(Call::ListTeams);
        next(&self.teams, || json!([]))
    }

    async fn create_team(&self, body: &NewTeam) -> ApiResult<Team> {
        self.record(Call::CreateTeam(body.clone()));
        next(&self.created_teams, || team(1, &body.name, "CODE1"))
    }

    async fn join_team(&self, code: &str) -> ApiResult<()> {
        self.record(Call::JoinTeam(code.to_string()));
        next(&self.joins, || ())
    }

    async fn delete_team(&self, id: TeamId) -> ApiResult<()> {
        self.record(Call::DeleteTeam(id));
        next(&self.writes, || ())
    }

    async fn fetch_profile(&self) -> ApiResult<Profile> {
        self.record(Call::FetchProfile);
        next(&self.profiles, || Profile {
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
        })
    }

    async fn login(&self, body: &LoginRequest) -> ApiResult<SessionResponse> {
        self.record(Call::Login(body.clone()));
        next(&self.logins, || SessionResponse {
            token: Some("issued-token".to_string()),
        })
    }

    async fn register(&self, body: &RegisterRequest) -> ApiResult<()> {
        self.record(Call::Register(body.clone()));
        next(&self.registrations, || ())
    }
}

/// Navigation double that records destinations.
#[derive(Default)]
pub(crate) struct RecordingNavigation {
    visits: RefCell<Vec<Destination>>,
}

impl RecordingNavigation {
    pub(crate) fn visits(&self) -> Vec<Destination> {
        self.visits.borrow().clone()
    }
}

impl Navigation for RecordingNavigation {
    fn navigate(&self, destination: Destination) {
        self.visits.borrow_mut().push(destination);
    }
}

/// Confirmation double; accepts unless told to decline.
pub(crate) struct ScriptedConfirm {
    answer: Cell<bool>,
    prompts: RefCell<Vec<String>>,
}

impl Default for ScriptedConfirm {
    fn default() -> Self {
        Self {
            answer: Cell::new(true),
            prompts: RefCell::new(Vec::new()),
        }
    }
}

impl ScriptedConfirm {
    pub(crate) fn decline(&self) {
        self.answer.set(false);
    }

    pub(crate) fn prompts(&self) -> Vec<String> {
        self.prompts.borrow().clone()
    }
}

impl Confirm for ScriptedConfirm {
    fn confirm(&self, message: &str) -> bool {
        self.prompts.borrow_mut().push(message.to_string());
        self.answer.get()
    }
}

/// Services wired to doubles, with handles kept for assertions.
pub(crate) struct Harness {
    pub(crate) services: Services,
    pub(crate) api: Rc<FakeApi>,
    pub(crate) credentials: Rc<MemoryCredentialStore>,
    pub(crate) navigation: Rc<RecordingNavigation>,
    pub(crate) confirm: Rc<ScriptedConfirm>,
}

impl Harness {
    fn build(credentials: MemoryCredentialStore) -> Self {
        let api = Rc::new(FakeApi::default());
        let credentials = Rc::new(credentials);
        let navigation = Rc::new(RecordingNavigation::default());
        let confirm = Rc::new(ScriptedConfirm::default());
        let services = Services {
            api: api.clone(),
            credentials: credentials.clone(),
            navigation: navigation.clone(),
            confirm: confirm.clone(),
            inflight: InFlight::default(),
        };
        Self {
            services,
            api,
            credentials,
            navigation,
            confirm,
        }
    }

    pub(crate) fn signed_in() -> Self {
        Self::build(MemoryCredentialStore::with_token("session-token"))
    }

    pub(crate) fn signed_out() -> Self {
        Self::build(MemoryCredentialStore::default())
    }

    pub(crate) fn with_token(token: &str) -> Self {
        Self::build(MemoryCredentialStore::with_token(token))
    }
}

pub(crate) fn todo(id: TodoId, title: &str, completed: bool) -> Todo {
    Todo {
        id,
        title: title.to_string(),
        description: String::new(),
        completed,
        created_by: None,
        created_at: None,
        updated_at: None,
    }
}

pub(crate) fn team(id: TeamId, name: &str, code: &str) -> Team {
    Team {
        id,
        name: name.to_string(),
        code: code.to_string(),
        created_by: None,
        created_at: None,
    }
}

pub(crate) fn english_tree() -> Value {
    serde_json::from_str(include_str!("../static/locales/en/translation.json"))
        .expect("english bundle parses")
}

/// Translator backed by the shipped English bundle.
pub(crate) fn translator() -> Translator {
    let en = Rc::new(
        TranslationBundle::from_value(LocaleCode::En, english_tree()).expect("english bundle"),
    );
    Translator::new(Rc::clone(&en), en)
}

/// Bundle source serving fixed trees and counting fetches.
pub(crate) struct StaticBundles {
    trees: BTreeMap<LocaleCode, Value>,
    fetches: Cell<usize>,
}

impl StaticBundles {
    /// English from the shipped bundle plus small fixtures for the rest.
    pub(crate) fn full() -> Self {
        let mut trees = BTreeMap::new();
        trees.insert(LocaleCode::En, english_tree());
        trees.insert(
            LocaleCode::Es,
            json!({"todos": {"complete": "Completar"}}),
        );
        trees.insert(LocaleCode::Fr, json!({"todos": {"complete": "Terminer"}}));
        trees.insert(LocaleCode::De, json!({"todos": {"complete": "Erledigen"}}));
        trees.insert(LocaleCode::Ru, json!({"todos": {"complete": "Выполнить"}}));
        Self {
            trees,
            fetches: Cell::new(0),
        }
    }

    pub(crate) fn without(mut self, locale: LocaleCode) -> Self {
        self.trees.remove(&locale);
        self
    }

    pub(crate) fn fetches(&self) -> usize {
        self.fetches.get()
    }
}

#[async_trait(?Send)]
impl BundleSource for StaticBundles {
    async fn fetch(&self, locale: LocaleCode) -> Result<Value, I18nError> {
        self.fetches.set(self.fetches.get() + 1);
        self.trees
            .get(&locale)
            .cloned()
            .ok_or_else(|| I18nError::BundleLoad {
                locale: locale.code(),
                detail: "404".to_string(),
            })
    }
}

pub(crate) fn network_error() -> ApiError {
    ApiError::Network {
        detail: "offline".to_string(),
    }
}
