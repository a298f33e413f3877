//! Seams between the workflows and the browser: API calls and credential storage.
//!
//! # Design
//! - Futures are single-threaded, so traits use `async_trait(?Send)`.
//! - Collections are decoded from raw JSON so a non-array body is reported as
//!   [`ApiError::Malformed`] instead of a generic decode failure.

use crate::core::error::{ApiError, ApiResult};
use crate::core::scope::Scope;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::cell::RefCell;
use teamdo_api_models::{
    LoginRequest, NewTeam, NewTodo, Profile, RegisterRequest, SessionResponse, Team, TeamId,
    Todo, TodoId, UpdateTodo,
};

/// Remote operations used by the views. Every call carries the current credential.
#[async_trait(?Send)]
pub trait TodoApi {
    /// `GET` the scope's collection as raw JSON.
    async fn list_todos(&self, scope: Scope) -> ApiResult<Value>;
    /// `POST` a new todo into the scope.
    async fn create_todo(&self, scope: Scope, body: &NewTodo) -> ApiResult<()>;
    /// `PUT` the full record of one todo.
    async fn update_todo(&self, scope: Scope, id: TodoId, body: &UpdateTodo) -> ApiResult<()>;
    /// `DELETE` one todo.
    async fn delete_todo(&self, scope: Scope, id: TodoId) -> ApiResult<()>;
    /// `GET /api/teams/list` as raw JSON.
    async fn list_teams(&self) -> ApiResult<Value>;
    /// `POST /api/teams`.
    async fn create_team(&self, body: &NewTeam) -> ApiResult<Team>;
    /// `POST /api/teams/join`.
    async fn join_team(&self, code: &str) -> ApiResult<()>;
    /// `DELETE /api/teams/{id}`.
    async fn delete_team(&self, team: TeamId) -> ApiResult<()>;
    /// `GET /api/profile`.
    async fn fetch_profile(&self) -> ApiResult<Profile>;
    /// `POST /api/login`.
    async fn login(&self, body: &LoginRequest) -> ApiResult<SessionResponse>;
    /// `POST /api/register`.
    async fn register(&self, body: &RegisterRequest) -> ApiResult<()>;
}

/// Decode a collection body, rejecting anything that is not a JSON array.
///
/// # Errors
///
/// Returns [`ApiError::Malformed`] for non-arrays or elements of the wrong shape.
pub fn decode_collection<T: DeserializeOwned>(body: Value) -> ApiResult<Vec<T>> {
    if !body.is_array() {
        return Err(ApiError::Malformed {
            detail: format!("expected a JSON array, got {}", json_kind(&body)),
        });
    }
    serde_json::from_value(body).map_err(|err| ApiError::Malformed {
        detail: err.to_string(),
    })
}

/// Convenience wrapper for todo collections.
///
/// # Errors
///
/// See [`decode_collection`].
pub fn decode_todos(body: Value) -> ApiResult<Vec<Todo>> {
    decode_collection(body)
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Persistent holder of the session credential.
pub trait CredentialStore {
    /// Current token, if any.
    fn token(&self) -> Option<String>;
    /// Store a token.
    fn store(&self, token: &str);
    /// Remove the token.
    fn clear(&self);
}

/// In-memory credential store used off-browser.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    token: RefCell<Option<String>>,
}

impl MemoryCredentialStore {
    /// Store pre-populated with `token`.
    #[must_use]
    pub fn with_token(token: &str) -> Self {
        Self {
            token: RefCell::new(Some(token.to_string())),
        }
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn store(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_string());
    }

    fn clear(&self) {
        self.token.borrow_mut().take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn collection_must_be_array() {
        let err = decode_todos(json!({"error": "oops"})).expect_err("object rejected");
        assert!(matches!(err, ApiError::Malformed { detail } if detail.contains("an object")));
    }

    #[test]
    fn collection_keeps_response_order() {
        let todos = decode_todos(json!([
            {"id": 2, "title": "b", "completed": true},
            {"id": 1, "title": "a", "completed": false}
        ]))
        .expect("decode");
        let ids: Vec<_> = todos.iter().map(|todo| todo.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn memory_store_round_trips_token() {
        let store = MemoryCredentialStore::default();
        assert_eq!(store.token(), None);
        store.store("abc");
        assert_eq!(store.token().as_deref(), Some("abc"));
        store.clear();
        assert_eq!(store.token(), None);
    }
}
