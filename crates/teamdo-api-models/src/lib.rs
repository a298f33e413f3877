#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Shared HTTP DTOs for the Teamdo public API.
//!
//! The server owns every record described here; the client only holds
//! transient copies for the lifetime of a render. Field names follow the
//! JSON contract exactly so the types can be used for both encoding and
//! decoding without per-call mapping.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Server-assigned todo identifier.
pub type TodoId = i64;

/// Server-assigned team identifier.
pub type TeamId = i64;

/// Todo record returned by personal and team collection endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    /// Unique identifier assigned by the server.
    pub id: TodoId,
    /// Non-empty title.
    pub title: String,
    /// Optional free-form description; absent values decode as empty.
    #[serde(default)]
    pub description: String,
    /// Completion flag.
    #[serde(default)]
    pub completed: bool,
    /// Author of a team todo. Personal todos never carry this field.
    #[serde(
        default,
        deserialize_with = "author_from_wire",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_by: Option<String>,
    /// Creation timestamp when the server reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update timestamp when the server reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Todo {
    /// Whether the description carries any visible text.
    #[must_use]
    pub fn has_description(&self) -> bool {
        !self.description.trim().is_empty()
    }
}

/// Team card data returned by the team endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Team {
    /// Unique identifier assigned by the server.
    pub id: TeamId,
    /// Display name.
    pub name: String,
    /// Join token shared with prospective members.
    pub code: String,
    /// Creator reference when the server reports it.
    #[serde(
        default,
        deserialize_with = "author_from_wire",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_by: Option<String>,
    /// Creation timestamp when the server reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Authenticated user's profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Profile {
    /// Login name.
    pub username: String,
    /// Contact address.
    #[serde(default)]
    pub email: String,
}

/// Body for `POST /api/todos` and `POST /api/teams/{id}/todos`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewTodo {
    /// Title, already trimmed by the caller.
    pub title: String,
    /// Description, already trimmed by the caller.
    pub description: String,
}

/// Body for `PUT /api/todos/{id}` and `PUT /api/teams/{id}/todos/{todo}`.
///
/// The team endpoint overwrites every column, so the full record is always sent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateTodo {
    /// Title to keep.
    pub title: String,
    /// Description to keep.
    pub description: String,
    /// Requested completion state.
    pub completed: bool,
}

impl UpdateTodo {
    /// Build an update that only changes the completion flag of `todo`.
    #[must_use]
    pub fn completion(todo: &Todo, completed: bool) -> Self {
        Self {
            title: todo.title.clone(),
            description: todo.description.clone(),
            completed,
        }
    }
}

/// Body for `POST /api/teams`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewTeam {
    /// Team display name.
    pub name: String,
}

/// Body for `POST /api/teams/join`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JoinTeam {
    /// Join code issued by the server.
    pub code: String,
}

/// Body for `POST /api/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    /// Login name.
    pub username: String,
    /// Plain-text password.
    pub password: String,
}

/// Body for `POST /api/register`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    /// Desired login name.
    pub username: String,
    /// Contact address.
    pub email: String,
    /// Plain-text password.
    pub password: String,
}

/// Response from `POST /api/login` and `POST /api/register`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionResponse {
    /// Bearer token when the server issues one in the body.
    #[serde(default)]
    pub token: Option<String>,
}

/// Error document returned alongside non-2xx statuses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    /// Human-readable reason.
    pub error: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WireAuthor {
    Name(String),
    Id(i64),
}

fn author_from_wire<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<WireAuthor>::deserialize(deserializer)?;
    Ok(value.map(|author| match author {
        WireAuthor::Name(name) => name,
        WireAuthor::Id(id) => id.to_string(),
    }))
}
