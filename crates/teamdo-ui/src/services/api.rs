//! HTTP client helpers (REST) over `gloo-net`.
//!
//! # Design
//! - Every authenticated call carries `Authorization: Bearer <token>`.
//! - Non-2xx bodies are read for `{"error": ...}` so notices can show the reason.
//! - Collections come back as raw JSON; shape checks happen in the workflows.

use crate::config::ClientConfig;
use crate::core::error::{ApiError, ApiResult};
use crate::core::scope::Scope;
use crate::core::transport::{CredentialStore, TodoApi};
use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::rc::Rc;
use teamdo_api_models::{
    ErrorBody, JoinTeam, LoginRequest, NewTeam, NewTodo, Profile, RegisterRequest,
    SessionResponse, Team, TeamId, TodoId, UpdateTodo,
};

pub(crate) struct ApiClient {
    config: ClientConfig,
    credentials: Rc<dyn CredentialStore>,
}

impl ApiClient {
    pub(crate) fn new(config: ClientConfig, credentials: Rc<dyn CredentialStore>) -> Self {
        Self {
            config,
            credentials,
        }
    }

    fn authorize(&self, req: Request) -> Request {
        match self.credentials.token() {
            Some(token) => req.header("Authorization", &format!("Bearer {token}")),
            None => req,
        }
    }

    fn get(&self, path: &str) -> Request {
        self.authorize(Request::get(&self.config.api_url(path)))
    }

    fn post(&self, path: &str) -> Request {
        self.authorize(Request::post(&self.config.api_url(path)))
    }

    fn put(&self, path: &str) -> Request {
        self.authorize(Request::put(&self.config.api_url(path)))
    }

    fn delete(&self, path: &str) -> Request {
        self.authorize(Request::delete(&self.config.api_url(path)))
    }

    async fn send(req: Request) -> ApiResult<Response> {
        let response = req.send().await.map_err(|err| ApiError::Network {
            detail: err.to_string(),
        })?;
        if response.ok() {
            return Ok(response);
        }
        let status = response.status();
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .map(|body| body.error);
        tracing::debug!(status, ?message, "request rejected");
        Err(ApiError::from_status(status, message))
    }

    async fn send_json<B: Serialize>(req: Request, body: &B) -> ApiResult<Response> {
        let req = req.json(body).map_err(|err| ApiError::Malformed {
            detail: err.to_string(),
        })?;
        Self::send(req).await
    }

    async fn read<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        response.json::<T>().await.map_err(|err| ApiError::Malformed {
            detail: err.to_string(),
        })
    }
}

#[async_trait(?Send)]
impl TodoApi for ApiClient {
    async fn list_todos(&self, scope: Scope) -> ApiResult<Value> {
        Self::read(Self::send(self.get(&scope.collection_path())).await?).await
    }

    async fn create_todo(&self, scope: Scope, body: &NewTodo) -> ApiResult<()> {
        Self::send_json(self.post(&scope.collection_path()), body).await?;
        Ok(())
    }

    async fn update_todo(&self, scope: Scope, id: TodoId, body: &UpdateTodo) -> ApiResult<()> {
        Self::send_json(self.put(&scope.item_path(id)), body).await?;
        Ok(())
    }

    async fn delete_todo(&self, scope: Scope, id: TodoId) -> ApiResult<()> {
        Self::send(self.delete(&scope.item_path(id))).await?;
        Ok(())
    }

    async fn list_teams(&self) -> ApiResult<Value> {
        Self::read(Self::send(self.get("/api/teams/list")).await?).await
    }

    async fn create_team(&self, body: &NewTeam) -> ApiResult<Team> {
        Self::read(Self::send_json(self.post("/api/teams"), body).await?).await
    }

    async fn join_team(&self, code: &str) -> ApiResult<()> {
        let body = JoinTeam {
            code: code.to_string(),
        };
        Self::send_json(self.post("/api/teams/join"), &body).await?;
        Ok(())
    }

    async fn delete_team(&self, team: TeamId) -> ApiResult<()> {
        Self::send(self.delete(&format!("/api/teams/{team}"))).await?;
        Ok(())
    }

    async fn fetch_profile(&self) -> ApiResult<Profile> {
        Self::read(Self::send(self.get("/api/profile")).await?).await
    }

    async fn login(&self, body: &LoginRequest) -> ApiResult<SessionResponse> {
        let req = Request::post(&self.config.api_url("/api/login"));
        Self::read(Self::send_json(req, body).await?).await
    }

    async fn register(&self, body: &RegisterRequest) -> ApiResult<()> {
        let req = Request::post(&self.config.api_url("/api/register"));
        Self::send_json(req, body).await?;
        Ok(())
    }
}
