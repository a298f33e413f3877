//! Login, registration and logout.

use crate::core::auth::AuthGuard;
use crate::core::error::ApiError;
use crate::core::host::{Destination, Services};
use crate::core::notice::NoticeDraft;
use crate::core::outcome::Outcome;
use crate::features::session::state::{LoginForm, RegisterForm};

/// Drives the session forms.
pub struct SessionWorkflow<'a> {
    services: &'a Services,
}

impl<'a> SessionWorkflow<'a> {
    /// Workflow over shared services.
    #[must_use]
    pub const fn new(services: &'a Services) -> Self {
        Self { services }
    }

    /// Exchange credentials for a token and open the todo list.
    pub async fn login(&self, form: &LoginForm) -> Outcome {
        let body = match form.validate() {
            Ok(body) => body,
            Err(err) => return Outcome::Rejected(err.notice()),
        };
        match self.services.api.login(&body).await {
            Ok(session) => match session.token.filter(|token| !token.trim().is_empty()) {
                Some(token) => {
                    tracing::info!(user = %body.username, "signed in");
                    AuthGuard::new(self.services).sign_in(&token);
                    self.services.navigation.navigate(Destination::Todos);
                    Outcome::Applied(None)
                }
                None => {
                    tracing::warn!("login response carried no token");
                    Outcome::Rejected(NoticeDraft::error("auth.loginError"))
                }
            },
            Err(err) => Outcome::Rejected(session_failure(&err, "auth.loginError")),
        }
    }

    /// Create an account and send the user to login.
    pub async fn register(&self, form: &RegisterForm) -> Outcome {
        let body = match form.validate() {
            Ok(body) => body,
            Err(err) => return Outcome::Rejected(err.notice()),
        };
        match self.services.api.register(&body).await {
            Ok(()) => {
                tracing::info!(user = %body.username, "account registered");
                self.services.navigation.navigate(Destination::Login);
                Outcome::Applied(Some(NoticeDraft::success("auth.registered")))
            }
            Err(err) => Outcome::Rejected(session_failure(&err, "auth.registerError")),
        }
    }

    /// Clear the credential and return to login.
    pub fn logout(&self) {
        tracing::info!("signed out");
        AuthGuard::new(self.services).sign_out();
    }
}

fn session_failure(err: &ApiError, key: &'static str) -> NoticeDraft {
    tracing::warn!(error = %err, "session request failed");
    match err {
        ApiError::Network { .. } => NoticeDraft::error("auth.networkError"),
        _ => NoticeDraft::error(key).with_detail(err.server_message()),
    }
}
