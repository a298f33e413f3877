//! Profile loading.
//!
//! # Design
//! - The profile is fetched before the todo list; any failure other than a
//!   transport error is treated as an invalid session.

use crate::core::auth::AuthGuard;
use crate::core::error::ApiError;
use crate::core::host::Services;
use crate::core::notice::NoticeDraft;
use crate::core::outcome::Outcome;
use crate::features::profile::state::ProfileState;
use crate::features::todos::workflow::TodoWorkflow;
use crate::i18n::Translator;

const NETWORK_ERROR_KEY: &str = "auth.networkError";

/// Loads [`ProfileState`].
pub struct ProfileWorkflow<'a> {
    services: &'a Services,
    translator: &'a Translator,
}

impl<'a> ProfileWorkflow<'a> {
    /// Workflow over shared services.
    #[must_use]
    pub const fn new(services: &'a Services, translator: &'a Translator) -> Self {
        Self {
            services,
            translator,
        }
    }

    /// Fetch account details, then the personal todos.
    pub async fn load(&self, state: &mut ProfileState) -> Outcome {
        let guard = AuthGuard::new(self.services);
        if !guard.require_auth().is_authenticated() {
            return Outcome::Redirected;
        }
        match self.services.api.fetch_profile().await {
            Ok(profile) => {
                tracing::debug!(user = %profile.username, "profile loaded");
                state.profile = Some(profile);
                state.inline_error = None;
            }
            Err(err @ ApiError::Network { .. }) => {
                tracing::warn!(error = %err, "profile request failed");
                state.inline_error = Some(NETWORK_ERROR_KEY);
                return Outcome::Rejected(NoticeDraft::error(NETWORK_ERROR_KEY));
            }
            Err(err) => {
                tracing::warn!(error = %err, "profile rejected; treating session as invalid");
                guard.reject();
                return Outcome::Redirected;
            }
        }
        TodoWorkflow::new(self.services, self.translator)
            .sync(&mut state.todos)
            .await
    }
}
