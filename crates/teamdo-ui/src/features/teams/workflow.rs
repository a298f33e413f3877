//! Team membership and team card operations.
//!
//! # Design
//! - Card operations share one in-flight lane, so each one starts from the
//!   result of the previous one.
//! - Joining reloads the page on success; a rejected code leaves the form usable.
//! - Creating a team auto-joins the creator; the card is added whatever the join
//!   result, unless the join reports an expired session.
//! - Team deletion is confirmed first and also holds the team's list lane.

use crate::core::auth::AuthGuard;
use crate::core::error::ApiError;
use crate::core::host::{Destination, Services};
use crate::core::inflight::{InFlightPermit, Lane};
use crate::core::notice::NoticeDraft;
use crate::core::outcome::{Outcome, api_failure};
use crate::core::scope::Scope;
use crate::core::transport::decode_collection;
use crate::core::validation::{ValidationError, required};
use crate::features::teams::state::{JoinState, TeamsState};
use crate::features::todos::workflow::BUSY_KEY;
use crate::i18n::Translator;
use teamdo_api_models::{NewTeam, Team, TeamId};

/// Drives [`TeamsState`] against the API.
pub struct TeamWorkflow<'a> {
    services: &'a Services,
    translator: &'a Translator,
}

impl<'a> TeamWorkflow<'a> {
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

    fn claim_directory(&self) -> Option<InFlightPermit> {
        let permit = self.services.inflight.try_acquire(Lane::TeamDirectory);
        if permit.is_none() {
            tracing::debug!("team operation refused while another is pending");
        }
        permit
    }

    /// Fetch the caller's teams. Skipped while another card operation is pending.
    pub async fn load(&self, state: &mut TeamsState) -> Outcome {
        let Some(_permit) = self.claim_directory() else {
            return Outcome::Unchanged;
        };
        let key = "teams.fetchError";
        let result = self.services.api.list_teams().await;
        match result.and_then(decode_collection::<Team>) {
            Ok(teams) => {
                tracing::debug!(count = teams.len(), "teams loaded");
                state.replace_teams(teams);
                Outcome::Applied(None)
            }
            Err(err @ ApiError::Malformed { .. }) => {
                tracing::warn!(error = %err, "team list body rejected");
                state.inline_error = Some(key);
                Outcome::Rejected(NoticeDraft::error(key))
            }
            Err(err) => api_failure(&self.guard(), &err, key),
        }
    }

    /// Join a team by invite code.
    pub async fn join(&self, state: &mut TeamsState, code: &str) -> Outcome {
        let code = match required(code, ValidationError::TeamCodeRequired) {
            Ok(code) => code,
            Err(err) => return Outcome::Rejected(err.notice()),
        };
        if state.join == JoinState::Pending {
            return Outcome::Rejected(NoticeDraft::error(BUSY_KEY));
        }
        if !self.guard().require_auth().is_authenticated() {
            return Outcome::Redirected;
        }
        let Some(_permit) = self.claim_directory() else {
            return Outcome::Rejected(NoticeDraft::error(BUSY_KEY));
        };
        state.join = JoinState::Pending;
        match self.services.api.join_team(&code).await {
            Ok(()) => {
                tracing::info!("team joined; reloading");
                state.join = JoinState::Joined;
                self.services.navigation.navigate(Destination::Reload);
                Outcome::Applied(Some(NoticeDraft::success("teams.joined")))
            }
            Err(err) => {
                state.join = JoinState::Unjoined;
                api_failure(&self.guard(), &err, "teams.joinError")
            }
        }
    }

    /// Create a team, join it as its creator and show its share code.
    pub async fn create(&self, state: &mut TeamsState, name: &str) -> Outcome {
        let name = match required(name, ValidationError::TeamNameRequired) {
            Ok(name) => name,
            Err(err) => return Outcome::Rejected(err.notice()),
        };
        if !self.guard().require_auth().is_authenticated() {
            return Outcome::Redirected;
        }
        let Some(_permit) = self.claim_directory() else {
            return Outcome::Rejected(NoticeDraft::error(BUSY_KEY));
        };
        let team = match self.services.api.create_team(&NewTeam { name }).await {
            Ok(team) => team,
            Err(err) => return api_failure(&self.guard(), &err, "teams.createError"),
        };
        match self.services.api.join_team(&team.code).await {
            Ok(()) => {}
            Err(err) if err.is_unauthorized() => {
                tracing::warn!(team = team.id, "creator auto-join rejected the credential");
                self.guard().reject();
                return Outcome::Redirected;
            }
            Err(err) => {
                tracing::warn!(team = team.id, error = %err, "creator auto-join failed");
            }
        }
        tracing::info!(team = team.id, "team created");
        let code = team.code.clone();
        state.prepend(team);
        Outcome::Applied(Some(
            NoticeDraft::success("teams.created").with_arg("code", code),
        ))
    }

    /// Delete a team after the user confirms.
    pub async fn delete(&self, state: &mut TeamsState, id: TeamId) -> Outcome {
        if !self.guard().require_auth().is_authenticated() {
            return Outcome::Redirected;
        }
        let Some(_directory) = self.claim_directory() else {
            return Outcome::Rejected(NoticeDraft::error(BUSY_KEY));
        };
        let Some(_list) = self.services.inflight.try_acquire(Scope::Team(id)) else {
            return Outcome::Rejected(NoticeDraft::error(BUSY_KEY));
        };
        if !self
            .services
            .confirm
            .confirm(&self.translator.text("teams.confirmDelete"))
        {
            return Outcome::Unchanged;
        }
        match self.services.api.delete_team(id).await {
            Ok(()) => {
                tracing::info!(team = id, "team deleted");
                state.remove(id);
                Outcome::Applied(Some(NoticeDraft::success("teams.deleted")))
            }
            Err(err) => api_failure(&self.guard(), &err, "teams.deleteError"),
        }
    }
}
