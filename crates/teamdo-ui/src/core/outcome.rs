//! Result of a user-triggered workflow step.

use crate::core::auth::AuthGuard;
use crate::core::error::ApiError;
use crate::core::notice::NoticeDraft;

/// What a workflow did, so the view knows what to show next.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// State changed; an optional notice accompanies it.
    Applied(Option<NoticeDraft>),
    /// Nothing happened (e.g. the user declined a confirmation).
    Unchanged,
    /// The step failed or was refused; state is as before apart from inline errors.
    Rejected(NoticeDraft),
    /// The guard navigated away; the view must not touch its state further.
    Redirected,
}

impl Outcome {
    /// Notice to surface, if any.
    #[must_use]
    pub const fn notice(&self) -> Option<&NoticeDraft> {
        match self {
            Self::Applied(notice) => notice.as_ref(),
            Self::Rejected(notice) => Some(notice),
            Self::Unchanged | Self::Redirected => None,
        }
    }

    /// Consume into the notice, if any.
    #[must_use]
    pub fn into_notice(self) -> Option<NoticeDraft> {
        match self {
            Self::Applied(notice) => notice,
            Self::Rejected(notice) => Some(notice),
            Self::Unchanged | Self::Redirected => None,
        }
    }

    /// Whether the step was refused or failed.
    #[must_use]
    pub const fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }
}

/// Map a failed call: 401 rejects the credential, anything else becomes an error notice.
pub fn api_failure(guard: &AuthGuard<'_>, err: &ApiError, key: &'static str) -> Outcome {
    if err.is_unauthorized() {
        guard.reject();
        return Outcome::Redirected;
    }
    tracing::warn!(error = %err, key, "request failed");
    Outcome::Rejected(NoticeDraft::error(key).with_detail(err.server_message()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::host::Destination;
    use crate::testing::Harness;

    #[test]
    fn unauthorized_redirects() {
        let harness = Harness::signed_in();
        let outcome = api_failure(
            &AuthGuard::new(&harness.services),
            &ApiError::Unauthorized,
            "todos.fetchError",
        );
        assert_eq!(outcome, Outcome::Redirected);
        assert_eq!(harness.navigation.visits(), vec![Destination::Login]);
    }

    #[test]
    fn other_failures_carry_server_reason() {
        let harness = Harness::signed_in();
        let outcome = api_failure(
            &AuthGuard::new(&harness.services),
            &ApiError::from_status(500, Some("db down".to_string())),
            "todos.addError",
        );
        let notice = outcome.into_notice().expect("notice");
        assert_eq!(notice.key, "todos.addError");
        assert_eq!(notice.detail.as_deref(), Some("db down"));
        assert!(harness.navigation.visits().is_empty());
    }
}
