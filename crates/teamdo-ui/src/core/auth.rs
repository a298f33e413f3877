//! Credential gate for protected views.
//!
//! # Design
//! - Presence of a non-blank token is necessary and sufficient to proceed.
//! - Any 401 clears the token and sends the user to `/login`.
//! - Leave header encoding to transport clients to keep core DOM-free.

use crate::core::host::{Destination, Services};

/// Result of a guard check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthCheck {
    /// A token is present.
    Authenticated(String),
    /// Navigation to login was triggered; the caller must stop.
    Redirecting,
}

impl AuthCheck {
    /// Whether the caller may continue.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }
}

/// Checks and revokes the session credential.
#[derive(Clone, Copy)]
pub struct AuthGuard<'a> {
    services: &'a Services,
}

impl<'a> AuthGuard<'a> {
    /// Guard over the given services.
    #[must_use]
    pub const fn new(services: &'a Services) -> Self {
        Self { services }
    }

    /// Require a stored token, redirecting to login when it is missing or blank.
    #[must_use]
    pub fn require_auth(&self) -> AuthCheck {
        match self.services.credentials.token() {
            Some(token) if !token.trim().is_empty() => AuthCheck::Authenticated(token),
            _ => {
                tracing::info!("no credential; redirecting to login");
                self.services.navigation.navigate(Destination::Login);
                AuthCheck::Redirecting
            }
        }
    }

    /// Drop the credential after the server rejected it.
    pub fn reject(&self) {
        tracing::warn!("credential rejected by server; redirecting to login");
        self.sign_out();
    }

    /// Persist a freshly issued token.
    pub fn sign_in(&self, token: &str) {
        self.services.credentials.store(token);
    }

    /// Clear the credential and return to login.
    pub fn sign_out(&self) {
        self.services.credentials.clear();
        self.services.navigation.navigate(Destination::Login);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::transport::CredentialStore;
    use crate::testing::Harness;

    #[test]
    fn blank_token_redirects() {
        let harness = Harness::with_token("   ");
        let check = AuthGuard::new(&harness.services).require_auth();
        assert_eq!(check, AuthCheck::Redirecting);
        assert_eq!(harness.navigation.visits(), vec![Destination::Login]);
    }

    #[test]
    fn present_token_passes_without_navigation() {
        let harness = Harness::signed_in();
        let check = AuthGuard::new(&harness.services).require_auth();
        assert!(check.is_authenticated());
        assert!(harness.navigation.visits().is_empty());
    }

    #[test]
    fn reject_clears_credential_and_redirects() {
        let harness = Harness::signed_in();
        AuthGuard::new(&harness.services).reject();
        assert_eq!(harness.credentials.token(), None);
        assert_eq!(harness.navigation.visits(), vec![Destination::Login]);
    }
}
