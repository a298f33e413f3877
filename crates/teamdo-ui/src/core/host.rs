//! Browser side effects the workflows need, behind small traits.
//!
//! # Design
//! - Navigation and confirmation are the only page-level effects workflows trigger.
//! - Implementations live in the wasm layer; tests record calls instead.

use crate::core::inflight::InFlight;
use crate::core::transport::{CredentialStore, TodoApi};
use std::rc::Rc;

/// Navigation targets reachable from workflows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Destination {
    /// `/login`.
    Login,
    /// `/todos`.
    Todos,
    /// Reload the current page.
    Reload,
}

/// Performs navigation.
pub trait Navigation {
    /// Leave the current view.
    fn navigate(&self, destination: Destination);
}

/// Asks the user to confirm a destructive action.
pub trait Confirm {
    /// Returns `true` when the user accepts.
    fn confirm(&self, message: &str) -> bool;
}

/// Shared handles passed to every workflow.
#[derive(Clone)]
pub struct Services {
    /// Remote API.
    pub api: Rc<dyn TodoApi>,
    /// Credential persistence.
    pub credentials: Rc<dyn CredentialStore>,
    /// Page navigation.
    pub navigation: Rc<dyn Navigation>,
    /// Interactive confirmation.
    pub confirm: Rc<dyn Confirm>,
    /// Per-lane in-flight registry.
    pub inflight: InFlight,
}

impl PartialEq for Services {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.api, &other.api) && self.inflight == other.inflight
    }
}
