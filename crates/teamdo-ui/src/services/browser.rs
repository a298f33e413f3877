//! `LocalStorage`, router navigation, `window.confirm` and bundle fetching.

use crate::app::Route;
use crate::config::{ClientConfig, TOKEN_KEY};
use crate::core::host::{Confirm, Destination, Navigation};
use crate::core::transport::CredentialStore;
use crate::i18n::{BundleSource, I18nError, LocaleCode};
use async_trait::async_trait;
use gloo::storage::{LocalStorage, Storage};
use gloo::utils::window;
use gloo_net::http::Request;
use serde_json::Value;
use yew_router::prelude::{Navigator, Routable};

/// Token persisted in `LocalStorage`.
pub(crate) struct LocalCredentialStore;

impl CredentialStore for LocalCredentialStore {
    fn token(&self) -> Option<String> {
        LocalStorage::get::<String>(TOKEN_KEY).ok()
    }

    fn store(&self, token: &str) {
        if let Err(err) = LocalStorage::set(TOKEN_KEY, token) {
            tracing::error!(error = %err, "failed to persist credential");
        }
    }

    fn clear(&self) {
        LocalStorage::delete(TOKEN_KEY);
    }
}

/// Navigation through the SPA router; reloads go through `window.location`.
/// Falls back to a full page load when rendered outside a router.
pub(crate) struct RouterNavigation {
    navigator: Option<Navigator>,
}

impl RouterNavigation {
    pub(crate) const fn new(navigator: Option<Navigator>) -> Self {
        Self { navigator }
    }

    fn push(&self, route: &Route) {
        match &self.navigator {
            Some(navigator) => navigator.push(route),
            None => {
                if let Err(err) = window().location().set_href(&route.to_path()) {
                    tracing::error!(error = ?err, "navigation failed");
                }
            }
        }
    }
}

impl Navigation for RouterNavigation {
    fn navigate(&self, destination: Destination) {
        match destination {
            Destination::Login => self.push(&Route::Login),
            Destination::Todos => self.push(&Route::Todos),
            Destination::Reload => {
                if let Err(err) = window().location().reload() {
                    tracing::error!(error = ?err, "page reload failed");
                }
            }
        }
    }
}

/// Blocking `window.confirm` prompt.
pub(crate) struct DialogConfirm;

impl Confirm for DialogConfirm {
    fn confirm(&self, message: &str) -> bool {
        gloo::dialogs::confirm(message)
    }
}

/// Fetches `{prefix}/{code}/translation.json`.
pub(crate) struct HttpBundleSource {
    config: ClientConfig,
}

impl HttpBundleSource {
    pub(crate) const fn new(config: ClientConfig) -> Self {
        Self { config }
    }
}

#[async_trait(?Send)]
impl BundleSource for HttpBundleSource {
    async fn fetch(&self, locale: LocaleCode) -> Result<Value, I18nError> {
        let load_error = |detail: String| I18nError::BundleLoad {
            locale: locale.code(),
            detail,
        };
        let response = Request::get(&self.config.locale_url(locale))
            .send()
            .await
            .map_err(|err| load_error(err.to_string()))?;
        if !response.ok() {
            return Err(load_error(format!("status {}", response.status())));
        }
        response
            .json::<Value>()
            .await
            .map_err(|err| load_error(err.to_string()))
    }
}
