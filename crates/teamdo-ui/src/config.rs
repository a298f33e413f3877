//! Client configuration shared by the browser shell and the DOM-free workflows.
//!
//! # Design
//! - Keep every tunable in one struct with browser-friendly defaults.
//! - Derive the API origin from the page location instead of build-time flags.

use crate::i18n::LocaleCode;

/// How long a transient notice stays visible.
pub const NOTICE_DISMISS_MS: u32 = 5_000;

/// Maximum number of notices shown at once; older ones are dropped first.
pub const MAX_VISIBLE_NOTICES: usize = 4;

/// `LocalStorage` key holding the bearer token.
pub const TOKEN_KEY: &str = "token";

/// `LocalStorage` key holding the selected language code.
pub const LANGUAGE_KEY: &str = "language";

/// Runtime configuration for the UI.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Origin prefixed to every `/api/...` path (empty for same-origin).
    pub api_base_url: String,
    /// Path prefix under which `{code}/translation.json` bundles are served.
    pub locale_path_prefix: String,
    /// Notice auto-dismiss delay in milliseconds.
    pub notice_dismiss_ms: u32,
    /// Maximum number of stacked notices.
    pub max_notices: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            locale_path_prefix: "/static/locales".to_string(),
            notice_dismiss_ms: NOTICE_DISMISS_MS,
            max_notices: MAX_VISIBLE_NOTICES,
        }
    }
}

impl ClientConfig {
    /// Build a configuration targeting the given page origin.
    #[must_use]
    pub fn for_origin(origin: &str) -> Self {
        Self {
            api_base_url: origin.trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }

    /// Absolute URL for an API path such as `/api/todos`.
    #[must_use]
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url, path)
    }

    /// URL of the translation bundle for `locale`.
    #[must_use]
    pub fn locale_url(&self, locale: LocaleCode) -> String {
        format!(
            "{}/{}/translation.json",
            self.locale_path_prefix.trim_end_matches('/'),
            locale.code()
        )
    }
}
