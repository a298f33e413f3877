//! Persistence and environment helpers for the app shell.

use crate::config::{ClientConfig, LANGUAGE_KEY};
use crate::i18n::{DEFAULT_LOCALE, LocaleCode};
use gloo::storage::{LocalStorage, Storage};
use gloo::utils::window;

pub(crate) fn load_locale() -> LocaleCode {
    if let Ok(value) = LocalStorage::get::<String>(LANGUAGE_KEY) {
        if let Some(locale) = LocaleCode::from_lang_tag(&value) {
            return locale;
        }
    }
    if let Some(nav) = window().navigator().language() {
        if let Some(locale) = LocaleCode::from_lang_tag(&nav) {
            return locale;
        }
    }
    DEFAULT_LOCALE
}

pub(crate) fn persist_locale(locale: LocaleCode) {
    if let Err(err) = LocalStorage::set(LANGUAGE_KEY, locale.code()) {
        tracing::warn!(error = %err, "failed to persist language");
    }
}

pub(crate) fn client_config() -> ClientConfig {
    window()
        .location()
        .origin()
        .map_or_else(|_| ClientConfig::default(), |origin| ClientConfig::for_origin(&origin))
}
