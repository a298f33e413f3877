//! JSON-backed translations with per-locale bundles fetched at startup.
//!
//! # Design
//! - Resolve every bundle before the first interactive render; renderers take a
//!   [`Translator`] so nothing can translate ahead of readiness.
//! - Only the default locale is mandatory; other bundles that fail to load are
//!   left out of the switcher.
//! - Lookups fall back to English, then to the key itself.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::rc::Rc;
use thiserror::Error;

/// Supported locale codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocaleCode {
    /// English.
    En,
    /// Spanish.
    Es,
    /// French.
    Fr,
    /// German.
    De,
    /// Russian.
    Ru,
}

impl LocaleCode {
    /// All supported locales in display order.
    #[must_use]
    pub const fn all() -> [Self; 5] {
        [Self::En, Self::Es, Self::Fr, Self::De, Self::Ru]
    }

    /// Two-letter code used in asset paths and storage.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
            Self::Fr => "fr",
            Self::De => "de",
            Self::Ru => "ru",
        }
    }

    /// Human-friendly label for the switcher.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Es => "Español",
            Self::Fr => "Français",
            Self::De => "Deutsch",
            Self::Ru => "Русский",
        }
    }

    /// Map an arbitrary browser language tag to a supported locale, falling back to None.
    #[must_use]
    pub fn from_lang_tag(tag: &str) -> Option<Self> {
        let lowered = tag.trim().to_ascii_lowercase();
        let base = lowered.split(['-', '_']).next().unwrap_or_default();
        Self::all()
            .iter()
            .copied()
            .find(|locale| locale.code() == base)
    }
}

/// Default fallback locale.
pub const DEFAULT_LOCALE: LocaleCode = LocaleCode::En;

/// Localization failures.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum I18nError {
    /// The mandatory default bundle could not be loaded.
    #[error("default locale bundle '{locale}' failed to load: {detail}")]
    DefaultBundleMissing {
        /// Code of the default locale.
        locale: &'static str,
        /// Underlying failure.
        detail: String,
    },
    /// A bundle could not be fetched or parsed.
    #[error("locale bundle '{locale}' failed to load: {detail}")]
    BundleLoad {
        /// Code of the failing locale.
        locale: &'static str,
        /// Underlying failure.
        detail: String,
    },
    /// Text was requested before initialization finished.
    #[error("localization is not ready")]
    NotReady,
}

/// Source of raw bundle trees; the browser implementation fetches over HTTP.
#[async_trait(?Send)]
pub trait BundleSource {
    /// Fetch the JSON tree for `locale`.
    async fn fetch(&self, locale: LocaleCode) -> Result<Value, I18nError>;
}

/// Parsed JSON tree for one locale.
#[derive(Clone, Debug)]
pub struct TranslationBundle {
    /// Locale backing this bundle.
    pub locale: LocaleCode,
    tree: Value,
}

impl PartialEq for TranslationBundle {
    fn eq(&self, other: &Self) -> bool {
        self.locale == other.locale
    }
}

impl TranslationBundle {
    /// Wrap a parsed tree; anything other than a JSON object is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`I18nError::BundleLoad`] when the root is not an object.
    pub fn from_value(locale: LocaleCode, tree: Value) -> Result<Self, I18nError> {
        if tree.is_object() {
            Ok(Self { locale, tree })
        } else {
            Err(I18nError::BundleLoad {
                locale: locale.code(),
                detail: "bundle root is not a JSON object".to_string(),
            })
        }
    }

    /// Resolve a dotted path (`section.key`) in this bundle only.
    #[must_use]
    pub fn lookup(&self, path: &str) -> Option<String> {
        resolve(&self.tree, path)
    }
}

fn resolve(tree: &Value, path: &str) -> Option<String> {
    let mut node = tree;
    for segment in path.split('.') {
        node = node.get(segment)?;
    }
    node.as_str().map(ToString::to_string)
}

/// Resolved translator handed to every renderer.
#[derive(Clone, Debug)]
pub struct Translator {
    active: Rc<TranslationBundle>,
    fallback: Rc<TranslationBundle>,
}

impl PartialEq for Translator {
    fn eq(&self, other: &Self) -> bool {
        self.active.locale == other.active.locale
    }
}

impl Default for Translator {
    /// Translator without bundles; every lookup returns the key.
    fn default() -> Self {
        let empty = Rc::new(empty_bundle(DEFAULT_LOCALE));
        Self::new(Rc::clone(&empty), empty)
    }
}

impl Translator {
    /// Build a translator from an active bundle and the English fallback.
    #[must_use]
    pub const fn new(active: Rc<TranslationBundle>, fallback: Rc<TranslationBundle>) -> Self {
        Self { active, fallback }
    }

    /// Locale currently used for lookups.
    #[must_use]
    pub fn locale(&self) -> LocaleCode {
        self.active.locale
    }

    /// Translate `key`, falling back to English and then the key itself.
    #[must_use]
    pub fn text(&self, key: &str) -> String {
        self.active
            .lookup(key)
            .or_else(|| self.fallback.lookup(key))
            .unwrap_or_else(|| key.to_string())
    }

    /// Translate `key` and substitute `{{name}}` placeholders.
    #[must_use]
    pub fn format(&self, key: &str, args: &[(&str, &str)]) -> String {
        args.iter()
            .fold(self.text(key), |acc, (name, value)| {
                acc.replace(&format!("{{{{{name}}}}}"), value)
            })
    }
}

/// Every successfully loaded bundle plus the active selection.
#[derive(Clone, Debug)]
pub struct LocaleCatalog {
    bundles: BTreeMap<LocaleCode, Rc<TranslationBundle>>,
    active: LocaleCode,
}

impl PartialEq for LocaleCatalog {
    fn eq(&self, other: &Self) -> bool {
        self.active == other.active && self.available() == other.available()
    }
}

impl LocaleCatalog {
    /// Locales whose bundles loaded, in display order.
    #[must_use]
    pub fn available(&self) -> Vec<LocaleCode> {
        LocaleCode::all()
            .into_iter()
            .filter(|locale| self.bundles.contains_key(locale))
            .collect()
    }

    /// Active locale.
    #[must_use]
    pub const fn active(&self) -> LocaleCode {
        self.active
    }

    /// Translator for the active locale.
    #[must_use]
    pub fn translator(&self) -> Translator {
        let fallback = self
            .bundles
            .get(&DEFAULT_LOCALE)
            .cloned()
            .unwrap_or_else(|| Rc::new(empty_bundle(DEFAULT_LOCALE)));
        let active = self
            .bundles
            .get(&self.active)
            .cloned()
            .unwrap_or_else(|| Rc::clone(&fallback));
        Translator::new(active, fallback)
    }

    /// Switch the active locale, loading its bundle only when it is not cached.
    ///
    /// # Errors
    ///
    /// Returns [`I18nError::BundleLoad`] when the missing bundle fails to load;
    /// the current catalog is left unchanged in that case.
    pub async fn switch_locale(
        &self,
        source: &dyn BundleSource,
        locale: LocaleCode,
    ) -> Result<Self, I18nError> {
        let mut next = self.clone();
        if !next.bundles.contains_key(&locale) {
            let bundle = load_bundle(source, locale).await?;
            next.bundles.insert(locale, Rc::new(bundle));
        }
        next.active = locale;
        tracing::info!(locale = locale.code(), "locale switched");
        Ok(next)
    }
}

fn empty_bundle(locale: LocaleCode) -> TranslationBundle {
    TranslationBundle {
        locale,
        tree: Value::Object(serde_json::Map::new()),
    }
}

async fn load_bundle(
    source: &dyn BundleSource,
    locale: LocaleCode,
) -> Result<TranslationBundle, I18nError> {
    let tree = source.fetch(locale).await?;
    TranslationBundle::from_value(locale, tree)
}

/// Load every supported bundle and resolve the active locale.
///
/// A requested locale whose bundle failed falls back to the default.
///
/// # Errors
///
/// Returns [`I18nError::DefaultBundleMissing`] when the default bundle fails.
pub async fn initialize(
    source: &dyn BundleSource,
    requested: LocaleCode,
) -> Result<LocaleCatalog, I18nError> {
    let mut bundles = BTreeMap::new();
    for locale in LocaleCode::all() {
        match load_bundle(source, locale).await {
            Ok(bundle) => {
                bundles.insert(locale, Rc::new(bundle));
            }
            Err(err) if locale == DEFAULT_LOCALE => {
                tracing::error!(locale = locale.code(), error = %err, "default locale bundle failed");
                return Err(I18nError::DefaultBundleMissing {
                    locale: locale.code(),
                    detail: err.to_string(),
                });
            }
            Err(err) => {
                tracing::warn!(locale = locale.code(), error = %err, "locale bundle omitted");
            }
        }
    }
    let active = if bundles.contains_key(&requested) {
        requested
    } else {
        DEFAULT_LOCALE
    };
    tracing::debug!(active = active.code(), loaded = bundles.len(), "localization ready");
    Ok(LocaleCatalog { bundles, active })
}

/// Readiness of the localization layer.
#[derive(Clone, Debug, PartialEq)]
pub enum LocalizationGate {
    /// Initialization has not finished.
    Pending,
    /// Bundles are loaded.
    Ready(LocaleCatalog),
    /// The default bundle failed; the app cannot render text.
    Failed(I18nError),
}

impl LocalizationGate {
    /// Whether text can be produced.
    #[must_use]
    pub const fn ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    /// Translate `key` once ready.
    ///
    /// # Errors
    ///
    /// Returns [`I18nError::NotReady`] while pending and the stored error after failure.
    pub fn translate(&self, key: &str) -> Result<String, I18nError> {
        match self {
            Self::Ready(catalog) => Ok(catalog.translator().text(key)),
            Self::Pending => Err(I18nError::NotReady),
            Self::Failed(err) => Err(err.clone()),
        }
    }

    /// Settle the gate from an initialization result.
    #[must_use]
    pub fn from_result(result: Result<LocaleCatalog, I18nError>) -> Self {
        match result {
            Ok(catalog) => Self::Ready(catalog),
            Err(err) => Self::Failed(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::StaticBundles;
    use serde_json::json;

    #[test]
    fn lang_tags_map_to_supported_locales() {
        assert_eq!(LocaleCode::from_lang_tag("de-AT"), Some(LocaleCode::De));
        assert_eq!(LocaleCode::from_lang_tag("RU"), Some(LocaleCode::Ru));
        assert_eq!(LocaleCode::from_lang_tag("ja-JP"), None);
    }

    #[tokio::test]
    async fn lookup_prefers_active_then_english_then_key() {
        let catalog = initialize(&StaticBundles::full(), LocaleCode::Es)
            .await
            .expect("init");
        let t = catalog.translator();
        assert_eq!(t.locale(), LocaleCode::Es);
        assert_eq!(t.text("todos.complete"), "Completar");
        assert_eq!(t.text("todos.undo"), "Undo");
        assert_eq!(t.text("missing.key"), "missing.key");
    }

    #[tokio::test]
    async fn format_substitutes_named_placeholders() {
        let catalog = initialize(&StaticBundles::full(), LocaleCode::En)
            .await
            .expect("init");
        assert_eq!(
            catalog
                .translator()
                .format("teams.created", &[("code", "ABC123")]),
            "Team created. Share code: ABC123"
        );
    }

    #[tokio::test]
    async fn only_default_bundle_failure_is_fatal() {
        let without_fr = StaticBundles::full().without(LocaleCode::Fr);
        let catalog = initialize(&without_fr, LocaleCode::Fr)
            .await
            .expect("non-default failure tolerated");
        assert!(!catalog.available().contains(&LocaleCode::Fr));
        assert_eq!(catalog.active(), LocaleCode::En);

        let without_en = StaticBundles::full().without(LocaleCode::En);
        let err = initialize(&without_en, LocaleCode::Es)
            .await
            .expect_err("default failure is fatal");
        assert!(matches!(err, I18nError::DefaultBundleMissing { locale: "en", .. }));
    }

    #[tokio::test]
    async fn switch_loads_only_missing_locale() {
        let source = StaticBundles::full().without(LocaleCode::De);
        let catalog = initialize(&source, LocaleCode::En).await.expect("init");
        let before = source.fetches();

        let switched = catalog
            .switch_locale(&source, LocaleCode::Es)
            .await
            .expect("cached switch");
        assert_eq!(switched.active(), LocaleCode::Es);
        assert_eq!(source.fetches(), before);

        let recovered = StaticBundles::full();
        let switched = catalog
            .switch_locale(&recovered, LocaleCode::De)
            .await
            .expect("fetch on switch");
        assert_eq!(recovered.fetches(), 1);
        assert!(switched.available().contains(&LocaleCode::De));
        assert_eq!(switched.translator().locale(), LocaleCode::De);
    }

    #[test]
    fn default_translator_echoes_keys() {
        assert_eq!(Translator::default().text("todos.undo"), "todos.undo");
    }

    #[test]
    fn non_object_bundle_is_rejected() {
        assert!(TranslationBundle::from_value(LocaleCode::Es, json!(["x"])).is_err());
    }

    #[test]
    fn gate_refuses_text_until_ready() {
        assert!(!LocalizationGate::Pending.ready());
        assert_eq!(
            LocalizationGate::Pending.translate("todos.undo"),
            Err(I18nError::NotReady)
        );
        let failed = LocalizationGate::from_result(Err(I18nError::DefaultBundleMissing {
            locale: "en",
            detail: "404".to_string(),
        }));
        assert!(failed.translate("todos.undo").is_err());
    }

    #[tokio::test]
    async fn gate_translates_when_ready() {
        let gate = LocalizationGate::from_result(
            initialize(&StaticBundles::full(), LocaleCode::En).await,
        );
        assert!(gate.ready());
        assert_eq!(gate.translate("todos.undo"), Ok("Undo".to_string()));
    }
}
