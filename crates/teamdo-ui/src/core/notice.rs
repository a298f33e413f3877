//! Transient banner messages.
//!
//! # Design
//! - Workflows emit drafts carrying translation keys; text is resolved at render time.
//! - The queue keeps the newest notices and drops the oldest beyond the cap.

use crate::config::MAX_VISIBLE_NOTICES;
use crate::i18n::Translator;

/// Notice variants used across the UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    /// Success notice.
    Success,
    /// Error notice.
    Error,
}

impl NoticeKind {
    /// CSS modifier for the banner.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// Untranslated notice produced by a workflow.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoticeDraft {
    /// Severity classification.
    pub kind: NoticeKind,
    /// Translation key of the message.
    pub key: &'static str,
    /// `{{name}}` substitutions.
    pub args: Vec<(&'static str, String)>,
    /// Server-provided reason appended after the message.
    pub detail: Option<String>,
}

impl NoticeDraft {
    /// Error notice for `key`.
    #[must_use]
    pub const fn error(key: &'static str) -> Self {
        Self {
            kind: NoticeKind::Error,
            key,
            args: Vec::new(),
            detail: None,
        }
    }

    /// Success notice for `key`.
    #[must_use]
    pub const fn success(key: &'static str) -> Self {
        Self {
            kind: NoticeKind::Success,
            key,
            args: Vec::new(),
            detail: None,
        }
    }

    /// Add a placeholder substitution.
    #[must_use]
    pub fn with_arg(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.args.push((name, value.into()));
        self
    }

    /// Attach a server-provided reason, if any.
    #[must_use]
    pub fn with_detail(mut self, detail: Option<&str>) -> Self {
        self.detail = detail.map(ToString::to_string);
        self
    }

    /// Resolve the display text.
    #[must_use]
    pub fn message(&self, translator: &Translator) -> String {
        let args: Vec<(&str, &str)> = self
            .args
            .iter()
            .map(|(name, value)| (*name, value.as_str()))
            .collect();
        let text = translator.format(self.key, &args);
        match &self.detail {
            Some(detail) => format!("{text}: {detail}"),
            None => text,
        }
    }
}

/// Notice payload held by the host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    /// Monotonic identifier.
    pub id: u64,
    /// Message content.
    pub draft: NoticeDraft,
}

/// Ordered, capped list of visible notices.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoticeQueue {
    items: Vec<Notice>,
    next_id: u64,
    cap: usize,
}

impl Default for NoticeQueue {
    fn default() -> Self {
        Self::with_cap(MAX_VISIBLE_NOTICES)
    }
}

impl NoticeQueue {
    /// Queue holding at most `cap` notices.
    #[must_use]
    pub const fn with_cap(cap: usize) -> Self {
        Self {
            items: Vec::new(),
            next_id: 0,
            cap,
        }
    }

    /// Append a notice and return its id.
    pub fn push(&mut self, draft: NoticeDraft) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Notice { id, draft });
        if self.items.len() > self.cap {
            let drain = self.items.len() - self.cap;
            self.items.drain(0..drain);
        }
        id
    }

    /// Remove a notice by id; unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|notice| notice.id != id);
    }

    /// Visible notices, oldest first.
    #[must_use]
    pub fn items(&self) -> &[Notice] {
        &self.items
    }
}
