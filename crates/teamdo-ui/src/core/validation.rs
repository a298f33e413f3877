//! Client-side form validation.
//!
//! # Design
//! - Each failure maps to one translation key; no request is issued on failure.
//! - Trim before measuring usernames, titles, team names and codes.

use crate::core::notice::NoticeDraft;
use thiserror::Error;

/// Minimum username length after trimming.
pub const MIN_USERNAME_LEN: usize = 3;

/// Minimum password length.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Form validation failures.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Todo title is empty after trimming.
    #[error("title is required")]
    TitleRequired,
    /// Username shorter than [`MIN_USERNAME_LEN`].
    #[error("username is too short")]
    UsernameTooShort,
    /// Password shorter than [`MIN_PASSWORD_LEN`].
    #[error("password is too short")]
    PasswordTooShort,
    /// Password and confirmation differ.
    #[error("passwords do not match")]
    PasswordMismatch,
    /// Email lacks an `@`.
    #[error("email is invalid")]
    EmailInvalid,
    /// Team name is empty after trimming.
    #[error("team name is required")]
    TeamNameRequired,
    /// Join code is empty after trimming.
    #[error("team code is required")]
    TeamCodeRequired,
}

impl ValidationError {
    /// Translation key shown to the user.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::TitleRequired => "todos.titleRequired",
            Self::UsernameTooShort => "auth.usernameTooShort",
            Self::PasswordTooShort => "auth.passwordTooShort",
            Self::PasswordMismatch => "auth.passwordMismatch",
            Self::EmailInvalid => "auth.emailInvalid",
            Self::TeamNameRequired => "teams.nameRequired",
            Self::TeamCodeRequired => "teams.codeRequired",
        }
    }

    /// Error notice for this failure.
    #[must_use]
    pub const fn notice(self) -> NoticeDraft {
        NoticeDraft::error(self.key())
    }
}

/// Trimmed non-empty value or `err`.
///
/// # Errors
///
/// Returns `err` when `value` is blank.
pub fn required(value: &str, err: ValidationError) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(err)
    } else {
        Ok(trimmed.to_string())
    }
}

/// Trimmed username of sufficient length.
///
/// # Errors
///
/// Returns [`ValidationError::UsernameTooShort`].
pub fn username(value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.chars().count() < MIN_USERNAME_LEN {
        Err(ValidationError::UsernameTooShort)
    } else {
        Ok(trimmed.to_string())
    }
}

/// Password of sufficient length; not trimmed.
///
/// # Errors
///
/// Returns [`ValidationError::PasswordTooShort`].
pub fn password(value: &str) -> Result<(), ValidationError> {
    if value.chars().count() < MIN_PASSWORD_LEN {
        Err(ValidationError::PasswordTooShort)
    } else {
        Ok(())
    }
}

/// Trimmed email containing `@`.
///
/// # Errors
///
/// Returns [`ValidationError::EmailInvalid`].
pub fn email(value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.contains('@') {
        Ok(trimmed.to_string())
    } else {
        Err(ValidationError::EmailInvalid)
    }
}
