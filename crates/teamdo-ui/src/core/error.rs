//! Transport error taxonomy.
//!
//! # Design
//! - One variant per recovery path: auth failures redirect, the rest notify.
//! - Keep server-provided reasons so notices can append them.

use thiserror::Error;

/// Failure of a single API call.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The server rejected the credential (HTTP 401).
    #[error("unauthorized")]
    Unauthorized,
    /// Any other non-2xx status.
    #[error("request failed with status {status}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Reason taken from the `{"error": ...}` body when present.
        message: Option<String>,
    },
    /// The request never produced a response.
    #[error("network request failed: {detail}")]
    Network {
        /// Transport error detail.
        detail: String,
    },
    /// The response body did not have the expected shape.
    #[error("malformed response: {detail}")]
    Malformed {
        /// Decoding error detail.
        detail: String,
    },
}

impl ApiError {
    /// Classify a non-2xx status.
    #[must_use]
    pub fn from_status(status: u16, message: Option<String>) -> Self {
        if status == 401 {
            Self::Unauthorized
        } else {
            Self::Status { status, message }
        }
    }

    /// Whether the credential must be dropped.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }

    /// Server-provided reason, if any.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status {
                message: Some(message),
                ..
            } => Some(message.as_str()),
            _ => None,
        }
    }
}

/// Convenience alias for API results.
pub type ApiResult<T> = Result<T, ApiError>;
