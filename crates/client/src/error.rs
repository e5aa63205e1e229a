//! API error taxonomy.

use thiserror::Error;

/// Failure talking to the backend, classified the way the screens react
/// to it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response (DNS, refused, timed out).
    /// Timeouts are deliberately indistinguishable from other network
    /// failures.
    #[error("network error: {0}")]
    Network(String),

    /// 401: missing, invalid, or expired credential.
    #[error("authentication failed: {message}")]
    Auth { message: String },

    /// Any other 4xx carrying a backend message (field validation,
    /// malformed request).
    #[error("request rejected ({status}): {message}")]
    Validation { status: u16, message: String },

    /// 5xx from the backend.
    #[error("server error ({status})")]
    Server { status: u16 },

    /// The body did not match the expected shape.
    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn is_auth(&self) -> bool {
        matches!(self, ApiError::Auth { .. })
    }

    /// Classify a non-success HTTP status, keeping the backend's message
    /// when one was decodable.
    pub(crate) fn from_http(status: u16, message: Option<String>) -> Self {
        match status {
            401 => ApiError::Auth {
                message: message.unwrap_or_else(|| "invalid credential".to_string()),
            },
            400..=499 => ApiError::Validation {
                status,
                message: message.unwrap_or_else(|| "request rejected".to_string()),
            },
            _ => ApiError::Server { status },
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}
