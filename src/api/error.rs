//! API Error Types
//!
//! Errors surfaced by the API client wrapper. Non-2xx responses are mapped
//! to a variant by status code, keeping the server's own message.

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when talking to the Hack or Snooze API
#[derive(Error, Debug)]
pub enum ApiError {
    /// Could not connect to the API host
    #[error("Hack or Snooze API unavailable")]
    Unavailable,

    /// Transport-level failure
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Request timeout")]
    Timeout,

    /// Bad credentials or a missing/expired token (401)
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Unknown user or story (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Any other non-success status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body did not match the expected shape
    #[error("Unexpected response: {0}")]
    Decode(String),

    /// The operation needs a logged-in user
    #[error("Not logged in")]
    NotLoggedIn,
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Error body returned by the API: `{"error": {"status", "title", "message"}}`
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl ApiError {
    /// Classify a reqwest failure
    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else if err.is_connect() {
            ApiError::Unavailable
        } else if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Request(err)
        }
    }

    /// Build an error from a non-success status and its response body
    pub(crate) fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorEnvelope>(body)
            .ok()
            .and_then(|envelope| envelope.error.message.or(envelope.error.title))
            .unwrap_or_else(|| body.trim().to_string());

        match status {
            401 => ApiError::Unauthorized(message),
            404 => ApiError::NotFound(message),
            _ => ApiError::Api { status, message },
        }
    }
}
