//! API Error Types
//!
//! Error taxonomy for the hosted backend client.

use gloo_net::http::Response;
use serde::Deserialize;
use thiserror::Error;

/// Errors from the hosted backend client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never completed (offline, DNS, CORS).
    #[error("network error: {0}")]
    Network(String),

    /// The backend answered with a non-success status.
    #[error("backend returned {status}: {message}")]
    Backend { status: u16, message: String },

    /// The response body did not match the expected shape.
    #[error("response parse error: {0}")]
    Parse(String),

    /// No session token is stored.
    #[error("no active session")]
    Unauthenticated,
}

/// Error envelope the hosted service wraps failures in.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default, alias = "msg", alias = "message")]
    error: String,
}

impl ApiError {
    /// Build a `Backend` error from a non-success response, preferring the
    /// JSON error envelope when one is present.
    pub async fn from_response(response: &Response) -> Self {
        let body: ErrorBody = response.json().await.unwrap_or_default();
        let message = if body.error.is_empty() {
            response.status_text()
        } else {
            body.error
        };
        ApiError::Backend {
            status: response.status(),
            message,
        }
    }
}

/// Result type for backend calls
pub type ApiResult<T> = Result<T, ApiError>;
