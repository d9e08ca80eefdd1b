//! Error types for maker-client.

use thiserror::Error;

/// Client error types.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure (connect, timeout, TLS).
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    ///
    /// `status` is the HTTP status code and `message` the `msg` field of the
    /// error body (or the raw body when it is not the usual JSON shape).
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// The response body did not match the expected shape.
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// Order failed client-side validation before any request was sent.
    #[error(transparent)]
    InvalidOrder(#[from] maker_core::CoreError),

    /// Batch submission rejected client-side.
    #[error("Invalid batch: {0}")]
    InvalidBatch(String),
}

impl ApiError {
    /// HTTP status of an API-level error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True for a 404 response (unknown or already-cancelled order, empty
    /// cancel-all).
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// True for a 409 response (clashing clientOrderId).
    pub fn is_conflict(&self) -> bool {
        self.status() == Some(409)
    }
}

/// Result type alias for client operations.
pub type ClientResult<T> = std::result::Result<T, ApiError>;
