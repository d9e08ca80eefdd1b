//! Error types for maker-feed.

use thiserror::Error;

/// Feed error types.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Ticker endpoint answered {status}")]
    Status { status: u16 },

    #[error("Failed to decode ticker response: {0}")]
    Decode(String),
}

/// Result type alias for feed operations.
pub type FeedResult<T> = std::result::Result<T, FeedError>;
