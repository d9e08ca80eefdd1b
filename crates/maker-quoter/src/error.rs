//! Error types for maker-quoter.

use thiserror::Error;

/// Quoter error types.
#[derive(Debug, Error)]
pub enum QuoterError {
    #[error("Invalid quoter config: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Client(#[from] maker_client::ApiError),

    #[error(transparent)]
    Feed(#[from] maker_feed::FeedError),
}

/// Result type alias for quoter operations.
pub type QuoterResult<T> = std::result::Result<T, QuoterError>;
