//! Application error types.

use thiserror::Error;

/// Application-level errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Client(#[from] maker_client::ApiError),

    #[error(transparent)]
    Feed(#[from] maker_feed::FeedError),

    #[error(transparent)]
    Quoter(#[from] maker_quoter::QuoterError),
}

/// Result type alias for application operations.
pub type AppResult<T> = std::result::Result<T, AppError>;
