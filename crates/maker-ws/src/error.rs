//! Error types for maker-ws.

use thiserror::Error;

/// WebSocket listener error types.
#[derive(Debug, Error)]
pub enum WsError {
    #[error("WebSocket error: {0}")]
    WebSocket(#[from] tokio_tungstenite::tungstenite::Error),

    #[error("Connection closed: code={code}, reason={reason}")]
    ConnectionClosed { code: u16, reason: String },

    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Invalid listener config: {0}")]
    InvalidConfig(String),
}

/// Result type alias for listener operations.
pub type WsResult<T> = std::result::Result<T, WsError>;
