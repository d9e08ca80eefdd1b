//! Reconnecting order-event listener.

use futures_util::{SinkExt, StreamExt};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio_tungstenite::tungstenite::client::IntoClientRequest;
use tokio_tungstenite::tungstenite::http::HeaderValue;
use tokio_tungstenite::{connect_async, tungstenite::Message};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::error::{WsError, WsResult};
use crate::event::OrderEvent;

/// Header carrying the bearer API key, as on the REST surface.
const API_KEY_HEADER: &str = "X-API-KEY";

/// Listener configuration.
#[derive(Debug, Clone)]
pub struct ListenerConfig {
    /// WebSocket URL (e.g. "wss://host/api/v1/ws/orders").
    pub url: String,
    /// Maker API key.
    pub api_key: String,
    /// Maximum reconnection attempts (0 = retry forever).
    pub max_reconnect_attempts: u32,
    /// Base delay for exponential backoff.
    pub reconnect_base_delay_ms: u64,
    /// Maximum delay for exponential backoff.
    pub reconnect_max_delay_ms: u64,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            api_key: String::new(),
            max_reconnect_attempts: 0,
            reconnect_base_delay_ms: 1000,
            reconnect_max_delay_ms: 60000,
        }
    }
}

/// Listens to the order-event stream and forwards events into a channel.
///
/// The server authenticates the connection by API key and scopes the stream
/// to that user, so there is no subscription handshake: connect, read,
/// forward. Lost connections are retried with exponential backoff.
pub struct OrderEventListener {
    config: ListenerConfig,
    event_tx: mpsc::Sender<OrderEvent>,
    shutdown_token: CancellationToken,
}

impl OrderEventListener {
    /// Create a new listener forwarding events to `event_tx`.
    pub fn new(config: ListenerConfig, event_tx: mpsc::Sender<OrderEvent>) -> Self {
        Self {
            config,
            event_tx,
            shutdown_token: CancellationToken::new(),
        }
    }

    /// Token that stops the listener when cancelled.
    pub fn shutdown_token(&self) -> CancellationToken {
        self.shutdown_token.clone()
    }

    /// Signal graceful shutdown.
    pub fn shutdown(&self) {
        info!("Listener shutdown requested");
        self.shutdown_token.cancel();
    }

    /// Connect and forward events, reconnecting until shutdown or the
    /// attempt limit is reached.
    pub async fn run(&self) -> WsResult<()> {
        let mut attempt = 0u32;

        loop {
            if self.shutdown_token.is_cancelled() {
                info!("Shutdown requested, exiting listener loop");
                return Ok(());
            }

            match self.listen_once().await {
                Ok(()) => {
                    info!("Order stream closed");
                }
                Err(e) => {
                    warn!(?e, "Order stream error");
                }
            }

            if self.shutdown_token.is_cancelled() {
                return Ok(());
            }

            attempt += 1;
            if self.config.max_reconnect_attempts > 0
                && attempt >= self.config.max_reconnect_attempts
            {
                return Err(WsError::ConnectionFailed(
                    "Max reconnection attempts reached".to_string(),
                ));
            }

            let delay = self.backoff_delay(attempt);
            warn!(attempt, delay_ms = delay.as_millis(), "Reconnecting");

            tokio::select! {
                () = tokio::time::sleep(delay) => {}
                () = self.shutdown_token.cancelled() => {
                    info!("Shutdown requested during backoff, exiting");
                    return Ok(());
                }
            }
        }
    }

    /// One connection lifetime: connect, read until the stream ends.
    async fn listen_once(&self) -> WsResult<()> {
        info!(url = %self.config.url, "Connecting to order stream");

        let mut request = self.config.url.as_str().into_client_request()?;
        let bearer = HeaderValue::from_str(&format!("Bearer {}", self.config.api_key))
            .map_err(|e| WsError::InvalidConfig(format!("API key not header-safe: {e}")))?;
        request.headers_mut().insert(API_KEY_HEADER, bearer);

        let (mut ws, _response) = connect_async(request).await?;
        info!("Order stream connected");

        loop {
            tokio::select! {
                () = self.shutdown_token.cancelled() => {
                    info!("Shutdown signal received, closing order stream");
                    if let Err(e) = ws.send(Message::Close(None)).await {
                        warn!(?e, "Failed to send Close frame during shutdown");
                    }
                    return Ok(());
                }

                msg = ws.next() => {
                    match msg {
                        Some(Ok(Message::Text(text))) => {
                            let event = OrderEvent::from_text(&text);
                            if self.event_tx.send(event).await.is_err() {
                                warn!("Event receiver dropped, closing order stream");
                                return Ok(());
                            }
                        }
                        Some(Ok(Message::Ping(data))) => {
                            debug!("Received ping, sending pong");
                            ws.send(Message::Pong(data)).await?;
                        }
                        Some(Ok(Message::Close(frame))) => {
                            let (code, reason) = frame
                                .map(|f| (f.code.into(), f.reason.to_string()))
                                .unwrap_or((1000, "Normal close".to_string()));
                            warn!(code, %reason, "Order stream closed by server");
                            return Err(WsError::ConnectionClosed { code, reason });
                        }
                        Some(Err(e)) => {
                            return Err(e.into());
                        }
                        None => {
                            warn!("Order stream ended");
                            return Ok(());
                        }
                        _ => {}
                    }
                }
            }
        }
    }

    /// Exponential backoff: base * 2^(attempt-1), capped, plus 0-1000ms of
    /// jitter so a fleet of listeners does not reconnect in lockstep.
    fn backoff_delay(&self, attempt: u32) -> Duration {
        let base = self.config.reconnect_base_delay_ms;
        let max = self.config.reconnect_max_delay_ms;

        let exponent = attempt.saturating_sub(1).min(10);
        let delay = base.saturating_mul(1u64 << exponent).min(max);

        Duration::from_millis(delay + subsec_jitter())
    }
}

/// Jitter (0-1000ms) derived from the clock's sub-second noise.
fn subsec_jitter() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(0);
    (nanos % 1000) as u64
}
