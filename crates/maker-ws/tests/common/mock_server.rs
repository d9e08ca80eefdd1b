//! Mock order-stream server for listener tests.
//!
//! Plays the orderbook's role on `/ws/orders`: accepts connections, records
//! the API-key header, pushes a scripted list of events, and optionally
//! drops the connection afterwards to exercise reconnection.

use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::{mpsc, Mutex};
use tokio_tungstenite::tungstenite::handshake::server::{Request, Response};
use tokio_tungstenite::{accept_hdr_async, tungstenite::Message};

use futures_util::{SinkExt, StreamExt};

/// Scripted behavior for each accepted connection.
#[derive(Clone)]
pub struct Script {
    /// Text frames pushed after the handshake.
    pub events: Vec<String>,
    /// Close the connection after pushing the events.
    pub close_after_send: bool,
}

pub struct MockOrderStream {
    addr: SocketAddr,
    shutdown_tx: mpsc::Sender<()>,
    connections: Arc<Mutex<u32>>,
    api_keys: Arc<Mutex<Vec<String>>>,
}

impl MockOrderStream {
    /// Start a server on an available port running `script` per connection.
    pub async fn start(script: Script) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let connections: Arc<Mutex<u32>> = Arc::new(Mutex::new(0));
        let api_keys: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
        let (shutdown_tx, mut shutdown_rx) = mpsc::channel::<()>(1);

        let connections_clone = connections.clone();
        let api_keys_clone = api_keys.clone();

        tokio::spawn(async move {
            loop {
                tokio::select! {
                    Ok((stream, _)) = listener.accept() => {
                        let connections = connections_clone.clone();
                        let api_keys = api_keys_clone.clone();
                        let script = script.clone();
                        tokio::spawn(handle_connection(stream, script, connections, api_keys));
                    }
                    _ = shutdown_rx.recv() => {
                        break;
                    }
                }
            }
        });

        Self {
            addr,
            shutdown_tx,
            connections,
            api_keys,
        }
    }

    /// The server's WebSocket URL.
    pub fn url(&self) -> String {
        format!("ws://{}", self.addr)
    }

    /// Number of connections accepted so far.
    pub async fn connection_count(&self) -> u32 {
        *self.connections.lock().await
    }

    /// API-key header values seen, one per connection.
    pub async fn seen_api_keys(&self) -> Vec<String> {
        self.api_keys.lock().await.clone()
    }

    /// Shut the server down.
    pub async fn shutdown(self) {
        let _ = self.shutdown_tx.send(()).await;
    }
}

async fn handle_connection(
    stream: TcpStream,
    script: Script,
    connections: Arc<Mutex<u32>>,
    api_keys: Arc<Mutex<Vec<String>>>,
) {
    {
        let mut count = connections.lock().await;
        *count += 1;
    }

    let api_keys_capture = api_keys.clone();
    let capture_header = move |req: &Request, resp: Response| {
        if let Some(value) = req.headers().get("X-API-KEY") {
            let value = value.to_str().unwrap_or_default().to_string();
            // Callback is synchronous; try_lock is safe here because nothing
            // else holds the lock during the handshake.
            if let Ok(mut keys) = api_keys_capture.try_lock() {
                keys.push(value);
            }
        }
        Ok(resp)
    };

    let ws_stream = match accept_hdr_async(stream, capture_header).await {
        Ok(ws) => ws,
        Err(e) => {
            eprintln!("WebSocket handshake failed: {e}");
            return;
        }
    };

    let (mut write, mut read) = ws_stream.split();

    for event in &script.events {
        if write.send(Message::Text(event.clone())).await.is_err() {
            return;
        }
    }

    if script.close_after_send {
        let _ = write.send(Message::Close(None)).await;
        return;
    }

    // Hold the connection open, answering pings, until the client leaves.
    while let Some(msg) = read.next().await {
        match msg {
            Ok(Message::Ping(data)) => {
                let _ = write.send(Message::Pong(data)).await;
            }
            Ok(Message::Close(_)) | Err(_) => break,
            _ => {}
        }
    }
}
