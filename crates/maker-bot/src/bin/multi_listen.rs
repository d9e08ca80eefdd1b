//! Multi-connection order-event listener.
//!
//! Holds several concurrent WebSocket connections to the order stream, each
//! reconnecting independently. Used to eyeball fan-out behavior and server
//! load with more than one subscriber on the same key.

use anyhow::{bail, Result};
use clap::Parser;
use tokio::sync::mpsc;
use tracing::info;

use maker_bot::config::API_KEY_ENV;
use maker_ws::{ListenerConfig, OrderEventListener};

/// Hold N concurrent order-event WebSocket connections
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// WebSocket URL of the order stream
    #[arg(long, default_value = "ws://127.0.0.1/api/v1/ws/orders")]
    url: String,

    /// Maker API key (falls back to ORDERBOOK_API_KEY)
    #[arg(long)]
    api_key: Option<String>,

    /// Number of concurrent connections
    #[arg(long, default_value_t = 5)]
    clients: u32,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    maker_telemetry::init_logging()?;

    let Some(api_key) = args
        .api_key
        .or_else(|| std::env::var(API_KEY_ENV).ok())
        .filter(|k| !k.is_empty())
    else {
        bail!("no API key: pass --api-key or set {API_KEY_ENV}");
    };

    info!(url = %args.url, clients = args.clients, "Starting listeners");

    let mut tasks = Vec::with_capacity(args.clients as usize);

    for client_id in 0..args.clients {
        let config = ListenerConfig {
            url: args.url.clone(),
            api_key: api_key.clone(),
            ..Default::default()
        };

        tasks.push(tokio::spawn(async move {
            let (event_tx, mut event_rx) = mpsc::channel(100);
            let listener = OrderEventListener::new(config, event_tx);

            let counter = tokio::spawn(async move {
                while event_rx.recv().await.is_some() {
                    info!(client_id, "Received message");
                }
            });

            if let Err(e) = listener.run().await {
                info!(client_id, ?e, "Listener stopped");
            }
            drop(listener);
            let _ = counter.await;
        }));
    }

    tokio::signal::ctrl_c().await?;
    info!("Interrupt received, shutting down");

    for task in tasks {
        task.abort();
    }

    Ok(())
}
