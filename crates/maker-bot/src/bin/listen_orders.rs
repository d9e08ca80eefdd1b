//! Order-event listener for manual inspection.
//!
//! Connects to the order stream and prints every event the server pushes
//! for the authenticated user. Reconnects until interrupted.

use anyhow::{bail, Result};
use clap::Parser;
use tokio::sync::mpsc;
use tracing::info;

use maker_bot::config::API_KEY_ENV;
use maker_ws::{ListenerConfig, OrderEvent, OrderEventListener};

/// Print live order events from the orderbook WebSocket
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// WebSocket URL of the order stream
    #[arg(long, default_value = "ws://localhost/api/v1/ws/orders")]
    url: String,

    /// Maker API key (falls back to ORDERBOOK_API_KEY)
    #[arg(long)]
    api_key: Option<String>,
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

    info!(url = %args.url, "Listening for order events");

    let (event_tx, mut event_rx) = mpsc::channel(100);
    let listener = OrderEventListener::new(
        ListenerConfig {
            url: args.url,
            api_key,
            ..Default::default()
        },
        event_tx,
    );

    let printer = tokio::spawn(async move {
        while let Some(event) = event_rx.recv().await {
            match event {
                OrderEvent::Order(order) => info!(
                    order_id = %order.order_id,
                    symbol = %order.symbol,
                    side = %order.side,
                    price = %order.price,
                    filled = %order.size_filled,
                    cancelled = order.cancelled,
                    "Order event"
                ),
                OrderEvent::Raw(text) => info!(%text, "Unparsed event"),
            }
        }
    });

    tokio::select! {
        result = listener.run() => result?,
        _ = tokio::signal::ctrl_c() => {
            info!("Interrupt received, shutting down");
            listener.shutdown();
        }
    }

    // Dropping the listener closes the event channel, letting the printer
    // drain and finish.
    drop(listener);
    printer.await?;

    Ok(())
}
