//! Market-making bot entry point.
//!
//! Polls the reference ticker and re-quotes a depth ladder on the orderbook
//! until interrupted.

use anyhow::Result;
use clap::Parser;
use tracing::{debug, info};

use maker_client::OrderbookClient;
use maker_feed::TickerClient;
use maker_quoter::Requoter;

/// Orderbook depth-ladder market maker
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Configuration file path (can also be set via MAKER_CONFIG env var)
    #[arg(short, long)]
    config: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    maker_telemetry::init_logging()?;

    info!("Starting maker-bot v{}", env!("CARGO_PKG_VERSION"));

    let config = maker_bot::AppConfig::load(args.config.as_deref())?;
    info!(
        base_url = %config.api.base_url,
        symbol = %config.quoter.symbol,
        ticker_url = %config.feed.ticker_url,
        "Configuration loaded"
    );

    let api_key = config.api.resolve_api_key()?;
    let client = OrderbookClient::new(&config.api.base_url, api_key)?;
    let ticker = TickerClient::new(&config.feed.ticker_url)?;
    let requoter = Requoter::new(client, ticker, config.quoter)?;

    tokio::select! {
        () = requoter.run() => {}
        _ = tokio::signal::ctrl_c() => {
            info!("Interrupt received, shutting down");
            requoter.shutdown();
        }
    }

    if let Ok(snapshot) = maker_telemetry::render_metrics() {
        debug!(%snapshot, "Final metrics");
    }

    info!("maker-bot stopped");
    Ok(())
}
