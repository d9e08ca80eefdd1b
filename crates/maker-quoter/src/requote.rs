//! The requote loop.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use maker_client::{NewOrder, OrderbookClient};
use maker_core::{ClientOrderId, Price, Symbol};
use maker_feed::TickerClient;
use maker_telemetry::metrics;

use crate::error::QuoterResult;
use crate::ladder::{build_ladder, LadderConfig};

/// Quoter configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoterConfig {
    /// Symbol to quote on the orderbook.
    pub symbol: Symbol,
    /// Seconds between requote cycles.
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
    /// Ladder shape.
    #[serde(default)]
    pub ladder: LadderConfig,
}

fn default_interval_secs() -> u64 {
    10
}

impl QuoterConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}

/// Outcome of one requote cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CycleReport {
    /// Reference price the ladder was built from; `None` when the tick was
    /// skipped because the feed failed.
    pub reference: Option<Price>,
    /// Orders cancelled by the leading cancel-all.
    pub cancelled: usize,
    /// Ladder levels placed successfully.
    pub placed: usize,
    /// Ladder levels that failed to place.
    pub failed: usize,
}

impl CycleReport {
    fn skipped() -> Self {
        Self::default()
    }
}

/// The market-making loop: poll the ticker, wipe the book, relay the ladder.
///
/// Per-order failures are logged and the cycle moves on; a stale or missing
/// level is corrected by the next cycle anyway. Only a failed cancel-all
/// aborts a cycle, since quoting on top of unknown resting orders would
/// double the exposure.
pub struct Requoter {
    client: OrderbookClient,
    ticker: TickerClient,
    config: QuoterConfig,
    shutdown_token: CancellationToken,
}

impl Requoter {
    /// Create a new requoter. Fails if the ladder configuration is invalid.
    pub fn new(
        client: OrderbookClient,
        ticker: TickerClient,
        config: QuoterConfig,
    ) -> QuoterResult<Self> {
        config.ladder.validate()?;

        Ok(Self {
            client,
            ticker,
            config,
            shutdown_token: CancellationToken::new(),
        })
    }

    /// Token that stops the loop when cancelled.
    pub fn shutdown_token(&self) -> CancellationToken {
        self.shutdown_token.clone()
    }

    /// Signal graceful shutdown.
    pub fn shutdown(&self) {
        info!("Requoter shutdown requested");
        self.shutdown_token.cancel();
    }

    /// Run requote cycles until shutdown.
    pub async fn run(&self) {
        info!(
            symbol = %self.config.symbol,
            depth = self.config.ladder.depth,
            interval_secs = self.config.interval_secs,
            "Starting requote loop"
        );

        loop {
            if self.shutdown_token.is_cancelled() {
                info!("Shutdown requested, exiting requote loop");
                return;
            }

            let report = self.run_once().await;
            info!(
                reference = ?report.reference.map(|p| p.to_string()),
                cancelled = report.cancelled,
                placed = report.placed,
                failed = report.failed,
                "Requote cycle complete"
            );

            tokio::select! {
                () = tokio::time::sleep(self.config.interval()) => {}
                () = self.shutdown_token.cancelled() => {
                    info!("Shutdown requested during sleep, exiting requote loop");
                    return;
                }
            }
        }
    }

    /// One requote cycle: tick, cancel-all, place the ladder.
    pub async fn run_once(&self) -> CycleReport {
        metrics::QUOTE_CYCLES_TOTAL.inc();

        let ticker = match self.ticker.fetch().await {
            Ok(ticker) => ticker,
            Err(e) => {
                warn!(?e, "Ticker fetch failed, skipping cycle");
                metrics::FEED_ERRORS_TOTAL.inc();
                return CycleReport::skipped();
            }
        };

        self.requote(ticker.price).await
    }

    async fn requote(&self, reference: Price) -> CycleReport {
        let mut report = CycleReport {
            reference: Some(reference),
            ..Default::default()
        };

        match self.client.cancel_all_orders(Some(&self.config.symbol)).await {
            Ok(res) => {
                debug!(count = res.cancelled_order_ids.len(), "Cancelled resting orders");
                metrics::CANCEL_ALL_TOTAL.inc();
                report.cancelled = res.cancelled_order_ids.len();
            }
            Err(e) if e.is_not_found() => {
                debug!("No resting orders to cancel");
                metrics::CANCEL_ALL_TOTAL.inc();
            }
            Err(e) => {
                warn!(?e, "Cancel-all failed, skipping placement this cycle");
                return report;
            }
        }

        let ladder = build_ladder(reference, &self.config.ladder);

        for level in ladder.levels() {
            let order = NewOrder {
                symbol: self.config.symbol.clone(),
                side: level.side,
                price: level.price,
                size: level.size,
                client_order_id: ClientOrderId::random(),
            };

            match self.client.create_order(&order, None).await {
                Ok(res) => {
                    debug!(
                        order_id = %res.order_id,
                        side = %level.side,
                        price = %level.price,
                        size = %level.size,
                        "Placed ladder level"
                    );
                    let side = level.side.to_string();
                    metrics::ORDERS_PLACED_TOTAL
                        .with_label_values(&[side.as_str()])
                        .inc();
                    report.placed += 1;
                }
                Err(e) => {
                    warn!(
                        ?e,
                        side = %level.side,
                        price = %level.price,
                        "Failed to place ladder level"
                    );
                    metrics::ORDER_FAILURES_TOTAL.inc();
                    report.failed += 1;
                }
            }
        }

        report
    }
}
