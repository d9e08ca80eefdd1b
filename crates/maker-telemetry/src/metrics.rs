//! Prometheus metrics for the quoting loop.
//!
//! # Panics
//!
//! Metric registration uses `unwrap()` intentionally. A registration
//! failure means duplicate metric names, a fatal configuration error that
//! should crash at startup, not at runtime.

use once_cell::sync::Lazy;
use prometheus::{register_counter, register_counter_vec, Counter, CounterVec, TextEncoder};

use crate::error::TelemetryResult;

/// Total requote cycles started (including skipped ones).
pub static QUOTE_CYCLES_TOTAL: Lazy<Counter> = Lazy::new(|| {
    register_counter!("maker_quote_cycles_total", "Total requote cycles started").unwrap()
});

/// Ladder orders placed, by side.
pub static ORDERS_PLACED_TOTAL: Lazy<CounterVec> = Lazy::new(|| {
    register_counter_vec!(
        "maker_orders_placed_total",
        "Ladder orders placed successfully",
        &["side"]
    )
    .unwrap()
});

/// Ladder orders that failed to place.
pub static ORDER_FAILURES_TOTAL: Lazy<Counter> = Lazy::new(|| {
    register_counter!(
        "maker_order_failures_total",
        "Ladder orders that failed to place"
    )
    .unwrap()
});

/// Cancel-all calls that completed (empty book counts as completed).
pub static CANCEL_ALL_TOTAL: Lazy<Counter> = Lazy::new(|| {
    register_counter!("maker_cancel_all_total", "Completed cancel-all calls").unwrap()
});

/// Ticker fetches that failed and skipped a cycle.
pub static FEED_ERRORS_TOTAL: Lazy<Counter> = Lazy::new(|| {
    register_counter!("maker_feed_errors_total", "Failed ticker fetches").unwrap()
});

/// Render all registered metrics in the Prometheus text format.
pub fn render_metrics() -> TelemetryResult<String> {
    let encoder = TextEncoder::new();
    Ok(encoder.encode_to_string(&prometheus::gather())?)
}
