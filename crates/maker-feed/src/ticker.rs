//! Ticker price client.

use maker_core::Price;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use crate::error::{FeedError, FeedResult};

/// Default timeout for ticker requests. A slow tick is worth less than a
/// fresh one next cycle.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// A single ticker observation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Ticker {
    pub symbol: String,
    pub price: Price,
}

/// Client polling an external ticker endpoint.
///
/// The endpoint is expected to answer `{"symbol": "...", "price": "..."}`
/// with the price as a decimal string.
#[derive(Debug, Clone)]
pub struct TickerClient {
    client: reqwest::Client,
    url: String,
}

impl TickerClient {
    /// Create a new ticker client for a fully-formed URL (query string
    /// included, e.g. `...?symbol=ETHUSDT`).
    pub fn new(url: impl Into<String>) -> FeedResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    /// Ticker endpoint URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch the current ticker.
    pub async fn fetch(&self) -> FeedResult<Ticker> {
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status {
                status: status.as_u16(),
            });
        }

        let ticker: Ticker = response
            .json()
            .await
            .map_err(|e| FeedError::Decode(e.to_string()))?;

        debug!(symbol = %ticker.symbol, price = %ticker.price, "Ticker fetched");
        Ok(ticker)
    }
}
