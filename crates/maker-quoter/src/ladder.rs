//! Ladder price/size calculation.
//!
//! Ask level i sits at `reference * ask_factor^(i+1)`, bid level i at
//! `reference * bid_factor^(i+1)`, so levels fan out geometrically from the
//! reference price. Sizes grow linearly: level i carries `(i+1) * size_step`.

use maker_core::{OrderSide, Price, Size};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::QuoterError;

/// Ladder shape configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LadderConfig {
    /// Number of levels per side.
    #[serde(default = "default_depth")]
    pub depth: u32,
    /// Per-level multiplier above the reference for asks. Must be > 1.
    #[serde(default = "default_ask_factor")]
    pub ask_factor: Decimal,
    /// Per-level multiplier below the reference for bids. Must be in (0, 1).
    #[serde(default = "default_bid_factor")]
    pub bid_factor: Decimal,
    /// Size of the first level; level i carries `(i+1) * size_step`.
    #[serde(default = "default_size_step")]
    pub size_step: Decimal,
}

fn default_depth() -> u32 {
    5
}

fn default_ask_factor() -> Decimal {
    dec!(1.001)
}

fn default_bid_factor() -> Decimal {
    dec!(0.999)
}

fn default_size_step() -> Decimal {
    dec!(10)
}

impl Default for LadderConfig {
    fn default() -> Self {
        Self {
            depth: default_depth(),
            ask_factor: default_ask_factor(),
            bid_factor: default_bid_factor(),
            size_step: default_size_step(),
        }
    }
}

impl LadderConfig {
    /// Validate the ladder shape.
    pub fn validate(&self) -> Result<(), QuoterError> {
        if self.depth == 0 {
            return Err(QuoterError::InvalidConfig("depth must be >= 1".to_string()));
        }
        if self.ask_factor <= Decimal::ONE {
            return Err(QuoterError::InvalidConfig(format!(
                "ask_factor must be > 1, got {}",
                self.ask_factor
            )));
        }
        if self.bid_factor <= Decimal::ZERO || self.bid_factor >= Decimal::ONE {
            return Err(QuoterError::InvalidConfig(format!(
                "bid_factor must be in (0, 1), got {}",
                self.bid_factor
            )));
        }
        if self.size_step <= Decimal::ZERO {
            return Err(QuoterError::InvalidConfig(format!(
                "size_step must be positive, got {}",
                self.size_step
            )));
        }
        Ok(())
    }
}

/// One quote level of the ladder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LadderLevel {
    pub side: OrderSide,
    pub price: Price,
    pub size: Size,
    /// Level index (0 = tightest).
    pub level: u32,
}

/// Computed ladder for both sides of the book.
#[derive(Debug, Clone)]
pub struct Ladder {
    /// Bid levels, tightest first (prices descending).
    pub bids: Vec<LadderLevel>,
    /// Ask levels, tightest first (prices ascending).
    pub asks: Vec<LadderLevel>,
}

impl Ladder {
    /// All levels, asks first, in placement order.
    pub fn levels(&self) -> impl Iterator<Item = &LadderLevel> {
        self.asks.iter().chain(self.bids.iter())
    }

    /// Total number of levels across both sides.
    pub fn len(&self) -> usize {
        self.asks.len() + self.bids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.asks.is_empty() && self.bids.is_empty()
    }
}

/// Build the ladder around a reference price.
///
/// Prices are normalized to the API's price precision, sizes to the size
/// precision, so every level passes order validation as-is.
pub fn build_ladder(reference: Price, config: &LadderConfig) -> Ladder {
    let mut asks = Vec::with_capacity(config.depth as usize);
    let mut bids = Vec::with_capacity(config.depth as usize);

    let mut ask_price = reference.inner();
    let mut bid_price = reference.inner();

    for level in 0..config.depth {
        let size = Size::new(config.size_step * Decimal::from(level + 1)).normalize();

        ask_price *= config.ask_factor;
        asks.push(LadderLevel {
            side: OrderSide::Sell,
            price: Price::new(ask_price).normalize(),
            size,
            level,
        });

        bid_price *= config.bid_factor;
        bids.push(LadderLevel {
            side: OrderSide::Buy,
            price: Price::new(bid_price).normalize(),
            size,
            level,
        });
    }

    Ladder { bids, asks }
}
