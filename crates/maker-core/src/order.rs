//! Order identity, direction, and the order record returned by the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::decimal::{Price, Size};
use crate::error::CoreError;
use crate::symbol::Symbol;

/// Order side: buy or sell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    Buy,
    Sell,
}

impl OrderSide {
    /// Returns the opposite side.
    pub fn opposite(&self) -> Self {
        match self {
            Self::Buy => Self::Sell,
            Self::Sell => Self::Buy,
        }
    }
}

impl fmt::Display for OrderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buy => write!(f, "buy"),
            Self::Sell => write!(f, "sell"),
        }
    }
}

/// Client-assigned order ID for idempotent submission.
///
/// The API requires a UUID here and rejects a resubmission with the same
/// value (409), so every freshly placed order gets a new random one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientOrderId(Uuid);

impl ClientOrderId {
    /// Generate a fresh random ID.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for ClientOrderId {
    fn default() -> Self {
        Self::random()
    }
}

impl fmt::Display for ClientOrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for ClientOrderId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl FromStr for ClientOrderId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// An order record as the API returns it.
///
/// `pendingSize` is the portion locked by an in-flight taker swap and
/// `filledSize` the portion already executed; both are zero for a fresh
/// resting order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_id: Uuid,
    pub client_order_id: ClientOrderId,
    pub user_id: Uuid,
    pub price: Price,
    pub symbol: Symbol,
    pub size: Size,
    #[serde(rename = "pendingSize")]
    pub size_pending: Size,
    #[serde(rename = "filledSize")]
    pub size_filled: Size,
    pub side: OrderSide,
    pub timestamp: DateTime<Utc>,
    pub cancelled: bool,
}

impl Order {
    /// Size still resting in the book: total minus filled and pending.
    pub fn remaining(&self) -> Size {
        self.size - self.size_filled - self.size_pending
    }

    /// Whether the order can still trade.
    pub fn is_open(&self) -> bool {
        !self.cancelled && self.remaining().is_positive()
    }
}
