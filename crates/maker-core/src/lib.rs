//! Core domain types for the orderbook client automation suite.
//!
//! This crate provides the types shared by the client, feed, listener and
//! quoting crates:
//! - `Price`, `Size`: precision-safe numeric types
//! - `Symbol`: a BASE-QUOTE trading pair
//! - `OrderSide`, `ClientOrderId`: order identity and direction
//! - `Order`: the order record as returned by the API

pub mod decimal;
pub mod error;
pub mod order;
pub mod symbol;

pub use decimal::{Price, Size, MAX_PRICE_DECIMALS, MAX_SIZE_DECIMALS};
pub use error::{CoreError, Result};
pub use order::{ClientOrderId, Order, OrderSide};
pub use symbol::Symbol;
