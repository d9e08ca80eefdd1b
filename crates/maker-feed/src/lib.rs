//! External price-ticker feed.
//!
//! The quoting loop prices its ladder off a public ticker endpoint (e.g.
//! Binance's `/api/v3/ticker/price?symbol=ETHUSDT`) rather than the
//! orderbook's own book, so an empty book can still be seeded with quotes.

pub mod error;
pub mod ticker;

pub use error::{FeedError, FeedResult};
pub use ticker::{Ticker, TickerClient};
