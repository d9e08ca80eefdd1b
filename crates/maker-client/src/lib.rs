//! Typed REST client for the orderbook API.
//!
//! Covers the maker surface (order lifecycle, batch submission, open orders,
//! symbols, market depth, supported tokens) and the taker quote endpoint.
//! All requests authenticate with a bearer API key; order signing happens in
//! an external SDK and is carried here as opaque material only.

pub mod client;
pub mod error;
pub mod types;

pub use client::OrderbookClient;
pub use error::{ApiError, ClientResult};
pub use types::{
    BatchOrder, CancelAllResponse, CancelOrderResponse, CreateOrderResponse,
    CreateOrdersResponse, MarketDepth, NewOrder, OpenOrdersPage, OrderSignature, QuoteRequest,
    QuoteResponse, SymbolInfo, MAX_BATCH_ORDERS,
};
