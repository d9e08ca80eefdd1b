//! Request and response payloads for the orderbook API.
//!
//! Field names follow the wire format exactly (camelCase, decimal values as
//! strings). Price/size strings are handled by the `Price`/`Size` serde
//! implementations.

use maker_core::{ClientOrderId, Order, OrderSide, Price, Size, Symbol};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum number of orders the API accepts in one batch call.
pub const MAX_BATCH_ORDERS: usize = 10;

/// Opaque order-signing material produced by the external signing SDK.
///
/// The API forwards both fields to on-chain settlement; this client never
/// inspects them. Deployments authenticated by API key alone (mock/dev
/// environments) omit them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderSignature {
    pub sig: String,
    pub message: serde_json::Value,
}

/// A new order to submit.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub symbol: Symbol,
    pub side: OrderSide,
    pub price: Price,
    pub size: Size,
    pub client_order_id: ClientOrderId,
}

impl NewOrder {
    /// Validate price and size against the API's order constraints.
    pub fn validate(&self) -> maker_core::Result<()> {
        self.price.validate()?;
        self.size.validate()?;
        Ok(())
    }
}

/// One entry of a batch submission. The symbol is carried once at the top
/// level of the batch request.
#[derive(Debug, Clone)]
pub struct BatchOrder {
    pub side: OrderSide,
    pub price: Price,
    pub size: Size,
    pub client_order_id: ClientOrderId,
    pub signature: Option<OrderSignature>,
}

/// Wire body of `POST /api/v1/order`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateOrderBody {
    pub price: Price,
    pub size: Size,
    pub symbol: Symbol,
    pub side: OrderSide,
    pub client_order_id: ClientOrderId,
    #[serde(rename = "eip712Sig", skip_serializing_if = "Option::is_none")]
    pub eip712_sig: Option<String>,
    #[serde(rename = "eip712Msg", skip_serializing_if = "Option::is_none")]
    pub eip712_msg: Option<serde_json::Value>,
}

/// One order entry inside the `POST /api/v1/orders` body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BatchOrderEntry {
    pub price: Price,
    pub size: Size,
    pub side: OrderSide,
    pub client_order_id: ClientOrderId,
    #[serde(rename = "eip712Sig", skip_serializing_if = "Option::is_none")]
    pub eip712_sig: Option<String>,
    #[serde(rename = "eip712Msg", skip_serializing_if = "Option::is_none")]
    pub eip712_msg: Option<serde_json::Value>,
}

/// Wire body of `POST /api/v1/orders`.
#[derive(Debug, Serialize)]
pub(crate) struct CreateOrdersBody {
    pub symbol: Symbol,
    pub orders: Vec<BatchOrderEntry>,
}

/// Response of `POST /api/v1/order`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderResponse {
    pub order_id: Uuid,
}

/// Response of `POST /api/v1/orders`.
///
/// `created` holds the orders placed before any failure; on partial failure
/// `status`/`msg` describe the first rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrdersResponse {
    pub symbol: Symbol,
    pub created: Vec<Order>,
    pub status: u16,
    pub msg: String,
}

/// Response of `DELETE /api/v1/order/{orderId}` and the client-order variant.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelOrderResponse {
    pub order_id: Uuid,
}

/// Response of `DELETE /api/v1/orders` (cancel all).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelAllResponse {
    /// Empty when no symbol filter was given.
    #[serde(default)]
    pub symbol: String,
    pub cancelled_order_ids: Vec<Uuid>,
}

/// One entry of `GET /api/v1/symbols`.
#[derive(Debug, Clone, Deserialize)]
pub struct SymbolInfo {
    pub symbol: Symbol,
    #[serde(default)]
    pub name: String,
}

/// Paginated response of `GET /api/v1/orders`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenOrdersPage {
    pub data: Vec<Order>,
    pub page: u32,
    pub page_size: u32,
    pub total: u32,
    pub total_pages: u32,
}

/// Aggregated book depth for one symbol.
///
/// Asks and bids are `[price, size]` pairs, best price first.
#[derive(Debug, Clone, Deserialize)]
pub struct MarketDepth {
    pub asks: Vec<(Price, Size)>,
    pub bids: Vec<(Price, Size)>,
    pub symbol: String,
    pub time: i64,
}

/// Envelope of `GET /api/v1/orderbook/{symbol}`.
#[derive(Debug, Deserialize)]
pub(crate) struct MarketDepthEnvelope {
    #[allow(dead_code)]
    pub code: String,
    pub data: MarketDepth,
}

/// Envelope of `GET /api/v1/supported-tokens`.
#[derive(Debug, Deserialize)]
pub(crate) struct SupportedTokensEnvelope {
    pub tokens: serde_json::Value,
}

/// Body of `POST /taker/v1/quote`.
///
/// Amounts are integer strings in token decimals, matching what the taker
/// side sends on-chain.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    pub in_amount: String,
    pub in_token: String,
    pub out_token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_out_amount: Option<String>,
}

/// Response of `POST /taker/v1/quote`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    pub in_amount: String,
    #[serde(default)]
    pub in_token: String,
    pub out_amount: String,
    #[serde(default)]
    pub out_token: String,
    /// Empty for plain quotes; set when the quote opened a swap.
    #[serde(default)]
    pub swap_id: String,
}
