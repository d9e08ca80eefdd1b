//! HTTP client for the orderbook REST API.

use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;
use uuid::Uuid;

use maker_core::{ClientOrderId, Order, Symbol};

use crate::error::{ApiError, ClientResult};
use crate::types::{
    BatchOrder, BatchOrderEntry, CancelAllResponse, CancelOrderResponse, CreateOrderBody,
    CreateOrderResponse, CreateOrdersBody, CreateOrdersResponse, MarketDepth, MarketDepthEnvelope,
    NewOrder, OpenOrdersPage, OrderSignature, QuoteRequest, QuoteResponse, SupportedTokensEnvelope,
    SymbolInfo, MAX_BATCH_ORDERS,
};

/// Default timeout for API requests.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Header carrying the bearer API key.
const API_KEY_HEADER: &str = "X-API-KEY";

/// Error body the API returns on non-success statuses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[allow(dead_code)]
    status: u16,
    msg: String,
}

/// Client for the orderbook maker and taker REST surface.
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct OrderbookClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl OrderbookClient {
    /// Create a new client.
    ///
    /// # Arguments
    /// * `base_url` - Root of the deployment (e.g. "https://orderbook.example.com").
    /// * `api_key` - Maker API key; sent as `X-API-KEY: Bearer <key>`.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> ClientResult<Self> {
        let client = Client::builder().timeout(DEFAULT_TIMEOUT).build()?;
        let base_url: String = base_url.into();

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    /// Deployment root this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn maker_url(&self, path: &str) -> String {
        format!("{}/api/v1/{path}", self.base_url)
    }

    fn taker_url(&self, path: &str) -> String {
        format!("{}/taker/v1/{path}", self.base_url)
    }

    fn authed(&self, builder: RequestBuilder) -> RequestBuilder {
        builder.header(API_KEY_HEADER, format!("Bearer {}", self.api_key))
    }

    /// Decode a success body, or map a non-success status to `ApiError::Api`
    /// using the `{status, msg}` error shape.
    async fn decode<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
        let status = response.status();
        if status.is_success() {
            return response
                .json::<T>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()));
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .map(|e| e.msg)
            .unwrap_or(body);

        Err(ApiError::Api {
            status: status.as_u16(),
            message,
        })
    }

    /// Place a single limit order.
    ///
    /// Fails with `ApiError::Api { status: 409, .. }` when the clientOrderId
    /// clashes with an existing order.
    pub async fn create_order(
        &self,
        order: &NewOrder,
        signature: Option<&OrderSignature>,
    ) -> ClientResult<CreateOrderResponse> {
        order.validate()?;

        debug!(
            symbol = %order.symbol,
            side = %order.side,
            price = %order.price,
            size = %order.size,
            client_order_id = %order.client_order_id,
            "Creating order"
        );

        let body = CreateOrderBody {
            price: order.price,
            size: order.size,
            symbol: order.symbol.clone(),
            side: order.side,
            client_order_id: order.client_order_id,
            eip712_sig: signature.map(|s| s.sig.clone()),
            eip712_msg: signature.map(|s| s.message.clone()),
        };

        let response = self
            .authed(self.client.post(self.maker_url("order")))
            .json(&body)
            .send()
            .await?;

        Self::decode(response).await
    }

    /// Place up to [`MAX_BATCH_ORDERS`] orders for one symbol in a single
    /// call. The limit is the API's; it is enforced here before any request
    /// goes out.
    pub async fn create_orders(
        &self,
        symbol: &Symbol,
        orders: &[BatchOrder],
    ) -> ClientResult<CreateOrdersResponse> {
        if orders.is_empty() {
            return Err(ApiError::InvalidBatch("orders list is empty".to_string()));
        }
        if orders.len() > MAX_BATCH_ORDERS {
            return Err(ApiError::InvalidBatch(format!(
                "maximum {MAX_BATCH_ORDERS} orders allowed, got {}",
                orders.len()
            )));
        }
        for order in orders {
            order.price.validate()?;
            order.size.validate()?;
        }

        debug!(symbol = %symbol, count = orders.len(), "Creating order batch");

        let body = CreateOrdersBody {
            symbol: symbol.clone(),
            orders: orders
                .iter()
                .map(|o| BatchOrderEntry {
                    price: o.price,
                    size: o.size,
                    side: o.side,
                    client_order_id: o.client_order_id,
                    eip712_sig: o.signature.as_ref().map(|s| s.sig.clone()),
                    eip712_msg: o.signature.as_ref().map(|s| s.message.clone()),
                })
                .collect(),
        };

        let response = self
            .authed(self.client.post(self.maker_url("orders")))
            .json(&body)
            .send()
            .await?;

        Self::decode(response).await
    }

    /// Fetch an order by its server-assigned id. 404 when unknown.
    pub async fn get_order_by_id(&self, order_id: Uuid) -> ClientResult<Order> {
        let response = self
            .authed(self.client.get(self.maker_url(&format!("order/{order_id}"))))
            .send()
            .await?;

        Self::decode(response).await
    }

    /// Fetch an order by its client-assigned id. 404 when unknown.
    pub async fn get_order_by_client_id(
        &self,
        client_order_id: ClientOrderId,
    ) -> ClientResult<Order> {
        let response = self
            .authed(self.client.get(
                self.maker_url(&format!("order/client-order/{client_order_id}")),
            ))
            .send()
            .await?;

        Self::decode(response).await
    }

    /// Fetch a page of the user's open orders, optionally filtered by symbol.
    pub async fn get_open_orders(
        &self,
        page: u32,
        page_size: u32,
        symbol: Option<&Symbol>,
    ) -> ClientResult<OpenOrdersPage> {
        let mut request = self
            .authed(self.client.get(self.maker_url("orders")))
            .query(&[("page", page), ("pageSize", page_size)]);

        if let Some(symbol) = symbol {
            request = request.query(&[("symbol", symbol.as_str())]);
        }

        Self::decode(request.send().await?).await
    }

    /// Cancel an order by its server-assigned id. 404 when unknown or
    /// already cancelled.
    pub async fn cancel_order_by_id(&self, order_id: Uuid) -> ClientResult<CancelOrderResponse> {
        debug!(%order_id, "Cancelling order by id");

        let response = self
            .authed(
                self.client
                    .delete(self.maker_url(&format!("order/{order_id}"))),
            )
            .send()
            .await?;

        Self::decode(response).await
    }

    /// Cancel an order by its client-assigned id. 404 when unknown or
    /// already cancelled.
    pub async fn cancel_order_by_client_id(
        &self,
        client_order_id: ClientOrderId,
    ) -> ClientResult<CancelOrderResponse> {
        debug!(%client_order_id, "Cancelling order by client id");

        let response = self
            .authed(self.client.delete(
                self.maker_url(&format!("order/client-order/{client_order_id}")),
            ))
            .send()
            .await?;

        Self::decode(response).await
    }

    /// Cancel all of the user's open orders, optionally only for one symbol.
    ///
    /// The API answers 404 when there is nothing to cancel; callers that
    /// treat an empty book as success should check `is_not_found()`.
    pub async fn cancel_all_orders(
        &self,
        symbol: Option<&Symbol>,
    ) -> ClientResult<CancelAllResponse> {
        debug!(symbol = ?symbol.map(Symbol::as_str), "Cancelling all orders");

        let mut request = self.authed(self.client.delete(self.maker_url("orders")));
        if let Some(symbol) = symbol {
            request = request.query(&[("symbol", symbol.as_str())]);
        }

        Self::decode(request.send().await?).await
    }

    /// List the symbols the venue trades.
    pub async fn get_symbols(&self) -> ClientResult<Vec<SymbolInfo>> {
        let response = self
            .authed(self.client.get(self.maker_url("symbols")))
            .send()
            .await?;

        Self::decode(response).await
    }

    /// Fetch aggregated market depth for a symbol.
    ///
    /// `limit` caps the number of levels per side (server default 10,
    /// maximum 1000).
    pub async fn get_market_depth(
        &self,
        symbol: &Symbol,
        limit: Option<u32>,
    ) -> ClientResult<MarketDepth> {
        let mut request = self.authed(
            self.client
                .get(self.maker_url(&format!("orderbook/{symbol}"))),
        );
        if let Some(limit) = limit {
            request = request.query(&[("limit", limit)]);
        }

        let envelope: MarketDepthEnvelope = Self::decode(request.send().await?).await?;
        Ok(envelope.data)
    }

    /// Fetch the token metadata the deployment supports.
    ///
    /// The token map's shape is deployment configuration, so it is returned
    /// as raw JSON.
    pub async fn get_supported_tokens(&self) -> ClientResult<serde_json::Value> {
        let response = self
            .authed(self.client.get(self.maker_url("supported-tokens")))
            .send()
            .await?;

        let envelope: SupportedTokensEnvelope = Self::decode(response).await?;
        Ok(envelope.tokens)
    }

    /// Request a taker quote: how much `outToken` the current book yields
    /// for `inAmount` of `inToken`.
    pub async fn get_quote(&self, quote: &QuoteRequest) -> ClientResult<QuoteResponse> {
        debug!(
            in_amount = %quote.in_amount,
            in_token = %quote.in_token,
            out_token = %quote.out_token,
            "Requesting quote"
        );

        let response = self
            .authed(self.client.post(self.taker_url("quote")))
            .json(quote)
            .send()
            .await?;

        Self::decode(response).await
    }
}
