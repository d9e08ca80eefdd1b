//! Multi-order batch submission tests.

use maker_client::{ApiError, BatchOrder, OrderbookClient, MAX_BATCH_ORDERS};
use maker_core::{ClientOrderId, OrderSide, Symbol};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const API_KEY: &str = "test-api-key";

fn client(server: &MockServer) -> OrderbookClient {
    OrderbookClient::new(server.uri(), API_KEY).unwrap()
}

fn ladder_entries(count: usize) -> Vec<BatchOrder> {
    (0..count)
        .map(|i| BatchOrder {
            side: if i % 2 == 0 {
                OrderSide::Sell
            } else {
                OrderSide::Buy
            },
            price: format!("0.8{i}").parse().unwrap(),
            size: "10".parse().unwrap(),
            client_order_id: ClientOrderId::random(),
            signature: None,
        })
        .collect()
}

fn created_order_json(client_order_id: &ClientOrderId, side: &str, price: &str) -> serde_json::Value {
    serde_json::json!({
        "orderId": uuid::Uuid::new_v4(),
        "clientOrderId": client_order_id,
        "userId": "a577273e-12de-4acc-a4f8-de7fb5b86e37",
        "price": price,
        "symbol": "MATIC-USDC",
        "size": "10",
        "pendingSize": "0",
        "filledSize": "0",
        "side": side,
        "timestamp": "2024-01-18T10:30:00Z",
        "cancelled": false
    })
}

#[tokio::test]
async fn test_create_orders_batch() {
    let server = MockServer::start().await;
    let symbol = Symbol::new("MATIC-USDC").unwrap();
    let orders = ladder_entries(4);

    let created: Vec<_> = orders
        .iter()
        .map(|o| {
            created_order_json(
                &o.client_order_id,
                &o.side.to_string(),
                &o.price.to_string(),
            )
        })
        .collect();

    Mock::given(method("POST"))
        .and(path("/api/v1/orders"))
        .and(body_partial_json(serde_json::json!({
            "symbol": "MATIC-USDC",
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "symbol": "MATIC-USDC",
            "created": created,
            "status": 201,
            "msg": "",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let res = client(&server)
        .create_orders(&symbol, &orders)
        .await
        .unwrap();

    assert_eq!(res.created.len(), 4);
    assert_eq!(res.symbol, symbol);
    for (sent, created) in orders.iter().zip(res.created.iter()) {
        assert_eq!(created.client_order_id, sent.client_order_id);
    }
}

#[tokio::test]
async fn test_batch_over_limit_rejected_without_request() {
    let server = MockServer::start().await;
    // No mock mounted on purpose: the limit check must fire before any HTTP.

    let symbol = Symbol::new("MATIC-USDC").unwrap();
    let orders = ladder_entries(MAX_BATCH_ORDERS + 1);

    let err = client(&server)
        .create_orders(&symbol, &orders)
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::InvalidBatch(_)));
}

#[tokio::test]
async fn test_empty_batch_rejected() {
    let server = MockServer::start().await;

    let symbol = Symbol::new("MATIC-USDC").unwrap();
    let err = client(&server)
        .create_orders(&symbol, &[])
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::InvalidBatch(_)));
}

#[tokio::test]
async fn test_batch_partial_failure_maps_to_conflict() {
    let server = MockServer::start().await;
    let symbol = Symbol::new("MATIC-USDC").unwrap();
    let orders = ladder_entries(3);

    // The API stops at the first rejection and answers with the failure
    // status; orders created before it are on the book regardless.
    let created = vec![created_order_json(
        &orders[0].client_order_id,
        "sell",
        "0.80",
    )];

    Mock::given(method("POST"))
        .and(path("/api/v1/orders"))
        .respond_with(ResponseTemplate::new(409).set_body_json(serde_json::json!({
            "symbol": "MATIC-USDC",
            "created": created,
            "status": 409,
            "msg": "Order with clientOrderId already exists",
        })))
        .mount(&server)
        .await;

    let err = client(&server)
        .create_orders(&symbol, &orders)
        .await
        .unwrap_err();

    assert!(err.is_conflict());
}
