//! Ticker fetch tests against a mocked price endpoint.

use maker_core::Price;
use maker_feed::{FeedError, TickerClient};
use rust_decimal_macros::dec;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_fetch_parses_ticker() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v3/ticker/price"))
        .and(query_param("symbol", "ETHUSDT"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "symbol": "ETHUSDT",
            "price": "2345.67000000",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client =
        TickerClient::new(format!("{}/api/v3/ticker/price?symbol=ETHUSDT", server.uri())).unwrap();

    let ticker = client.fetch().await.unwrap();
    assert_eq!(ticker.symbol, "ETHUSDT");
    assert_eq!(ticker.price, Price::new(dec!(2345.67)));
}

#[tokio::test]
async fn test_fetch_surfaces_http_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ticker"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let client = TickerClient::new(format!("{}/ticker", server.uri())).unwrap();

    let err = client.fetch().await.unwrap_err();
    assert!(matches!(err, FeedError::Status { status: 429 }));
}

#[tokio::test]
async fn test_fetch_rejects_malformed_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ticker"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = TickerClient::new(format!("{}/ticker", server.uri())).unwrap();

    let err = client.fetch().await.unwrap_err();
    assert!(matches!(err, FeedError::Decode(_)));
}
