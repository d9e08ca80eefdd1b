//! Listener integration tests: event delivery, authentication header,
//! reconnection, and the attempt limit.

mod common;
use common::mock_server::{MockOrderStream, Script};

use maker_ws::{ListenerConfig, OrderEvent, OrderEventListener, WsError};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::timeout;

const API_KEY: &str = "test-key";

fn order_event_json() -> String {
    serde_json::json!({
        "orderId": "2e351cef-5906-4c1d-a1ec-ca8d0b0c97cb",
        "clientOrderId": "550e8400-e29b-41d4-a716-446655440000",
        "userId": "a577273e-12de-4acc-a4f8-de7fb5b86e37",
        "price": "0.865",
        "symbol": "MATIC-USDC",
        "size": "40",
        "pendingSize": "0",
        "filledSize": "40",
        "side": "sell",
        "timestamp": "2024-01-18T10:30:00Z",
        "cancelled": false
    })
    .to_string()
}

fn test_config(url: String) -> ListenerConfig {
    ListenerConfig {
        url,
        api_key: API_KEY.to_string(),
        max_reconnect_attempts: 0,
        reconnect_base_delay_ms: 100,
        reconnect_max_delay_ms: 200,
    }
}

#[tokio::test]
async fn test_listener_receives_order_event() {
    let server = MockOrderStream::start(Script {
        events: vec![order_event_json()],
        close_after_send: false,
    })
    .await;

    let (event_tx, mut event_rx) = mpsc::channel(16);
    let listener = Arc::new(OrderEventListener::new(
        test_config(server.url()),
        event_tx,
    ));

    let runner = listener.clone();
    let handle = tokio::spawn(async move { runner.run().await });

    let event = timeout(Duration::from_secs(2), event_rx.recv())
        .await
        .expect("should receive an event within timeout")
        .expect("channel should stay open");

    let order = event.as_order().expect("payload should parse as an order");
    assert_eq!(order.symbol.as_str(), "MATIC-USDC");
    assert_eq!(order.size_filled, order.size);

    listener.shutdown();
    let _ = handle.await;
    server.shutdown().await;
}

#[tokio::test]
async fn test_listener_sends_bearer_api_key() {
    let server = MockOrderStream::start(Script {
        events: vec![],
        close_after_send: false,
    })
    .await;

    let (event_tx, _event_rx) = mpsc::channel(16);
    let listener = Arc::new(OrderEventListener::new(
        test_config(server.url()),
        event_tx,
    ));

    let runner = listener.clone();
    let handle = tokio::spawn(async move { runner.run().await });

    let seen = timeout(Duration::from_secs(2), async {
        loop {
            let keys = server.seen_api_keys().await;
            if !keys.is_empty() {
                return keys;
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
    })
    .await
    .expect("server should see a connection");

    assert_eq!(seen[0], format!("Bearer {API_KEY}"));

    listener.shutdown();
    let _ = handle.await;
    server.shutdown().await;
}

#[tokio::test]
async fn test_listener_forwards_unparsed_payloads_raw() {
    let server = MockOrderStream::start(Script {
        events: vec![r#"{"type": "maintenance"}"#.to_string()],
        close_after_send: false,
    })
    .await;

    let (event_tx, mut event_rx) = mpsc::channel(16);
    let listener = Arc::new(OrderEventListener::new(
        test_config(server.url()),
        event_tx,
    ));

    let runner = listener.clone();
    let handle = tokio::spawn(async move { runner.run().await });

    let event = timeout(Duration::from_secs(2), event_rx.recv())
        .await
        .expect("should receive an event within timeout")
        .expect("channel should stay open");

    assert!(matches!(event, OrderEvent::Raw(_)));

    listener.shutdown();
    let _ = handle.await;
    server.shutdown().await;
}

#[tokio::test]
async fn test_listener_reconnects_after_server_close() {
    let server = MockOrderStream::start(Script {
        events: vec![order_event_json()],
        close_after_send: true,
    })
    .await;

    let (event_tx, mut event_rx) = mpsc::channel(64);
    let listener = Arc::new(OrderEventListener::new(
        test_config(server.url()),
        event_tx,
    ));

    let runner = listener.clone();
    let handle = tokio::spawn(async move { runner.run().await });

    // Drain events so the channel never blocks the listener.
    tokio::spawn(async move { while event_rx.recv().await.is_some() {} });

    let reconnected = timeout(Duration::from_secs(5), async {
        loop {
            if server.connection_count().await >= 2 {
                return;
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
    })
    .await;

    assert!(
        reconnected.is_ok(),
        "listener should reconnect after server-side close"
    );

    listener.shutdown();
    let _ = handle.await;
    server.shutdown().await;
}

#[tokio::test]
async fn test_listener_gives_up_after_max_attempts() {
    // Bind and drop a listener to get a port nothing is serving.
    let unused = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = unused.local_addr().unwrap();
    drop(unused);

    let (event_tx, _event_rx) = mpsc::channel(16);
    let listener = OrderEventListener::new(
        ListenerConfig {
            url: format!("ws://{addr}"),
            api_key: API_KEY.to_string(),
            max_reconnect_attempts: 2,
            reconnect_base_delay_ms: 50,
            reconnect_max_delay_ms: 100,
        },
        event_tx,
    );

    let result = timeout(Duration::from_secs(5), listener.run())
        .await
        .expect("run should finish before timeout");

    assert!(matches!(result, Err(WsError::ConnectionFailed(_))));
}
