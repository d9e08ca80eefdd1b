//! Order events pushed over the WebSocket.

use maker_core::Order;

/// An event received on the order stream.
///
/// The server pushes the full order record on every state change (created,
/// filled, cancelled). Payloads that fail to parse as an order are kept raw
/// so listeners still surface them; the stream is also used for manual
/// inspection against newer server builds.
#[derive(Debug, Clone)]
pub enum OrderEvent {
    Order(Box<Order>),
    Raw(String),
}

impl OrderEvent {
    /// Parse a text frame into an event.
    pub fn from_text(text: &str) -> Self {
        match serde_json::from_str::<Order>(text) {
            Ok(order) => Self::Order(Box::new(order)),
            Err(_) => Self::Raw(text.to_string()),
        }
    }

    /// The parsed order, if this event is one.
    pub fn as_order(&self) -> Option<&Order> {
        match self {
            Self::Order(order) => Some(order),
            Self::Raw(_) => None,
        }
    }
}
