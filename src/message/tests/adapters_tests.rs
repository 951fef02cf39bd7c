//! Unit tests for the in-memory transport.
//!
//! Exercises `InMemoryTransport` through the public `MessageTransport`
//! trait interface.

use crate::message::adapters::memory::InMemoryTransport;
use crate::message::domain::WebhookEndpoint;
use crate::message::ports::{MessageTransport, TransportError};
use rstest::{fixture, rstest};

#[fixture]
fn endpoint() -> WebhookEndpoint {
    WebhookEndpoint::new("https://hooks.example.com/T000").expect("valid URL")
}

#[test]
fn new_transport_is_empty() {
    let transport = InMemoryTransport::new();

    assert!(transport.is_empty());
    assert!(transport.deliveries().is_empty());
}

#[rstest]
#[tokio::test]
async fn deliver_records_payload_and_endpoint(endpoint: WebhookEndpoint) {
    let transport = InMemoryTransport::new();

    transport
        .deliver(&endpoint, r#"{"text":"hi"}"#)
        .await
        .expect("delivery succeeds");

    let deliveries = transport.deliveries();
    assert_eq!(deliveries.len(), 1);
    let delivery = deliveries.first().expect("one delivery");
    assert_eq!(delivery.endpoint(), &endpoint);
    assert_eq!(delivery.payload(), r#"{"text":"hi"}"#);
    assert_eq!(
        delivery.document().expect("valid JSON"),
        serde_json::json!({ "text": "hi" })
    );
}

#[rstest]
#[tokio::test]
async fn queued_failure_is_returned_once(endpoint: WebhookEndpoint) {
    let transport = InMemoryTransport::new();
    transport
        .fail_next(TransportError::rejected(500, "boom"))
        .expect("queue failure");

    let first = transport.deliver(&endpoint, "{}").await;
    let second = transport.deliver(&endpoint, "{}").await;

    assert_eq!(first, Err(TransportError::rejected(500, "boom")));
    assert!(second.is_ok());
    assert_eq!(transport.len(), 1);
}

#[rstest]
#[tokio::test]
async fn clones_share_recorded_deliveries(endpoint: WebhookEndpoint) {
    let transport = InMemoryTransport::new();
    let handle = transport.clone();

    handle.deliver(&endpoint, "{}").await.expect("delivery");

    assert_eq!(transport.len(), 1);
}
