//! Service tests for message dispatch.
//!
//! The transport is mocked so each test can assert exactly what payload
//! reaches the port and how failures propagate.

use std::sync::Arc;

use crate::block_kit::blocks::SectionBlock;
use crate::message::adapters::memory::InMemoryTransport;
use crate::message::domain::{Message, WebhookEndpoint};
use crate::message::error::DispatchError;
use crate::message::ports::{MessageTransport, TransportError, TransportResult};
use crate::message::services::MessageDispatcher;
use async_trait::async_trait;
use mockall::mock;
use mockall::predicate::{always, eq, function};
use rstest::{fixture, rstest};

mock! {
    Transport {}

    #[async_trait]
    impl MessageTransport for Transport {
        async fn deliver(&self, endpoint: &WebhookEndpoint, payload: &str) -> TransportResult<()>;
    }
}

#[fixture]
fn endpoint() -> WebhookEndpoint {
    WebhookEndpoint::new("https://hooks.example.com/T000").expect("valid URL")
}

fn message() -> Message {
    Message::default()
        .to("#ops")
        .with_block(SectionBlock::new("Deploy finished").expect("plain text"))
        .expect("valid block")
}

#[rstest]
#[tokio::test]
async fn dispatch_delivers_encoded_payload_once(endpoint: WebhookEndpoint) {
    let expected = message().to_json().expect("encode");
    let mut transport = MockTransport::new();
    transport
        .expect_deliver()
        .with(
            eq(endpoint.clone()),
            function(move |payload: &str| payload == expected),
        )
        .times(1)
        .returning(|_, _| Ok(()));

    let dispatcher = MessageDispatcher::new(Arc::new(transport), endpoint);

    dispatcher.dispatch(&message()).await.expect("delivered");
}

#[rstest]
#[tokio::test]
async fn dispatch_surfaces_transport_failure_without_retrying(endpoint: WebhookEndpoint) {
    let mut transport = MockTransport::new();
    transport
        .expect_deliver()
        .with(always(), always())
        .times(1)
        .returning(|_, _| Err(TransportError::Unavailable("connection refused".to_owned())));

    let dispatcher = MessageDispatcher::new(Arc::new(transport), endpoint);

    let result = dispatcher.dispatch(&message()).await;

    assert_eq!(
        result,
        Err(DispatchError::Transport(TransportError::Unavailable(
            "connection refused".to_owned()
        )))
    );
    assert!(result.is_err_and(|err| err.is_transport()));
}

#[rstest]
#[tokio::test]
async fn dispatch_with_memory_transport_records_document(endpoint: WebhookEndpoint) {
    let transport = Arc::new(InMemoryTransport::new());
    let dispatcher = MessageDispatcher::new(Arc::clone(&transport), endpoint.clone());

    dispatcher.dispatch(&message()).await.expect("delivered");

    let deliveries = transport.deliveries();
    let delivery = deliveries.first().expect("one delivery");
    let document = delivery.document().expect("valid JSON");
    assert_eq!(delivery.endpoint(), &endpoint);
    assert_eq!(document["channel"], serde_json::json!("#ops"));
    assert_eq!(document["blocks"][0]["type"], serde_json::json!("section"));
}

#[rstest]
fn dispatcher_exposes_endpoint(endpoint: WebhookEndpoint) {
    let dispatcher = MessageDispatcher::new(Arc::new(InMemoryTransport::new()), endpoint.clone());

    assert_eq!(dispatcher.endpoint(), &endpoint);
    assert_eq!(dispatcher.clone().endpoint(), &endpoint);
}
