//! Integration tests for configured message dispatch.

use std::sync::Arc;

use blockwire::block_kit::blocks::{DividerBlock, SectionBlock};
use blockwire::block_kit::elements::{Button, ButtonStyle};
use blockwire::message::adapters::memory::InMemoryTransport;
use blockwire::message::domain::{MessageDefaults, WebhookEndpoint};
use blockwire::message::error::DispatchError;
use blockwire::message::ports::TransportError;
use blockwire::message::services::MessageDispatcher;
use rstest::{fixture, rstest};
use serde_json::json;

#[fixture]
fn dispatcher() -> (Arc<InMemoryTransport>, MessageDispatcher<InMemoryTransport>) {
    let transport = Arc::new(InMemoryTransport::new());
    let endpoint = WebhookEndpoint::new("https://hooks.example.com/services/T000/B000/XXX")
        .expect("valid webhook URL");
    let dispatcher = MessageDispatcher::new(Arc::clone(&transport), endpoint);
    (transport, dispatcher)
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn configured_message_is_delivered_verbatim(
    dispatcher: (Arc<InMemoryTransport>, MessageDispatcher<InMemoryTransport>),
) {
    let (transport, service) = dispatcher;
    let defaults = MessageDefaults::from_json_str(
        r##"{ "channel": "#deploys", "username": "release-bot", "icon": ":rocket:" }"##,
    )
    .expect("valid defaults");
    let rollback = Button::new("Roll back", "rollback")
        .expect("button text")
        .with_style(ButtonStyle::Danger);
    let message = defaults
        .message()
        .with_text("Deploy finished")
        .with_block(
            SectionBlock::new("Version 2.4.1 is live")
                .expect("plain text")
                .with_accessory(rollback)
                .expect("button fits a section"),
        )
        .expect("valid section")
        .with_block(DividerBlock::new())
        .expect("valid divider");

    service.dispatch(&message).await.expect("delivered");

    let deliveries = transport.deliveries();
    let delivery = deliveries.first().expect("one delivery");
    assert_eq!(
        delivery.document().expect("valid JSON"),
        json!({
            "text": "Deploy finished",
            "channel": "#deploys",
            "username": "release-bot",
            "link_names": 0,
            "unfurl_links": false,
            "unfurl_media": true,
            "mrkdwn": true,
            "icon_emoji": ":rocket:",
            "blocks": [
                {
                    "type": "section",
                    "text": { "type": "plain_text", "text": "Version 2.4.1 is live", "emoji": false },
                    "accessory": {
                        "type": "button",
                        "text": { "type": "plain_text", "text": "Roll back", "emoji": false },
                        "action_id": "rollback",
                        "style": "danger",
                    },
                },
                { "type": "divider" },
            ],
        })
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn rejected_delivery_is_not_retried(
    dispatcher: (Arc<InMemoryTransport>, MessageDispatcher<InMemoryTransport>),
) {
    let (transport, service) = dispatcher;
    transport
        .fail_next(TransportError::rejected(404, "no_service"))
        .expect("queue failure");
    let message = MessageDefaults::literal().message().with_text("ping");

    let result = service.dispatch(&message).await;

    assert_eq!(
        result,
        Err(DispatchError::Transport(TransportError::rejected(
            404,
            "no_service"
        )))
    );
    assert!(transport.is_empty());

    service.dispatch(&message).await.expect("next attempt succeeds");
    assert_eq!(transport.len(), 1);
}
