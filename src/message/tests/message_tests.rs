//! Unit tests for the message document.

use crate::block_kit::BlockKitError;
use crate::block_kit::blocks::{Block, DividerBlock};
use crate::message::domain::{Icon, Message};
use rstest::rstest;
use serde_json::json;

#[rstest]
fn default_message_document_carries_settings_only() {
    let document = Message::default().to_document().expect("serialise");

    assert_eq!(
        document,
        json!({
            "link_names": 0,
            "unfurl_links": false,
            "unfurl_media": true,
            "mrkdwn": true,
        })
    );
}

#[rstest]
fn fluent_helpers_populate_scalar_fields() {
    let message = Message::default()
        .to("#ops")
        .from("deploy-bot")
        .with_text("Deploy finished")
        .with_link_names(true)
        .with_markdown(false);

    let document = message.to_document().expect("serialise");

    assert_eq!(document["channel"], json!("#ops"));
    assert_eq!(document["username"], json!("deploy-bot"));
    assert_eq!(document["text"], json!("Deploy finished"));
    assert_eq!(document["link_names"], json!(1));
    assert_eq!(document["mrkdwn"], json!(false));
}

#[rstest]
#[case(":rocket:", "icon_emoji")]
#[case("https://example.com/bot.png", "icon_url")]
#[case(":", "icon_url")]
fn icon_is_classified_by_colons(#[case] icon: &str, #[case] key: &str) {
    let document = Message::default()
        .with_icon(icon)
        .to_document()
        .expect("serialise");

    assert_eq!(document[key], json!(icon));
}

#[rstest]
fn icon_as_str_returns_raw_value() {
    assert_eq!(Icon::parse(":ghost:").as_str(), ":ghost:");
}

#[rstest]
fn blocks_run_through_the_block_factory() {
    let mut message = Message::default();

    message
        .add_block(json!({ "type": "section", "text": "hi" }))
        .expect("valid section");
    message.add_block(DividerBlock::new()).expect("built block");

    let kinds: Vec<&str> = message.blocks().iter().map(|b| b.kind().as_str()).collect();
    assert_eq!(kinds, ["section", "divider"]);
}

#[rstest]
fn add_block_rejects_unknown_type() {
    let mut message = Message::default();

    let result = message.add_block(json!({ "type": "carousel" }));

    assert!(matches!(result, Err(BlockKitError::InvalidType { .. })));
    assert!(message.blocks().is_empty());
}

#[rstest]
fn set_blocks_is_atomic() {
    let mut message = Message::default()
        .with_block(Block::from(DividerBlock::new()))
        .expect("divider");

    let result = message.set_blocks(vec![json!({ "type": "divider" }), json!({})]);

    assert_eq!(result, Err(BlockKitError::MissingType { target: "block" }));
    assert_eq!(message.blocks().len(), 1);
}

#[rstest]
fn clear_blocks_omits_blocks_key() {
    let mut message = Message::default()
        .with_block(DividerBlock::new())
        .expect("divider");

    message.clear_blocks();

    let document = message.to_document().expect("serialise");
    assert!(document.get("blocks").is_none());
}

#[rstest]
fn to_json_matches_document() {
    let message = Message::default()
        .with_text("hi")
        .with_block(DividerBlock::new())
        .expect("divider");

    let json = message.to_json().expect("encode");
    let reparsed: serde_json::Value = serde_json::from_str(&json).expect("valid JSON");

    assert_eq!(reparsed, message.to_document().expect("serialise"));
}
