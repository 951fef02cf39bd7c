//! Unit tests for block variants, attachment checks, and block ids.

use super::attrs;
use crate::block_kit::blocks::{
    ActionsBlock, Block, BlockId, ContextBlock, DividerBlock, FileBlock, ImageBlock, InputBlock,
    SectionBlock,
};
use crate::block_kit::composition::{Text, TextType};
use crate::block_kit::elements::{BlockElement, Button, ImageElement, MultiSelect, Select};
use crate::block_kit::{BlockKind, BlockKitError, ElementKind};
use rstest::rstest;
use serde_json::json;

fn button() -> Button {
    Button::new("B", "x").expect("plain label")
}

// ============================================================================
// Section
// ============================================================================

#[rstest]
fn section_document_matches_wire_contract() {
    let section = SectionBlock::new("T")
        .expect("plain body")
        .with_field("A")
        .expect("plain field")
        .with_accessory(button())
        .expect("buttons belong in sections");

    let document = Block::from(section).to_document().expect("serialise");

    assert_eq!(
        document,
        json!({
            "type": "section",
            "text": { "type": "plain_text", "text": "T", "emoji": false },
            "fields": [{ "type": "plain_text", "text": "A", "emoji": false }],
            "accessory": {
                "type": "button",
                "text": { "type": "plain_text", "text": "B", "emoji": false },
                "action_id": "x",
            },
        })
    );
    assert!(document.get("block_id").is_none());
}

#[rstest]
fn section_omits_empty_fields_and_accessory() {
    let document = Block::from(SectionBlock::new(Text::markdown("*hi*")).expect("body"))
        .to_document()
        .expect("serialise");

    assert_eq!(
        document,
        json!({
            "type": "section",
            "text": { "type": "mrkdwn", "text": "*hi*", "verbatim": false },
        })
    );
}

#[rstest]
fn section_rejects_text_accessory_and_keeps_previous() {
    let mut section = SectionBlock::new("T")
        .expect("plain body")
        .with_accessory(button())
        .expect("button accessory");

    let result = section.set_accessory(Text::plain("nope"));

    assert_eq!(
        result,
        Err(BlockKitError::IncompatibleElement {
            element: ElementKind::PlainText,
            block: BlockKind::Section,
        })
    );
    assert_eq!(section.accessory().map(BlockElement::kind), Some(ElementKind::Button));
}

#[rstest]
fn section_from_attributes_requires_text() {
    let result = SectionBlock::from_attributes(attrs(json!({ "fields": ["A"] })));

    assert_eq!(result, Err(BlockKitError::missing("section block", "text")));
}

#[rstest]
fn section_set_fields_is_atomic() {
    let mut section = SectionBlock::new("T")
        .expect("plain body")
        .with_field("A")
        .expect("field");

    let result = section.set_fields(vec![json!("B"), json!(7)]);

    assert!(result.is_err());
    assert_eq!(section.fields().len(), 1);
}

// ============================================================================
// Actions and context
// ============================================================================

#[rstest]
fn actions_reject_text_without_partial_attachment() {
    let mut actions = ActionsBlock::new();

    let result = actions.add_element(Text::plain("nope"));

    assert!(result.as_ref().is_err_and(BlockKitError::is_incompatible_element));
    assert!(actions.elements().is_empty());
}

#[rstest]
fn actions_set_elements_is_atomic() {
    let mut actions = ActionsBlock::new().with_element(button()).expect("button");

    let result = actions.set_elements(vec![
        json!({ "type": "button", "text": "Ok" }),
        json!({ "type": "mrkdwn", "text": "*no*" }),
    ]);

    assert!(result.is_err());
    assert_eq!(actions.elements().len(), 1);
}

#[rstest]
fn context_accepts_text_and_images_only() {
    let mut context = ContextBlock::new()
        .with_element(Text::markdown("*note*"))
        .expect("markdown text")
        .with_element(ImageElement::new("https://x/y.png", "cat"))
        .expect("image");

    let result = context.add_element(button());

    assert!(matches!(
        result,
        Err(BlockKitError::IncompatibleElement {
            element: ElementKind::Button,
            block: BlockKind::Context,
        })
    ));
    assert_eq!(context.elements().len(), 2);
}

#[rstest]
fn context_clear_elements_empties_the_block() {
    let mut context = ContextBlock::new()
        .with_element(Text::plain("a"))
        .expect("text");

    context.clear_elements();

    assert!(context.elements().is_empty());
}

// ============================================================================
// Input
// ============================================================================

#[rstest]
fn input_accepts_multi_select_but_not_button() {
    let accepted = InputBlock::new("Tags", MultiSelect::new("tags"));
    let rejected = InputBlock::new("Go", button());

    assert!(accepted.is_ok());
    assert!(matches!(
        rejected,
        Err(BlockKitError::IncompatibleElement {
            element: ElementKind::Button,
            block: BlockKind::Input,
        })
    ));
}

#[rstest]
#[case(json!({ "element": { "type": "static_select" } }), "label")]
#[case(json!({ "label": "Size" }), "element")]
fn input_requires_label_and_element(#[case] input: serde_json::Value, #[case] field: &'static str) {
    let result = InputBlock::from_attributes(attrs(input));

    assert_eq!(result, Err(BlockKitError::missing("input block", field)));
}

#[rstest]
fn input_emits_optional_only_when_true() {
    let required = InputBlock::new("Size", Select::new("size")).expect("valid input");
    let optional = required.clone().with_optional(true);

    let required_doc = Block::from(required).to_document().expect("serialise");
    let optional_doc = Block::from(optional).to_document().expect("serialise");

    assert!(required_doc.get("optional").is_none());
    assert_eq!(optional_doc["optional"], json!(true));
}

#[rstest]
fn input_label_may_be_markdown() {
    let block = InputBlock::new(Text::markdown("*Size*"), Select::new("size")).expect("valid");

    assert_eq!(block.label().text_type(), TextType::Markdown);
}

// ============================================================================
// Scalar blocks
// ============================================================================

#[rstest]
fn divider_document_is_type_only() {
    let document = Block::from(DividerBlock::new()).to_document().expect("serialise");

    assert_eq!(document, json!({ "type": "divider" }));
}

#[rstest]
fn file_defaults_to_remote_source() {
    let block = FileBlock::from_attributes(attrs(json!({ "external_id": "F123" })))
        .expect("external id present");

    assert_eq!(block.source(), "remote");
    assert_eq!(
        Block::from(block).to_document().expect("serialise"),
        json!({ "type": "file", "external_id": "F123", "source": "remote" })
    );
}

#[rstest]
fn image_block_reads_title_and_block_id() {
    let block = ImageBlock::from_attributes(attrs(json!({
        "image_url": "https://x/y.png",
        "alt_text": "cat",
        "title": "A cat",
        "block_id": "img-1",
    })))
    .expect("valid image block");

    assert_eq!(block.content().title().map(Text::text), Some("A cat"));
    assert_eq!(block.block_id().map(BlockId::as_str), Some("img-1"));
}

// ============================================================================
// Block ids
// ============================================================================

#[rstest]
#[case("")]
#[case("   ")]
fn block_id_rejects_blank_values(#[case] raw: &str) {
    assert_eq!(BlockId::new(raw), Err(BlockKitError::EmptyBlockId));
}

#[rstest]
fn block_id_is_emitted_when_set() {
    let block = DividerBlock::new().with_block_id(BlockId::new("d-1").expect("non-blank"));

    let document = Block::from(block).to_document().expect("serialise");

    assert_eq!(document, json!({ "type": "divider", "block_id": "d-1" }));
}

#[rstest]
fn generated_block_ids_are_distinct() {
    assert_ne!(BlockId::generate(), BlockId::generate());
}

#[rstest]
fn blocks_never_generate_ids_on_their_own() {
    let block = Block::factory(json!({ "type": "actions" })).expect("registered type");

    assert!(block.block_id().is_none());
}
