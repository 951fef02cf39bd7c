//! Unit tests for type-tag resolution and the validity matrix.

use crate::block_kit::blocks::Block;
use crate::block_kit::elements::{BlockElement, Button};
use crate::block_kit::registry::{allowed_hosts, is_valid_for};
use crate::block_kit::{BlockKind, BlockKitError, ElementKind};
use rstest::rstest;
use serde_json::{Value, json};

// ============================================================================
// Factories
// ============================================================================

fn minimal_element(kind: ElementKind) -> Value {
    match kind {
        ElementKind::Button => json!({ "type": "button", "text": "Go" }),
        ElementKind::Image => {
            json!({ "type": "image", "image_url": "https://x/y.png", "alt_text": "cat" })
        }
        ElementKind::PlainText | ElementKind::Markdown => {
            json!({ "type": kind.as_str(), "text": "hi" })
        }
        other => json!({ "type": other.as_str() }),
    }
}

fn minimal_block(kind: BlockKind) -> Value {
    match kind {
        BlockKind::File => json!({ "type": "file", "external_id": "F1" }),
        BlockKind::Image => {
            json!({ "type": "image", "image_url": "https://x/y.png", "alt_text": "cat" })
        }
        BlockKind::Input => json!({
            "type": "input",
            "label": "Notes",
            "element": { "type": "plain_text_input" },
        }),
        BlockKind::Section => json!({ "type": "section", "text": "T" }),
        other => json!({ "type": other.as_str() }),
    }
}

#[rstest]
fn every_element_tag_resolves_to_its_kind() {
    for kind in ElementKind::ALL {
        let element = BlockElement::factory(minimal_element(kind)).expect("registered type");
        assert_eq!(element.kind(), kind);
        assert_eq!(element.to_document().expect("serialise")["type"], json!(kind.as_str()));
    }
}

#[rstest]
fn every_block_tag_resolves_to_its_kind() {
    for kind in BlockKind::ALL {
        let block = Block::factory(minimal_block(kind)).expect("registered type");
        assert_eq!(block.kind(), kind);
        assert_eq!(block.to_document().expect("serialise")["type"], json!(kind.as_str()));
    }
}

#[rstest]
#[case(json!({}))]
#[case(json!({ "type": null, "text": "Go" }))]
fn element_factory_requires_type(#[case] input: Value) {
    let result = BlockElement::factory(input);

    assert_eq!(
        result,
        Err(BlockKitError::MissingType {
            target: "block element"
        })
    );
}

#[rstest]
fn block_factory_requires_type() {
    let result = Block::factory(json!({}));

    assert_eq!(result, Err(BlockKitError::MissingType { target: "block" }));
}

#[rstest]
fn block_factory_names_registered_set_for_unknown_type() {
    let result = Block::factory(json!({ "type": "bogus" }));

    assert_eq!(
        result,
        Err(BlockKitError::InvalidType {
            target: "block",
            found: "bogus".to_owned(),
            allowed: "actions, context, divider, file, image, input, section".to_owned(),
        })
    );
}

#[rstest]
fn element_factory_names_registered_set_for_unknown_type() {
    let err = BlockElement::factory(json!({ "type": "slider" })).expect_err("unknown type");

    let message = err.to_string();
    assert!(message.contains("'slider'"));
    for kind in ElementKind::ALL {
        assert!(message.contains(kind.as_str()), "missing {kind} in {message}");
    }
}

#[rstest]
fn factories_pass_built_values_through() {
    let button = BlockElement::from(Button::new("Go", "go").expect("plain label"));

    let element = BlockElement::factory(button.clone()).expect("idempotent");

    assert_eq!(element, button);
}

#[rstest]
fn factories_reject_non_object_values() {
    let result = Block::factory(json!(["section"]));

    assert_eq!(
        result,
        Err(BlockKitError::InvalidInput {
            field: "block",
            expected: "Block",
        })
    );
}

// ============================================================================
// Validity matrix
// ============================================================================

#[rstest]
fn button_is_valid_for_section_but_not_context() {
    let button = BlockElement::from(Button::new("Go", "go").expect("plain label"));

    assert!(button.is_valid_for(BlockKind::Section));
    assert!(!button.is_valid_for(BlockKind::Context));
}

#[rstest]
#[case(ElementKind::Button, &[BlockKind::Section, BlockKind::Actions])]
#[case(ElementKind::Checkboxes, &[BlockKind::Section, BlockKind::Actions, BlockKind::Input])]
#[case(ElementKind::DatePicker, &[BlockKind::Section, BlockKind::Actions, BlockKind::Input])]
#[case(ElementKind::Image, &[BlockKind::Section, BlockKind::Context])]
#[case(ElementKind::MultiSelect, &[BlockKind::Section, BlockKind::Input])]
#[case(ElementKind::Overflow, &[BlockKind::Section, BlockKind::Actions])]
#[case(ElementKind::TextInput, &[BlockKind::Section, BlockKind::Actions, BlockKind::Input])]
#[case(ElementKind::RadioButtons, &[BlockKind::Section, BlockKind::Actions, BlockKind::Input])]
#[case(ElementKind::Select, &[BlockKind::Section, BlockKind::Actions, BlockKind::Input])]
#[case(ElementKind::PlainText, &[BlockKind::Context])]
#[case(ElementKind::Markdown, &[BlockKind::Context])]
fn matrix_lists_hosts(#[case] element: ElementKind, #[case] hosts: &[BlockKind]) {
    assert_eq!(allowed_hosts(element), hosts);
}

#[rstest]
fn no_element_is_hosted_by_scalar_blocks() {
    for element in ElementKind::ALL {
        for block in [BlockKind::Divider, BlockKind::File, BlockKind::Image] {
            assert!(!is_valid_for(element, block), "{element} hosted by {block}");
        }
    }
}
