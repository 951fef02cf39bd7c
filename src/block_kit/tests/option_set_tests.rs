//! Unit tests for the option set and its selection invariant.

use crate::block_kit::BlockKitError;
use crate::block_kit::composition::{OptionGroup, SelectOption};
use crate::block_kit::elements::{OptionSet, SelectionMode};
use rstest::{fixture, rstest};
use serde_json::json;

// ============================================================================
// Fixtures
// ============================================================================

fn option(value: &str, selected: bool) -> SelectOption {
    SelectOption::new(value.to_uppercase(), value)
        .expect("plain label")
        .selected(selected)
}

fn group(label: &str, options: Vec<SelectOption>) -> OptionGroup {
    let mut group = OptionGroup::new(label).expect("plain label");
    group.set_options(options).expect("built options");
    group
}

#[fixture]
fn single() -> OptionSet {
    OptionSet::new(SelectionMode::Single)
}

#[fixture]
fn multiple() -> OptionSet {
    OptionSet::new(SelectionMode::Multiple)
}

// ============================================================================
// Single-select invariant
// ============================================================================

#[rstest]
fn single_rejects_second_selected_option(mut single: OptionSet) {
    single.add_option(option("a", true)).expect("first selection");

    let result = single.add_option(option("b", true));

    assert_eq!(result, Err(BlockKitError::MultipleInitialOptions));
    assert_eq!(single.options().len(), 1);
    assert!(single.has_initial_selection());
}

#[rstest]
fn single_accepts_unselected_options_after_selection(mut single: OptionSet) {
    single.add_option(option("a", true)).expect("first selection");

    single.add_option(option("b", false)).expect("unselected option");

    assert_eq!(single.options().len(), 2);
    assert_eq!(single.initial_option().map(SelectOption::value), Some("a"));
}

#[rstest]
fn single_rejects_selected_group_after_selected_option(mut single: OptionSet) {
    single.add_option(option("a", true)).expect("first selection");

    let result = single.add_option_group(group("G", vec![option("b", true)]));

    assert_eq!(result, Err(BlockKitError::MultipleInitialOptions));
    assert_eq!(single.options().len(), 1);
    assert!(single.option_groups().is_empty());
}

#[rstest]
fn single_rejects_group_with_two_selections(mut single: OptionSet) {
    let result = single.add_option_group(group("G", vec![option("a", true), option("b", true)]));

    assert_eq!(result, Err(BlockKitError::MultipleInitialOptions));
    assert!(single.option_groups().is_empty());
}

#[rstest]
fn single_rejects_second_selection_from_attribute_map(mut single: OptionSet) {
    single
        .add_option(json!({ "text": "A", "value": "a", "selected": true }))
        .expect("first selection");

    let result = single.add_option(json!({ "text": "B", "value": "b", "selected": true }));

    assert_eq!(result, Err(BlockKitError::MultipleInitialOptions));
}

#[rstest]
fn single_set_options_is_atomic(mut single: OptionSet) {
    single.add_option(option("keep", false)).expect("option");

    let result = single.set_options(vec![option("a", true), option("b", true)]);

    assert_eq!(result, Err(BlockKitError::MultipleInitialOptions));
    assert_eq!(single.options(), &[option("keep", false)]);
}

#[rstest]
fn selection_can_be_reintroduced_after_clearing(mut single: OptionSet) {
    single.add_option(option("a", true)).expect("first selection");

    single.clear_options();

    assert!(!single.has_initial_selection());
    single.add_option(option("b", true)).expect("selection after clear");
    assert_eq!(single.initial_option().map(SelectOption::value), Some("b"));
}

// ============================================================================
// Multi-select
// ============================================================================

#[rstest]
fn multiple_keeps_every_selection_in_order(mut multiple: OptionSet) {
    for value in ["a", "b", "c"] {
        multiple.add_option(option(value, true)).expect("any selections");
    }

    let values: Vec<&str> = multiple
        .initial_options()
        .into_iter()
        .map(SelectOption::value)
        .collect();

    assert_eq!(values, ["a", "b", "c"]);
}

#[rstest]
fn initial_options_scan_groups_in_order(mut multiple: OptionSet) {
    multiple
        .set_option_groups(vec![
            group("One", vec![option("a", false), option("b", true)]),
            group("Two", vec![option("c", true)]),
        ])
        .expect("groups");

    let values: Vec<&str> = multiple
        .initial_options()
        .into_iter()
        .map(SelectOption::value)
        .collect();

    assert_eq!(values, ["b", "c"]);
}

// ============================================================================
// Mutual exclusion of collections
// ============================================================================

#[rstest]
fn set_options_clears_groups(mut multiple: OptionSet) {
    multiple
        .add_option_group(group("G", vec![option("a", false)]))
        .expect("group");

    multiple.set_options(vec![option("b", false)]).expect("options");

    assert!(multiple.option_groups().is_empty());
    assert_eq!(multiple.options().len(), 1);
}

#[rstest]
fn set_option_groups_clears_options(mut multiple: OptionSet) {
    multiple.add_option(option("a", false)).expect("option");

    multiple
        .set_option_groups(vec![group("G", vec![option("b", false)])])
        .expect("groups");

    assert!(multiple.options().is_empty());
    assert_eq!(multiple.option_groups().len(), 1);
}

#[rstest]
fn selected_option_after_selected_group_is_rejected(mut single: OptionSet) {
    single
        .add_option_group(group("G", vec![option("a", true)]))
        .expect("group");

    let result = single.add_option(option("b", true));

    assert_eq!(result, Err(BlockKitError::MultipleInitialOptions));
    assert_eq!(single.option_groups().len(), 1);
    assert!(single.options().is_empty());
    assert_eq!(single.initial_option().map(SelectOption::value), Some("a"));
}

#[rstest]
fn unselected_option_after_selected_group_clears_groups(mut single: OptionSet) {
    single
        .add_option_group(group("G", vec![option("a", true)]))
        .expect("group");

    single.add_option(option("b", false)).expect("no new selection");

    assert!(single.option_groups().is_empty());
    assert!(!single.has_initial_selection());
}

#[rstest]
fn clear_all_resets_selection(mut multiple: OptionSet) {
    multiple.add_option(option("a", true)).expect("option");

    multiple.clear_all();

    assert!(multiple.options().is_empty());
    assert!(!multiple.has_initial_selection());
}

// ============================================================================
// Serialisation
// ============================================================================

#[rstest]
fn single_serialises_initial_option(mut single: OptionSet) {
    single.add_option(option("a", true)).expect("option");

    let value = serde_json::to_value(&single).expect("serialise");

    assert_eq!(value["initial_option"]["value"], json!("a"));
    assert!(value.get("initial_options").is_none());
    assert!(value.get("option_groups").is_none());
}

#[rstest]
fn multiple_omits_empty_initial_options(mut multiple: OptionSet) {
    multiple.add_option(option("a", false)).expect("option");

    let value = serde_json::to_value(&multiple).expect("serialise");

    assert!(value.get("initial_options").is_none());
    assert_eq!(value["options"].as_array().map(Vec::len), Some(1));
}

#[rstest]
fn groups_replace_options_key(mut multiple: OptionSet) {
    multiple
        .add_option_group(group("G", vec![option("a", true)]))
        .expect("group");

    let value = serde_json::to_value(&multiple).expect("serialise");

    assert!(value.get("options").is_none());
    assert_eq!(value["option_groups"][0]["label"]["text"], json!("G"));
    assert_eq!(value["initial_options"][0]["value"], json!("a"));
}

#[rstest]
fn unselectable_never_serialises_initial_entries() {
    let mut overflow = OptionSet::new(SelectionMode::Unselectable);
    overflow.add_option(option("a", true)).expect("option");
    overflow.add_option(option("b", true)).expect("no limit");

    let value = serde_json::to_value(&overflow).expect("serialise");

    assert!(value.get("initial_option").is_none());
    assert!(value.get("initial_options").is_none());
}
