//! Unit tests for the block kit module.
//!
//! Tests are organised by layer: composition objects, the option set,
//! element variants, block variants, and the registry.

mod block_tests;
mod option_set_tests;
mod registry_tests;

use crate::block_kit::Attributes;
use serde_json::Value;

/// Unwraps a `json!` object literal into an attribute map.
fn attrs(value: Value) -> Attributes {
    match value {
        Value::Object(map) => map,
        other => panic!("expected a JSON object, got {other}"),
    }
}
