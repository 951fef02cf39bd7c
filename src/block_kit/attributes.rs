//! Attribute-map construction convention.
//!
//! Every block, element, and composition object can be built from a raw
//! keyed map of attributes. Scalar fields are decoded through `serde` into
//! per-type attribute structs; nested objects stay as raw [`Value`]s until
//! the owning type routes them through the matching factory, so nested
//! failures surface with the same error taxonomy as top-level ones.

use super::error::{BlockKitError, BlockKitResult};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// A raw keyed attribute map.
pub type Attributes = Map<String, Value>;

/// Decodes the scalar attributes of `object` into `T`.
///
/// Unknown keys are ignored, matching the wire format's tolerance for
/// extra fields.
pub(crate) fn decode<T: DeserializeOwned>(
    object: &'static str,
    attributes: Attributes,
) -> BlockKitResult<T> {
    serde_json::from_value(Value::Object(attributes))
        .map_err(|e| BlockKitError::invalid_attributes(object, e.to_string()))
}

/// Reads the `type` tag of an attribute map.
///
/// Non-string tags are rendered as JSON so they fail registry lookup with
/// an invalid-type error rather than a missing-type one.
pub(crate) fn type_tag(target: &'static str, attributes: &Attributes) -> BlockKitResult<String> {
    match attributes.get("type") {
        None | Some(Value::Null) => Err(BlockKitError::MissingType { target }),
        Some(Value::String(tag)) => Ok(tag.clone()),
        Some(other) => Ok(other.to_string()),
    }
}

/// Unwraps a required field.
pub(crate) fn require<T>(
    object: &'static str,
    field: &'static str,
    value: Option<T>,
) -> BlockKitResult<T> {
    value.ok_or_else(|| BlockKitError::missing(object, field))
}

/// Accepts a JSON object as an attribute map, rejecting any other shape.
pub(crate) fn object(
    field: &'static str,
    expected: &'static str,
    value: Value,
) -> BlockKitResult<Attributes> {
    match value {
        Value::Object(attributes) => Ok(attributes),
        _ => Err(BlockKitError::InvalidInput { field, expected }),
    }
}

/// Serde predicate omitting boolean flags that are only emitted when set.
#[expect(
    clippy::trivially_copy_pass_by_ref,
    reason = "serde skip_serializing_if passes fields by reference"
)]
pub(crate) const fn is_false(value: &bool) -> bool {
    !*value
}
