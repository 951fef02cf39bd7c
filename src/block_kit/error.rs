//! Error taxonomy for block and element composition.
//!
//! Uses `thiserror` for ergonomic error handling with typed variants
//! that can be inspected by callers. Every variant describes invalid
//! construction or attachment input; none of them is transient.

use super::composition::TextType;
use super::kind::{BlockKind, ElementKind};
use thiserror::Error;

/// Result type for composition operations.
pub type BlockKitResult<T> = Result<T, BlockKitError>;

/// Errors raised while constructing, attaching, or serialising blocks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlockKitError {
    /// An attribute map carried no `type` key.
    #[error("cannot create {target} without a type attribute")]
    MissingType {
        /// What was being constructed (`block` or `block element`).
        target: &'static str,
    },

    /// An attribute map carried a `type` outside the registered set.
    #[error("{target} type '{found}' is invalid; must be one of: {allowed}")]
    InvalidType {
        /// What was being constructed (`block` or `block element`).
        target: &'static str,
        /// The rejected type tag.
        found: String,
        /// Comma-separated list of every registered tag.
        allowed: String,
    },

    /// An element was attached to a block that cannot host it.
    #[error("block element '{element}' is not valid for '{block}' blocks")]
    IncompatibleElement {
        /// The kind of the rejected element.
        element: ElementKind,
        /// The kind of the hosting block.
        block: BlockKind,
    },

    /// A single-select element received a second initial selection.
    #[error("only one option can be initially selected")]
    MultipleInitialOptions,

    /// A field was neither the composed type nor an attribute map.
    #[error("{field} must be a {expected} or a keyed attribute map")]
    InvalidInput {
        /// The field or collection being populated.
        field: &'static str,
        /// The composed type that would have been accepted.
        expected: &'static str,
    },

    /// A text object had the wrong format type for its slot.
    #[error("text type must be {expected}, found {actual}")]
    TextTypeMismatch {
        /// The format type the slot requires.
        expected: TextType,
        /// The format type that was supplied.
        actual: TextType,
    },

    /// A required field was not supplied.
    #[error("{object} requires a {field}")]
    MissingField {
        /// The object under construction.
        object: &'static str,
        /// The missing field name.
        field: &'static str,
    },

    /// Scalar attributes could not be decoded.
    #[error("invalid {object} attributes: {reason}")]
    InvalidAttributes {
        /// The object under construction.
        object: &'static str,
        /// Description of the decoding failure.
        reason: String,
    },

    /// A block identifier was blank.
    #[error("block identifier cannot be empty")]
    EmptyBlockId,

    /// Serialising a finished object failed.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl BlockKitError {
    /// Creates a missing-field error.
    #[must_use]
    pub const fn missing(object: &'static str, field: &'static str) -> Self {
        Self::MissingField { object, field }
    }

    /// Creates an invalid-attributes error.
    #[must_use]
    pub fn invalid_attributes(object: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidAttributes {
            object,
            reason: reason.into(),
        }
    }

    /// Returns `true` if this error came from the validity matrix.
    #[must_use]
    pub const fn is_incompatible_element(&self) -> bool {
        matches!(self, Self::IncompatibleElement { .. })
    }
}
