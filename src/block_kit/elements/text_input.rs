//! Free-text input element.

use crate::block_kit::attributes::{self, Attributes};
use crate::block_kit::composition::{self, IntoText, Text};
use crate::block_kit::error::BlockKitResult;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A plain-text input, single or multi-line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextInput {
    action_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    placeholder: Option<Text>,
    #[serde(skip_serializing_if = "Option::is_none")]
    initial_value: Option<String>,
    #[serde(skip_serializing_if = "attributes::is_false")]
    multiline: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    min_length: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_length: Option<u32>,
}

impl TextInput {
    /// Creates a single-line input.
    #[must_use]
    pub fn new(action_id: impl Into<String>) -> Self {
        Self {
            action_id: Some(action_id.into()),
            ..Self::empty()
        }
    }

    const fn empty() -> Self {
        Self {
            action_id: None,
            placeholder: None,
            initial_value: None,
            multiline: false,
            min_length: None,
            max_length: None,
        }
    }

    /// Builds an input from its attribute map.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::block_kit::BlockKitError`] when a scalar field
    /// does not decode or the placeholder is not plain text.
    pub fn from_attributes(attributes: Attributes) -> BlockKitResult<Self> {
        let raw: TextInputAttributes = attributes::decode("plain text input", attributes)?;
        let placeholder = raw.placeholder.map(composition::plain_text).transpose()?;
        Ok(Self {
            action_id: raw.action_id,
            placeholder,
            initial_value: raw.initial_value,
            multiline: raw.multiline.unwrap_or(false),
            min_length: raw.min_length,
            max_length: raw.max_length,
        })
    }

    /// Sets the placeholder shown while the input is empty.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::block_kit::BlockKitError`] when the placeholder
    /// is not plain text.
    pub fn with_placeholder(mut self, placeholder: impl IntoText) -> BlockKitResult<Self> {
        self.placeholder = Some(composition::plain_text(placeholder)?);
        Ok(self)
    }

    /// Sets the pre-filled value.
    #[must_use]
    pub fn with_initial_value(mut self, value: impl Into<String>) -> Self {
        self.initial_value = Some(value.into());
        self
    }

    /// Switches between single and multi-line entry.
    #[must_use]
    pub const fn with_multiline(mut self, multiline: bool) -> Self {
        self.multiline = multiline;
        self
    }

    /// Sets the accepted length range; either bound may be open.
    #[must_use]
    pub const fn with_length(mut self, min: Option<u32>, max: Option<u32>) -> Self {
        self.min_length = min;
        self.max_length = max;
        self
    }

    /// Returns the action identifier, if set.
    #[must_use]
    pub fn action_id(&self) -> Option<&str> {
        self.action_id.as_deref()
    }

    /// Returns the pre-filled value, if set.
    #[must_use]
    pub fn initial_value(&self) -> Option<&str> {
        self.initial_value.as_deref()
    }

    /// Returns `true` for multi-line entry.
    #[must_use]
    pub const fn is_multiline(&self) -> bool {
        self.multiline
    }

    /// Returns the minimum length, if set.
    #[must_use]
    pub const fn min_length(&self) -> Option<u32> {
        self.min_length
    }

    /// Returns the maximum length, if set.
    #[must_use]
    pub const fn max_length(&self) -> Option<u32> {
        self.max_length
    }
}

#[derive(Debug, Deserialize)]
struct TextInputAttributes {
    action_id: Option<String>,
    placeholder: Option<Value>,
    initial_value: Option<String>,
    multiline: Option<bool>,
    min_length: Option<u32>,
    max_length: Option<u32>,
}
