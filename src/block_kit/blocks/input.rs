//! Input block.

use super::block_id::{self, BlockId, block_id_accessors};
use crate::block_kit::attributes::{self, Attributes};
use crate::block_kit::composition::{self, IntoText, Text};
use crate::block_kit::elements::{BlockElement, IntoElement};
use crate::block_kit::error::BlockKitResult;
use crate::block_kit::kind::BlockKind;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A labelled form control wrapping exactly one element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputBlock {
    label: Text,
    element: BlockElement,
    #[serde(skip_serializing_if = "Option::is_none")]
    block_id: Option<BlockId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hint: Option<Text>,
    #[serde(skip_serializing_if = "attributes::is_false")]
    optional: bool,
}

impl InputBlock {
    /// Creates an input block.
    ///
    /// # Errors
    ///
    /// Returns [`crate::block_kit::BlockKitError::IncompatibleElement`]
    /// when the element cannot be hosted by input blocks, or any
    /// construction error of the inputs.
    pub fn new(label: impl IntoText, element: impl IntoElement) -> BlockKitResult<Self> {
        Ok(Self {
            label: composition::any_text(label)?,
            element: super::attach(BlockKind::Input, element)?,
            block_id: None,
            hint: None,
            optional: false,
        })
    }

    /// Builds a block from its attribute map.
    ///
    /// # Errors
    ///
    /// Returns [`crate::block_kit::BlockKitError::MissingField`] without a
    /// `label` or `element`, checked before either is constructed.
    pub fn from_attributes(attributes: Attributes) -> BlockKitResult<Self> {
        let raw: InputAttributes = attributes::decode("input block", attributes)?;
        let label = attributes::require("input block", "label", raw.label)?;
        let element = attributes::require("input block", "element", raw.element)?;

        let mut block = Self::new(label, element)?;
        block.block_id = block_id::parse(raw.block_id)?;
        if let Some(hint) = raw.hint {
            block.set_hint(hint)?;
        }
        block.optional = raw.optional.unwrap_or(false);
        Ok(block)
    }

    /// Replaces the wrapped element.
    ///
    /// # Errors
    ///
    /// See [`Self::new`].
    pub fn set_element(&mut self, element: impl IntoElement) -> BlockKitResult<()> {
        self.element = super::attach(BlockKind::Input, element)?;
        Ok(())
    }

    /// Replaces the hint shown beneath the control.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::block_kit::BlockKitError`] when the hint is not
    /// plain text.
    pub fn set_hint(&mut self, hint: impl IntoText) -> BlockKitResult<()> {
        self.hint = Some(composition::plain_text(hint)?);
        Ok(())
    }

    /// Sets the hint, builder style.
    ///
    /// # Errors
    ///
    /// See [`Self::set_hint`].
    pub fn with_hint(mut self, hint: impl IntoText) -> BlockKitResult<Self> {
        self.set_hint(hint)?;
        Ok(self)
    }

    /// Marks whether the control may be left empty.
    #[must_use]
    pub const fn with_optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    /// Returns the label.
    #[must_use]
    pub const fn label(&self) -> &Text {
        &self.label
    }

    /// Returns the wrapped element.
    #[must_use]
    pub const fn element(&self) -> &BlockElement {
        &self.element
    }

    /// Returns the hint, if set.
    #[must_use]
    pub const fn hint(&self) -> Option<&Text> {
        self.hint.as_ref()
    }

    /// Returns `true` if the control may be left empty.
    #[must_use]
    pub const fn is_optional(&self) -> bool {
        self.optional
    }
}

block_id_accessors!(InputBlock);

#[derive(Debug, Deserialize)]
struct InputAttributes {
    label: Option<Value>,
    element: Option<Value>,
    block_id: Option<String>,
    hint: Option<Value>,
    optional: Option<bool>,
}
