//! Context block.

use super::actions::ElementsAttributes;
use super::block_id::{self, BlockId, block_id_accessors};
use crate::block_kit::attributes::{self, Attributes};
use crate::block_kit::elements::{BlockElement, IntoElement};
use crate::block_kit::error::BlockKitResult;
use crate::block_kit::kind::BlockKind;
use serde::Serialize;

/// Small contextual text fragments and images.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContextBlock {
    elements: Vec<BlockElement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    block_id: Option<BlockId>,
}

impl ContextBlock {
    /// Creates an empty block.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
            block_id: None,
        }
    }

    /// Builds a block from its attribute map.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::block_kit::BlockKitError`] when any element is
    /// invalid or cannot be hosted by context blocks.
    pub fn from_attributes(attributes: Attributes) -> BlockKitResult<Self> {
        let raw: ElementsAttributes = attributes::decode("context block", attributes)?;
        let mut block = Self::new();
        block.block_id = block_id::parse(raw.block_id)?;
        block.set_elements(raw.elements.unwrap_or_default())?;
        Ok(block)
    }

    /// Appends an element.
    ///
    /// # Errors
    ///
    /// Returns [`crate::block_kit::BlockKitError::IncompatibleElement`]
    /// for anything but text and images, or any construction error of the
    /// input.
    pub fn add_element(&mut self, element: impl IntoElement) -> BlockKitResult<()> {
        self.elements
            .push(super::attach(BlockKind::Context, element)?);
        Ok(())
    }

    /// Appends an element, builder style.
    ///
    /// # Errors
    ///
    /// See [`Self::add_element`].
    pub fn with_element(mut self, element: impl IntoElement) -> BlockKitResult<Self> {
        self.add_element(element)?;
        Ok(self)
    }

    /// Replaces every element. The block is unchanged if any input fails.
    ///
    /// # Errors
    ///
    /// See [`Self::add_element`].
    pub fn set_elements<I>(&mut self, elements: I) -> BlockKitResult<()>
    where
        I: IntoIterator,
        I::Item: IntoElement,
    {
        self.elements = super::attach_all(BlockKind::Context, elements)?;
        Ok(())
    }

    /// Removes every element.
    pub fn clear_elements(&mut self) {
        self.elements.clear();
    }

    /// Returns the elements in insertion order.
    #[must_use]
    pub fn elements(&self) -> &[BlockElement] {
        &self.elements
    }
}

block_id_accessors!(ContextBlock);
