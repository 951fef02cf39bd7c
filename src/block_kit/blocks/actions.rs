//! Actions block.

use super::block_id::{self, BlockId, block_id_accessors};
use crate::block_kit::attributes::{self, Attributes};
use crate::block_kit::elements::{BlockElement, IntoElement};
use crate::block_kit::error::BlockKitResult;
use crate::block_kit::kind::BlockKind;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A row of interactive elements.
///
/// # Examples
///
/// ```
/// use blockwire::block_kit::blocks::ActionsBlock;
/// use blockwire::block_kit::composition::Text;
/// use blockwire::block_kit::elements::Button;
///
/// let mut actions = ActionsBlock::new();
/// actions
///     .add_element(Button::new("Go", "go").expect("plain label"))
///     .expect("buttons belong in actions blocks");
/// assert!(actions.add_element(Text::plain("note")).is_err());
/// assert_eq!(actions.elements().len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ActionsBlock {
    elements: Vec<BlockElement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    block_id: Option<BlockId>,
}

impl ActionsBlock {
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
    /// invalid or cannot be hosted by actions blocks.
    pub fn from_attributes(attributes: Attributes) -> BlockKitResult<Self> {
        let raw: ElementsAttributes = attributes::decode("actions block", attributes)?;
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
    /// when the element cannot be hosted by actions blocks, or any
    /// construction error of the input.
    pub fn add_element(&mut self, element: impl IntoElement) -> BlockKitResult<()> {
        self.elements
            .push(super::attach(BlockKind::Actions, element)?);
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
        self.elements = super::attach_all(BlockKind::Actions, elements)?;
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

block_id_accessors!(ActionsBlock);

/// Attributes of the element-list blocks.
#[derive(Debug, Deserialize)]
pub(super) struct ElementsAttributes {
    pub(super) elements: Option<Vec<Value>>,
    pub(super) block_id: Option<String>,
}
