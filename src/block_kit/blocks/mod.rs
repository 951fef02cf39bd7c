//! Blocks: the top-level layout units of a structured message.
//!
//! [`Block`] is a closed union over every registered block kind. Blocks
//! that host elements check each one against the validity matrix at the
//! moment it is attached, so an incompatible element never reaches a
//! block's collections.

mod actions;
mod block_id;
mod context;
mod divider;
mod file;
mod image;
mod input;
mod section;

pub use actions::ActionsBlock;
pub use block_id::BlockId;
pub use context::ContextBlock;
pub use divider::DividerBlock;
pub use file::FileBlock;
pub use image::ImageBlock;
pub use input::InputBlock;
pub use section::SectionBlock;

use super::attributes::{self, Attributes};
use super::elements::{BlockElement, IntoElement};
use super::error::{BlockKitError, BlockKitResult};
use super::kind::BlockKind;
use super::registry;
use serde::Serialize;
use serde_json::Value;

/// Any block.
///
/// Serialises with its `type` tag first:
///
/// ```json
/// { "type": "divider" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// A row of interactive elements.
    Actions(ActionsBlock),
    /// Small contextual text and images.
    Context(ContextBlock),
    /// A horizontal rule.
    Divider(DividerBlock),
    /// A remote file reference.
    File(FileBlock),
    /// A standalone image.
    Image(ImageBlock),
    /// A labelled form control.
    Input(InputBlock),
    /// Body text with optional fields and accessory.
    Section(SectionBlock),
}

impl Block {
    /// Normalises an attribute map or an existing block into a block.
    ///
    /// # Errors
    ///
    /// Returns [`BlockKitError::MissingType`] or
    /// [`BlockKitError::InvalidType`] for an attribute map without a
    /// registered `type`, or any construction error of the variant.
    ///
    /// # Examples
    ///
    /// ```
    /// use blockwire::block_kit::blocks::Block;
    /// use serde_json::json;
    ///
    /// let err = Block::factory(json!({ "type": "bogus" })).expect_err("unregistered type");
    /// assert!(err.to_string().contains("actions, context, divider"));
    /// ```
    pub fn factory(input: impl IntoBlock) -> BlockKitResult<Self> {
        input.into_block()
    }

    /// Returns the block kind.
    #[must_use]
    pub const fn kind(&self) -> BlockKind {
        match self {
            Self::Actions(_) => BlockKind::Actions,
            Self::Context(_) => BlockKind::Context,
            Self::Divider(_) => BlockKind::Divider,
            Self::File(_) => BlockKind::File,
            Self::Image(_) => BlockKind::Image,
            Self::Input(_) => BlockKind::Input,
            Self::Section(_) => BlockKind::Section,
        }
    }

    /// Returns the block identifier, if set.
    #[must_use]
    pub const fn block_id(&self) -> Option<&BlockId> {
        match self {
            Self::Actions(block) => block.block_id(),
            Self::Context(block) => block.block_id(),
            Self::Divider(block) => block.block_id(),
            Self::File(block) => block.block_id(),
            Self::Image(block) => block.block_id(),
            Self::Input(block) => block.block_id(),
            Self::Section(block) => block.block_id(),
        }
    }

    /// Serialises the block to its wire document.
    ///
    /// # Errors
    ///
    /// Returns [`BlockKitError::Serialization`] if encoding fails.
    pub fn to_document(&self) -> BlockKitResult<Value> {
        serde_json::to_value(self).map_err(|e| BlockKitError::Serialization(e.to_string()))
    }
}

/// Inputs that can be normalised into a [`Block`].
pub trait IntoBlock {
    /// Converts the input.
    ///
    /// # Errors
    ///
    /// Returns a [`BlockKitError`] when the input cannot describe a
    /// registered block.
    fn into_block(self) -> BlockKitResult<Block>;
}

impl IntoBlock for Block {
    fn into_block(self) -> BlockKitResult<Block> {
        Ok(self)
    }
}

impl IntoBlock for Attributes {
    fn into_block(self) -> BlockKitResult<Block> {
        let tag = attributes::type_tag("block", &self)?;
        let kind = BlockKind::try_from(tag.as_str()).inspect_err(|_| {
            tracing::debug!(tag = %tag, "unresolvable block type");
        })?;
        registry::block_constructor(kind)(self)
    }
}

impl IntoBlock for Value {
    fn into_block(self) -> BlockKitResult<Block> {
        attributes::object("block", "Block", self)?.into_block()
    }
}

macro_rules! block_variant {
    ($($variant:ident($block:ty)),+ $(,)?) => {
        $(
            impl From<$block> for Block {
                fn from(block: $block) -> Self {
                    Self::$variant(block)
                }
            }

            impl IntoBlock for $block {
                fn into_block(self) -> BlockKitResult<Block> {
                    Ok(Block::$variant(self))
                }
            }
        )+
    };
}

block_variant!(
    Actions(ActionsBlock),
    Context(ContextBlock),
    Divider(DividerBlock),
    File(FileBlock),
    Image(ImageBlock),
    Input(InputBlock),
    Section(SectionBlock),
);

/// Normalises `input` and checks it may be hosted by `host` blocks.
///
/// Nothing is attached here; callers store the returned element only once
/// every check has passed.
pub(crate) fn attach(host: BlockKind, input: impl IntoElement) -> BlockKitResult<BlockElement> {
    let element = input.into_element()?;
    let kind = element.kind();
    if !registry::is_valid_for(kind, host) {
        tracing::debug!(element = %kind, block = %host, "rejected incompatible block element");
        return Err(BlockKitError::IncompatibleElement {
            element: kind,
            block: host,
        });
    }
    Ok(element)
}

/// Normalises and checks every input, failing on the first rejection.
pub(crate) fn attach_all<I>(host: BlockKind, inputs: I) -> BlockKitResult<Vec<BlockElement>>
where
    I: IntoIterator,
    I::Item: IntoElement,
{
    inputs
        .into_iter()
        .map(|input| attach(host, input))
        .collect()
}
