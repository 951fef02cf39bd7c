//! Divider block.

use super::block_id::{self, BlockId, block_id_accessors};
use crate::block_kit::attributes::{self, Attributes};
use crate::block_kit::error::BlockKitResult;
use serde::{Deserialize, Serialize};

/// A horizontal rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DividerBlock {
    #[serde(skip_serializing_if = "Option::is_none")]
    block_id: Option<BlockId>,
}

impl DividerBlock {
    /// Creates a divider.
    #[must_use]
    pub const fn new() -> Self {
        Self { block_id: None }
    }

    /// Builds a divider from its attribute map.
    ///
    /// # Errors
    ///
    /// Returns [`crate::block_kit::BlockKitError::EmptyBlockId`] for a
    /// blank `block_id`.
    pub fn from_attributes(attributes: Attributes) -> BlockKitResult<Self> {
        let raw: DividerAttributes = attributes::decode("divider block", attributes)?;
        Ok(Self {
            block_id: block_id::parse(raw.block_id)?,
        })
    }
}

block_id_accessors!(DividerBlock);

#[derive(Debug, Deserialize)]
struct DividerAttributes {
    block_id: Option<String>,
}
