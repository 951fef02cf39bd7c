//! Caller-supplied block identifiers.

use crate::block_kit::error::{BlockKitError, BlockKitResult};
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

/// Identifier echoed back in interaction payloads.
///
/// Blocks never generate one on their own; an unset identifier is omitted
/// from the wire document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct BlockId(String);

impl BlockId {
    /// Creates an identifier.
    ///
    /// # Errors
    ///
    /// Returns [`BlockKitError::EmptyBlockId`] for a blank identifier.
    pub fn new(id: impl Into<String>) -> BlockKitResult<Self> {
        let value = id.into();
        if value.trim().is_empty() {
            return Err(BlockKitError::EmptyBlockId);
        }
        Ok(Self(value))
    }

    /// Generates a random identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<&str> for BlockId {
    type Error = BlockKitError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Generates block-id accessors for blocks holding a
/// `block_id: Option<BlockId>` field.
macro_rules! block_id_accessors {
    ($block:ty) => {
        impl $block {
            /// Sets the block identifier.
            #[must_use]
            pub fn with_block_id(mut self, block_id: $crate::block_kit::blocks::BlockId) -> Self {
                self.block_id = Some(block_id);
                self
            }

            /// Replaces or clears the block identifier.
            pub fn set_block_id(&mut self, block_id: Option<$crate::block_kit::blocks::BlockId>) {
                self.block_id = block_id;
            }

            /// Returns the block identifier, if set.
            #[must_use]
            pub const fn block_id(&self) -> Option<&$crate::block_kit::blocks::BlockId> {
                self.block_id.as_ref()
            }
        }
    };
}

pub(crate) use block_id_accessors;

/// Parses an optional identifier read from an attribute map.
pub(crate) fn parse(raw: Option<String>) -> BlockKitResult<Option<BlockId>> {
    raw.map(BlockId::new).transpose()
}
