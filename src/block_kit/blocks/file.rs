//! File block.

use super::block_id::{self, BlockId, block_id_accessors};
use crate::block_kit::attributes::{self, Attributes};
use crate::block_kit::error::BlockKitResult;
use serde::{Deserialize, Serialize};

const REMOTE_SOURCE: &str = "remote";

/// A reference to a remote file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileBlock {
    external_id: String,
    source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    block_id: Option<BlockId>,
}

impl FileBlock {
    /// Creates a block for a remote file.
    #[must_use]
    pub fn new(external_id: impl Into<String>) -> Self {
        Self {
            external_id: external_id.into(),
            source: REMOTE_SOURCE.to_owned(),
            block_id: None,
        }
    }

    /// Builds a block from its attribute map.
    ///
    /// # Errors
    ///
    /// Returns [`crate::block_kit::BlockKitError::MissingField`] without an
    /// `external_id`.
    pub fn from_attributes(attributes: Attributes) -> BlockKitResult<Self> {
        let raw: FileAttributes = attributes::decode("file block", attributes)?;
        let mut block = Self::new(attributes::require("file block", "external_id", raw.external_id)?);
        if let Some(source) = raw.source {
            block.source = source;
        }
        block.block_id = block_id::parse(raw.block_id)?;
        Ok(block)
    }

    /// Overrides the file source.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Returns the external file identifier.
    #[must_use]
    pub fn external_id(&self) -> &str {
        &self.external_id
    }

    /// Returns the file source.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }
}

block_id_accessors!(FileBlock);

#[derive(Debug, Deserialize)]
struct FileAttributes {
    external_id: Option<String>,
    source: Option<String>,
    block_id: Option<String>,
}
