//! Image block.

use super::block_id::{self, BlockId, block_id_accessors};
use crate::block_kit::attributes::{self, Attributes};
use crate::block_kit::composition::IntoText;
use crate::block_kit::elements::ImageContent;
use crate::block_kit::elements::image::ImageAttributes;
use crate::block_kit::error::BlockKitResult;
use serde::{Deserialize, Serialize};

/// A standalone image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageBlock {
    #[serde(flatten)]
    content: ImageContent,
    #[serde(skip_serializing_if = "Option::is_none")]
    block_id: Option<BlockId>,
}

impl ImageBlock {
    /// Creates an untitled image block.
    #[must_use]
    pub fn new(image_url: impl Into<String>, alt_text: impl Into<String>) -> Self {
        Self {
            content: ImageContent::new(image_url, alt_text),
            block_id: None,
        }
    }

    /// Builds a block from its attribute map.
    ///
    /// # Errors
    ///
    /// Returns [`crate::block_kit::BlockKitError::MissingField`] without an
    /// `image_url` or `alt_text`, or any error from the title.
    pub fn from_attributes(attributes: Attributes) -> BlockKitResult<Self> {
        let raw: ImageBlockAttributes = attributes::decode("image block", attributes)?;
        Ok(Self {
            content: raw.image.into_content("image block")?,
            block_id: block_id::parse(raw.block_id)?,
        })
    }

    /// Sets the title.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::block_kit::BlockKitError`] when the title is not
    /// plain text.
    pub fn with_title(mut self, title: impl IntoText) -> BlockKitResult<Self> {
        self.content.set_title(title)?;
        Ok(self)
    }

    /// Returns the image payload.
    #[must_use]
    pub const fn content(&self) -> &ImageContent {
        &self.content
    }
}

block_id_accessors!(ImageBlock);

#[derive(Debug, Deserialize)]
struct ImageBlockAttributes {
    #[serde(flatten)]
    image: ImageAttributes,
    block_id: Option<String>,
}
