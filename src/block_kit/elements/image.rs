//! Image element and the image payload it shares with the image block.

use crate::block_kit::attributes::{self, Attributes};
use crate::block_kit::composition::{self, IntoText, Text};
use crate::block_kit::error::BlockKitResult;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Image URL, alternative text, and optional plain title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageContent {
    image_url: String,
    alt_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<Text>,
}

impl ImageContent {
    /// Creates untitled image content.
    #[must_use]
    pub fn new(image_url: impl Into<String>, alt_text: impl Into<String>) -> Self {
        Self {
            image_url: image_url.into(),
            alt_text: alt_text.into(),
            title: None,
        }
    }

    /// Builds image content from the attribute map of `object`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::block_kit::BlockKitError::MissingField`] without an
    /// `image_url` or `alt_text`, or any error from the title.
    pub(crate) fn from_attributes(
        object: &'static str,
        attributes: Attributes,
    ) -> BlockKitResult<Self> {
        attributes::decode::<ImageAttributes>(object, attributes)?.into_content(object)
    }

    /// Replaces the title.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::block_kit::BlockKitError`] when the title is not
    /// plain text.
    pub fn set_title(&mut self, title: impl IntoText) -> BlockKitResult<()> {
        self.title = Some(composition::plain_text(title)?);
        Ok(())
    }

    /// Returns the image URL.
    #[must_use]
    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    /// Returns the alternative text.
    #[must_use]
    pub fn alt_text(&self) -> &str {
        &self.alt_text
    }

    /// Returns the title, if set.
    #[must_use]
    pub const fn title(&self) -> Option<&Text> {
        self.title.as_ref()
    }
}

/// Raw image attributes, shared by the image element and image block.
#[derive(Debug, Deserialize)]
pub(crate) struct ImageAttributes {
    image_url: Option<String>,
    alt_text: Option<String>,
    title: Option<Value>,
}

impl ImageAttributes {
    /// Checks required fields and normalises the title.
    pub(crate) fn into_content(self, object: &'static str) -> BlockKitResult<ImageContent> {
        let mut content = ImageContent::new(
            attributes::require(object, "image_url", self.image_url)?,
            attributes::require(object, "alt_text", self.alt_text)?,
        );
        if let Some(title) = self.title {
            content.set_title(title)?;
        }
        Ok(content)
    }
}

/// A small image shown inside section or context blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageElement {
    #[serde(flatten)]
    content: ImageContent,
}

impl ImageElement {
    /// Creates an untitled image element.
    #[must_use]
    pub fn new(image_url: impl Into<String>, alt_text: impl Into<String>) -> Self {
        Self {
            content: ImageContent::new(image_url, alt_text),
        }
    }

    /// Builds an image element from its attribute map.
    ///
    /// # Errors
    ///
    /// See [`ImageContent`]; the same fields are required.
    pub fn from_attributes(attributes: Attributes) -> BlockKitResult<Self> {
        Ok(Self {
            content: ImageContent::from_attributes("image element", attributes)?,
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
