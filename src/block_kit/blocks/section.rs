//! Section block.

use super::block_id::{self, BlockId, block_id_accessors};
use crate::block_kit::attributes::{self, Attributes};
use crate::block_kit::composition::{self, IntoText, Text};
use crate::block_kit::elements::{BlockElement, IntoElement};
use crate::block_kit::error::BlockKitResult;
use crate::block_kit::kind::BlockKind;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body text with optional side-by-side fields and one accessory element.
///
/// `fields` is omitted while empty and `accessory` while unset.
///
/// # Examples
///
/// ```
/// use blockwire::block_kit::blocks::SectionBlock;
/// use blockwire::block_kit::elements::Button;
///
/// let section = SectionBlock::new("Deploy finished")
///     .expect("plain body")
///     .with_accessory(Button::new("Logs", "logs").expect("plain label"))
///     .expect("buttons belong in sections");
/// assert!(section.accessory().is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionBlock {
    text: Text,
    #[serde(skip_serializing_if = "Option::is_none")]
    block_id: Option<BlockId>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    fields: Vec<Text>,
    #[serde(skip_serializing_if = "Option::is_none")]
    accessory: Option<BlockElement>,
}

impl SectionBlock {
    /// Creates a section; bare strings become plain text.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::block_kit::BlockKitError`] when the input cannot
    /// describe a text object.
    pub fn new(text: impl IntoText) -> BlockKitResult<Self> {
        Ok(Self {
            text: composition::any_text(text)?,
            block_id: None,
            fields: Vec::new(),
            accessory: None,
        })
    }

    /// Builds a section from its attribute map.
    ///
    /// # Errors
    ///
    /// Returns [`crate::block_kit::BlockKitError::MissingField`] without a
    /// `text`, or any error from the fields or accessory.
    pub fn from_attributes(attributes: Attributes) -> BlockKitResult<Self> {
        let raw: SectionAttributes = attributes::decode("section block", attributes)?;
        let mut section = Self::new(attributes::require("section block", "text", raw.text)?)?;
        section.block_id = block_id::parse(raw.block_id)?;
        section.set_fields(raw.fields.unwrap_or_default())?;
        if let Some(accessory) = raw.accessory {
            section.set_accessory(accessory)?;
        }
        Ok(section)
    }

    /// Appends a field.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::block_kit::BlockKitError`] when the input cannot
    /// describe a text object.
    pub fn add_field(&mut self, field: impl IntoText) -> BlockKitResult<()> {
        self.fields.push(composition::any_text(field)?);
        Ok(())
    }

    /// Appends a field, builder style.
    ///
    /// # Errors
    ///
    /// See [`Self::add_field`].
    pub fn with_field(mut self, field: impl IntoText) -> BlockKitResult<Self> {
        self.add_field(field)?;
        Ok(self)
    }

    /// Replaces every field. The section is unchanged if any input fails.
    ///
    /// # Errors
    ///
    /// See [`Self::add_field`].
    pub fn set_fields<I>(&mut self, fields: I) -> BlockKitResult<()>
    where
        I: IntoIterator,
        I::Item: IntoText,
    {
        self.fields = fields
            .into_iter()
            .map(composition::any_text)
            .collect::<BlockKitResult<_>>()?;
        Ok(())
    }

    /// Removes every field.
    pub fn clear_fields(&mut self) {
        self.fields.clear();
    }

    /// Sets the accessory element.
    ///
    /// # Errors
    ///
    /// Returns [`crate::block_kit::BlockKitError::IncompatibleElement`]
    /// when the element cannot be hosted by sections, or any construction
    /// error of the input.
    pub fn set_accessory(&mut self, accessory: impl IntoElement) -> BlockKitResult<()> {
        self.accessory = Some(super::attach(BlockKind::Section, accessory)?);
        Ok(())
    }

    /// Sets the accessory element, builder style.
    ///
    /// # Errors
    ///
    /// See [`Self::set_accessory`].
    pub fn with_accessory(mut self, accessory: impl IntoElement) -> BlockKitResult<Self> {
        self.set_accessory(accessory)?;
        Ok(self)
    }

    /// Removes the accessory element.
    pub fn clear_accessory(&mut self) {
        self.accessory = None;
    }

    /// Returns the body text.
    #[must_use]
    pub const fn text(&self) -> &Text {
        &self.text
    }

    /// Returns the fields in insertion order.
    #[must_use]
    pub fn fields(&self) -> &[Text] {
        &self.fields
    }

    /// Returns the accessory element, if set.
    #[must_use]
    pub const fn accessory(&self) -> Option<&BlockElement> {
        self.accessory.as_ref()
    }
}

block_id_accessors!(SectionBlock);

#[derive(Debug, Deserialize)]
struct SectionAttributes {
    text: Option<Value>,
    block_id: Option<String>,
    fields: Option<Vec<Value>>,
    accessory: Option<Value>,
}
