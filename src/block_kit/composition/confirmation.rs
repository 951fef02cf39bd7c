//! Confirmation dialogs shown before an interactive element fires.

use super::text::{self, IntoText, Text};
use crate::block_kit::attributes::{self, Attributes};
use crate::block_kit::error::BlockKitResult;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A confirmation dialog.
///
/// All four texts are required. The explanatory `text` may be plain or
/// markdown; the title and button labels must be plain.
///
/// # Examples
///
/// ```
/// use blockwire::block_kit::composition::Confirmation;
///
/// let confirm = Confirmation::new("Delete?", "This cannot be undone.", "Delete", "Keep")
///     .expect("all texts supplied");
/// assert_eq!(confirm.deny().text(), "Keep");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Confirmation {
    title: Text,
    text: Text,
    confirm: Text,
    deny: Text,
}

impl Confirmation {
    /// Creates a confirmation dialog.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::block_kit::BlockKitError`] when the title or
    /// either button label is not plain text.
    pub fn new(
        title: impl IntoText,
        text: impl IntoText,
        confirm: impl IntoText,
        deny: impl IntoText,
    ) -> BlockKitResult<Self> {
        Ok(Self {
            title: text::plain(title)?,
            text: text::any(text)?,
            confirm: text::plain(confirm)?,
            deny: text::plain(deny)?,
        })
    }

    /// Builds a confirmation dialog from its attribute map.
    ///
    /// # Errors
    ///
    /// Returns [`crate::block_kit::BlockKitError::MissingField`] naming the
    /// first absent text, checked before anything is constructed.
    pub fn from_attributes(attributes: Attributes) -> BlockKitResult<Self> {
        let raw: ConfirmationAttributes = attributes::decode("confirmation", attributes)?;
        let title = attributes::require("confirmation", "title", raw.title)?;
        let text = attributes::require("confirmation", "text", raw.text)?;
        let confirm = attributes::require("confirmation", "confirm", raw.confirm)?;
        let deny = attributes::require("confirmation", "deny", raw.deny)?;
        Self::new(title, text, confirm, deny)
    }

    /// Returns the dialog title.
    #[must_use]
    pub const fn title(&self) -> &Text {
        &self.title
    }

    /// Returns the explanatory text.
    #[must_use]
    pub const fn text(&self) -> &Text {
        &self.text
    }

    /// Returns the confirm button label.
    #[must_use]
    pub const fn confirm(&self) -> &Text {
        &self.confirm
    }

    /// Returns the deny button label.
    #[must_use]
    pub const fn deny(&self) -> &Text {
        &self.deny
    }
}

#[derive(Debug, Deserialize)]
struct ConfirmationAttributes {
    title: Option<Value>,
    text: Option<Value>,
    confirm: Option<Value>,
    deny: Option<Value>,
}

/// Inputs that can be normalised into a [`Confirmation`].
pub trait IntoConfirmation {
    /// Converts the input.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::block_kit::BlockKitError`] when the input cannot
    /// describe a confirmation dialog.
    fn into_confirmation(self) -> BlockKitResult<Confirmation>;
}

impl IntoConfirmation for Confirmation {
    fn into_confirmation(self) -> BlockKitResult<Confirmation> {
        Ok(self)
    }
}

impl IntoConfirmation for Attributes {
    fn into_confirmation(self) -> BlockKitResult<Confirmation> {
        Confirmation::from_attributes(self)
    }
}

impl IntoConfirmation for Value {
    fn into_confirmation(self) -> BlockKitResult<Confirmation> {
        attributes::object("confirm", "Confirmation", self)?.into_confirmation()
    }
}
