//! Button element.

use super::options::confirmable;
use crate::block_kit::attributes::{self, Attributes};
use crate::block_kit::composition::{self, Confirmation, IntoText, Text};
use crate::block_kit::elements::Confirmable;
use crate::block_kit::error::BlockKitResult;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Visual emphasis of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonStyle {
    /// Neutral styling.
    #[default]
    Default,
    /// Green call-to-action styling.
    Primary,
    /// Red destructive styling.
    Danger,
}

/// A clickable button.
///
/// `action_id` is always serialised, as `null` when unset; `url`, `value`,
/// `style`, and `confirm` are emitted only when set.
///
/// # Examples
///
/// ```
/// use blockwire::block_kit::elements::{Button, ButtonStyle};
///
/// let button = Button::new("Approve", "approve")
///     .expect("plain label")
///     .with_style(ButtonStyle::Primary);
/// assert_eq!(button.action_id(), Some("approve"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Button {
    text: Text,
    action_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    style: Option<ButtonStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    confirm: Option<Confirmation>,
}

impl Button {
    /// Creates a button with a plain label and an action identifier.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::block_kit::BlockKitError`] when the label is not
    /// plain text.
    pub fn new(text: impl IntoText, action_id: impl Into<String>) -> BlockKitResult<Self> {
        let mut button = Self::labelled(text)?;
        button.action_id = Some(action_id.into());
        Ok(button)
    }

    fn labelled(text: impl IntoText) -> BlockKitResult<Self> {
        Ok(Self {
            text: composition::plain_text(text)?,
            action_id: None,
            url: None,
            value: None,
            style: None,
            confirm: None,
        })
    }

    /// Builds a button from its attribute map.
    ///
    /// # Errors
    ///
    /// Returns [`crate::block_kit::BlockKitError::MissingField`] without a
    /// `text`, [`crate::block_kit::BlockKitError::InvalidAttributes`] for an
    /// unknown `style`, or any error from the nested objects.
    pub fn from_attributes(attributes: Attributes) -> BlockKitResult<Self> {
        let raw: ButtonAttributes = attributes::decode("button", attributes)?;
        let mut button = Self::labelled(attributes::require("button", "text", raw.text)?)?;
        button.action_id = raw.action_id;
        button.url = raw.url;
        button.value = raw.value;
        button.style = raw.style;
        if let Some(confirm) = raw.confirm {
            button.set_confirm(confirm)?;
        }
        Ok(button)
    }

    /// Sets the URL opened when the button is clicked.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Sets the value sent with the interaction payload.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Sets the visual style.
    #[must_use]
    pub const fn with_style(mut self, style: ButtonStyle) -> Self {
        self.style = Some(style);
        self
    }

    /// Replaces the action identifier.
    pub fn set_action_id(&mut self, action_id: impl Into<String>) {
        self.action_id = Some(action_id.into());
    }

    /// Returns the label.
    #[must_use]
    pub const fn text(&self) -> &Text {
        &self.text
    }

    /// Returns the action identifier, if set.
    #[must_use]
    pub fn action_id(&self) -> Option<&str> {
        self.action_id.as_deref()
    }

    /// Returns the URL, if set.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// Returns the value, if set.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Returns the style, if set.
    #[must_use]
    pub const fn style(&self) -> Option<ButtonStyle> {
        self.style
    }
}

confirmable!(Button);

#[derive(Debug, Deserialize)]
struct ButtonAttributes {
    text: Option<Value>,
    action_id: Option<String>,
    url: Option<String>,
    value: Option<String>,
    style: Option<ButtonStyle>,
    confirm: Option<Value>,
}
