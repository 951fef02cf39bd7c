//! Selectable options offered by menus, radio buttons, and checkboxes.

use super::text::{self, IntoText, Text};
use crate::block_kit::attributes::{self, Attributes};
use crate::block_kit::error::BlockKitResult;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single selectable option.
///
/// `initially_selected` drives the owning element's `initial_option(s)`
/// and is never serialised on the option itself.
///
/// # Examples
///
/// ```
/// use blockwire::block_kit::composition::SelectOption;
///
/// let option = SelectOption::new("Small", "size_s")
///     .expect("plain label")
///     .selected(true);
/// assert!(option.is_initially_selected());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    text: Text,
    value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<Text>,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<String>,
    #[serde(skip)]
    initially_selected: bool,
}

impl SelectOption {
    /// Creates an unselected option.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::block_kit::BlockKitError`] when the label is not
    /// plain text.
    pub fn new(text: impl IntoText, value: impl Into<String>) -> BlockKitResult<Self> {
        Ok(Self {
            text: text::plain(text)?,
            value: value.into(),
            description: None,
            url: None,
            initially_selected: false,
        })
    }

    /// Builds an option from its attribute map.
    ///
    /// The selection flag is read from `selected` (or `initially_selected`).
    ///
    /// # Errors
    ///
    /// Returns [`crate::block_kit::BlockKitError::MissingField`] without
    /// `text` or `value`, or any error from the nested text objects.
    pub fn from_attributes(attributes: Attributes) -> BlockKitResult<Self> {
        let raw: OptionAttributes = attributes::decode("option", attributes)?;
        let mut option = Self::new(
            attributes::require("option", "text", raw.text)?,
            attributes::require("option", "value", raw.value)?,
        )?
        .selected(raw.selected.unwrap_or(false));

        if let Some(description) = raw.description {
            option.set_description(description)?;
        }
        option.url = raw.url;
        Ok(option)
    }

    /// Sets the description shown beneath the label.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::block_kit::BlockKitError`] when the description
    /// is not plain text.
    pub fn with_description(mut self, description: impl IntoText) -> BlockKitResult<Self> {
        self.set_description(description)?;
        Ok(self)
    }

    /// Replaces the description.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::block_kit::BlockKitError`] when the description
    /// is not plain text.
    pub fn set_description(&mut self, description: impl IntoText) -> BlockKitResult<()> {
        self.description = Some(text::plain(description)?);
        Ok(())
    }

    /// Sets the URL opened when the option is chosen from an overflow menu.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Marks the option as initially selected.
    #[must_use]
    pub const fn selected(mut self, selected: bool) -> Self {
        self.initially_selected = selected;
        self
    }

    /// Returns the label.
    #[must_use]
    pub const fn text(&self) -> &Text {
        &self.text
    }

    /// Returns the submitted value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the description, if set.
    #[must_use]
    pub const fn description(&self) -> Option<&Text> {
        self.description.as_ref()
    }

    /// Returns the URL, if set.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// Returns `true` if the option starts out selected.
    #[must_use]
    pub const fn is_initially_selected(&self) -> bool {
        self.initially_selected
    }
}

#[derive(Debug, Deserialize)]
struct OptionAttributes {
    text: Option<Value>,
    value: Option<String>,
    description: Option<Value>,
    url: Option<String>,
    #[serde(alias = "initially_selected")]
    selected: Option<bool>,
}

/// Inputs that can be normalised into a [`SelectOption`].
pub trait IntoSelectOption {
    /// Converts the input.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::block_kit::BlockKitError`] when the input cannot
    /// describe an option.
    fn into_select_option(self) -> BlockKitResult<SelectOption>;
}

impl IntoSelectOption for SelectOption {
    fn into_select_option(self) -> BlockKitResult<SelectOption> {
        Ok(self)
    }
}

impl IntoSelectOption for Attributes {
    fn into_select_option(self) -> BlockKitResult<SelectOption> {
        SelectOption::from_attributes(self)
    }
}

impl IntoSelectOption for Value {
    fn into_select_option(self) -> BlockKitResult<SelectOption> {
        attributes::object("option", "SelectOption", self)?.into_select_option()
    }
}
