//! Static single-select menu.

use super::options::{OptionSet, OptionsAttributes, SelectionMode, options_element};
use crate::block_kit::attributes::{self, Attributes};
use crate::block_kit::composition::{self, Confirmation, IntoText, Text};
use crate::block_kit::error::BlockKitResult;
use serde::Serialize;

/// A static select menu allowing at most one initial selection.
///
/// # Examples
///
/// ```
/// use blockwire::block_kit::composition::SelectOption;
/// use blockwire::block_kit::elements::{HasOptions, Select};
///
/// let small = SelectOption::new("Small", "s").expect("plain label").selected(true);
/// let large = SelectOption::new("Large", "l").expect("plain label").selected(true);
///
/// let mut select = Select::new("size").with_option(small).expect("first selection");
/// assert!(select.add_option(large).is_err());
/// assert_eq!(select.options().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Select {
    #[serde(skip_serializing_if = "Option::is_none")]
    placeholder: Option<Text>,
    action_id: Option<String>,
    #[serde(flatten)]
    options: OptionSet,
    #[serde(skip_serializing_if = "Option::is_none")]
    confirm: Option<Confirmation>,
}

impl Select {
    /// Creates an empty menu.
    #[must_use]
    pub fn new(action_id: impl Into<String>) -> Self {
        Self {
            action_id: Some(action_id.into()),
            ..Self::empty()
        }
    }

    const fn empty() -> Self {
        Self {
            placeholder: None,
            action_id: None,
            options: OptionSet::new(SelectionMode::Single),
            confirm: None,
        }
    }

    /// Builds a menu from its attribute map.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::block_kit::BlockKitError`] when any nested object
    /// is invalid or more than one option is initially selected.
    pub fn from_attributes(attributes: Attributes) -> BlockKitResult<Self> {
        let mut raw: OptionsAttributes = attributes::decode("static select", attributes)?;
        let mut select = Self::empty();
        select.action_id = raw.action_id.take();
        select.placeholder = raw.placeholder()?;
        raw.apply(&mut select)?;
        Ok(select)
    }

    /// Sets the placeholder shown before a choice is made.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::block_kit::BlockKitError`] when the placeholder
    /// is not plain text.
    pub fn with_placeholder(mut self, placeholder: impl IntoText) -> BlockKitResult<Self> {
        self.placeholder = Some(composition::plain_text(placeholder)?);
        Ok(self)
    }

    /// Returns the placeholder, if set.
    #[must_use]
    pub const fn placeholder(&self) -> Option<&Text> {
        self.placeholder.as_ref()
    }

    /// Returns the action identifier, if set.
    #[must_use]
    pub fn action_id(&self) -> Option<&str> {
        self.action_id.as_deref()
    }

    /// Returns the initially selected option, if any.
    #[must_use]
    pub fn initial_option(&self) -> Option<&composition::SelectOption> {
        self.options.initial_option()
    }
}

options_element!(Select);
