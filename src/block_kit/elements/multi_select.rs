//! Static multi-select menu.

use super::options::{OptionSet, OptionsAttributes, SelectionMode, options_element};
use crate::block_kit::attributes::{self, Attributes};
use crate::block_kit::composition::{self, Confirmation, IntoText, SelectOption, Text};
use crate::block_kit::error::BlockKitResult;
use serde::{Deserialize, Serialize};

/// A static select menu allowing any number of initial selections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MultiSelect {
    #[serde(skip_serializing_if = "Option::is_none")]
    placeholder: Option<Text>,
    action_id: Option<String>,
    #[serde(flatten)]
    options: OptionSet,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_selected_items: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    confirm: Option<Confirmation>,
}

impl MultiSelect {
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
            options: OptionSet::new(SelectionMode::Multiple),
            max_selected_items: None,
            confirm: None,
        }
    }

    /// Builds a menu from its attribute map.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::block_kit::BlockKitError`] when any nested object
    /// is invalid.
    pub fn from_attributes(attributes: Attributes) -> BlockKitResult<Self> {
        let raw: MultiSelectAttributes = attributes::decode("multi static select", attributes)?;
        let mut common = raw.common;
        let mut select = Self::empty();
        select.action_id = common.action_id.take();
        select.placeholder = common.placeholder()?;
        select.max_selected_items = raw.max_selected_items;
        common.apply(&mut select)?;
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

    /// Caps how many options the user may select.
    #[must_use]
    pub const fn with_max_selected_items(mut self, max: u32) -> Self {
        self.max_selected_items = Some(max);
        self
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

    /// Returns the selection cap, if set.
    #[must_use]
    pub const fn max_selected_items(&self) -> Option<u32> {
        self.max_selected_items
    }

    /// Returns every initially selected option in insertion order.
    #[must_use]
    pub fn initial_options(&self) -> Vec<&SelectOption> {
        self.options.initial_options()
    }
}

options_element!(MultiSelect);

#[derive(Debug, Deserialize)]
struct MultiSelectAttributes {
    #[serde(flatten)]
    common: OptionsAttributes,
    max_selected_items: Option<u32>,
}
