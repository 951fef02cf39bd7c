//! Labelled groups of options for static select menus.

use super::option::{IntoSelectOption, SelectOption};
use super::text::{self, IntoText, Text};
use crate::block_kit::attributes::{self, Attributes};
use crate::block_kit::error::BlockKitResult;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A labelled, ordered group of options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionGroup {
    label: Text,
    options: Vec<SelectOption>,
}

impl OptionGroup {
    /// Creates an empty group.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::block_kit::BlockKitError`] when the label is not
    /// plain text.
    pub fn new(label: impl IntoText) -> BlockKitResult<Self> {
        Ok(Self {
            label: text::plain(label)?,
            options: Vec::new(),
        })
    }

    /// Builds a group from its attribute map.
    ///
    /// # Errors
    ///
    /// Returns [`crate::block_kit::BlockKitError::MissingField`] without a
    /// `label`, or any error from the nested options.
    pub fn from_attributes(attributes: Attributes) -> BlockKitResult<Self> {
        let raw: OptionGroupAttributes = attributes::decode("option group", attributes)?;
        let mut group = Self::new(attributes::require("option group", "label", raw.label)?)?;
        group.set_options(raw.options.unwrap_or_default())?;
        Ok(group)
    }

    /// Appends an option.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::block_kit::BlockKitError`] when the input cannot
    /// describe an option.
    pub fn add_option(&mut self, option: impl IntoSelectOption) -> BlockKitResult<()> {
        self.options.push(option.into_select_option()?);
        Ok(())
    }

    /// Appends an option, builder style.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::block_kit::BlockKitError`] when the input cannot
    /// describe an option.
    pub fn with_option(mut self, option: impl IntoSelectOption) -> BlockKitResult<Self> {
        self.add_option(option)?;
        Ok(self)
    }

    /// Replaces every option. The group is unchanged if any input fails.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::block_kit::BlockKitError`] when any input cannot
    /// describe an option.
    pub fn set_options<I>(&mut self, options: I) -> BlockKitResult<()>
    where
        I: IntoIterator,
        I::Item: IntoSelectOption,
    {
        self.options = options
            .into_iter()
            .map(IntoSelectOption::into_select_option)
            .collect::<BlockKitResult<_>>()?;
        Ok(())
    }

    /// Removes every option.
    pub fn clear_options(&mut self) {
        self.options.clear();
    }

    /// Returns the label.
    #[must_use]
    pub const fn label(&self) -> &Text {
        &self.label
    }

    /// Returns the options in insertion order.
    #[must_use]
    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    /// Returns `true` if any option in the group is initially selected.
    #[must_use]
    pub fn has_selected_option(&self) -> bool {
        self.options.iter().any(SelectOption::is_initially_selected)
    }

    /// Returns how many options in the group are initially selected.
    #[must_use]
    pub fn selected_count(&self) -> usize {
        self.options
            .iter()
            .filter(|option| option.is_initially_selected())
            .count()
    }
}

#[derive(Debug, Deserialize)]
struct OptionGroupAttributes {
    label: Option<Value>,
    options: Option<Vec<Value>>,
}

/// Inputs that can be normalised into an [`OptionGroup`].
pub trait IntoOptionGroup {
    /// Converts the input.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::block_kit::BlockKitError`] when the input cannot
    /// describe an option group.
    fn into_option_group(self) -> BlockKitResult<OptionGroup>;
}

impl IntoOptionGroup for OptionGroup {
    fn into_option_group(self) -> BlockKitResult<OptionGroup> {
        Ok(self)
    }
}

impl IntoOptionGroup for Attributes {
    fn into_option_group(self) -> BlockKitResult<OptionGroup> {
        OptionGroup::from_attributes(self)
    }
}

impl IntoOptionGroup for Value {
    fn into_option_group(self) -> BlockKitResult<OptionGroup> {
        attributes::object("option group", "OptionGroup", self)?.into_option_group()
    }
}
