//! Checkbox group.

use super::options::{OptionSet, OptionsAttributes, SelectionMode, options_element};
use crate::block_kit::attributes::{self, Attributes};
use crate::block_kit::composition::{Confirmation, SelectOption};
use crate::block_kit::error::BlockKitResult;
use serde::Serialize;

/// A checkbox group; any number of boxes may start out checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Checkboxes {
    action_id: Option<String>,
    #[serde(flatten)]
    options: OptionSet,
    #[serde(skip_serializing_if = "Option::is_none")]
    confirm: Option<Confirmation>,
}

impl Checkboxes {
    /// Creates an empty group.
    #[must_use]
    pub fn new(action_id: impl Into<String>) -> Self {
        Self {
            action_id: Some(action_id.into()),
            ..Self::empty()
        }
    }

    const fn empty() -> Self {
        Self {
            action_id: None,
            options: OptionSet::new(SelectionMode::Multiple),
            confirm: None,
        }
    }

    /// Builds a group from its attribute map.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::block_kit::BlockKitError`] when any nested object
    /// is invalid.
    pub fn from_attributes(attributes: Attributes) -> BlockKitResult<Self> {
        let mut raw: OptionsAttributes = attributes::decode("checkboxes", attributes)?;
        let mut checkboxes = Self::empty();
        checkboxes.action_id = raw.action_id.take();
        raw.apply(&mut checkboxes)?;
        Ok(checkboxes)
    }

    /// Returns the action identifier, if set.
    #[must_use]
    pub fn action_id(&self) -> Option<&str> {
        self.action_id.as_deref()
    }

    /// Returns every initially checked option in insertion order.
    #[must_use]
    pub fn initial_options(&self) -> Vec<&SelectOption> {
        self.options.initial_options()
    }
}

options_element!(Checkboxes);
