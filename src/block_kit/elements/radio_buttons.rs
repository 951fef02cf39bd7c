//! Radio button group.

use super::options::{OptionSet, OptionsAttributes, SelectionMode, options_element};
use crate::block_kit::attributes::{self, Attributes};
use crate::block_kit::composition::{Confirmation, SelectOption};
use crate::block_kit::error::BlockKitResult;
use serde::Serialize;

/// A radio button group allowing at most one initial selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RadioButtons {
    action_id: Option<String>,
    #[serde(flatten)]
    options: OptionSet,
    #[serde(skip_serializing_if = "Option::is_none")]
    confirm: Option<Confirmation>,
}

impl RadioButtons {
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
            options: OptionSet::new(SelectionMode::Single),
            confirm: None,
        }
    }

    /// Builds a group from its attribute map.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::block_kit::BlockKitError`] when any nested object
    /// is invalid or more than one option is initially selected.
    pub fn from_attributes(attributes: Attributes) -> BlockKitResult<Self> {
        let mut raw: OptionsAttributes = attributes::decode("radio buttons", attributes)?;
        let mut radios = Self::empty();
        radios.action_id = raw.action_id.take();
        raw.apply(&mut radios)?;
        Ok(radios)
    }

    /// Returns the action identifier, if set.
    #[must_use]
    pub fn action_id(&self) -> Option<&str> {
        self.action_id.as_deref()
    }

    /// Returns the initially selected option, if any.
    #[must_use]
    pub fn initial_option(&self) -> Option<&SelectOption> {
        self.options.initial_option()
    }
}

options_element!(RadioButtons);
