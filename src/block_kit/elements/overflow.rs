//! Overflow menu.

use super::options::{OptionSet, OptionsAttributes, SelectionMode, options_element};
use crate::block_kit::attributes::{self, Attributes};
use crate::block_kit::composition::Confirmation;
use crate::block_kit::error::BlockKitResult;
use serde::Serialize;

/// A compact menu of options; selection flags are never serialised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Overflow {
    action_id: Option<String>,
    #[serde(flatten)]
    options: OptionSet,
    #[serde(skip_serializing_if = "Option::is_none")]
    confirm: Option<Confirmation>,
}

impl Overflow {
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
            action_id: None,
            options: OptionSet::new(SelectionMode::Unselectable),
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
        let mut raw: OptionsAttributes = attributes::decode("overflow", attributes)?;
        let mut overflow = Self::empty();
        overflow.action_id = raw.action_id.take();
        raw.apply(&mut overflow)?;
        Ok(overflow)
    }

    /// Returns the action identifier, if set.
    #[must_use]
    pub fn action_id(&self) -> Option<&str> {
        self.action_id.as_deref()
    }
}

options_element!(Overflow);
