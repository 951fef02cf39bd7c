//! Calendar date picker.

use super::options::confirmable;
use crate::block_kit::attributes::{self, Attributes};
use crate::block_kit::composition::{self, Confirmation, IntoText, Text};
use crate::block_kit::elements::Confirmable;
use crate::block_kit::error::BlockKitResult;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A date picker; the initial date is emitted as `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatePicker {
    action_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    placeholder: Option<Text>,
    #[serde(skip_serializing_if = "Option::is_none")]
    initial_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    confirm: Option<Confirmation>,
}

impl DatePicker {
    /// Creates a picker with no initial date.
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
            placeholder: None,
            initial_date: None,
            confirm: None,
        }
    }

    /// Builds a picker from its attribute map.
    ///
    /// # Errors
    ///
    /// Returns [`crate::block_kit::BlockKitError::InvalidAttributes`] when
    /// `initial_date` is not a `YYYY-MM-DD` date, or any error from the
    /// nested objects.
    pub fn from_attributes(attributes: Attributes) -> BlockKitResult<Self> {
        let raw: DatePickerAttributes = attributes::decode("datepicker", attributes)?;
        let mut picker = Self::empty();
        picker.action_id = raw.action_id;
        picker.initial_date = raw.initial_date;
        if let Some(placeholder) = raw.placeholder {
            picker.placeholder = Some(composition::plain_text(placeholder)?);
        }
        if let Some(confirm) = raw.confirm {
            picker.set_confirm(confirm)?;
        }
        Ok(picker)
    }

    /// Sets the placeholder shown before a date is chosen.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::block_kit::BlockKitError`] when the placeholder
    /// is not plain text.
    pub fn with_placeholder(mut self, placeholder: impl IntoText) -> BlockKitResult<Self> {
        self.placeholder = Some(composition::plain_text(placeholder)?);
        Ok(self)
    }

    /// Sets the initially selected date.
    #[must_use]
    pub const fn with_initial_date(mut self, date: NaiveDate) -> Self {
        self.initial_date = Some(date);
        self
    }

    /// Returns the action identifier, if set.
    #[must_use]
    pub fn action_id(&self) -> Option<&str> {
        self.action_id.as_deref()
    }

    /// Returns the placeholder, if set.
    #[must_use]
    pub const fn placeholder(&self) -> Option<&Text> {
        self.placeholder.as_ref()
    }

    /// Returns the initial date, if set.
    #[must_use]
    pub const fn initial_date(&self) -> Option<NaiveDate> {
        self.initial_date
    }
}

confirmable!(DatePicker);

#[derive(Debug, Deserialize)]
struct DatePickerAttributes {
    action_id: Option<String>,
    placeholder: Option<Value>,
    initial_date: Option<NaiveDate>,
    confirm: Option<Value>,
}
