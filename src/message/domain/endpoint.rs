//! Validated webhook destination.

use crate::message::error::MessageError;
use std::fmt;

/// An incoming-webhook URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WebhookEndpoint(String);

impl WebhookEndpoint {
    /// Validates and wraps a webhook URL.
    ///
    /// # Errors
    ///
    /// Returns [`MessageError::InvalidEndpoint`] when the URL is blank or
    /// does not use the `http` or `https` scheme.
    pub fn new(url: impl Into<String>) -> Result<Self, MessageError> {
        let raw = url.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(invalid(&raw, "endpoint cannot be empty"));
        }
        if !(trimmed.starts_with("https://") || trimmed.starts_with("http://")) {
            return Err(invalid(&raw, "endpoint must be an http or https URL"));
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the URL.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn invalid(endpoint: &str, reason: &'static str) -> MessageError {
    MessageError::InvalidEndpoint {
        endpoint: endpoint.to_owned(),
        reason,
    }
}

impl fmt::Display for WebhookEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
