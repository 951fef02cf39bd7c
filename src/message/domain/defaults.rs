//! Default delivery settings applied to new messages.

use super::message::Message;
use crate::message::error::MessageError;
use serde::Deserialize;

/// Settings every new message starts from.
///
/// Missing keys fall back to [`MessageDefaults::default`]; unknown keys
/// are rejected.
///
/// # Examples
///
/// ```
/// use blockwire::message::domain::MessageDefaults;
///
/// let defaults = MessageDefaults::from_json_str(r##"{ "channel": "#ops", "link_names": true }"##)
///     .expect("valid defaults");
/// let message = defaults.message();
///
/// assert_eq!(message.channel(), Some("#ops"));
/// assert!(message.links_names());
/// assert!(message.unfurls_media());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MessageDefaults {
    /// Channel messages are sent to unless overridden.
    pub channel: Option<String>,
    /// Sender name shown unless overridden.
    pub username: Option<String>,
    /// Avatar emoji or URL shown unless overridden.
    pub icon: Option<String>,
    /// Whether `@names` and `#channels` are linked.
    pub link_names: bool,
    /// Whether text links are unfurled.
    pub unfurl_links: bool,
    /// Whether media links are unfurled.
    pub unfurl_media: bool,
    /// Whether fallback text is rendered as markdown.
    pub allow_markdown: bool,
}

impl Default for MessageDefaults {
    fn default() -> Self {
        Self {
            channel: None,
            username: None,
            icon: None,
            link_names: false,
            unfurl_links: false,
            unfurl_media: true,
            allow_markdown: true,
        }
    }
}

impl MessageDefaults {
    /// Creates settings that render text literally and never unfurl.
    ///
    /// Useful for machine-generated notifications.
    #[must_use]
    pub const fn literal() -> Self {
        Self {
            channel: None,
            username: None,
            icon: None,
            link_names: false,
            unfurl_links: false,
            unfurl_media: false,
            allow_markdown: false,
        }
    }

    /// Parses settings from a JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`MessageError::InvalidDefaults`] for malformed JSON,
    /// unknown keys, or a blank channel, username, or icon.
    pub fn from_json_str(json: &str) -> Result<Self, MessageError> {
        let defaults: Self = serde_json::from_str(json)
            .map_err(|e| MessageError::InvalidDefaults(e.to_string()))?;
        defaults.validate()?;
        Ok(defaults)
    }

    /// Checks that every configured string is non-blank.
    ///
    /// # Errors
    ///
    /// Returns [`MessageError::InvalidDefaults`] naming the first blank
    /// setting.
    pub fn validate(&self) -> Result<(), MessageError> {
        let settings = [
            ("channel", &self.channel),
            ("username", &self.username),
            ("icon", &self.icon),
        ];
        for (name, value) in settings {
            if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
                return Err(MessageError::InvalidDefaults(format!(
                    "{name} cannot be blank"
                )));
            }
        }
        Ok(())
    }

    /// Creates an empty message pre-populated with these settings.
    #[must_use]
    pub fn message(&self) -> Message {
        let mut message = Message::with_settings(
            self.link_names,
            self.unfurl_links,
            self.unfurl_media,
            self.allow_markdown,
        );
        if let Some(channel) = &self.channel {
            message = message.to(channel.as_str());
        }
        if let Some(username) = &self.username {
            message = message.from(username.as_str());
        }
        if let Some(icon) = &self.icon {
            message = message.with_icon(icon.as_str());
        }
        message
    }
}
