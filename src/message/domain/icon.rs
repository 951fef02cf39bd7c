//! Message avatar override.

use serde::Serialize;

/// Avatar shown next to a message.
///
/// Serialises as either `icon_emoji` or `icon_url` when flattened into a
/// message document.
///
/// # Examples
///
/// ```
/// use blockwire::message::domain::Icon;
///
/// assert_eq!(Icon::parse(":ghost:"), Icon::Emoji(":ghost:".to_owned()));
/// assert_eq!(
///     Icon::parse("https://example.com/bot.png"),
///     Icon::Url("https://example.com/bot.png".to_owned()),
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum Icon {
    /// An emoji shortcode such as `:ghost:`.
    #[serde(rename = "icon_emoji")]
    Emoji(String),
    /// An image URL.
    #[serde(rename = "icon_url")]
    Url(String),
}

impl Icon {
    /// Classifies a raw icon: values wrapped in colons are emoji, anything
    /// else a URL.
    #[must_use]
    pub fn parse(value: impl Into<String>) -> Self {
        let raw = value.into();
        if raw.len() > 1 && raw.starts_with(':') && raw.ends_with(':') {
            Self::Emoji(raw)
        } else {
            Self::Url(raw)
        }
    }

    /// Returns the raw icon value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Emoji(value) | Self::Url(value) => value,
        }
    }
}
