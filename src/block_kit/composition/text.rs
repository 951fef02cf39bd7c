//! Text objects: the plain and markdown spans nested throughout blocks.

use crate::block_kit::attributes::{self, Attributes};
use crate::block_kit::error::{BlockKitError, BlockKitResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Format type of a text object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextType {
    /// Rendered literally.
    Plain,
    /// Rendered with markdown formatting.
    Markdown,
}

impl TextType {
    /// Returns the wire tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Plain => "plain_text",
            Self::Markdown => "mrkdwn",
        }
    }
}

impl fmt::Display for TextType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TextType {
    type Error = BlockKitError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "plain_text" => Ok(Self::Plain),
            "mrkdwn" => Ok(Self::Markdown),
            _ => Err(BlockKitError::InvalidType {
                target: "text",
                found: value.to_owned(),
                allowed: "plain_text, mrkdwn".to_owned(),
            }),
        }
    }
}

/// A text object.
///
/// Plain text carries an emoji flag and markdown text a verbatim flag;
/// each variant serialises only its own flag:
///
/// ```json
/// { "type": "plain_text", "text": "Hello", "emoji": false }
/// { "type": "mrkdwn", "text": "*Hello*", "verbatim": false }
/// ```
///
/// # Examples
///
/// ```
/// use blockwire::block_kit::composition::{Text, TextType};
///
/// let text = Text::create("hello", None).expect("strings become plain text");
/// assert_eq!(text.text_type(), TextType::Plain);
/// assert_eq!(text.text(), "hello");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum Text {
    /// Plain text.
    #[serde(rename = "plain_text")]
    Plain(PlainText),
    /// Markdown text.
    #[serde(rename = "mrkdwn")]
    Markdown(MarkdownText),
}

/// Body of a plain text object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlainText {
    text: String,
    emoji: bool,
}

impl PlainText {
    /// Creates plain text with emoji escaping disabled.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emoji: false,
        }
    }

    /// Sets whether emoji shortcodes should be escaped.
    #[must_use]
    pub const fn with_emoji(mut self, emoji: bool) -> Self {
        self.emoji = emoji;
        self
    }
}

/// Body of a markdown text object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarkdownText {
    text: String,
    verbatim: bool,
}

impl MarkdownText {
    /// Creates markdown text with verbatim rendering disabled.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            verbatim: false,
        }
    }

    /// Sets whether the content should be rendered as-is.
    #[must_use]
    pub const fn with_verbatim(mut self, verbatim: bool) -> Self {
        self.verbatim = verbatim;
        self
    }
}

impl Text {
    /// Creates plain text.
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self::Plain(PlainText::new(text))
    }

    /// Creates markdown text.
    #[must_use]
    pub fn markdown(text: impl Into<String>) -> Self {
        Self::Markdown(MarkdownText::new(text))
    }

    /// Creates text of the given format type.
    #[must_use]
    pub fn new(text_type: TextType, text: impl Into<String>) -> Self {
        match text_type {
            TextType::Plain => Self::plain(text),
            TextType::Markdown => Self::markdown(text),
        }
    }

    /// Normalises a string, attribute map, or existing text into a `Text`.
    ///
    /// Strings take `required` as their format type, or plain when no type
    /// is required. When `required` is set, any other format type is
    /// rejected.
    ///
    /// # Errors
    ///
    /// Returns [`BlockKitError::TextTypeMismatch`] when the resulting text
    /// has the wrong format type, or any construction error of the input.
    ///
    /// # Examples
    ///
    /// ```
    /// use blockwire::block_kit::composition::{Text, TextType};
    ///
    /// let result = Text::create(Text::plain("hi"), Some(TextType::Markdown));
    /// assert!(result.is_err());
    /// ```
    pub fn create(input: impl IntoText, required: Option<TextType>) -> BlockKitResult<Self> {
        let text = input.into_text(required.unwrap_or(TextType::Plain))?;
        if let Some(expected) = required
            && text.text_type() != expected
        {
            return Err(BlockKitError::TextTypeMismatch {
                expected,
                actual: text.text_type(),
            });
        }
        Ok(text)
    }

    /// Builds a text object from its attribute map.
    ///
    /// A missing `type` means plain text; markdown must be requested
    /// explicitly with `"type": "mrkdwn"`.
    ///
    /// # Errors
    ///
    /// Returns [`BlockKitError::MissingField`] without a `text` attribute,
    /// or [`BlockKitError::InvalidType`] for an unknown format type.
    pub fn from_attributes(attributes: Attributes) -> BlockKitResult<Self> {
        let raw: TextAttributes = attributes::decode("text", attributes)?;
        let text_type = raw
            .text_type
            .as_deref()
            .map_or(Ok(TextType::Plain), TextType::try_from)?;
        let content = attributes::require("text", "text", raw.text)?;

        Ok(match text_type {
            TextType::Plain => {
                PlainText::new(content).with_emoji(raw.emoji.unwrap_or(false)).into()
            }
            TextType::Markdown => MarkdownText::new(content)
                .with_verbatim(raw.verbatim.unwrap_or(false))
                .into(),
        })
    }

    /// Returns the format type.
    #[must_use]
    pub const fn text_type(&self) -> TextType {
        match self {
            Self::Plain(_) => TextType::Plain,
            Self::Markdown(_) => TextType::Markdown,
        }
    }

    /// Returns the text content.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Plain(plain) => &plain.text,
            Self::Markdown(markdown) => &markdown.text,
        }
    }

    /// Replaces the text content, keeping the format type and flags.
    pub fn set_text(&mut self, text: impl Into<String>) {
        match self {
            Self::Plain(plain) => plain.text = text.into(),
            Self::Markdown(markdown) => markdown.text = text.into(),
        }
    }

    /// Returns the emoji flag of plain text, `None` for markdown.
    #[must_use]
    pub const fn emoji(&self) -> Option<bool> {
        match self {
            Self::Plain(plain) => Some(plain.emoji),
            Self::Markdown(_) => None,
        }
    }

    /// Returns the verbatim flag of markdown text, `None` for plain.
    #[must_use]
    pub const fn verbatim(&self) -> Option<bool> {
        match self {
            Self::Plain(_) => None,
            Self::Markdown(markdown) => Some(markdown.verbatim),
        }
    }
}

impl From<PlainText> for Text {
    fn from(plain: PlainText) -> Self {
        Self::Plain(plain)
    }
}

impl From<MarkdownText> for Text {
    fn from(markdown: MarkdownText) -> Self {
        Self::Markdown(markdown)
    }
}

#[derive(Debug, Deserialize)]
struct TextAttributes {
    #[serde(rename = "type")]
    text_type: Option<String>,
    text: Option<String>,
    emoji: Option<bool>,
    verbatim: Option<bool>,
}

/// Inputs that can be normalised into a [`Text`].
pub trait IntoText {
    /// Converts the input, using `default_type` for bare strings.
    ///
    /// # Errors
    ///
    /// Returns a [`BlockKitError`] when the input cannot describe a text
    /// object.
    fn into_text(self, default_type: TextType) -> BlockKitResult<Text>;
}

impl IntoText for Text {
    fn into_text(self, _default_type: TextType) -> BlockKitResult<Text> {
        Ok(self)
    }
}

impl IntoText for PlainText {
    fn into_text(self, _default_type: TextType) -> BlockKitResult<Text> {
        Ok(self.into())
    }
}

impl IntoText for MarkdownText {
    fn into_text(self, _default_type: TextType) -> BlockKitResult<Text> {
        Ok(self.into())
    }
}

impl IntoText for &str {
    fn into_text(self, default_type: TextType) -> BlockKitResult<Text> {
        Ok(Text::new(default_type, self))
    }
}

impl IntoText for String {
    fn into_text(self, default_type: TextType) -> BlockKitResult<Text> {
        Ok(Text::new(default_type, self))
    }
}

impl IntoText for Attributes {
    fn into_text(self, _default_type: TextType) -> BlockKitResult<Text> {
        Text::from_attributes(self)
    }
}

impl IntoText for Value {
    fn into_text(self, default_type: TextType) -> BlockKitResult<Text> {
        match self {
            Self::String(text) => Ok(Text::new(default_type, text)),
            other => attributes::object("text", "Text or string", other)?
                .into_text(default_type),
        }
    }
}

/// Normalises input for a slot that only accepts plain text.
pub(crate) fn plain(input: impl IntoText) -> BlockKitResult<Text> {
    Text::create(input, Some(TextType::Plain))
}

/// Normalises input for a slot that accepts either format type.
pub(crate) fn any(input: impl IntoText) -> BlockKitResult<Text> {
    Text::create(input, None)
}
