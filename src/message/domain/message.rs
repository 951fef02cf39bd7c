//! The top-level message document posted to a webhook.

use super::icon::Icon;
use crate::block_kit::blocks::{Block, IntoBlock};
use crate::block_kit::{BlockKitError, BlockKitResult};
use serde::{Serialize, Serializer};

/// A message: scalar delivery settings plus an ordered list of blocks.
///
/// Serialises to the webhook payload:
///
/// ```json
/// {
///   "text": "Deploy finished",
///   "channel": "#ops",
///   "link_names": 0,
///   "unfurl_links": false,
///   "unfurl_media": true,
///   "mrkdwn": true,
///   "icon_emoji": ":rocket:",
///   "blocks": [{ "type": "divider" }]
/// }
/// ```
///
/// `text`, `channel`, `username`, and the icon are omitted while unset;
/// `blocks` is omitted while empty.
///
/// # Examples
///
/// ```
/// use blockwire::message::domain::Message;
/// use serde_json::json;
///
/// let message = Message::default()
///     .to("#ops")
///     .with_text("Deploy finished")
///     .with_block(json!({ "type": "divider" }))
///     .expect("registered block type");
///
/// let document = message.to_document().expect("serialise");
/// assert_eq!(document["link_names"], json!(0));
/// assert_eq!(document["blocks"][0]["type"], json!("divider"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    channel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    username: Option<String>,
    #[serde(serialize_with = "numeric_flag")]
    link_names: bool,
    unfurl_links: bool,
    unfurl_media: bool,
    #[serde(rename = "mrkdwn")]
    allow_markdown: bool,
    #[serde(flatten)]
    icon: Option<Icon>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    blocks: Vec<Block>,
}

#[expect(
    clippy::trivially_copy_pass_by_ref,
    reason = "serde serialize_with passes fields by reference"
)]
fn numeric_flag<S: Serializer>(flag: &bool, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u8(u8::from(*flag))
}

impl Default for Message {
    fn default() -> Self {
        Self::with_settings(false, false, true, true)
    }
}

impl Message {
    /// Creates an empty message with explicit delivery settings.
    #[must_use]
    pub const fn with_settings(
        link_names: bool,
        unfurl_links: bool,
        unfurl_media: bool,
        allow_markdown: bool,
    ) -> Self {
        Self {
            text: None,
            channel: None,
            username: None,
            link_names,
            unfurl_links,
            unfurl_media,
            allow_markdown,
            icon: None,
            blocks: Vec::new(),
        }
    }

    /// Sets the destination channel.
    #[must_use]
    pub fn to(mut self, channel: impl Into<String>) -> Self {
        self.channel = Some(channel.into());
        self
    }

    /// Sets the sender name.
    #[must_use]
    pub fn from(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Sets the avatar; see [`Icon::parse`].
    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(Icon::parse(icon));
        self
    }

    /// Sets the fallback text.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Sets whether `@names` and `#channels` are linked.
    #[must_use]
    pub const fn with_link_names(mut self, link_names: bool) -> Self {
        self.link_names = link_names;
        self
    }

    /// Sets whether text links are unfurled.
    #[must_use]
    pub const fn with_unfurl_links(mut self, unfurl_links: bool) -> Self {
        self.unfurl_links = unfurl_links;
        self
    }

    /// Sets whether media links are unfurled.
    #[must_use]
    pub const fn with_unfurl_media(mut self, unfurl_media: bool) -> Self {
        self.unfurl_media = unfurl_media;
        self
    }

    /// Sets whether the fallback text is rendered as markdown.
    #[must_use]
    pub const fn with_markdown(mut self, allow_markdown: bool) -> Self {
        self.allow_markdown = allow_markdown;
        self
    }

    /// Appends a block, builder style.
    ///
    /// # Errors
    ///
    /// Returns a [`BlockKitError`] when the input cannot describe a
    /// registered block.
    pub fn with_block(mut self, block: impl IntoBlock) -> BlockKitResult<Self> {
        self.add_block(block)?;
        Ok(self)
    }

    /// Appends a block.
    ///
    /// # Errors
    ///
    /// Returns a [`BlockKitError`] when the input cannot describe a
    /// registered block.
    pub fn add_block(&mut self, block: impl IntoBlock) -> BlockKitResult<()> {
        self.blocks.push(Block::factory(block)?);
        Ok(())
    }

    /// Replaces every block. The message is unchanged if any input fails.
    ///
    /// # Errors
    ///
    /// Returns the first [`BlockKitError`] raised by the block factory.
    pub fn set_blocks<I>(&mut self, blocks: I) -> BlockKitResult<()>
    where
        I: IntoIterator,
        I::Item: IntoBlock,
    {
        self.blocks = blocks
            .into_iter()
            .map(Block::factory)
            .collect::<BlockKitResult<_>>()?;
        Ok(())
    }

    /// Removes every block.
    pub fn clear_blocks(&mut self) {
        self.blocks.clear();
    }

    /// Replaces the fallback text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    /// Returns the fallback text, if set.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Returns the destination channel, if set.
    #[must_use]
    pub fn channel(&self) -> Option<&str> {
        self.channel.as_deref()
    }

    /// Returns the sender name, if set.
    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// Returns the avatar, if set.
    #[must_use]
    pub const fn icon(&self) -> Option<&Icon> {
        self.icon.as_ref()
    }

    /// Returns `true` if names are linked.
    #[must_use]
    pub const fn links_names(&self) -> bool {
        self.link_names
    }

    /// Returns `true` if text links are unfurled.
    #[must_use]
    pub const fn unfurls_links(&self) -> bool {
        self.unfurl_links
    }

    /// Returns `true` if media links are unfurled.
    #[must_use]
    pub const fn unfurls_media(&self) -> bool {
        self.unfurl_media
    }

    /// Returns `true` if the fallback text is rendered as markdown.
    #[must_use]
    pub const fn allows_markdown(&self) -> bool {
        self.allow_markdown
    }

    /// Returns the blocks in insertion order.
    #[must_use]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Serialises the message to its wire document.
    ///
    /// # Errors
    ///
    /// Returns [`BlockKitError::Serialization`] if encoding fails.
    pub fn to_document(&self) -> BlockKitResult<serde_json::Value> {
        serde_json::to_value(self).map_err(|e| BlockKitError::Serialization(e.to_string()))
    }

    /// Serialises the message to the JSON payload sent to a webhook.
    ///
    /// # Errors
    ///
    /// Returns [`BlockKitError::Serialization`] if encoding fails.
    pub fn to_json(&self) -> BlockKitResult<String> {
        serde_json::to_string(self).map_err(|e| BlockKitError::Serialization(e.to_string()))
    }
}
