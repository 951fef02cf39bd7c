//! Closed sets of block and element type tags.

use super::error::BlockKitError;
use std::fmt;

/// Layout unit kinds a message may contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// A row of interactive elements.
    Actions,
    /// Small contextual text and images.
    Context,
    /// A horizontal rule.
    Divider,
    /// A remote file reference.
    File,
    /// A standalone image.
    Image,
    /// A labelled form control.
    Input,
    /// Body text with optional fields and accessory.
    Section,
}

impl BlockKind {
    /// Every registered block kind, in registry order.
    pub const ALL: [Self; 7] = [
        Self::Actions,
        Self::Context,
        Self::Divider,
        Self::File,
        Self::Image,
        Self::Input,
        Self::Section,
    ];

    /// Returns the wire tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Actions => "actions",
            Self::Context => "context",
            Self::Divider => "divider",
            Self::File => "file",
            Self::Image => "image",
            Self::Input => "input",
            Self::Section => "section",
        }
    }

    /// Returns the registered tags joined for error messages.
    #[must_use]
    pub fn allowed_tags() -> String {
        join_tags(Self::ALL.iter().map(|kind| kind.as_str()))
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for BlockKind {
    type Error = BlockKitError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == value)
            .ok_or_else(|| BlockKitError::InvalidType {
                target: "block",
                found: value.to_owned(),
                allowed: Self::allowed_tags(),
            })
    }
}

/// Interactive and display component kinds.
///
/// Plain and markdown text share one Rust type but keep distinct tags,
/// since context blocks accept text objects directly as elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// A clickable button.
    Button,
    /// A group of checkboxes.
    Checkboxes,
    /// A calendar date picker.
    DatePicker,
    /// An inline image.
    Image,
    /// A static multi-select menu.
    MultiSelect,
    /// An overflow menu.
    Overflow,
    /// A plain-text input field.
    TextInput,
    /// A radio button group.
    RadioButtons,
    /// A static single-select menu.
    Select,
    /// A plain text object.
    PlainText,
    /// A markdown text object.
    Markdown,
}

impl ElementKind {
    /// Every registered element kind, in registry order.
    pub const ALL: [Self; 11] = [
        Self::Button,
        Self::Checkboxes,
        Self::DatePicker,
        Self::Image,
        Self::MultiSelect,
        Self::Overflow,
        Self::TextInput,
        Self::RadioButtons,
        Self::Select,
        Self::PlainText,
        Self::Markdown,
    ];

    /// Returns the wire tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Checkboxes => "checkboxes",
            Self::DatePicker => "datepicker",
            Self::Image => "image",
            Self::MultiSelect => "multi_static_select",
            Self::Overflow => "overflow",
            Self::TextInput => "plain_text_input",
            Self::RadioButtons => "radio_buttons",
            Self::Select => "static_select",
            Self::PlainText => "plain_text",
            Self::Markdown => "mrkdwn",
        }
    }

    /// Returns the registered tags joined for error messages.
    #[must_use]
    pub fn allowed_tags() -> String {
        join_tags(Self::ALL.iter().map(|kind| kind.as_str()))
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ElementKind {
    type Error = BlockKitError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == value)
            .ok_or_else(|| BlockKitError::InvalidType {
                target: "block element",
                found: value.to_owned(),
                allowed: Self::allowed_tags(),
            })
    }
}

fn join_tags<'a>(tags: impl Iterator<Item = &'a str>) -> String {
    tags.collect::<Vec<_>>().join(", ")
}
