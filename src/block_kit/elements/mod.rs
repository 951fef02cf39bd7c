//! Block elements: interactive and display components nested in blocks.
//!
//! [`BlockElement`] is a closed union over every registered element kind.
//! Each variant is a concrete struct carrying its own fields; elements that
//! offer choices hold an [`OptionSet`] and elements that may ask for
//! confirmation implement [`Confirmable`].
//!
//! Every element serialises as a JSON object whose first key is `type`:
//!
//! ```json
//! { "type": "button", "text": { "type": "plain_text", "text": "Go", "emoji": false }, "action_id": "go" }
//! ```

mod button;
mod checkboxes;
mod date_picker;
pub(crate) mod image;
mod multi_select;
pub(crate) mod options;
mod overflow;
mod radio_buttons;
mod select;
mod text_input;

pub use button::{Button, ButtonStyle};
pub use checkboxes::Checkboxes;
pub use date_picker::DatePicker;
pub use image::{ImageContent, ImageElement};
pub use multi_select::MultiSelect;
pub use options::{Confirmable, HasOptions, OptionSet, SelectionMode};
pub use overflow::Overflow;
pub use radio_buttons::RadioButtons;
pub use select::Select;
pub use text_input::TextInput;

use super::attributes::{self, Attributes};
use super::composition::Text;
use super::error::{BlockKitError, BlockKitResult};
use super::kind::{BlockKind, ElementKind};
use super::registry;
use serde::{Serialize, Serializer};
use serde_json::Value;

/// Any block element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockElement {
    /// A clickable button.
    Button(Button),
    /// A group of checkboxes.
    Checkboxes(Checkboxes),
    /// A calendar date picker.
    DatePicker(DatePicker),
    /// A small image.
    Image(ImageElement),
    /// A static multi-select menu.
    MultiSelect(MultiSelect),
    /// An overflow menu.
    Overflow(Overflow),
    /// A group of radio buttons.
    RadioButtons(RadioButtons),
    /// A static single-select menu.
    Select(Select),
    /// A bare text fragment.
    Text(Text),
    /// A free-text input.
    TextInput(TextInput),
}

impl BlockElement {
    /// Normalises an attribute map or an existing element into an element.
    ///
    /// # Errors
    ///
    /// Returns [`BlockKitError::MissingType`] or
    /// [`BlockKitError::InvalidType`] for an attribute map without a
    /// registered `type`, or any construction error of the variant.
    ///
    /// # Examples
    ///
    /// ```
    /// use blockwire::block_kit::elements::BlockElement;
    /// use blockwire::block_kit::ElementKind;
    /// use serde_json::json;
    ///
    /// let element = BlockElement::factory(json!({ "type": "button", "text": "Go" }))
    ///     .expect("registered type");
    /// assert_eq!(element.kind(), ElementKind::Button);
    /// ```
    pub fn factory(input: impl IntoElement) -> BlockKitResult<Self> {
        input.into_element()
    }

    /// Returns the element kind.
    ///
    /// Bare text reports its format type as its kind.
    #[must_use]
    pub const fn kind(&self) -> ElementKind {
        match self {
            Self::Button(_) => ElementKind::Button,
            Self::Checkboxes(_) => ElementKind::Checkboxes,
            Self::DatePicker(_) => ElementKind::DatePicker,
            Self::Image(_) => ElementKind::Image,
            Self::MultiSelect(_) => ElementKind::MultiSelect,
            Self::Overflow(_) => ElementKind::Overflow,
            Self::RadioButtons(_) => ElementKind::RadioButtons,
            Self::Select(_) => ElementKind::Select,
            Self::Text(Text::Plain(_)) => ElementKind::PlainText,
            Self::Text(Text::Markdown(_)) => ElementKind::Markdown,
            Self::TextInput(_) => ElementKind::TextInput,
        }
    }

    /// Returns `true` if this element may be hosted by `block` blocks.
    #[must_use]
    pub fn is_valid_for(&self, block: BlockKind) -> bool {
        registry::is_valid_for(self.kind(), block)
    }

    /// Serialises the element to its wire document.
    ///
    /// # Errors
    ///
    /// Returns [`BlockKitError::Serialization`] if encoding fails.
    pub fn to_document(&self) -> BlockKitResult<Value> {
        serde_json::to_value(self).map_err(|e| BlockKitError::Serialization(e.to_string()))
    }
}

/// Prefixes a variant body with its `type` tag.
#[derive(Serialize)]
struct Tagged<'a, T> {
    #[serde(rename = "type")]
    kind: &'static str,
    #[serde(flatten)]
    body: &'a T,
}

impl Serialize for BlockElement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let kind = self.kind().as_str();
        match self {
            Self::Text(text) => text.serialize(serializer),
            Self::Button(body) => Tagged { kind, body }.serialize(serializer),
            Self::Checkboxes(body) => Tagged { kind, body }.serialize(serializer),
            Self::DatePicker(body) => Tagged { kind, body }.serialize(serializer),
            Self::Image(body) => Tagged { kind, body }.serialize(serializer),
            Self::MultiSelect(body) => Tagged { kind, body }.serialize(serializer),
            Self::Overflow(body) => Tagged { kind, body }.serialize(serializer),
            Self::RadioButtons(body) => Tagged { kind, body }.serialize(serializer),
            Self::Select(body) => Tagged { kind, body }.serialize(serializer),
            Self::TextInput(body) => Tagged { kind, body }.serialize(serializer),
        }
    }
}

/// Inputs that can be normalised into a [`BlockElement`].
pub trait IntoElement {
    /// Converts the input.
    ///
    /// # Errors
    ///
    /// Returns a [`BlockKitError`] when the input cannot describe a
    /// registered element.
    fn into_element(self) -> BlockKitResult<BlockElement>;
}

impl IntoElement for BlockElement {
    fn into_element(self) -> BlockKitResult<BlockElement> {
        Ok(self)
    }
}

impl IntoElement for Attributes {
    fn into_element(self) -> BlockKitResult<BlockElement> {
        let tag = attributes::type_tag("block element", &self)?;
        let kind = ElementKind::try_from(tag.as_str()).inspect_err(|_| {
            tracing::debug!(tag = %tag, "unresolvable block element type");
        })?;
        registry::element_constructor(kind)(self)
    }
}

impl IntoElement for Value {
    fn into_element(self) -> BlockKitResult<BlockElement> {
        attributes::object("element", "BlockElement", self)?.into_element()
    }
}

macro_rules! element_variant {
    ($($variant:ident($element:ty)),+ $(,)?) => {
        $(
            impl From<$element> for BlockElement {
                fn from(element: $element) -> Self {
                    Self::$variant(element)
                }
            }

            impl IntoElement for $element {
                fn into_element(self) -> BlockKitResult<BlockElement> {
                    Ok(BlockElement::$variant(self))
                }
            }
        )+
    };
}

element_variant!(
    Button(Button),
    Checkboxes(Checkboxes),
    DatePicker(DatePicker),
    Image(ImageElement),
    MultiSelect(MultiSelect),
    Overflow(Overflow),
    RadioButtons(RadioButtons),
    Select(Select),
    Text(Text),
    TextInput(TextInput),
);
