//! Static type registry and validity matrix.
//!
//! Two tables live here as plain data: the constructor for every registered
//! type tag, and the block kinds each element kind may be hosted by.
//! Neither table is consulted through inheritance; callers resolve a
//! [`ElementKind`] or [`BlockKind`] first and then look it up.

use super::attributes::Attributes;
use super::blocks::{
    ActionsBlock, Block, ContextBlock, DividerBlock, FileBlock, ImageBlock, InputBlock,
    SectionBlock,
};
use super::composition::Text;
use super::elements::{
    BlockElement, Button, Checkboxes, DatePicker, ImageElement, MultiSelect, Overflow,
    RadioButtons, Select, TextInput,
};
use super::error::BlockKitResult;
use super::kind::{BlockKind, ElementKind};

/// Builds an element variant from its attribute map.
pub type ElementConstructor = fn(Attributes) -> BlockKitResult<BlockElement>;

/// Builds a block variant from its attribute map.
pub type BlockConstructor = fn(Attributes) -> BlockKitResult<Block>;

/// Returns the block kinds that may host `element`.
///
/// # Examples
///
/// ```
/// use blockwire::block_kit::registry::allowed_hosts;
/// use blockwire::block_kit::{BlockKind, ElementKind};
///
/// assert!(allowed_hosts(ElementKind::Button).contains(&BlockKind::Actions));
/// assert!(!allowed_hosts(ElementKind::Button).contains(&BlockKind::Context));
/// ```
#[must_use]
pub const fn allowed_hosts(element: ElementKind) -> &'static [BlockKind] {
    use BlockKind::{Actions, Context, Input, Section};

    match element {
        ElementKind::Button | ElementKind::Overflow => &[Section, Actions],
        ElementKind::Checkboxes
        | ElementKind::DatePicker
        | ElementKind::RadioButtons
        | ElementKind::Select
        | ElementKind::TextInput => &[Section, Actions, Input],
        ElementKind::Image => &[Section, Context],
        ElementKind::MultiSelect => &[Section, Input],
        ElementKind::PlainText | ElementKind::Markdown => &[Context],
    }
}

/// Returns `true` if `element` may be hosted by `block`.
#[must_use]
pub fn is_valid_for(element: ElementKind, block: BlockKind) -> bool {
    allowed_hosts(element).contains(&block)
}

/// Returns the constructor registered for `kind`.
#[must_use]
pub fn element_constructor(kind: ElementKind) -> ElementConstructor {
    match kind {
        ElementKind::Button => |a| Button::from_attributes(a).map(BlockElement::Button),
        ElementKind::Checkboxes => {
            |a| Checkboxes::from_attributes(a).map(BlockElement::Checkboxes)
        }
        ElementKind::DatePicker => {
            |a| DatePicker::from_attributes(a).map(BlockElement::DatePicker)
        }
        ElementKind::Image => |a| ImageElement::from_attributes(a).map(BlockElement::Image),
        ElementKind::MultiSelect => {
            |a| MultiSelect::from_attributes(a).map(BlockElement::MultiSelect)
        }
        ElementKind::Overflow => |a| Overflow::from_attributes(a).map(BlockElement::Overflow),
        ElementKind::RadioButtons => {
            |a| RadioButtons::from_attributes(a).map(BlockElement::RadioButtons)
        }
        ElementKind::Select => |a| Select::from_attributes(a).map(BlockElement::Select),
        ElementKind::PlainText | ElementKind::Markdown => {
            |a| Text::from_attributes(a).map(BlockElement::Text)
        }
        ElementKind::TextInput => {
            |a| TextInput::from_attributes(a).map(BlockElement::TextInput)
        }
    }
}

/// Returns the constructor registered for `kind`.
#[must_use]
pub fn block_constructor(kind: BlockKind) -> BlockConstructor {
    match kind {
        BlockKind::Actions => |a| ActionsBlock::from_attributes(a).map(Block::Actions),
        BlockKind::Context => |a| ContextBlock::from_attributes(a).map(Block::Context),
        BlockKind::Divider => |a| DividerBlock::from_attributes(a).map(Block::Divider),
        BlockKind::File => |a| FileBlock::from_attributes(a).map(Block::File),
        BlockKind::Image => |a| ImageBlock::from_attributes(a).map(Block::Image),
        BlockKind::Input => |a| InputBlock::from_attributes(a).map(Block::Input),
        BlockKind::Section => |a| SectionBlock::from_attributes(a).map(Block::Section),
    }
}
