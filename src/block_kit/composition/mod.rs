//! Composition objects: small reusable values nested inside blocks and
//! elements.
//!
//! All of them serialise via serde and are exclusively owned by their
//! parent; none carries a back-reference.

mod confirmation;
mod option;
mod option_group;
mod text;

pub use confirmation::{Confirmation, IntoConfirmation};
pub use option::{IntoSelectOption, SelectOption};
pub use option_group::{IntoOptionGroup, OptionGroup};
pub use text::{IntoText, MarkdownText, PlainText, Text, TextType};

pub(crate) use text::{any as any_text, plain as plain_text};
