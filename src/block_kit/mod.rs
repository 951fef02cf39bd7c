//! Block Kit composition engine.
//!
//! This module turns raw attribute maps or typed builders into a tree of
//! blocks, elements, and composition objects, validating every attachment
//! as it happens, and serialises the tree to the nested JSON wire format.
//!
//! # Structure
//!
//! - [`composition`]: text, options, option groups, confirmation dialogs
//! - [`elements`]: interactive and display components
//! - [`blocks`]: top-level layout units
//! - [`registry`]: type-tag constructors and the validity matrix
//!
//! # Example
//!
//! ```
//! use blockwire::block_kit::blocks::{Block, SectionBlock};
//! use blockwire::block_kit::elements::Button;
//! use serde_json::json;
//!
//! let section = SectionBlock::new("T")?
//!     .with_field("A")?
//!     .with_accessory(Button::new("B", "x")?)?;
//! let document = Block::from(section).to_document()?;
//!
//! assert_eq!(document["accessory"]["action_id"], json!("x"));
//! assert!(document.get("block_id").is_none());
//! # Ok::<(), blockwire::block_kit::BlockKitError>(())
//! ```

pub mod attributes;
pub mod blocks;
pub mod composition;
pub mod elements;
mod error;
mod kind;
pub mod registry;

pub use attributes::Attributes;
pub use error::{BlockKitError, BlockKitResult};
pub use kind::{BlockKind, ElementKind};

#[cfg(test)]
mod tests;
