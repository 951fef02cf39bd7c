//! Top-level message documents and their delivery.
//!
//! A [`domain::Message`] carries the scalar delivery settings of a webhook
//! payload plus an ordered list of blocks from [`crate::block_kit`].
//! Delivery goes through the [`ports::MessageTransport`] port so the
//! composition engine never depends on any particular HTTP client.
//!
//! # Architecture
//!
//! The module follows hexagonal architecture principles:
//!
//! - **Domain**: [`domain::Message`], [`domain::MessageDefaults`], [`domain::WebhookEndpoint`]
//! - **Ports**: [`ports::MessageTransport`]
//! - **Adapters**: [`adapters::memory::InMemoryTransport`]
//! - **Services**: [`services::MessageDispatcher`]
//!
//! # Example
//!
//! ```
//! use blockwire::block_kit::blocks::SectionBlock;
//! use blockwire::message::domain::MessageDefaults;
//!
//! let message = MessageDefaults::default()
//!     .message()
//!     .to("#deploys")
//!     .with_block(SectionBlock::new("Deploy finished").expect("plain text"))
//!     .expect("valid block");
//!
//! let payload = message.to_json().expect("serialisable");
//! assert!(payload.contains("\"type\":\"section\""));
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
