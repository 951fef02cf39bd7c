//! Blockwire: Block Kit message composition.
//!
//! This crate builds the structured layout documents accepted by chat
//! webhooks. Blocks and interactive elements are assembled from typed
//! builders or plain JSON attribute maps, validated against placement
//! rules, and serialised to the exact wire shape.
//!
//! # Architecture
//!
//! Blockwire follows hexagonal architecture principles:
//!
//! - **Domain**: Blocks, elements, and messages with no I/O
//! - **Ports**: Abstract trait interfaces for delivery
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`block_kit`]: Blocks, elements, composition objects, and their registry
//! - [`message`]: Top-level message documents and webhook dispatch

pub mod block_kit;
pub mod message;
