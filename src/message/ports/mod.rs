//! Port interfaces for the message context.

pub mod transport;

pub use transport::{MessageTransport, TransportError, TransportResult};
