//! Error types for message configuration and dispatch.
//!
//! Uses `thiserror` for ergonomic error handling with typed variants
//! that can be inspected by callers.

use super::ports::transport::TransportError;
use crate::block_kit::BlockKitError;
use thiserror::Error;

/// Errors raised while configuring messages or their destination.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessageError {
    /// A webhook endpoint was blank or not an HTTP(S) URL.
    #[error("invalid webhook endpoint '{endpoint}': {reason}")]
    InvalidEndpoint {
        /// The rejected endpoint.
        endpoint: String,
        /// Description of the problem.
        reason: &'static str,
    },

    /// Message defaults could not be parsed or failed validation.
    #[error("invalid message defaults: {0}")]
    InvalidDefaults(String),
}

/// Errors raised while dispatching a message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// The message could not be encoded.
    #[error(transparent)]
    Encoding(#[from] BlockKitError),

    /// The transport failed to deliver the payload.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl DispatchError {
    /// Returns `true` if the transport reported the failure.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}
