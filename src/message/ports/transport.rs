//! Transport port: delivers one serialised message document to a webhook.

use crate::message::domain::WebhookEndpoint;
use async_trait::async_trait;
use thiserror::Error;

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Delivery contract for fully serialised message documents.
///
/// Implementations deliver each payload at most once; retry policy, if
/// any, belongs to the caller.
#[async_trait]
pub trait MessageTransport: Send + Sync {
    /// Delivers `payload` to `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Rejected`] when the endpoint answers with
    /// a failure status, or [`TransportError::Unavailable`] when it cannot
    /// be reached.
    async fn deliver(&self, endpoint: &WebhookEndpoint, payload: &str) -> TransportResult<()>;
}

/// Errors returned by transport implementations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The endpoint refused the payload.
    #[error("webhook rejected payload with status {status}: {body}")]
    Rejected {
        /// HTTP status code returned by the endpoint.
        status: u16,
        /// Response body returned by the endpoint.
        body: String,
    },

    /// The endpoint could not be reached.
    #[error("webhook unavailable: {0}")]
    Unavailable(String),
}

impl TransportError {
    /// Creates a rejection error.
    #[must_use]
    pub fn rejected(status: u16, body: impl Into<String>) -> Self {
        Self::Rejected {
            status,
            body: body.into(),
        }
    }
}
