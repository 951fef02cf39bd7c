//! In-memory transport for tests and local development.

use crate::message::domain::WebhookEndpoint;
use crate::message::ports::{MessageTransport, TransportError, TransportResult};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, RwLock};

/// A payload accepted by [`InMemoryTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    endpoint: WebhookEndpoint,
    payload: String,
}

impl Delivery {
    /// Returns the destination endpoint.
    #[must_use]
    pub const fn endpoint(&self) -> &WebhookEndpoint {
        &self.endpoint
    }

    /// Returns the serialised payload.
    #[must_use]
    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// Parses the payload back into a JSON document.
    ///
    /// # Errors
    ///
    /// Returns the parse error if the payload is not valid JSON.
    pub fn document(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::from_str(&self.payload)
    }
}

/// Thread-safe transport that records deliveries instead of sending them.
///
/// Failures can be queued with [`InMemoryTransport::fail_next`]; each
/// queued failure is returned by exactly one delivery attempt, which is
/// then not recorded.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTransport {
    state: Arc<RwLock<TransportState>>,
}

#[derive(Debug, Default)]
struct TransportState {
    deliveries: Vec<Delivery>,
    failures: VecDeque<TransportError>,
}

impl InMemoryTransport {
    /// Creates a transport with no deliveries and no queued failures.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a failure for the next delivery attempt.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Unavailable`] if the internal lock is
    /// poisoned.
    pub fn fail_next(&self, error: TransportError) -> TransportResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| TransportError::Unavailable(err.to_string()))?;
        state.failures.push_back(error);
        Ok(())
    }

    /// Returns every recorded delivery in order.
    #[must_use]
    pub fn deliveries(&self) -> Vec<Delivery> {
        self.state
            .read()
            .map(|guard| guard.deliveries.clone())
            .unwrap_or_default()
    }

    /// Returns the number of recorded deliveries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state
            .read()
            .map(|guard| guard.deliveries.len())
            .unwrap_or(0)
    }

    /// Returns `true` if nothing has been delivered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl MessageTransport for InMemoryTransport {
    async fn deliver(&self, endpoint: &WebhookEndpoint, payload: &str) -> TransportResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| TransportError::Unavailable(err.to_string()))?;
        if let Some(failure) = state.failures.pop_front() {
            return Err(failure);
        }
        state.deliveries.push(Delivery {
            endpoint: endpoint.clone(),
            payload: payload.to_owned(),
        });
        Ok(())
    }
}
