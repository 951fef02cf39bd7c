//! Service that encodes messages and hands them to a transport.

use crate::message::domain::{Message, WebhookEndpoint};
use crate::message::error::DispatchError;
use crate::message::ports::MessageTransport;
use std::sync::Arc;

/// Encodes each message once and delivers it once, with no retries.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use blockwire::message::adapters::memory::InMemoryTransport;
/// use blockwire::message::domain::{Message, WebhookEndpoint};
/// use blockwire::message::services::MessageDispatcher;
///
/// # #[tokio::main]
/// # async fn main() {
/// let transport = Arc::new(InMemoryTransport::new());
/// let endpoint = WebhookEndpoint::new("https://hooks.example.com/T000").expect("valid URL");
/// let dispatcher = MessageDispatcher::new(Arc::clone(&transport), endpoint);
///
/// dispatcher
///     .dispatch(&Message::default().with_text("hello"))
///     .await
///     .expect("delivered");
/// assert_eq!(transport.len(), 1);
/// # }
/// ```
#[derive(Debug)]
pub struct MessageDispatcher<T> {
    transport: Arc<T>,
    endpoint: WebhookEndpoint,
}

impl<T> Clone for MessageDispatcher<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            endpoint: self.endpoint.clone(),
        }
    }
}

impl<T: MessageTransport> MessageDispatcher<T> {
    /// Creates a dispatcher posting to `endpoint`.
    #[must_use]
    pub const fn new(transport: Arc<T>, endpoint: WebhookEndpoint) -> Self {
        Self {
            transport,
            endpoint,
        }
    }

    /// Returns the destination endpoint.
    #[must_use]
    pub const fn endpoint(&self) -> &WebhookEndpoint {
        &self.endpoint
    }

    /// Encodes `message` and delivers it.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::Encoding`] if the message cannot be
    /// serialised, or [`DispatchError::Transport`] if delivery fails.
    pub async fn dispatch(&self, message: &Message) -> Result<(), DispatchError> {
        let payload = message.to_json()?;
        tracing::debug!(
            endpoint = %self.endpoint,
            blocks = message.blocks().len(),
            bytes = payload.len(),
            "dispatching message"
        );

        self.transport
            .deliver(&self.endpoint, &payload)
            .await
            .inspect_err(|err| {
                tracing::warn!(endpoint = %self.endpoint, error = %err, "message delivery failed");
            })?;
        Ok(())
    }
}
