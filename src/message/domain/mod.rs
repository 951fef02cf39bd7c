//! Message domain types: the top-level wire document and its settings.

mod defaults;
mod endpoint;
mod icon;
mod message;

pub use defaults::MessageDefaults;
pub use endpoint::WebhookEndpoint;
pub use icon::Icon;
pub use message::Message;
