//! Service layer for message dispatch.

pub mod dispatch;

pub use dispatch::MessageDispatcher;
