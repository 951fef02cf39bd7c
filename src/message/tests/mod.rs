//! Unit tests for the message module.
//!
//! Tests are organised by domain concept: the message document, its
//! defaults and endpoint, the in-memory transport, and dispatch.

mod adapters_tests;
mod dispatch_tests;
mod message_tests;
