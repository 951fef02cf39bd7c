//! Adapter implementations of message ports.

pub mod memory;
