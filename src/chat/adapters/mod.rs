//! Adapters for the conversation core's ports.
//!
//! - [`memory::InMemoryMessageStore`]: thread-safe in-memory storage for
//!   tests and local runs
//!
//! The hosted database the application writes to is reached through its own
//! adapter outside this crate.

pub mod memory;
