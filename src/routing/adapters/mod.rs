//! Adapters for the routing ports.
//!
//! - [`memory::InMemoryAgentDirectory`]: thread-safe in-memory profiles
//! - [`canned::CannedAgentBackend`]: simulated agent replies

pub mod canned;
pub mod memory;
