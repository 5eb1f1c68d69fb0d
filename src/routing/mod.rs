//! Message routing: mapping user text to a reply.
//!
//! [`services::KeywordRouter`] is the development placeholder matching a
//! fixed keyword table. [`services::AgentRouter`] honours the same
//! [`ports::MessageRouter`] contract by looking up an admin-defined
//! [`domain::AgentProfile`] and invoking an [`ports::AgentBackend`].
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Router implementations in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
