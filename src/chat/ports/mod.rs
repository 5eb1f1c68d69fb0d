//! Port trait definitions for the conversation core.
//!
//! The router port lives in [`crate::routing::ports`]; the chat session
//! consumes it alongside the store defined here.

pub mod message_store;

pub use message_store::{MessageStore, MessageStoreError, MessageStoreResult, StoredMessage};
