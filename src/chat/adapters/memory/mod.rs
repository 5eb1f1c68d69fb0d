//! In-memory adapter implementations.

mod message_store;

pub use message_store::InMemoryMessageStore;
