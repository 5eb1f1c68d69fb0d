//! In-memory adapter implementations.

mod agent_directory;

pub use agent_directory::InMemoryAgentDirectory;
