//! Port trait definitions for message routing.

pub mod backend;
pub mod directory;
pub mod router;

pub use backend::{AgentBackend, AgentBackendError, AgentRequest};
pub use directory::{AgentDirectory, AgentDirectoryError, AgentDirectoryResult};
pub use router::MessageRouter;
