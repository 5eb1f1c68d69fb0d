//! Services orchestrating the conversation core.

mod config;
mod session;

pub use config::{ChatSessionConfig, DEFAULT_FAILURE_MESSAGE};
pub use session::{ChatSession, ChatSessionError, ChatSessionResult};
