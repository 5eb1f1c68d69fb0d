//! Routing services implementing [`MessageRouter`](crate::routing::ports::MessageRouter).

mod agent;
mod config;
mod keyword;

pub use agent::AgentRouter;
pub use config::{AgentRouterConfig, DEFAULT_APOLOGY, RouterConfig};
pub use keyword::KeywordRouter;
