//! Port for looking up agent profiles.

use crate::routing::domain::{AgentId, AgentProfile};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for agent directory operations.
pub type AgentDirectoryResult<T> = Result<T, AgentDirectoryError>;

/// Agent profile lookup contract.
#[async_trait]
pub trait AgentDirectory: Send + Sync {
    /// Stores a new profile.
    ///
    /// # Errors
    ///
    /// Returns [`AgentDirectoryError::DuplicateAgent`] when the identifier
    /// exists or [`AgentDirectoryError::DuplicateRole`] when another profile
    /// already claims the role.
    async fn register(&self, profile: &AgentProfile) -> AgentDirectoryResult<()>;

    /// Finds the profile registered for `role`, matched exactly.
    ///
    /// Returns `None` when no profile has the role.
    async fn find_by_role(&self, role: &str) -> AgentDirectoryResult<Option<AgentProfile>>;

    /// Returns active profiles ordered by name.
    async fn list_active(&self) -> AgentDirectoryResult<Vec<AgentProfile>>;
}

/// Errors returned by agent directory implementations.
#[derive(Debug, Clone, Error)]
pub enum AgentDirectoryError {
    /// A profile with the same identifier already exists.
    #[error("duplicate agent identifier: {0}")]
    DuplicateAgent(AgentId),

    /// A profile with the same role already exists.
    #[error("duplicate agent role: {0}")]
    DuplicateRole(String),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl AgentDirectoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
