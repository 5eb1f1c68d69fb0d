//! In-memory implementation of the `AgentDirectory` port.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::routing::{
    domain::{AgentId, AgentProfile},
    ports::directory::{AgentDirectory, AgentDirectoryError, AgentDirectoryResult},
};

/// In-memory implementation of [`AgentDirectory`].
///
/// Thread-safe via internal [`RwLock`]; clones share the same profiles.
#[derive(Debug, Default, Clone)]
pub struct InMemoryAgentDirectory {
    agents: Arc<RwLock<HashMap<AgentId, AgentProfile>>>,
}

impl InMemoryAgentDirectory {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of registered profiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.agents.read().map(|guard| guard.len()).unwrap_or(0)
    }

    /// Returns `true` if no profiles are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned(err: &impl std::fmt::Display) -> AgentDirectoryError {
    AgentDirectoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl AgentDirectory for InMemoryAgentDirectory {
    async fn register(&self, profile: &AgentProfile) -> AgentDirectoryResult<()> {
        let mut guard = self.agents.write().map_err(|e| poisoned(&e))?;

        if guard.contains_key(&profile.id()) {
            return Err(AgentDirectoryError::DuplicateAgent(profile.id()));
        }
        if guard.values().any(|agent| agent.role() == profile.role()) {
            return Err(AgentDirectoryError::DuplicateRole(profile.role().to_owned()));
        }

        guard.insert(profile.id(), profile.clone());
        Ok(())
    }

    async fn find_by_role(&self, role: &str) -> AgentDirectoryResult<Option<AgentProfile>> {
        let guard = self.agents.read().map_err(|e| poisoned(&e))?;
        Ok(guard.values().find(|agent| agent.role() == role).cloned())
    }

    async fn list_active(&self) -> AgentDirectoryResult<Vec<AgentProfile>> {
        let guard = self.agents.read().map_err(|e| poisoned(&e))?;
        let mut agents: Vec<AgentProfile> = guard
            .values()
            .filter(|agent| agent.is_active())
            .cloned()
            .collect();
        agents.sort_by(|a, b| a.name().cmp(b.name()));
        Ok(agents)
    }
}
