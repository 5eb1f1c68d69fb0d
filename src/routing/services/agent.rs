//! Router backed by agent profiles and an agent backend.

use std::sync::Arc;

use async_trait::async_trait;

use super::AgentRouterConfig;
use crate::routing::{
    domain::{AgentProfile, InputModality},
    ports::{AgentBackend, AgentDirectory, AgentRequest, MessageRouter},
};

/// Routes messages to the agent registered for a role.
///
/// Lookup failures fall back to the configured fallback role; backend
/// failures become the configured apology. [`AgentRouter::route_to_agent`]
/// never fails.
#[derive(Clone)]
pub struct AgentRouter<D, B>
where
    D: AgentDirectory,
    B: AgentBackend,
{
    directory: Arc<D>,
    backend: Arc<B>,
    config: AgentRouterConfig,
}

impl<D, B> AgentRouter<D, B>
where
    D: AgentDirectory,
    B: AgentBackend,
{
    /// Creates a router.
    #[must_use]
    pub const fn new(directory: Arc<D>, backend: Arc<B>, config: AgentRouterConfig) -> Self {
        Self {
            directory,
            backend,
            config,
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &AgentRouterConfig {
        &self.config
    }

    /// Routes `input` to the agent registered for `role`.
    pub async fn route_to_agent(&self, role: &str, input: &str, modality: InputModality) -> String {
        let request = match self.resolve(role).await {
            Some(agent) => {
                if !agent.supports(modality) {
                    return format!(
                        "Sorry, the {} agent doesn't support {modality} input. Please try using text instead.",
                        agent.name()
                    );
                }
                Self::request_for(&agent, input, modality)
            }
            None => AgentRequest::new(input, self.config.fallback_role.as_str(), modality),
        };

        match self.backend.invoke(&request).await {
            Ok(reply) => reply,
            Err(error) => {
                tracing::warn!(role = %request.role, %error, "agent backend failed");
                self.config.apology.clone()
            }
        }
    }

    async fn resolve(&self, role: &str) -> Option<AgentProfile> {
        match self.directory.find_by_role(role).await {
            Ok(Some(agent)) if agent.is_active() => {
                tracing::debug!(role, agent = agent.name(), "routing to agent");
                Some(agent)
            }
            Ok(_) => {
                tracing::debug!(role, "no active agent for role, using fallback");
                None
            }
            Err(error) => {
                tracing::warn!(role, %error, "agent lookup failed, using fallback");
                None
            }
        }
    }

    fn request_for(agent: &AgentProfile, input: &str, modality: InputModality) -> AgentRequest {
        let mut request = AgentRequest::new(input, agent.role(), modality);
        if let Some(prompt) = agent.prompt() {
            request = request.with_prompt(prompt);
        }
        if let Some(model) = agent.selected_model() {
            request = request.with_model(model);
        }
        request
    }
}

#[async_trait]
impl<D, B> MessageRouter for AgentRouter<D, B>
where
    D: AgentDirectory,
    B: AgentBackend,
{
    async fn route(&self, input: &str) -> String {
        self.route_to_agent(&self.config.default_role, input, InputModality::Text)
            .await
    }
}
