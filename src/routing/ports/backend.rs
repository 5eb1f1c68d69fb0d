//! Port for the agent or model that produces replies.

use crate::routing::domain::InputModality;
use async_trait::async_trait;
use thiserror::Error;

/// A single request to an agent backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentRequest {
    /// User text.
    pub input: String,
    /// Role of the agent expected to answer.
    pub role: String,
    /// How the input was produced.
    pub modality: InputModality,
    /// System prompt of the agent, if configured.
    pub prompt: Option<String>,
    /// Model selected for the call, if configured.
    pub model: Option<String>,
}

impl AgentRequest {
    /// Creates a request with no prompt or model.
    #[must_use]
    pub fn new(input: impl Into<String>, role: impl Into<String>, modality: InputModality) -> Self {
        Self {
            input: input.into(),
            role: role.into(),
            modality,
            prompt: None,
            model: None,
        }
    }

    /// Sets the system prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    /// Sets the model.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }
}

/// Errors returned by agent backends.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AgentBackendError {
    /// The backend could not be reached.
    #[error("agent backend unavailable: {0}")]
    Unavailable(String),

    /// The backend answered with an error.
    #[error("agent backend rejected the request: {0}")]
    Rejected(String),
}

/// Agent or model invocation contract.
#[async_trait]
pub trait AgentBackend: Send + Sync {
    /// Produces a reply for `request`.
    ///
    /// # Errors
    ///
    /// Returns [`AgentBackendError`] when the call fails.
    async fn invoke(&self, request: &AgentRequest) -> Result<String, AgentBackendError>;
}
