//! Agent backend that answers from fixed per-role templates.
//!
//! Stands in for a hosted model while no real backend is wired. Latency is
//! simulated so callers exercise the same suspension point.

use std::time::Duration;

use async_trait::async_trait;

use crate::routing::{
    domain::InputModality,
    ports::backend::{AgentBackend, AgentBackendError, AgentRequest},
};

/// Configuration for [`CannedAgentBackend`].
///
/// # Examples
///
/// ```
/// use hipat::routing::adapters::canned::CannedBackendConfig;
/// use std::time::Duration;
///
/// assert_eq!(CannedBackendConfig::default().latency, Duration::from_millis(500));
/// assert_eq!(CannedBackendConfig::immediate().latency, Duration::ZERO);
/// ```
#[derive(Debug, Clone)]
pub struct CannedBackendConfig {
    /// Delay before each reply.
    pub latency: Duration,
}

impl Default for CannedBackendConfig {
    fn default() -> Self {
        Self {
            latency: Duration::from_millis(500),
        }
    }
}

impl CannedBackendConfig {
    /// Creates a configuration that replies without delay.
    #[must_use]
    pub const fn immediate() -> Self {
        Self {
            latency: Duration::ZERO,
        }
    }
}

/// Simulated agent backend.
#[derive(Debug, Clone, Default)]
pub struct CannedAgentBackend {
    config: CannedBackendConfig,
}

impl CannedAgentBackend {
    /// Creates a backend with the given configuration.
    #[must_use]
    pub const fn new(config: CannedBackendConfig) -> Self {
        Self { config }
    }

    /// Builds the reply for `request` without waiting.
    #[must_use]
    pub fn compose(request: &AgentRequest) -> String {
        let prefix = match request.modality {
            InputModality::Text => "",
            InputModality::Voice => "[Voice Transcription] ",
            InputModality::Photo => "[Photo Analysis] ",
        };
        let input = &request.input;
        match request.role.as_str() {
            "Primary" => format!(
                "{prefix}I'm your primary agent. Based on what you mentioned about \"{input}\", I can provide detailed assistance."
            ),
            "Support" => format!(
                "{prefix}As a support agent, I'm here to assist with your query: \"{input}\". I'll help provide additional context and information."
            ),
            "Coordinator" => format!(
                "{prefix}I'm coordinating the best response to your query: \"{input}\". Let me organize the right information for you."
            ),
            _ => format!(
                "{prefix}I'm your personal assistant. Regarding \"{input}\", I can provide general guidance."
            ),
        }
    }
}

#[async_trait]
impl AgentBackend for CannedAgentBackend {
    async fn invoke(&self, request: &AgentRequest) -> Result<String, AgentBackendError> {
        if !self.config.latency.is_zero() {
            tokio::time::sleep(self.config.latency).await;
        }
        tracing::debug!(
            role = %request.role,
            modality = %request.modality,
            model = request.model.as_deref().unwrap_or("none"),
            "canned agent reply"
        );
        Ok(Self::compose(request))
    }
}
