//! Error types for routing domain values.

use thiserror::Error;

/// Errors raised while producing a canned response.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RoutingError {
    /// A response template failed to render.
    #[error("failed to render response template: {reason}")]
    TemplateRender {
        /// Renderer diagnostic.
        reason: String,
    },
}

/// Errors returned while constructing agent profiles.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AgentDomainError {
    /// The agent name is empty after trimming.
    #[error("agent name must not be empty")]
    EmptyName,

    /// The agent role is empty after trimming.
    #[error("agent role must not be empty")]
    EmptyRole,
}

/// Error returned when an input modality string is not recognised.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown input modality: {0}")]
pub struct ParseInputModalityError(pub String);

/// Error returned when an agent status string is not recognised.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown agent status: {0}")]
pub struct ParseAgentStatusError(pub String);
