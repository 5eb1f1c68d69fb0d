//! Configuration for the routers.

use std::time::Duration;

/// Reply returned whenever routing fails.
pub const DEFAULT_APOLOGY: &str =
    "Sorry, something went wrong while processing your message. Please try again.";

/// Configuration for [`KeywordRouter`](super::KeywordRouter).
///
/// # Examples
///
/// ```
/// use hipat::routing::services::RouterConfig;
/// use std::time::Duration;
///
/// let config = RouterConfig::default();
/// assert_eq!(config.simulated_latency, Duration::from_millis(800));
///
/// let fast = RouterConfig::immediate();
/// assert!(fast.simulated_latency.is_zero());
/// ```
#[derive(Debug, Clone)]
pub struct RouterConfig {
    /// Artificial delay standing in for a remote call.
    pub simulated_latency: Duration,
    /// Reply used when a response cannot be produced.
    pub apology: String,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            simulated_latency: Duration::from_millis(800),
            apology: DEFAULT_APOLOGY.to_owned(),
        }
    }
}

impl RouterConfig {
    /// Creates a configuration without simulated latency.
    ///
    /// Useful for tests.
    #[must_use]
    pub fn immediate() -> Self {
        Self {
            simulated_latency: Duration::ZERO,
            ..Default::default()
        }
    }
}

/// Configuration for [`AgentRouter`](super::AgentRouter).
#[derive(Debug, Clone)]
pub struct AgentRouterConfig {
    /// Role that receives messages routed without an explicit agent.
    pub default_role: String,
    /// Role passed to the backend when no usable profile is found.
    pub fallback_role: String,
    /// Reply used when the backend fails.
    pub apology: String,
}

impl Default for AgentRouterConfig {
    fn default() -> Self {
        Self {
            default_role: "Manager".to_owned(),
            fallback_role: "Primary".to_owned(),
            apology: DEFAULT_APOLOGY.to_owned(),
        }
    }
}

impl AgentRouterConfig {
    /// Sets the default role.
    #[must_use]
    pub fn with_default_role(mut self, role: impl Into<String>) -> Self {
        self.default_role = role.into();
        self
    }
}
