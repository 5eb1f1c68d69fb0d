//! Placeholder router that answers from a keyword table.
//!
//! The table is a development mock. [`AgentRouter`](super::AgentRouter)
//! implements the same contract against real agent profiles.

use async_trait::async_trait;

use super::RouterConfig;
use crate::routing::{
    domain::{RoutingRule, RuleTable},
    ports::router::MessageRouter,
};

/// Router that waits a fixed latency, then applies a [`RuleTable`].
///
/// # Examples
///
/// ```
/// use hipat::routing::domain::GREETING_RESPONSE;
/// use hipat::routing::services::KeywordRouter;
///
/// let router = KeywordRouter::default();
/// assert_eq!(router.respond("hello"), GREETING_RESPONSE);
/// ```
#[derive(Debug, Clone, Default)]
pub struct KeywordRouter {
    table: RuleTable,
    config: RouterConfig,
}

impl KeywordRouter {
    /// Creates a router over `table`.
    #[must_use]
    pub const fn new(table: RuleTable, config: RouterConfig) -> Self {
        Self { table, config }
    }

    /// Creates a router over the default table.
    #[must_use]
    pub fn with_config(config: RouterConfig) -> Self {
        Self::new(RuleTable::default(), config)
    }

    /// Returns the rule table.
    #[must_use]
    pub const fn table(&self) -> &RuleTable {
        &self.table
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// Produces the reply for `input` without the simulated delay.
    #[must_use]
    pub fn respond(&self, input: &str) -> String {
        let rule = self.table.find_match(input);
        tracing::debug!(matched = rule.is_some(), "keyword route");
        let template = rule.map_or(self.table.fallback(), RoutingRule::response);
        match template.render(input) {
            Ok(reply) => reply,
            Err(error) => {
                tracing::warn!(%error, "keyword routing failed");
                self.config.apology.clone()
            }
        }
    }
}

#[async_trait]
impl MessageRouter for KeywordRouter {
    async fn route(&self, input: &str) -> String {
        if !self.config.simulated_latency.is_zero() {
            tokio::time::sleep(self.config.simulated_latency).await;
        }
        self.respond(input)
    }
}
