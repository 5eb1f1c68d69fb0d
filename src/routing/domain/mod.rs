//! Domain types for message routing.

mod agent;
mod error;
mod modality;
mod rule;

pub use agent::{AgentId, AgentProfile, AgentStatus};
pub use error::{AgentDomainError, ParseAgentStatusError, ParseInputModalityError, RoutingError};
pub use modality::InputModality;
pub use rule::{
    ECHO_TEMPLATE, FITNESS_RESPONSE, GREETING_RESPONSE, HELP_RESPONSE, NUTRITION_RESPONSE,
    ResponseTemplate, RoutingRule, RuleTable,
};
