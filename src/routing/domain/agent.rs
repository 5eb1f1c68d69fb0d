//! Agent profiles defined in the admin console.

use super::{AgentDomainError, InputModality, ParseAgentStatusError};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for an agent profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgentId(Uuid);

impl AgentId {
    /// Creates a new random agent identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates an agent identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for AgentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whether an agent may receive routed messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentStatus {
    /// Routable.
    #[default]
    Active,
    /// Hidden from routing.
    Inactive,
}

impl AgentStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

impl TryFrom<&str> for AgentStatus {
    type Error = ParseAgentStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            _ => Err(ParseAgentStatusError(value.to_owned())),
        }
    }
}

/// An agent the router can hand messages to.
///
/// # Examples
///
/// ```
/// use hipat::routing::domain::{AgentProfile, InputModality};
///
/// let agent = AgentProfile::new("Coach", "Support", "Fitness coaching")
///     .expect("valid profile")
///     .with_input_types([InputModality::Text])
///     .with_linked_api_models(["gpt-4o-mini".to_owned()]);
///
/// assert!(agent.supports(InputModality::Text));
/// assert!(!agent.supports(InputModality::Photo));
/// assert_eq!(agent.selected_model(), Some("gpt-4o-mini"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentProfile {
    id: AgentId,
    name: String,
    role: String,
    description: String,
    prompt: Option<String>,
    default_api_model: Option<String>,
    linked_api_models: Vec<String>,
    input_types: Option<Vec<InputModality>>,
    status: AgentStatus,
}

impl AgentProfile {
    /// Creates an active profile accepting every modality.
    ///
    /// # Errors
    ///
    /// Returns [`AgentDomainError`] when the name or role is blank.
    pub fn new(
        name: impl Into<String>,
        role: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, AgentDomainError> {
        let trimmed_name = name.into().trim().to_owned();
        let trimmed_role = role.into().trim().to_owned();
        if trimmed_name.is_empty() {
            return Err(AgentDomainError::EmptyName);
        }
        if trimmed_role.is_empty() {
            return Err(AgentDomainError::EmptyRole);
        }

        Ok(Self {
            id: AgentId::new(),
            name: trimmed_name,
            role: trimmed_role,
            description: description.into(),
            prompt: None,
            default_api_model: None,
            linked_api_models: Vec::new(),
            input_types: None,
            status: AgentStatus::Active,
        })
    }

    /// Sets the system prompt handed to the backend.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    /// Sets the preferred model.
    #[must_use]
    pub fn with_default_api_model(mut self, model: impl Into<String>) -> Self {
        self.default_api_model = Some(model.into());
        self
    }

    /// Sets the models linked to this agent.
    #[must_use]
    pub fn with_linked_api_models(mut self, models: impl IntoIterator<Item = String>) -> Self {
        self.linked_api_models = models.into_iter().collect();
        self
    }

    /// Restricts the modalities the agent accepts.
    ///
    /// An empty list accepts nothing; a profile that never sets input types
    /// accepts every modality.
    #[must_use]
    pub fn with_input_types(mut self, types: impl IntoIterator<Item = InputModality>) -> Self {
        self.input_types = Some(types.into_iter().collect());
        self
    }

    /// Sets the routing status.
    #[must_use]
    pub const fn with_status(mut self, status: AgentStatus) -> Self {
        self.status = status;
        self
    }

    /// Returns the profile identifier.
    #[must_use]
    pub const fn id(&self) -> AgentId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the role used for lookup.
    #[must_use]
    pub fn role(&self) -> &str {
        &self.role
    }

    /// Returns the free-text description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the system prompt, if any.
    #[must_use]
    pub fn prompt(&self) -> Option<&str> {
        self.prompt.as_deref()
    }

    /// Returns the linked models.
    #[must_use]
    pub fn linked_api_models(&self) -> &[String] {
        &self.linked_api_models
    }

    /// Returns the accepted modalities, or `None` when unrestricted.
    #[must_use]
    pub fn input_types(&self) -> Option<&[InputModality]> {
        self.input_types.as_deref()
    }

    /// Returns the routing status.
    #[must_use]
    pub const fn status(&self) -> AgentStatus {
        self.status
    }

    /// Returns `true` when the agent may receive routed messages.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self.status, AgentStatus::Active)
    }

    /// Returns `true` if the agent accepts input of this modality.
    #[must_use]
    pub fn supports(&self, modality: InputModality) -> bool {
        self.input_types
            .as_ref()
            .is_none_or(|types| types.contains(&modality))
    }

    /// Returns the model to invoke: the default, else the first linked one.
    #[must_use]
    pub fn selected_model(&self) -> Option<&str> {
        self.default_api_model
            .as_deref()
            .or_else(|| self.linked_api_models.first().map(String::as_str))
    }
}
