//! Lifecycle states of a conversation.

use super::ParseChatStateError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Conversation lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatState {
    /// Nothing sent yet, awaiting the first input.
    #[default]
    Idle,
    /// Has history and is awaiting input.
    Active,
    /// A routing request is outstanding.
    Processing,
    /// The last routing attempt failed.
    Error,
}

impl ChatState {
    /// Every state, in declaration order.
    pub const ALL: [Self; 4] = [Self::Idle, Self::Active, Self::Processing, Self::Error];

    /// Returns the canonical name of the state.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Active => "active",
            Self::Processing => "processing",
            Self::Error => "error",
        }
    }

    /// Returns `true` while a routing request is outstanding.
    #[must_use]
    pub const fn is_processing(self) -> bool {
        matches!(self, Self::Processing)
    }

    /// Returns `true` when new user input may be submitted.
    #[must_use]
    pub const fn accepts_input(self) -> bool {
        !self.is_processing()
    }
}

impl fmt::Display for ChatState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ChatState {
    type Error = ParseChatStateError;

    fn try_from(value: &str) -> Result<Self, ParseChatStateError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "idle" => Ok(Self::Idle),
            "active" => Ok(Self::Active),
            "processing" => Ok(Self::Processing),
            "error" => Ok(Self::Error),
            _ => Err(ParseChatStateError(value.to_owned())),
        }
    }
}
