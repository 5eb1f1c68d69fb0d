//! Author role of a chat message.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Who produced a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Text typed by the person chatting.
    User,
    /// Reply produced by the router.
    Assistant,
    /// Out-of-band notice injected by the application.
    System,
}

impl Role {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
            Self::System => "system",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Role {
    type Error = ParseRoleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "user" => Ok(Self::User),
            "assistant" => Ok(Self::Assistant),
            "system" => Ok(Self::System),
            _ => Err(ParseRoleError(value.to_owned())),
        }
    }
}

/// Error returned when a role string is not recognised.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown message role: {0}")]
pub struct ParseRoleError(pub String);
