//! Kind of user input handed to an agent.

use super::ParseInputModalityError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How the user produced the input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputModality {
    /// Typed text.
    #[default]
    Text,
    /// Transcribed speech.
    Voice,
    /// Description extracted from a photo.
    Photo,
}

impl InputModality {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Voice => "voice",
            Self::Photo => "photo",
        }
    }
}

impl fmt::Display for InputModality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for InputModality {
    type Error = ParseInputModalityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "voice" => Ok(Self::Voice),
            "photo" => Ok(Self::Photo),
            _ => Err(ParseInputModalityError(value.to_owned())),
        }
    }
}
