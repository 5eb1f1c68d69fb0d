//! Events that drive the conversation state machine.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An input to [`ChatMachine::transition`](super::ChatMachine::transition).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChatEvent {
    /// The user submitted text.
    SendMessage {
        /// Message text as typed.
        content: String,
    },
    /// The router produced a reply.
    ReceiveMessage {
        /// Reply text.
        content: String,
    },
    /// The outstanding request failed.
    Error {
        /// User-safe failure description.
        reason: String,
    },
    /// Wipe the log and return to idle.
    ClearMessages,
    /// Open the conversation without sending anything.
    Start,
    /// Park an open conversation.
    Stop,
}

impl ChatEvent {
    /// Builds a [`ChatEvent::SendMessage`].
    #[must_use]
    pub fn send(content: impl Into<String>) -> Self {
        Self::SendMessage {
            content: content.into(),
        }
    }

    /// Builds a [`ChatEvent::ReceiveMessage`].
    #[must_use]
    pub fn receive(content: impl Into<String>) -> Self {
        Self::ReceiveMessage {
            content: content.into(),
        }
    }

    /// Builds a [`ChatEvent::Error`].
    #[must_use]
    pub fn error(reason: impl Into<String>) -> Self {
        Self::Error {
            reason: reason.into(),
        }
    }

    /// Returns the payload-free kind of this event.
    #[must_use]
    pub const fn kind(&self) -> ChatEventKind {
        match self {
            Self::SendMessage { .. } => ChatEventKind::SendMessage,
            Self::ReceiveMessage { .. } => ChatEventKind::ReceiveMessage,
            Self::Error { .. } => ChatEventKind::Error,
            Self::ClearMessages => ChatEventKind::ClearMessages,
            Self::Start => ChatEventKind::Start,
            Self::Stop => ChatEventKind::Stop,
        }
    }
}

/// Event discriminant without payload, used in errors and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChatEventKind {
    /// See [`ChatEvent::SendMessage`].
    SendMessage,
    /// See [`ChatEvent::ReceiveMessage`].
    ReceiveMessage,
    /// See [`ChatEvent::Error`].
    Error,
    /// See [`ChatEvent::ClearMessages`].
    ClearMessages,
    /// See [`ChatEvent::Start`].
    Start,
    /// See [`ChatEvent::Stop`].
    Stop,
}

impl ChatEventKind {
    /// Every event kind, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::SendMessage,
        Self::ReceiveMessage,
        Self::Error,
        Self::ClearMessages,
        Self::Start,
        Self::Stop,
    ];

    /// Returns the canonical event name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SendMessage => "SEND_MESSAGE",
            Self::ReceiveMessage => "RECEIVE_MESSAGE",
            Self::Error => "ERROR",
            Self::ClearMessages => "CLEAR_MESSAGES",
            Self::Start => "START",
            Self::Stop => "STOP",
        }
    }
}

impl fmt::Display for ChatEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
