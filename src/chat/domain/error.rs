//! Error types for the conversation state machine.

use super::{ChatEventKind, ChatState};
use thiserror::Error;

/// Errors returned when an event cannot be applied.
///
/// A rejected event never mutates the machine.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransitionError {
    /// No transition exists for the event in the current state.
    #[error("invalid transition: {event} is not accepted in state {from}")]
    InvalidTransition {
        /// State the machine was in.
        from: ChatState,
        /// Event that was rejected.
        event: ChatEventKind,
    },

    /// A user message carried no text.
    #[error("message content must not be empty")]
    EmptyContent,
}

/// Error returned while parsing chat states from their canonical names.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown chat state: {0}")]
pub struct ParseChatStateError(pub String);
