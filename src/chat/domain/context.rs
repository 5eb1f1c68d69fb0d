//! The mutable record behind one chat session.

use super::{Message, Role};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Message history and transient flags for one conversation.
///
/// # Invariants
///
/// - `messages` is append-only between clears and ordered chronologically
/// - message timestamps never decrease
/// - `is_processing` mirrors [`ChatState::Processing`](super::ChatState::Processing)
///
/// The context is only mutated through [`ChatMachine`](super::ChatMachine)
/// transitions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationContext {
    messages: Vec<Message>,
    is_processing: bool,
    error: Option<String>,
}

impl ConversationContext {
    /// Creates an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the message log in chronological order.
    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Returns the most recently appended message.
    #[must_use]
    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Returns the number of logged messages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns `true` if the log is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Returns `true` while a routing request is outstanding.
    #[must_use]
    pub const fn is_processing(&self) -> bool {
        self.is_processing
    }

    /// Returns the recorded failure, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub(super) fn append(&mut self, role: Role, content: String, clock: &impl Clock) {
        let now = clock.utc();
        let timestamp = self
            .messages
            .last()
            .map_or(now, |last| last.timestamp().max(now));
        let message = Message::from_parts(super::MessageId::new(), role, content, timestamp);
        self.messages.push(message);
    }

    pub(super) fn clear_messages(&mut self) {
        self.messages.clear();
    }

    pub(super) const fn set_processing(&mut self, processing: bool) {
        self.is_processing = processing;
    }

    pub(super) fn set_error(&mut self, reason: String) {
        self.error = Some(reason);
    }

    pub(super) fn clear_error(&mut self) {
        self.error = None;
    }
}
