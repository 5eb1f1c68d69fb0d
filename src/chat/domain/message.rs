//! A single entry in a conversation log.

use super::{MessageId, Role};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A message within a conversation.
///
/// Messages are immutable after creation and owned exclusively by the
/// conversation log that appended them.
///
/// # Examples
///
/// ```
/// use hipat::chat::domain::{Message, Role};
/// use mockable::DefaultClock;
///
/// let message = Message::new(Role::User, "hi", &DefaultClock);
/// assert_eq!(message.role(), Role::User);
/// assert_eq!(message.content(), "hi");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    id: MessageId,
    role: Role,
    content: String,
    timestamp: DateTime<Utc>,
}

impl Message {
    /// Creates a message stamped with the current clock time.
    #[must_use]
    pub fn new(role: Role, content: impl Into<String>, clock: &impl Clock) -> Self {
        Self::from_parts(MessageId::new(), role, content, clock.utc())
    }

    /// Reconstructs a message from previously captured parts.
    #[must_use]
    pub fn from_parts(
        id: MessageId,
        role: Role,
        content: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            role,
            content: content.into(),
            timestamp,
        }
    }

    /// Returns the message identifier.
    #[must_use]
    pub const fn id(&self) -> MessageId {
        self.id
    }

    /// Returns the author role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Returns the message text.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}
