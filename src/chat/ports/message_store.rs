//! Port for forwarding conversation messages to external storage.
//!
//! Persistence is best-effort: the conversation core never waits on a
//! store to decide a transition, and store failures never roll one back.

use crate::chat::domain::{Message, MessageId, Role, SessionId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// Result type for message store operations.
pub type MessageStoreResult<T> = Result<T, MessageStoreError>;

/// Copy of a logged message as handed to external storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredMessage {
    /// Session the message belongs to.
    pub session_id: SessionId,
    /// Identifier of the logged message.
    pub message_id: MessageId,
    /// Author role.
    pub role: Role,
    /// Message text.
    pub content: String,
    /// Creation time of the logged message.
    pub timestamp: DateTime<Utc>,
}

impl StoredMessage {
    /// Captures a copy of `message` for the given session.
    #[must_use]
    pub fn from_message(session_id: SessionId, message: &Message) -> Self {
        Self {
            session_id,
            message_id: message.id(),
            role: message.role(),
            content: message.content().to_owned(),
            timestamp: message.timestamp(),
        }
    }
}

/// Persistence contract for conversation messages.
#[async_trait]
pub trait MessageStore: Send + Sync {
    /// Persists a copy of a message.
    ///
    /// # Errors
    ///
    /// Returns [`MessageStoreError::Duplicate`] when the message was already
    /// stored, or another variant when the backing store fails.
    async fn persist(&self, record: &StoredMessage) -> MessageStoreResult<()>;

    /// Returns all stored messages of a session, oldest first.
    ///
    /// Returns an empty vector for unknown sessions.
    ///
    /// # Errors
    ///
    /// Returns [`MessageStoreError`] if the query fails.
    async fn find_by_session(&self, session_id: SessionId)
    -> MessageStoreResult<Vec<StoredMessage>>;
}

/// Errors returned by message store implementations.
#[derive(Debug, Clone, Error)]
pub enum MessageStoreError {
    /// The message has already been persisted.
    #[error("duplicate message: {0}")]
    Duplicate(MessageId),

    /// The store could not be reached.
    #[error("message store unavailable: {0}")]
    Unavailable(String),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl MessageStoreError {
    /// Creates an unavailable error.
    #[must_use]
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
