//! In-memory implementation of the `MessageStore` port.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::chat::{
    domain::SessionId,
    ports::message_store::{MessageStore, MessageStoreError, MessageStoreResult, StoredMessage},
};

/// In-memory implementation of [`MessageStore`].
///
/// Thread-safe via internal [`RwLock`]; clones share the same storage.
///
/// # Example
///
/// ```
/// use hipat::chat::adapters::memory::InMemoryMessageStore;
///
/// let store = InMemoryMessageStore::new();
/// assert!(store.is_empty());
/// ```
#[derive(Debug, Default, Clone)]
pub struct InMemoryMessageStore {
    sessions: Arc<RwLock<HashMap<SessionId, Vec<StoredMessage>>>>,
}

impl InMemoryMessageStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored messages across all sessions.
    ///
    /// Returns `0` if the internal lock is poisoned.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions
            .read()
            .map(|guard| guard.values().map(Vec::len).sum())
            .unwrap_or(0)
    }

    /// Returns `true` if nothing has been stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl MessageStore for InMemoryMessageStore {
    async fn persist(&self, record: &StoredMessage) -> MessageStoreResult<()> {
        let mut guard = self
            .sessions
            .write()
            .map_err(|e| MessageStoreError::unavailable(format!("lock poisoned: {e}")))?;

        let log = guard.entry(record.session_id).or_default();
        if log.iter().any(|m| m.message_id == record.message_id) {
            return Err(MessageStoreError::Duplicate(record.message_id));
        }

        log.push(record.clone());
        Ok(())
    }

    async fn find_by_session(
        &self,
        session_id: SessionId,
    ) -> MessageStoreResult<Vec<StoredMessage>> {
        let guard = self
            .sessions
            .read()
            .map_err(|e| MessageStoreError::unavailable(format!("lock poisoned: {e}")))?;

        let mut messages = guard.get(&session_id).cloned().unwrap_or_default();
        // Stable sort keeps arrival order for equal timestamps.
        messages.sort_by_key(|m| m.timestamp);
        Ok(messages)
    }
}
