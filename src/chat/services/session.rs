//! Chat session orchestration.
//!
//! The [`ChatSession`] is the caller that reacts to state changes: it feeds
//! events into the pure [`ChatMachine`], invokes the router while the
//! machine is processing, and forwards appended messages to a
//! [`MessageStore`] on a best-effort basis.
//!
//! Store writes run on background tasks chained one after another, so a
//! slow or stalled store never holds up a transition while persisted copies
//! still arrive in log order. [`ChatSession::flush`] waits for them.

use std::sync::Arc;

use mockable::Clock;
use thiserror::Error;
use tokio::task::JoinHandle;

use super::ChatSessionConfig;
use crate::chat::{
    domain::{
        ChatEvent, ChatMachine, ChatState, ConversationContext, SessionId, TransitionError,
    },
    ports::message_store::{MessageStore, StoredMessage},
};
use crate::routing::ports::MessageRouter;

/// Service-level errors for chat session operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChatSessionError {
    /// The submitted text was blank after trimming.
    #[error("message must not be empty")]
    EmptyInput,

    /// The state machine rejected the event.
    #[error(transparent)]
    Transition(#[from] TransitionError),
}

/// Result type for chat session operations.
pub type ChatSessionResult<T> = Result<T, ChatSessionError>;

/// One conversation wired to its collaborators.
///
/// Operations that route take `&mut self`, so a session can never have two
/// routing calls in flight. Independent sessions share only the injected
/// ports. [`ChatSession::submit`] must run inside a tokio runtime because
/// store writes are spawned onto it.
///
/// # Example
///
/// ```ignore
/// let mut session = ChatSession::new(router, store, clock, ChatSessionConfig::default());
/// let state = session.submit("hi").await?;
/// assert_eq!(state, ChatState::Active);
/// ```
pub struct ChatSession<R, S, C>
where
    R: MessageRouter,
    S: MessageStore + 'static,
    C: Clock + Send + Sync,
{
    session_id: SessionId,
    machine: ChatMachine,
    router: Arc<R>,
    store: Arc<S>,
    clock: Arc<C>,
    config: ChatSessionConfig,
    pending_write: Option<JoinHandle<()>>,
}

impl<R, S, C> ChatSession<R, S, C>
where
    R: MessageRouter,
    S: MessageStore + 'static,
    C: Clock + Send + Sync,
{
    /// Creates an idle session with a fresh identifier.
    #[must_use]
    pub fn new(router: Arc<R>, store: Arc<S>, clock: Arc<C>, config: ChatSessionConfig) -> Self {
        Self::with_session_id(SessionId::new(), router, store, clock, config)
    }

    /// Creates an idle session with a known identifier.
    #[must_use]
    pub fn with_session_id(
        session_id: SessionId,
        router: Arc<R>,
        store: Arc<S>,
        clock: Arc<C>,
        config: ChatSessionConfig,
    ) -> Self {
        Self {
            session_id,
            machine: ChatMachine::new(),
            router,
            store,
            clock,
            config,
            pending_write: None,
        }
    }

    /// Returns the session identifier.
    #[must_use]
    pub const fn session_id(&self) -> SessionId {
        self.session_id
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> ChatState {
        self.machine.state()
    }

    /// Returns the conversation context.
    #[must_use]
    pub const fn context(&self) -> &ConversationContext {
        self.machine.context()
    }

    /// Returns the underlying machine.
    #[must_use]
    pub const fn machine(&self) -> &ChatMachine {
        &self.machine
    }

    /// Sends user text through the full pipeline and returns the final state.
    ///
    /// The user message is appended before routing; the reply is appended
    /// when routing completes. A reply timeout moves the session to
    /// [`ChatState::Error`] carrying the configured failure message. Both
    /// messages are queued for the store without waiting on it; store
    /// failures are logged only.
    ///
    /// # Errors
    ///
    /// Returns [`ChatSessionError::EmptyInput`] for blank text and
    /// [`ChatSessionError::Transition`] when the session cannot accept
    /// input. Neither mutates the session.
    pub async fn submit(&mut self, text: &str) -> ChatSessionResult<ChatState> {
        let input = text.trim();
        if input.is_empty() {
            return Err(ChatSessionError::EmptyInput);
        }

        self.dispatch(ChatEvent::send(input))?;
        self.forward_last();

        let reply = match self.config.reply_timeout {
            Some(limit) => tokio::time::timeout(limit, self.router.route(input))
                .await
                .ok(),
            None => Some(self.router.route(input).await),
        };

        match reply {
            Some(content) => {
                let state = self.dispatch(ChatEvent::receive(content))?;
                self.forward_last();
                Ok(state)
            }
            None => {
                tracing::warn!(
                    session_id = %self.session_id,
                    timeout = ?self.config.reply_timeout,
                    "routing timed out"
                );
                let reason = self.config.failure_message.clone();
                self.dispatch(ChatEvent::error(reason))
            }
        }
    }

    /// Wipes the log and returns to [`ChatState::Idle`].
    ///
    /// # Errors
    ///
    /// Returns [`ChatSessionError::Transition`] while a reply is pending.
    pub fn clear(&mut self) -> ChatSessionResult<ChatState> {
        self.dispatch(ChatEvent::ClearMessages)
    }

    /// Applies an arbitrary event to the session's machine.
    ///
    /// Rejected events are logged and leave the session unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`ChatSessionError::Transition`] when the machine rejects the
    /// event.
    pub fn dispatch(&mut self, event: ChatEvent) -> ChatSessionResult<ChatState> {
        let from = self.machine.state();
        let kind = event.kind();
        match self.machine.apply(event, &*self.clock) {
            Ok(to) => {
                tracing::debug!(
                    session_id = %self.session_id,
                    %from,
                    %to,
                    event = %kind,
                    "chat transition"
                );
                Ok(to)
            }
            Err(error) => {
                tracing::warn!(
                    session_id = %self.session_id,
                    state = %from,
                    event = %kind,
                    %error,
                    "rejected chat event"
                );
                Err(error.into())
            }
        }
    }

    /// Waits until every queued store write has finished.
    ///
    /// Writes that fail are already logged; a write task that panicked is
    /// logged here.
    pub async fn flush(&mut self) {
        settle(self.pending_write.take()).await;
    }

    fn forward_last(&mut self) {
        let Some(record) = self
            .machine
            .context()
            .last_message()
            .map(|message| StoredMessage::from_message(self.session_id, message))
        else {
            return;
        };
        self.forward(record);
    }

    fn forward(&mut self, record: StoredMessage) {
        let store = Arc::clone(&self.store);
        let previous = self.pending_write.take();
        self.pending_write = Some(tokio::spawn(async move {
            settle(previous).await;
            if let Err(error) = store.persist(&record).await {
                tracing::warn!(
                    session_id = %record.session_id,
                    message_id = %record.message_id,
                    role = %record.role,
                    %error,
                    "failed to persist chat message"
                );
            }
        }));
    }
}

async fn settle(write: Option<JoinHandle<()>>) {
    let Some(handle) = write else {
        return;
    };
    if let Err(error) = handle.await {
        tracing::warn!(%error, "chat message persistence task failed");
    }
}
