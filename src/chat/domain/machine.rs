//! Conversation state machine.
//!
//! The transition table is an exhaustive match over `(state, event)` pairs.
//! Pairs without an entry are rejected and leave the machine untouched.

use super::{ChatEvent, ChatEventKind, ChatState, ConversationContext, Role, TransitionError};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Returns the state reached from `state` on `event`, or `None` when the
/// pair has no transition.
///
/// # Examples
///
/// ```
/// use hipat::chat::domain::{ChatEventKind, ChatState, next_state};
///
/// assert_eq!(
///     next_state(ChatState::Idle, ChatEventKind::SendMessage),
///     Some(ChatState::Processing),
/// );
/// assert_eq!(next_state(ChatState::Idle, ChatEventKind::ReceiveMessage), None);
/// ```
#[must_use]
pub const fn next_state(state: ChatState, event: ChatEventKind) -> Option<ChatState> {
    use ChatEventKind as E;
    use ChatState as S;

    match (state, event) {
        (S::Idle | S::Active | S::Error, E::SendMessage) => Some(S::Processing),
        (S::Processing, E::ReceiveMessage) => Some(S::Active),
        (S::Processing | S::Active, E::Error) => Some(S::Error),
        (S::Idle | S::Active | S::Error, E::ClearMessages) => Some(S::Idle),
        (S::Idle, E::Start) => Some(S::Active),
        (S::Active, E::Stop) => Some(S::Idle),
        (S::Processing, E::SendMessage | E::ClearMessages | E::Start | E::Stop)
        | (S::Idle | S::Active | S::Error, E::ReceiveMessage)
        | (S::Idle | S::Error, E::Error)
        | (S::Active | S::Error, E::Start)
        | (S::Idle | S::Error, E::Stop) => None,
    }
}

/// A conversation: its lifecycle state plus the context it guards.
///
/// # Examples
///
/// ```
/// use hipat::chat::domain::{ChatEvent, ChatMachine, ChatState, Role};
/// use mockable::DefaultClock;
///
/// let clock = DefaultClock;
/// let mut machine = ChatMachine::new();
/// machine.apply(ChatEvent::send("hi"), &clock).expect("idle accepts input");
/// assert_eq!(machine.state(), ChatState::Processing);
///
/// machine
///     .apply(ChatEvent::receive("Hello!"), &clock)
///     .expect("processing accepts a reply");
/// assert_eq!(machine.state(), ChatState::Active);
/// assert_eq!(machine.messages()[1].role(), Role::Assistant);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMachine {
    state: ChatState,
    context: ConversationContext,
}

impl ChatMachine {
    /// Creates an idle machine with an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> ChatState {
        self.state
    }

    /// Returns the conversation context.
    #[must_use]
    pub const fn context(&self) -> &ConversationContext {
        &self.context
    }

    /// Returns the message log.
    #[must_use]
    pub fn messages(&self) -> &[super::Message] {
        self.context.messages()
    }

    /// Returns `true` if an event of this kind has a transition from the
    /// current state.
    #[must_use]
    pub const fn can_accept(&self, event: ChatEventKind) -> bool {
        next_state(self.state, event).is_some()
    }

    /// Computes the machine that results from applying `event`, leaving
    /// `self` unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError::InvalidTransition`] when no transition
    /// exists and [`TransitionError::EmptyContent`] for a blank user message.
    pub fn transition(&self, event: ChatEvent, clock: &impl Clock) -> Result<Self, TransitionError> {
        let mut next = self.clone();
        next.apply(event, clock)?;
        Ok(next)
    }

    /// Applies `event` in place and returns the new state.
    ///
    /// Either the whole transition is applied or nothing is.
    ///
    /// # Errors
    ///
    /// Same as [`ChatMachine::transition`].
    pub fn apply(
        &mut self,
        event: ChatEvent,
        clock: &impl Clock,
    ) -> Result<ChatState, TransitionError> {
        let target =
            next_state(self.state, event.kind()).ok_or(TransitionError::InvalidTransition {
                from: self.state,
                event: event.kind(),
            })?;

        match event {
            ChatEvent::SendMessage { content } => {
                if content.trim().is_empty() {
                    return Err(TransitionError::EmptyContent);
                }
                self.context.clear_error();
                self.context.append(Role::User, content, clock);
            }
            ChatEvent::ReceiveMessage { content } => {
                self.context.append(Role::Assistant, content, clock);
            }
            ChatEvent::Error { reason } => self.context.set_error(reason),
            ChatEvent::ClearMessages => {
                self.context.clear_messages();
                self.context.clear_error();
            }
            ChatEvent::Start | ChatEvent::Stop => {}
        }

        self.context.set_processing(target.is_processing());
        self.state = target;
        Ok(target)
    }
}
