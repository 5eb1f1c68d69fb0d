//! Domain types for the conversation core.
//!
//! Everything here is pure: transitions take a clock by reference and
//! perform no I/O.

mod context;
mod error;
mod event;
mod ids;
mod machine;
mod message;
mod role;
mod state;

pub use context::ConversationContext;
pub use error::{ParseChatStateError, TransitionError};
pub use event::{ChatEvent, ChatEventKind};
pub use ids::{MessageId, SessionId};
pub use machine::{ChatMachine, next_state};
pub use message::Message;
pub use role::{ParseRoleError, Role};
pub use state::ChatState;
