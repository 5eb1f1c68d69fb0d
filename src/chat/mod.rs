//! Conversation core: the chat state machine and its orchestration.
//!
//! A conversation moves through `idle → processing → active` as the user
//! sends text and the router replies, dropping into `error` when a reply
//! fails. The machine itself is pure; the session service performs the
//! routing and best-effort persistence around it.
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]
//!
//! # Example
//!
//! ```
//! use hipat::chat::domain::{ChatEvent, ChatMachine, ChatState};
//! use mockable::DefaultClock;
//!
//! let clock = DefaultClock;
//! let machine = ChatMachine::new()
//!     .transition(ChatEvent::send("hi"), &clock)
//!     .expect("idle accepts input")
//!     .transition(ChatEvent::error("network failure"), &clock)
//!     .expect("processing accepts errors");
//!
//! assert_eq!(machine.state(), ChatState::Error);
//! assert_eq!(machine.context().error(), Some("network failure"));
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
