//! hipat: conversation core of the Pat personal-assistant chat.
//!
//! This crate provides the chat state machine that owns a conversation's
//! message log and the routers that turn user text into replies. Storage,
//! authentication and the agent models themselves live behind ports.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure state and transition logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory, simulated backends)
//!
//! # Modules
//!
//! - [`chat`]: Conversation state machine and session orchestration
//! - [`routing`]: Keyword and agent-backed message routing

pub mod chat;
pub mod routing;
