//! Shared world state for chat state transition BDD scenarios.

use std::sync::Arc;

use hipat::chat::{
    adapters::memory::InMemoryMessageStore,
    domain::ChatState,
    services::{ChatSession, ChatSessionConfig, ChatSessionResult},
};
use hipat::routing::services::{KeywordRouter, RouterConfig};
use mockable::DefaultClock;
use rstest::fixture;

/// Session type used by the BDD world.
pub type TestChatSession = ChatSession<KeywordRouter, InMemoryMessageStore, DefaultClock>;

/// Scenario world for chat transition behaviour tests.
pub struct ChatTransitionWorld {
    pub session: TestChatSession,
    pub last_result: Option<ChatSessionResult<ChatState>>,
}

impl ChatTransitionWorld {
    /// Creates a world around a fresh session with an immediate router.
    #[must_use]
    pub fn new() -> Self {
        let session = ChatSession::new(
            Arc::new(KeywordRouter::with_config(RouterConfig::immediate())),
            Arc::new(InMemoryMessageStore::new()),
            Arc::new(DefaultClock),
            ChatSessionConfig::default(),
        );

        Self {
            session,
            last_result: None,
        }
    }
}

impl Default for ChatTransitionWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ChatTransitionWorld {
    ChatTransitionWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
