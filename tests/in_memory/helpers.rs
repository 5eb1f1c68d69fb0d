//! Shared test helpers for in-memory integration tests.

use std::io;
use std::sync::Arc;

use hipat::chat::{
    adapters::memory::InMemoryMessageStore,
    domain::Role,
    ports::message_store::StoredMessage,
    services::{ChatSession, ChatSessionConfig},
};
use hipat::routing::services::{KeywordRouter, RouterConfig};
use mockable::DefaultClock;
use rstest::fixture;
use tokio::runtime::Runtime;

/// Session type used by keyword-routed tests.
pub type KeywordSession = ChatSession<KeywordRouter, InMemoryMessageStore, DefaultClock>;

/// Provides a tokio runtime for async operations in tests.
///
/// # Errors
///
/// Returns an error if the runtime cannot be created.
#[fixture]
pub fn runtime() -> io::Result<Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
}

/// Provides a multi-threaded runtime for tests that spawn tasks.
///
/// # Errors
///
/// Returns an error if the runtime cannot be created.
#[fixture]
pub fn multi_thread_runtime() -> io::Result<Runtime> {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(4)
        .enable_all()
        .build()
}

/// Provides a fresh shared store for each test.
#[fixture]
pub fn store() -> Arc<InMemoryMessageStore> {
    Arc::new(InMemoryMessageStore::new())
}

/// Provides a keyword router without simulated latency.
#[fixture]
pub fn router() -> Arc<KeywordRouter> {
    Arc::new(KeywordRouter::with_config(RouterConfig::immediate()))
}

/// Creates a keyword-routed session over the shared ports.
#[must_use]
pub fn new_session(router: &Arc<KeywordRouter>, store: &Arc<InMemoryMessageStore>) -> KeywordSession {
    ChatSession::new(
        Arc::clone(router),
        Arc::clone(store),
        Arc::new(DefaultClock),
        ChatSessionConfig::default(),
    )
}

/// Verifies stored messages alternate user, assistant, user, ...
pub fn verify_alternating_roles(messages: &[StoredMessage]) {
    let expected = [Role::User, Role::Assistant].into_iter().cycle();
    for (position, (message, role)) in messages.iter().zip(expected).enumerate() {
        assert_eq!(message.role, role, "unexpected role at position {position}");
    }
}

/// Verifies stored timestamps never decrease.
pub fn verify_timestamp_ordering(messages: &[StoredMessage]) {
    for pair in messages.windows(2) {
        if let [earlier, later] = pair {
            assert!(earlier.timestamp <= later.timestamp);
        }
    }
}
