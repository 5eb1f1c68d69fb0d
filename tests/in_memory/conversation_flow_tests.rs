//! Conversation flow tests over [`InMemoryMessageStore`].

use std::io;
use std::sync::Arc;

use crate::in_memory::helpers::{
    new_session, router, runtime, store, verify_alternating_roles, verify_timestamp_ordering,
};
use hipat::chat::{
    adapters::memory::InMemoryMessageStore, domain::ChatState, ports::MessageStore,
};
use hipat::routing::{
    domain::{GREETING_RESPONSE, HELP_RESPONSE, NUTRITION_RESPONSE},
    services::KeywordRouter,
};
use rstest::rstest;
use tokio::runtime::Runtime;

/// Tests the idle → processing → active exchange end to end.
#[rstest]
fn greeting_exchange_is_logged_and_persisted(
    runtime: io::Result<Runtime>,
    router: Arc<KeywordRouter>,
    store: Arc<InMemoryMessageStore>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let rt = runtime?;
    let mut session = new_session(&router, &store);
    assert_eq!(session.state(), ChatState::Idle);

    let state = rt.block_on(session.submit("hi"))?;
    rt.block_on(session.flush());

    assert_eq!(state, ChatState::Active);
    let contents: Vec<&str> = session
        .context()
        .messages()
        .iter()
        .map(|m| m.content())
        .collect();
    assert_eq!(contents, vec!["hi", GREETING_RESPONSE]);

    let stored = rt.block_on(store.find_by_session(session.session_id()))?;
    assert_eq!(stored.len(), 2);
    Ok(())
}

/// Tests that a multi-turn conversation keeps chronological order.
#[rstest]
fn multi_turn_conversation_keeps_order(
    runtime: io::Result<Runtime>,
    router: Arc<KeywordRouter>,
    store: Arc<InMemoryMessageStore>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let rt = runtime?;
    let mut session = new_session(&router, &store);

    for input in ["hello", "I need help", "what food is good after a run?"] {
        rt.block_on(session.submit(input))?;
    }
    rt.block_on(session.flush());

    let stored = rt.block_on(store.find_by_session(session.session_id()))?;
    assert_eq!(stored.len(), 6);
    verify_alternating_roles(&stored);
    verify_timestamp_ordering(&stored);

    let replies: Vec<&str> = stored
        .iter()
        .skip(1)
        .step_by(2)
        .map(|m| m.content.as_str())
        .collect();
    assert_eq!(replies, vec![GREETING_RESPONSE, HELP_RESPONSE, NUTRITION_RESPONSE]);
    Ok(())
}

/// Tests that clearing the log starts a fresh idle conversation.
#[rstest]
fn clearing_starts_over_in_same_session(
    runtime: io::Result<Runtime>,
    router: Arc<KeywordRouter>,
    store: Arc<InMemoryMessageStore>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let rt = runtime?;
    let mut session = new_session(&router, &store);
    rt.block_on(session.submit("hello"))?;

    session.clear()?;
    assert_eq!(session.state(), ChatState::Idle);
    assert!(session.context().is_empty());

    rt.block_on(session.submit("xyzzy"))?;
    rt.block_on(session.flush());
    assert_eq!(session.context().len(), 2);
    let echoed = session
        .context()
        .last_message()
        .is_some_and(|m| m.content().contains("xyzzy"));
    assert!(echoed);

    let stored = rt.block_on(store.find_by_session(session.session_id()))?;
    assert_eq!(stored.len(), 4);
    Ok(())
}
