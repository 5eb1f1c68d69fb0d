//! Independent sessions running concurrently over shared ports.

use std::collections::HashSet;
use std::io;
use std::sync::Arc;

use crate::in_memory::helpers::{
    multi_thread_runtime, new_session, router, store, verify_alternating_roles,
};
use hipat::chat::{
    adapters::memory::InMemoryMessageStore,
    domain::{ChatState, SessionId},
    ports::MessageStore,
};
use hipat::routing::services::KeywordRouter;
use rstest::rstest;
use tokio::runtime::Runtime;

const SESSIONS: usize = 8;
const TURNS: usize = 3;

/// Tests that sessions on separate tasks never interleave each other's logs.
#[rstest]
fn concurrent_sessions_stay_isolated(
    multi_thread_runtime: io::Result<Runtime>,
    router: Arc<KeywordRouter>,
    store: Arc<InMemoryMessageStore>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let rt = multi_thread_runtime?;

    let session_ids: Vec<SessionId> = rt.block_on(async {
        let mut handles = Vec::with_capacity(SESSIONS);
        for worker in 0..SESSIONS {
            let mut session = new_session(&router, &store);
            handles.push(tokio::spawn(async move {
                for turn in 0..TURNS {
                    let state = session
                        .submit(&format!("session {worker} turn {turn}"))
                        .await
                        .expect("submit succeeds");
                    assert_eq!(state, ChatState::Active);
                }
                session.flush().await;
                session.session_id()
            }));
        }

        let mut ids = Vec::with_capacity(SESSIONS);
        for handle in handles {
            ids.push(handle.await.expect("session task completes"));
        }
        ids
    });

    let distinct: HashSet<SessionId> = session_ids.iter().copied().collect();
    assert_eq!(distinct.len(), SESSIONS);
    assert_eq!(store.len(), SESSIONS * TURNS * 2);

    for session_id in session_ids {
        let stored = rt.block_on(store.find_by_session(session_id))?;
        assert_eq!(stored.len(), TURNS * 2);
        verify_alternating_roles(&stored);
    }
    Ok(())
}
