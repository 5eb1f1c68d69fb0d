//! Sessions routed through admin-defined agents.

use std::io;
use std::sync::Arc;

use crate::in_memory::helpers::{runtime, store};
use hipat::chat::{
    adapters::memory::InMemoryMessageStore,
    domain::{ChatState, Role},
    services::{ChatSession, ChatSessionConfig},
};
use hipat::routing::{
    adapters::{
        canned::{CannedAgentBackend, CannedBackendConfig},
        memory::InMemoryAgentDirectory,
    },
    domain::{AgentProfile, InputModality},
    ports::AgentDirectory,
    services::{AgentRouter, AgentRouterConfig},
};
use mockable::DefaultClock;
use rstest::rstest;
use tokio::runtime::Runtime;

/// Tests a session whose replies come from the agent registered as manager.
#[rstest]
fn session_replies_through_registered_agent(
    runtime: io::Result<Runtime>,
    store: Arc<InMemoryMessageStore>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let rt = runtime?;
    let directory = Arc::new(InMemoryAgentDirectory::new());
    let manager = AgentProfile::new("Support Desk", "Manager", "Front-line routing")?
        .with_input_types([InputModality::Text]);
    rt.block_on(directory.register(&manager))?;

    let router = AgentRouter::new(
        directory,
        Arc::new(CannedAgentBackend::new(CannedBackendConfig::immediate())),
        AgentRouterConfig::default(),
    );
    let mut session = ChatSession::new(
        Arc::new(router),
        store,
        Arc::new(DefaultClock),
        ChatSessionConfig::default(),
    );

    let state = rt.block_on(session.submit("stretching routine"))?;

    assert_eq!(state, ChatState::Active);
    let reply = session
        .context()
        .last_message()
        .ok_or("missing assistant reply")?;
    assert_eq!(reply.role(), Role::Assistant);
    assert_eq!(
        reply.content(),
        "I'm your personal assistant. Regarding \"stretching routine\", I can provide general guidance."
    );
    Ok(())
}

/// Tests that an empty directory still answers through the fallback role.
#[rstest]
fn empty_directory_answers_as_primary(
    runtime: io::Result<Runtime>,
    store: Arc<InMemoryMessageStore>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let rt = runtime?;
    let router = AgentRouter::new(
        Arc::new(InMemoryAgentDirectory::new()),
        Arc::new(CannedAgentBackend::new(CannedBackendConfig::immediate())),
        AgentRouterConfig::default(),
    );
    let mut session = ChatSession::new(
        Arc::new(router),
        store,
        Arc::new(DefaultClock),
        ChatSessionConfig::default(),
    );

    rt.block_on(session.submit("hello"))?;

    let reply = session
        .context()
        .last_message()
        .map(|m| m.content().to_owned())
        .unwrap_or_default();
    assert!(reply.starts_with("I'm your primary agent."));
    Ok(())
}
