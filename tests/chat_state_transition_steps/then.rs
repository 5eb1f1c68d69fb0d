//! Then steps for chat state transition BDD scenarios.

use super::world::ChatTransitionWorld;
use hipat::chat::{
    domain::{ChatState, Role, TransitionError},
    services::ChatSessionError,
};
use rstest_bdd_macros::then;

#[then(r#"the chat state is "{state}""#)]
fn chat_state_is(world: &ChatTransitionWorld, state: String) -> Result<(), eyre::Report> {
    let expected_state = ChatState::try_from(state.as_str())
        .map_err(|err| eyre::eyre!("invalid expected state in scenario: {err}"))?;

    if world.session.state() != expected_state {
        return Err(eyre::eyre!(
            "expected state {}, found {}",
            expected_state.as_str(),
            world.session.state().as_str()
        ));
    }
    Ok(())
}

#[then("the log holds {count:u64} messages")]
fn log_holds(world: &ChatTransitionWorld, count: u64) -> Result<(), eyre::Report> {
    let actual = u64::try_from(world.session.context().len())?;
    eyre::ensure!(actual == count, "expected {count} messages, found {actual}");
    Ok(())
}

#[then(r#"the last message is from the "{role}""#)]
fn last_message_from(world: &ChatTransitionWorld, role: String) -> Result<(), eyre::Report> {
    let expected_role = Role::try_from(role.as_str())
        .map_err(|err| eyre::eyre!("invalid expected role in scenario: {err}"))?;
    let last = world
        .session
        .context()
        .last_message()
        .ok_or_else(|| eyre::eyre!("message log is empty"))?;

    eyre::ensure!(
        last.role() == expected_role,
        "expected last message from {expected_role}, found {}",
        last.role()
    );
    Ok(())
}

#[then("the event is rejected as an invalid transition")]
fn event_rejected(world: &ChatTransitionWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing event result"))?;

    if !matches!(
        result,
        Err(ChatSessionError::Transition(
            TransitionError::InvalidTransition { .. }
        ))
    ) {
        return Err(eyre::eyre!(
            "expected InvalidTransition error, got {result:?}"
        ));
    }
    Ok(())
}

#[then(r#"the recorded error is "{reason}""#)]
fn recorded_error_is(world: &ChatTransitionWorld, reason: String) -> Result<(), eyre::Report> {
    let recorded = world.session.context().error();
    eyre::ensure!(
        recorded == Some(reason.as_str()),
        "expected error {reason:?}, found {recorded:?}"
    );
    Ok(())
}

#[then("no error is recorded")]
fn no_error_recorded(world: &ChatTransitionWorld) -> Result<(), eyre::Report> {
    let recorded = world.session.context().error();
    eyre::ensure!(recorded.is_none(), "expected no error, found {recorded:?}");
    Ok(())
}
