//! When steps for chat state transition BDD scenarios.

use super::world::{ChatTransitionWorld, run_async};
use hipat::chat::domain::ChatEvent;
use rstest_bdd_macros::when;

#[when(r#"the user sends "{content}""#)]
fn user_sends(world: &mut ChatTransitionWorld, content: String) {
    let result = run_async(world.session.submit(&content));
    world.last_result = Some(result);
}

#[when(r#"a reply "{content}" arrives"#)]
fn reply_arrives(world: &mut ChatTransitionWorld, content: String) {
    let result = world.session.dispatch(ChatEvent::receive(content));
    world.last_result = Some(result);
}

#[when(r#"the reply fails with "{reason}""#)]
fn reply_fails(world: &mut ChatTransitionWorld, reason: String) {
    let result = world.session.dispatch(ChatEvent::error(reason));
    world.last_result = Some(result);
}

#[when("the conversation is cleared")]
fn conversation_cleared(world: &mut ChatTransitionWorld) {
    let result = world.session.clear();
    world.last_result = Some(result);
}
