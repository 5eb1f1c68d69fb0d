//! Given steps for chat state transition BDD scenarios.

use super::world::ChatTransitionWorld;
use eyre::WrapErr;
use hipat::chat::domain::{ChatEvent, ChatState};
use rstest_bdd_macros::given;

#[given("a new chat session")]
fn new_chat_session(world: &mut ChatTransitionWorld) -> Result<(), eyre::Report> {
    if world.session.state() != ChatState::Idle {
        return Err(eyre::eyre!(
            "expected a fresh idle session, found {}",
            world.session.state()
        ));
    }
    Ok(())
}

#[given(r#"the user has sent "{content}" without a reply"#)]
fn user_sent_without_reply(
    world: &mut ChatTransitionWorld,
    content: String,
) -> Result<(), eyre::Report> {
    world
        .session
        .dispatch(ChatEvent::send(content))
        .wrap_err("send message")?;
    Ok(())
}
