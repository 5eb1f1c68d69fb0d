//! The routing contract consumed by chat sessions.

use async_trait::async_trait;

/// Maps free-form user text to a reply.
///
/// `route` may suspend (a real implementation calls a remote model) but
/// never fails: implementations map collaborator errors to a user-safe
/// apology. Callers must not overlap calls for the same conversation.
#[async_trait]
pub trait MessageRouter: Send + Sync {
    /// Produces the reply for `input`.
    async fn route(&self, input: &str) -> String;
}
