//! Configuration for chat sessions.

use std::time::Duration;

/// Error shown to the user when a reply could not be produced.
pub const DEFAULT_FAILURE_MESSAGE: &str = "Failed to process your message. Please try again.";

/// Configuration for [`ChatSession`](super::ChatSession).
///
/// # Examples
///
/// ```
/// use hipat::chat::services::ChatSessionConfig;
/// use std::time::Duration;
///
/// let config = ChatSessionConfig::default();
/// assert!(config.reply_timeout.is_none());
///
/// let bounded = config.with_reply_timeout(Duration::from_secs(30));
/// assert_eq!(bounded.reply_timeout, Some(Duration::from_secs(30)));
/// ```
#[derive(Debug, Clone)]
pub struct ChatSessionConfig {
    /// Upper bound on a routing call; `None` waits indefinitely.
    pub reply_timeout: Option<Duration>,
    /// User-safe reason recorded when a reply cannot be produced.
    pub failure_message: String,
}

impl Default for ChatSessionConfig {
    fn default() -> Self {
        Self {
            reply_timeout: None,
            failure_message: DEFAULT_FAILURE_MESSAGE.to_owned(),
        }
    }
}

impl ChatSessionConfig {
    /// Bounds each routing call by `timeout`.
    #[must_use]
    pub fn with_reply_timeout(mut self, timeout: Duration) -> Self {
        self.reply_timeout = Some(timeout);
        self
    }
}
