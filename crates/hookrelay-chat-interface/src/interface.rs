//! Chat interfaces.

use async_trait::async_trait;

use crate::ChatError;

/// Chat delivery adapter trait.
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ChatService: Send + Sync {
    /// Sends one message to a channel.
    async fn send(&self, channel: &str, message: &str) -> Result<(), ChatError>;

    /// Health check
    async fn health_check(&self) -> Result<(), ChatError>;
}
