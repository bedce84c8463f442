//! Null driver for chat delivery.

#![warn(missing_docs)]
#![warn(clippy::all)]

use async_trait::async_trait;
use hookrelay_chat_interface::{ChatError, ChatService};
use tracing::info;

/// Chat service that only logs messages.
#[derive(Clone, Default)]
pub struct NullChatService {
    _private: (),
}

impl NullChatService {
    /// Creates a null chat service.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

#[async_trait]
impl ChatService for NullChatService {
    #[tracing::instrument(skip(self))]
    async fn send(&self, channel: &str, message: &str) -> Result<(), ChatError> {
        info!(channel = %channel, message = "Discarding chat message");
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn health_check(&self) -> Result<(), ChatError> {
        Ok(())
    }
}
