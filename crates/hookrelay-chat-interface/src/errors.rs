use thiserror::Error;

/// Chat error.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum ChatError {
    #[error("Chat service rejected message for channel '{channel}': {reason}")]
    Rejected { channel: String, reason: String },

    /// Implementation-specific error
    #[error(transparent)]
    ImplementationError {
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}
