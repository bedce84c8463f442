//! Event errors.

use thiserror::Error;

use crate::GogsEventType;

/// Unknown event kind.
#[derive(Debug, Error)]
pub enum EventTypeError {
    /// Unsupported event.
    #[error("Unsupported event: {}", event)]
    UnsupportedEvent {
        /// Raw event kind, as received.
        event: String,
    },
}

/// Payload decoding error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum EventError {
    #[error("Error while parsing webhook event for type {event_type}: {source}")]
    PayloadParse {
        event_type: GogsEventType,
        source: serde_json::Error,
    },
}

/// Result alias for `EventError`.
pub type Result<T, E = EventError> = core::result::Result<T, E>;
