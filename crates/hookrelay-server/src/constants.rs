//! Webhook constants.

/// Gogs event header.
pub const GOGS_EVENT_HEADER: &str = "X-Gogs-Event";
/// Gogs signature header.
pub const GOGS_SIGNATURE_HEADER: &str = "X-Gogs-Signature";
/// Body sent back when a webhook cannot be processed.
pub const WEBHOOK_ERROR_BODY: &str = "Error processing webhook";
