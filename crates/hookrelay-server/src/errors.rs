//! Server errors.

use actix_http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use crate::constants::WEBHOOK_ERROR_BODY;

/// Webhook validation error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum WebhookError {
    #[error("Missing or empty event header")]
    MissingEventHeader,

    #[error("Empty payload")]
    EmptyPayload,

    #[error("Could not read payload: {reason}")]
    PayloadRead { reason: String },

    #[error("Missing webhook signature")]
    MissingSignatureHeader,

    #[error("Invalid webhook signature")]
    InvalidSignature,

    #[error("Could not parse payload: {source}")]
    PayloadParse {
        source: hookrelay_events::EventError,
    },
}

impl From<hookrelay_events::EventError> for WebhookError {
    fn from(e: hookrelay_events::EventError) -> Self {
        Self::PayloadParse { source: e }
    }
}

impl ResponseError for WebhookError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).body(WEBHOOK_ERROR_BODY)
    }
}

/// Server error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("I/O error: {source}")]
    IoError { source: std::io::Error },
}

impl From<std::io::Error> for ServerError {
    fn from(e: std::io::Error) -> Self {
        Self::IoError { source: e }
    }
}

/// Result alias for `ServerError`.
pub type Result<T> = core::result::Result<T, ServerError>;
