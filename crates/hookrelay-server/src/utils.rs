//! Webhook utilities module.

use actix_web::web::{Bytes, BytesMut, Payload};
use futures::stream::StreamExt;

use crate::WebhookError;

/// Convert Actix payload to bytes.
pub async fn convert_payload_to_bytes(payload: &mut Payload) -> Result<Bytes, WebhookError> {
    let mut body = BytesMut::new();

    while let Some(chunk) = payload.next().await {
        let chunk = chunk.map_err(|e| WebhookError::PayloadRead {
            reason: e.to_string(),
        })?;
        body.extend_from_slice(&chunk);
    }

    Ok(body.freeze())
}
