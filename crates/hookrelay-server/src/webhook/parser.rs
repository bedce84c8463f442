//! Gogs request validation.

use std::convert::TryFrom;

use actix_web::http::header::HeaderMap;
use hookrelay_crypto::Signature;
use hookrelay_events::{GogsEventType, GogsWebhook};

use crate::{
    constants::{GOGS_EVENT_HEADER, GOGS_SIGNATURE_HEADER},
    WebhookError,
};

/// Result of parsing a Gogs delivery.
#[derive(Debug)]
pub enum ParseOutcome {
    /// A supported and authenticated event.
    Parsed(GogsWebhook),
    /// The event kind is not relayed.
    Ignored,
}

fn header_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|x| x.to_str().ok())
        .filter(|x| !x.is_empty())
}

/// Read the event kind header. `None` means the kind is not relayed.
pub fn parse_event_type(headers: &HeaderMap) -> Result<Option<GogsEventType>, WebhookError> {
    let event_type =
        header_value(headers, GOGS_EVENT_HEADER).ok_or(WebhookError::MissingEventHeader)?;

    Ok(GogsEventType::try_from(event_type).ok())
}

/// Validate and decode one Gogs delivery.
///
/// Unsupported event kinds are ignored before the signature is checked.
/// An empty `secret` disables signature verification.
pub fn parse_webhook(
    headers: &HeaderMap,
    body: &[u8],
    secret: &str,
) -> Result<ParseOutcome, WebhookError> {
    let event_type = match parse_event_type(headers)? {
        Some(event_type) => event_type,
        None => return Ok(ParseOutcome::Ignored),
    };

    if body.is_empty() {
        return Err(WebhookError::EmptyPayload);
    }

    if !secret.is_empty() {
        let signature = header_value(headers, GOGS_SIGNATURE_HEADER)
            .ok_or(WebhookError::MissingSignatureHeader)?;

        match Signature(signature).is_valid(body, secret) {
            Ok(true) => (),
            Ok(false) | Err(_) => return Err(WebhookError::InvalidSignature),
        }
    }

    let webhook = GogsWebhook::from_slice(event_type, body)?;
    Ok(ParseOutcome::Parsed(webhook))
}
