//! Webhook handlers.

mod parser;

#[cfg(test)]
mod tests;

use actix_web::{web, HttpRequest, HttpResponse, Result as ActixResult};
use hookrelay_core::use_cases::DispatchEventInterface;
use shaku::HasComponent;
use tracing::warn;

pub use self::parser::{parse_event_type, parse_webhook, ParseOutcome};
use crate::{server::AppContext, utils::convert_payload_to_bytes};

const UNKNOWN_ORIGIN: &str = "unknown";

#[tracing::instrument(skip_all, fields(origin))]
pub(crate) async fn gogs_event_handler(
    req: HttpRequest,
    mut payload: web::Payload,
    ctx: web::Data<AppContext>,
) -> ActixResult<HttpResponse> {
    let origin = req
        .peer_addr()
        .map(|a| a.to_string())
        .unwrap_or_else(|| UNKNOWN_ORIGIN.into());
    tracing::Span::current().record("origin", origin.as_str());

    let parsed = match parse_event_type(req.headers()) {
        Ok(None) => Ok(ParseOutcome::Ignored),
        Ok(Some(_)) => match convert_payload_to_bytes(&mut payload).await {
            Ok(body) => parse_webhook(req.headers(), &body, &ctx.config.gogs.webhook_secret),
            Err(e) => Err(e),
        },
        Err(e) => Err(e),
    };

    let webhook = match parsed {
        Ok(ParseOutcome::Parsed(webhook)) => webhook,
        Ok(ParseOutcome::Ignored) => return Ok(HttpResponse::Ok().finish()),
        Err(e) => {
            warn!(error = %e, message = "Error processing webhook");
            return Err(e.into());
        }
    };

    let dispatch_event: &dyn DispatchEventInterface = ctx.core_module.resolve_ref();
    dispatch_event
        .run(&ctx.as_core_context(), &origin, &webhook)
        .await;

    Ok(HttpResponse::Ok().finish())
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().finish()
}

/// Configure webhook handlers.
pub fn configure_webhook_handlers(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/gogs")
            .route(web::post().to(gogs_event_handler))
            .default_service(web::route().to(not_found)),
    );
}
