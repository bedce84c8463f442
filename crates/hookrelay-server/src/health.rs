use actix_http::StatusCode;
use actix_web::{web, HttpResponse, Responder};
use tracing::warn;

use crate::server::AppContext;

pub async fn health_check_route(ctx: web::Data<AppContext>) -> impl Responder {
    match ctx.chat_service.health_check().await {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({ "status": "ok" })),
        Err(e) => {
            warn!(error = %e, message = "Chat service health check failed");
            HttpResponse::build(StatusCode::SERVICE_UNAVAILABLE)
                .json(serde_json::json!({ "status": "error" }))
        }
    }
}
