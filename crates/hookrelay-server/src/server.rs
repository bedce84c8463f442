//! Server module.

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::Logger,
    web::{self, Data},
    App, HttpResponse, HttpServer,
};
use hookrelay_chat_interface::ChatService;
use hookrelay_config::Config;
use hookrelay_core::{CoreContext, CoreModule};
use hookrelay_templates::TemplateService;
use tracing::{info, warn};

use crate::{health::health_check_route, webhook::configure_webhook_handlers, Result};

/// App context.
pub struct AppContext {
    /// Config.
    pub config: Config,
    /// Core module.
    pub core_module: CoreModule,
    /// Chat adapter.
    pub chat_service: Box<dyn ChatService>,
    /// Template renderer.
    pub template_service: Box<dyn TemplateService>,
}

impl AppContext {
    /// Create new app context using adapters.
    pub fn new_with_adapters(
        config: Config,
        core_module: CoreModule,
        chat_service: Box<dyn ChatService>,
        template_service: Box<dyn TemplateService>,
    ) -> Self {
        Self {
            config,
            core_module,
            chat_service,
            template_service,
        }
    }

    /// Convert the context for the core module.
    pub fn as_core_context(&self) -> CoreContext {
        CoreContext {
            config: &self.config,
            core_module: &self.core_module,
            chat_service: self.chat_service.as_ref(),
            template_service: self.template_service.as_ref(),
        }
    }
}

/// Build Actix app.
pub fn build_actix_app(
    context: Data<AppContext>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(context)
        .wrap(Logger::default())
        .service(web::scope("/webhook").configure(configure_webhook_handlers))
        .route("/health", web::get().to(health_check_route))
        .route(
            "/",
            web::get().to(|| async {
                HttpResponse::Ok().json(serde_json::json!({"message": "Welcome on hookrelay!" }))
            }),
        )
}

/// Run bot server.
pub async fn run_bot_server(context: AppContext) -> Result<()> {
    let address = get_bind_address(&context.config);

    info!(
        version = context.config.version,
        address = %address,
        message = "Starting relay server",
    );

    if context.config.gogs.webhook_secret.is_empty() {
        warn!("Environment variable 'BOT_GOGS_WEBHOOK_SECRET' is not set. Disabling signature verification.");
    }

    run_bot_server_internal(address, context).await
}

fn get_bind_address(config: &Config) -> String {
    format!("{}:{}", config.server.bind_ip, config.server.bind_port)
}

async fn run_bot_server_internal(ip_with_port: String, context: AppContext) -> Result<()> {
    let context = Data::new(context);
    let cloned_context = context.clone();

    let mut server = HttpServer::new(move || build_actix_app(context.clone()));

    if let Some(workers) = cloned_context.config.server.workers_count {
        server = server.workers(workers as usize);
    }

    server.bind(ip_with_port)?.run().await?;

    Ok(())
}
