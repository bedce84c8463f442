use std::sync::Arc;

use clap::Parser;
use hookrelay_chat_http::HttpChatService;
use hookrelay_chat_interface::ChatService;
use hookrelay_chat_null::NullChatService;
use hookrelay_config::{ChatDriver, Config};
use hookrelay_core::CoreModule;
use hookrelay_templates::{HandlebarsTemplateService, TemplateService};
use tokio::sync::RwLock;
use tracing::info;

use crate::{
    commands::{Command, CommandContext, SubCommand},
    Result,
};

#[derive(Parser)]
#[command(version, about = "Relay Gogs webhooks to a chat service", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    cmd: SubCommand,
}

pub struct CommandExecutor;

impl CommandExecutor {
    pub fn parse_args(config: Config, args: Args) -> Result<()> {
        let sync = |config: Config, args: Args| async move {
            let core_module = CoreModule::builder().build();

            let chat_service: Box<dyn ChatService> = {
                if config.chat.driver == ChatDriver::Http {
                    info!("Using HttpChatService chat driver");
                    Box::new(HttpChatService::new(&config)?)
                } else {
                    info!("Using NullChatService chat driver");
                    Box::new(NullChatService::new())
                }
            };

            let template_service: Box<dyn TemplateService> =
                Box::new(HandlebarsTemplateService::new(&config)?);

            let ctx = CommandContext {
                config,
                core_module,
                chat_service,
                template_service,
                writer: Arc::new(RwLock::new(std::io::stdout())),
            };

            Self::parse_args_async(args, ctx).await
        };

        actix_rt::System::new().block_on(sync(config, args))
    }

    pub(crate) async fn parse_args_async(args: Args, ctx: CommandContext) -> Result<()> {
        args.cmd.execute(ctx).await
    }
}
