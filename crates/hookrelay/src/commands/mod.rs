//! Commands.

use std::{io::Write, sync::Arc};

use async_trait::async_trait;
use clap::Subcommand;
use hookrelay_chat_interface::ChatService;
use hookrelay_config::Config;
use hookrelay_core::{CoreContext, CoreModule};
use hookrelay_templates::TemplateService;
use tokio::sync::RwLock;

use self::{render::RenderCommand, server::ServerCommand};
use crate::Result;

mod render;
mod server;

pub(crate) struct CommandContext {
    pub config: Config,
    pub core_module: CoreModule,
    pub chat_service: Box<dyn ChatService>,
    pub template_service: Box<dyn TemplateService>,
    pub writer: Arc<RwLock<dyn Write + Send + Sync>>,
}

impl CommandContext {
    pub fn as_core_context(&self) -> CoreContext {
        CoreContext {
            config: &self.config,
            core_module: &self.core_module,
            chat_service: self.chat_service.as_ref(),
            template_service: self.template_service.as_ref(),
        }
    }
}

#[async_trait]
pub(crate) trait Command {
    async fn execute(self, ctx: CommandContext) -> Result<()>;
}

/// Command
#[derive(Subcommand)]
pub(crate) enum SubCommand {
    Server(ServerCommand),
    Render(RenderCommand),
}

#[async_trait]
impl Command for SubCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        match self {
            Self::Server(sub) => sub.execute(ctx).await,
            Self::Render(sub) => sub.execute(ctx).await,
        }
    }
}
