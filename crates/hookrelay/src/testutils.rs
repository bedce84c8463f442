use std::{io::Write, sync::Arc};

use clap::Parser;
use hookrelay_chat_interface::MockChatService;
use hookrelay_config::Config;
use hookrelay_core::CoreModule;
use hookrelay_templates::HandlebarsTemplateService;
use tokio::sync::RwLock;

use crate::{
    args::{Args, CommandExecutor},
    commands::CommandContext,
};

pub(crate) struct CommandContextTest {
    pub config: Config,
    pub core_module: CoreModule,
    pub chat_service: MockChatService,
    pub template_service: HandlebarsTemplateService,
}

impl CommandContextTest {
    pub fn new() -> Self {
        Self {
            config: Config::default(),
            core_module: CoreModule::builder().build(),
            chat_service: MockChatService::new(),
            template_service: HandlebarsTemplateService::builtin().unwrap(),
        }
    }

    pub fn into_context(self, writer: Arc<RwLock<dyn Write + Send + Sync>>) -> CommandContext {
        CommandContext {
            config: self.config,
            core_module: self.core_module,
            chat_service: Box::new(self.chat_service),
            template_service: Box::new(self.template_service),
            writer,
        }
    }
}

pub(crate) async fn test_command(ctx: CommandContextTest, command_args: &[&str]) -> String {
    let buf = Arc::new(RwLock::new(Vec::new()));

    {
        let command_args = {
            let mut tmp_args = vec!["hookrelay"];
            tmp_args.extend(command_args);
            tmp_args
        };

        let args = Args::try_parse_from(command_args);
        match args {
            Ok(args) => CommandExecutor::parse_args_async(args, ctx.into_context(buf.clone()))
                .await
                .unwrap(),
            Err(e) => {
                eprintln!("{}", e);
                panic!("Parse error.")
            }
        }
    }

    let vec = buf.read().await.to_vec();
    std::str::from_utf8(&vec).unwrap().to_string()
}
