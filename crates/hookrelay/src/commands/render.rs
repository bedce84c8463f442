use std::{convert::TryFrom, io::Write, path::PathBuf};

use async_trait::async_trait;
use clap::Parser;
use hookrelay_core::{use_cases::PreviewEventInterface, RoutingDecision};
use hookrelay_events::{GogsEventType, GogsWebhook};
use shaku::HasComponent;

use super::{Command, CommandContext};
use crate::Result;

/// Render a webhook payload file and show where it would be delivered
#[derive(Parser)]
pub(crate) struct RenderCommand {
    /// Event kind, as sent in the `X-Gogs-Event` header (e.g. `release`)
    #[arg(short, long)]
    event: String,
    /// JSON payload file
    #[arg(short, long)]
    payload: PathBuf,
}

#[async_trait]
impl Command for RenderCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let event_type = GogsEventType::try_from(self.event.as_str())?;
        let body = tokio::fs::read(&self.payload).await?;
        let webhook = GogsWebhook::from_slice(event_type, &body)?;

        let preview_event: &dyn PreviewEventInterface = ctx.core_module.resolve_ref();
        let preview = preview_event.run(&ctx.as_core_context(), &webhook)?;

        let mut writer = ctx.writer.write().await;
        match preview.decision {
            RoutingDecision::Filtered => {
                writeln!(
                    writer,
                    "Event '{}' with action '{}' is not relayed.",
                    event_type,
                    webhook.event.action()
                )?;
            }
            RoutingDecision::Relevant {
                template_key,
                repository_name,
            } => {
                writeln!(writer, "Template: {}", template_key)?;
                writeln!(writer, "Repository: {}", repository_name)?;
                match preview.channel {
                    Some(channel) => writeln!(writer, "Channel: {}", channel)?,
                    None => writeln!(writer, "Channel: <none>")?,
                }

                for message in preview.messages {
                    writeln!(writer, "> {}", message)?;
                }
            }
        }

        Ok(())
    }
}
