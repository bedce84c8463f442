use async_trait::async_trait;
use hookrelay_events::GogsWebhook;
use shaku::{Component, HasComponent, Interface};
use tracing::{error, info};

use super::{ClassifyEventInterface, ResolveChannelInterface};
use crate::{CoreContext, DispatchOutcome, RoutingDecision};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait DispatchEventInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        origin: &str,
        webhook: &GogsWebhook,
    ) -> DispatchOutcome;
}

#[derive(Component)]
#[shaku(interface = DispatchEventInterface)]
pub(crate) struct DispatchEvent;

#[async_trait]
impl DispatchEventInterface for DispatchEvent {
    #[tracing::instrument(
        skip_all,
        fields(
            origin = %origin,
            event_type = %webhook.event.event_type(),
            action = %webhook.event.action()
        )
    )]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        origin: &str,
        webhook: &GogsWebhook,
    ) -> DispatchOutcome {
        let classify_event: &dyn ClassifyEventInterface = ctx.core_module.resolve_ref();
        let (template_key, repository_name) = match classify_event.run(&webhook.event) {
            RoutingDecision::Filtered => return DispatchOutcome::Filtered,
            RoutingDecision::Relevant {
                template_key,
                repository_name,
            } => (template_key, repository_name),
        };

        let messages = match ctx
            .template_service
            .render(template_key.to_str(), &webhook.payload)
        {
            Ok(messages) => messages,
            Err(e) => {
                error!(
                    template_key = %template_key,
                    repository = %repository_name,
                    error = %e,
                    message = "Could not render template"
                );
                return DispatchOutcome::RenderFailed;
            }
        };

        let repository_name = repository_name.to_lowercase();
        let resolve_channel: &dyn ResolveChannelInterface = ctx.core_module.resolve_ref();
        let channel = match resolve_channel.run(ctx, &repository_name) {
            Some(channel) => channel,
            None => {
                info!(
                    origin = %origin,
                    repository = %repository_name,
                    message = "Unrecognised repository, no channel configured"
                );
                return DispatchOutcome::Unrouted;
            }
        };

        info!(
            origin = %origin,
            repository = %repository_name,
            channel = %channel,
            count = messages.len(),
            message = "Relaying event"
        );

        for message in &messages {
            if let Err(e) = ctx.chat_service.send(&channel, message).await {
                error!(
                    channel = %channel,
                    error = %e,
                    message = "Could not deliver chat message"
                );
            }
        }

        DispatchOutcome::Delivered { channel, messages }
    }
}
