use hookrelay_events::GogsWebhook;
use shaku::{Component, HasComponent, Interface};

use super::{ClassifyEventInterface, ResolveChannelInterface};
use crate::{CoreContext, Result, RoutingDecision};

/// What the relay would do with an event, without delivering anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventPreview {
    pub decision: RoutingDecision,
    pub messages: Vec<String>,
    pub channel: Option<String>,
}

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
pub trait PreviewEventInterface: Interface {
    fn run<'a>(&self, ctx: &CoreContext<'a>, webhook: &GogsWebhook) -> Result<EventPreview>;
}

#[derive(Component)]
#[shaku(interface = PreviewEventInterface)]
pub(crate) struct PreviewEvent;

impl PreviewEventInterface for PreviewEvent {
    #[tracing::instrument(skip_all, fields(event_type = %webhook.event.event_type()))]
    fn run<'a>(&self, ctx: &CoreContext<'a>, webhook: &GogsWebhook) -> Result<EventPreview> {
        let classify_event: &dyn ClassifyEventInterface = ctx.core_module.resolve_ref();
        let decision = classify_event.run(&webhook.event);

        let (messages, channel) = match &decision {
            RoutingDecision::Filtered => (vec![], None),
            RoutingDecision::Relevant {
                template_key,
                repository_name,
            } => {
                let messages = ctx
                    .template_service
                    .render(template_key.to_str(), &webhook.payload)?;
                let resolve_channel: &dyn ResolveChannelInterface = ctx.core_module.resolve_ref();

                (messages, resolve_channel.run(ctx, repository_name))
            }
        };

        Ok(EventPreview {
            decision,
            messages,
            channel,
        })
    }
}

#[cfg(test)]
mod tests {
    use hookrelay_events::{fixtures, GogsEventType};
    use hookrelay_templates::TemplateError;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{context::tests::CoreContextTest, DomainError, TemplateKey};

    #[test]
    fn preview_relevant_event() {
        let mut ctx = CoreContextTest::new();
        ctx.config.gogs.default_channel = "#general".into();
        ctx.template_service
            .expect_render()
            .once()
            .withf(|key, _| key == "issuecomment")
            .return_once(|_, _| Ok(vec!["comment".into()]));
        ctx.chat_service.expect_send().never();

        let webhook = GogsWebhook::from_slice(
            GogsEventType::IssueComment,
            fixtures::ISSUE_COMMENT_CREATED_DATA.as_bytes(),
        )
        .unwrap();

        assert_eq!(
            PreviewEvent.run(&ctx.as_context(), &webhook).unwrap(),
            EventPreview {
                decision: RoutingDecision::Relevant {
                    template_key: TemplateKey::IssueComment,
                    repository_name: "webhooks".into()
                },
                messages: vec!["comment".into()],
                channel: Some("#general".into())
            }
        );
    }

    #[test]
    fn preview_filtered_event() {
        let mut ctx = CoreContextTest::new();
        ctx.template_service.expect_render().never();

        let webhook = GogsWebhook::from_slice(
            GogsEventType::PullRequest,
            fixtures::PULL_REQUEST_LABEL_UPDATED_DATA.as_bytes(),
        )
        .unwrap();

        let preview = PreviewEvent.run(&ctx.as_context(), &webhook).unwrap();
        assert_eq!(preview.decision, RoutingDecision::Filtered);
        assert!(preview.messages.is_empty());
        assert_eq!(preview.channel, None);
    }

    #[test]
    fn preview_propagates_render_errors() {
        let mut ctx = CoreContextTest::new();
        ctx.template_service.expect_render().once().return_once(|_, _| {
            Err(TemplateError::UnknownTemplate {
                key: "release".into(),
            })
        });

        let webhook = GogsWebhook::from_slice(
            GogsEventType::Release,
            fixtures::RELEASE_PUBLISHED_DATA.as_bytes(),
        )
        .unwrap();

        assert!(matches!(
            PreviewEvent.run(&ctx.as_context(), &webhook),
            Err(DomainError::TemplateError { .. })
        ));
    }
}
