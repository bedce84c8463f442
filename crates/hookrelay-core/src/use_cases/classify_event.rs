use hookrelay_events::GogsEvent;
use shaku::{Component, Interface};

use crate::{RoutingDecision, TemplateKey};

const INTERESTING_PULL_REQUEST_ACTIONS: &[&str] = &["opened", "closed", "reopened", "merged"];

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
pub trait ClassifyEventInterface: Interface {
    fn run(&self, event: &GogsEvent) -> RoutingDecision;
}

#[derive(Component)]
#[shaku(interface = ClassifyEventInterface)]
pub(crate) struct ClassifyEvent;

impl ClassifyEventInterface for ClassifyEvent {
    #[tracing::instrument(
        skip_all,
        fields(
            event_type = %event.event_type(),
            action = %event.action(),
            repository = %event.repository_name()
        )
    )]
    fn run(&self, event: &GogsEvent) -> RoutingDecision {
        let template_key = match event {
            GogsEvent::Release(e) if e.action == "published" => TemplateKey::Release,
            GogsEvent::Push(_) => TemplateKey::Push,
            GogsEvent::IssueComment(e) if e.action == "created" => TemplateKey::IssueComment,
            GogsEvent::PullRequest(e) if Self::is_interesting_pull_request_action(&e.action) => {
                TemplateKey::PullRequest
            }
            GogsEvent::Release(_)
            | GogsEvent::IssueComment(_)
            | GogsEvent::PullRequest(_)
            | GogsEvent::Issues(_) => return RoutingDecision::Filtered,
        };

        RoutingDecision::Relevant {
            template_key,
            repository_name: event.repository_name().to_string(),
        }
    }
}

impl ClassifyEvent {
    /// Pull request actions worth a chat notification. Exact match.
    pub fn is_interesting_pull_request_action(action: &str) -> bool {
        INTERESTING_PULL_REQUEST_ACTIONS.contains(&action)
    }
}
