//! Routing types.

use std::fmt;

/// Template selected for a relevant event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKey {
    Release,
    Push,
    IssueComment,
    PullRequest,
}

impl TemplateKey {
    /// Name the renderer registers the template under.
    pub fn to_str(self) -> &'static str {
        match self {
            Self::Release => "release",
            Self::Push => "push",
            Self::IssueComment => "issuecomment",
            Self::PullRequest => "pullrequest",
        }
    }
}

impl fmt::Display for TemplateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

/// Classifier verdict for one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutingDecision {
    /// Nothing to relay.
    Filtered,
    /// Render `template_key` and deliver to the repository channel.
    Relevant {
        template_key: TemplateKey,
        repository_name: String,
    },
}

impl RoutingDecision {
    pub fn should_send(&self) -> bool {
        matches!(self, Self::Relevant { .. })
    }
}

/// Terminal state reached by the dispatch pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Event kind or action is not relayed.
    Filtered,
    /// Template rendering failed, nothing was sent.
    RenderFailed,
    /// No channel for the repository and no default channel.
    Unrouted,
    /// Messages were handed to the chat service, in order.
    Delivered {
        channel: String,
        messages: Vec<String>,
    },
}
