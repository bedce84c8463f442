//! Event types.

use std::convert::TryFrom;

use crate::EventTypeError;

/// Supported Gogs event kinds, as sent in the `X-Gogs-Event` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GogsEventType {
    /// Issue comment event.
    IssueComment,
    /// Issues event.
    Issues,
    /// Pull request event.
    PullRequest,
    /// Push event.
    Push,
    /// Release event.
    Release,
}

impl GogsEventType {
    /// Every supported kind.
    pub const ALL: [GogsEventType; 5] = [
        Self::IssueComment,
        Self::Issues,
        Self::PullRequest,
        Self::Push,
        Self::Release,
    ];

    /// Convert event type to static str.
    pub fn to_str(self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for GogsEventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.to_str())
    }
}

impl TryFrom<&str> for GogsEventType {
    type Error = EventTypeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "issue_comment" => Ok(Self::IssueComment),
            "issues" => Ok(Self::Issues),
            "pull_request" => Ok(Self::PullRequest),
            "push" => Ok(Self::Push),
            "release" => Ok(Self::Release),
            name => Err(EventTypeError::UnsupportedEvent {
                event: name.to_owned(),
            }),
        }
    }
}

impl From<GogsEventType> for &'static str {
    fn from(event_type: GogsEventType) -> Self {
        match event_type {
            GogsEventType::IssueComment => "issue_comment",
            GogsEventType::Issues => "issues",
            GogsEventType::PullRequest => "pull_request",
            GogsEventType::Push => "push",
            GogsEventType::Release => "release",
        }
    }
}
