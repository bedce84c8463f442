//! Parsed webhook events.

use serde::de::DeserializeOwned;

use crate::{
    types::{
        GogsIssueCommentEvent, GogsIssuesEvent, GogsPullRequestEvent, GogsPushEvent,
        GogsReleaseEvent,
    },
    EventError, GogsEventType, Result,
};

/// One typed Gogs notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GogsEvent {
    /// Issue comment event.
    IssueComment(GogsIssueCommentEvent),
    /// Issues event.
    Issues(GogsIssuesEvent),
    /// Pull request event.
    PullRequest(GogsPullRequestEvent),
    /// Push event.
    Push(GogsPushEvent),
    /// Release event.
    Release(GogsReleaseEvent),
}

impl GogsEvent {
    /// Event kind.
    pub fn event_type(&self) -> GogsEventType {
        match self {
            Self::IssueComment(_) => GogsEventType::IssueComment,
            Self::Issues(_) => GogsEventType::Issues,
            Self::PullRequest(_) => GogsEventType::PullRequest,
            Self::Push(_) => GogsEventType::Push,
            Self::Release(_) => GogsEventType::Release,
        }
    }

    /// Repository name, case preserved.
    pub fn repository_name(&self) -> &str {
        match self {
            Self::IssueComment(e) => &e.repository.name,
            Self::Issues(e) => &e.repository.name,
            Self::PullRequest(e) => &e.repository.name,
            Self::Push(e) => &e.repository.name,
            Self::Release(e) => &e.repository.name,
        }
    }

    /// Kind-specific sub-action. Push events have none.
    pub fn action(&self) -> &str {
        match self {
            Self::IssueComment(e) => &e.action,
            Self::Issues(e) => &e.action,
            Self::PullRequest(e) => &e.action,
            Self::Push(_) => "",
            Self::Release(e) => &e.action,
        }
    }

    /// Decode a JSON payload for the given kind.
    pub fn from_value(event_type: GogsEventType, value: serde_json::Value) -> Result<Self> {
        Ok(match event_type {
            GogsEventType::IssueComment => Self::IssueComment(decode(event_type, value)?),
            GogsEventType::Issues => Self::Issues(decode(event_type, value)?),
            GogsEventType::PullRequest => Self::PullRequest(decode(event_type, value)?),
            GogsEventType::Push => Self::Push(decode(event_type, value)?),
            GogsEventType::Release => Self::Release(decode(event_type, value)?),
        })
    }
}

fn decode<T: DeserializeOwned>(event_type: GogsEventType, value: serde_json::Value) -> Result<T> {
    serde_json::from_value(value).map_err(|e| EventError::PayloadParse {
        event_type,
        source: e,
    })
}

/// A typed event alongside the untouched JSON body it was decoded from.
///
/// The JSON body is what templates are rendered against.
#[derive(Debug, Clone, PartialEq)]
pub struct GogsWebhook {
    /// Typed event.
    pub event: GogsEvent,
    /// Raw payload.
    pub payload: serde_json::Value,
}

impl GogsWebhook {
    /// Decode a raw request body.
    pub fn from_slice(event_type: GogsEventType, body: &[u8]) -> Result<Self> {
        let payload: serde_json::Value =
            serde_json::from_slice(body).map_err(|e| EventError::PayloadParse {
                event_type,
                source: e,
            })?;
        let event = GogsEvent::from_value(event_type, payload.clone())?;

        Ok(Self { event, payload })
    }

    /// Wrap an already typed event, serializing it as the payload.
    pub fn from_event(event: GogsEvent) -> Self {
        let payload = match &event {
            GogsEvent::IssueComment(e) => serde_json::to_value(e),
            GogsEvent::Issues(e) => serde_json::to_value(e),
            GogsEvent::PullRequest(e) => serde_json::to_value(e),
            GogsEvent::Push(e) => serde_json::to_value(e),
            GogsEvent::Release(e) => serde_json::to_value(e),
        }
        .unwrap_or(serde_json::Value::Null);

        Self { event, payload }
    }
}
