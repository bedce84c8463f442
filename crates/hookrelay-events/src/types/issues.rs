//! Issue types.

use serde::{Deserialize, Serialize};

use super::common::{GogsRepository, GogsUser};

/// Gogs Issue.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct GogsIssue {
    /// ID.
    pub id: i64,
    /// Number.
    pub number: i64,
    /// Author.
    pub user: Option<GogsUser>,
    /// Title.
    pub title: String,
    /// Body.
    pub body: String,
    /// State.
    pub state: String,
    /// Comments count.
    pub comments: i64,
}

/// Gogs Issue comment.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct GogsComment {
    /// ID.
    pub id: i64,
    /// Web URL.
    pub html_url: String,
    /// Author.
    pub user: Option<GogsUser>,
    /// Body.
    pub body: String,
}

/// Gogs Issues event.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GogsIssuesEvent {
    /// Action.
    pub action: String,
    /// Issue number.
    #[serde(default)]
    pub number: i64,
    /// Issue.
    #[serde(default)]
    pub issue: Option<GogsIssue>,
    /// Repository.
    pub repository: GogsRepository,
    /// Sender.
    #[serde(default)]
    pub sender: Option<GogsUser>,
}

/// Gogs Issue comment event.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GogsIssueCommentEvent {
    /// Action.
    pub action: String,
    /// Issue.
    #[serde(default)]
    pub issue: Option<GogsIssue>,
    /// Comment.
    #[serde(default)]
    pub comment: Option<GogsComment>,
    /// Repository.
    pub repository: GogsRepository,
    /// Sender.
    #[serde(default)]
    pub sender: Option<GogsUser>,
}
