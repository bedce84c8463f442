//! Pull request types.

use serde::{Deserialize, Serialize};

use super::common::{GogsRepository, GogsUser};

/// Gogs Pull request.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct GogsPullRequest {
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
    /// Web URL.
    pub html_url: String,
    /// Merged.
    pub merged: bool,
    /// Head branch.
    pub head_branch: String,
    /// Base branch.
    pub base_branch: String,
}

/// Gogs Pull request event.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GogsPullRequestEvent {
    /// Action.
    pub action: String,
    /// Number.
    #[serde(default)]
    pub number: i64,
    /// Pull request.
    #[serde(default)]
    pub pull_request: Option<GogsPullRequest>,
    /// Repository.
    pub repository: GogsRepository,
    /// Sender.
    #[serde(default)]
    pub sender: Option<GogsUser>,
}
