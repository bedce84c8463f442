//! Push types.

use serde::{Deserialize, Serialize};

use super::common::{GogsCommitUser, GogsRepository, GogsUser};

/// Gogs Commit, as embedded in a push payload.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct GogsCommit {
    /// ID.
    pub id: String,
    /// Message.
    pub message: String,
    /// URL.
    pub url: String,
    /// Author.
    pub author: Option<GogsCommitUser>,
    /// Committer.
    pub committer: Option<GogsCommitUser>,
    /// Timestamp.
    pub timestamp: String,
}

/// Gogs Push event.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GogsPushEvent {
    /// Reference.
    #[serde(rename = "ref", default)]
    pub reference: String,
    /// Before.
    #[serde(default)]
    pub before: String,
    /// After.
    #[serde(default)]
    pub after: String,
    /// Compare URL.
    #[serde(default)]
    pub compare_url: String,
    /// Commits.
    #[serde(default)]
    pub commits: Vec<GogsCommit>,
    /// Repository.
    pub repository: GogsRepository,
    /// Pusher.
    #[serde(default)]
    pub pusher: Option<GogsUser>,
    /// Sender.
    #[serde(default)]
    pub sender: Option<GogsUser>,
}
