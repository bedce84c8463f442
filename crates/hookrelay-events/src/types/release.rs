//! Release types.

use serde::{Deserialize, Serialize};

use super::common::{GogsRepository, GogsUser};

/// Gogs Release.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct GogsRelease {
    /// ID.
    pub id: i64,
    /// Tag name.
    pub tag_name: String,
    /// Target commitish.
    pub target_commitish: String,
    /// Name.
    pub name: String,
    /// Body.
    pub body: String,
    /// Draft.
    pub draft: bool,
    /// Prerelease.
    pub prerelease: bool,
    /// Author.
    pub author: Option<GogsUser>,
}

/// Gogs Release event.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GogsReleaseEvent {
    /// Action.
    pub action: String,
    /// Release.
    #[serde(default)]
    pub release: Option<GogsRelease>,
    /// Repository.
    pub repository: GogsRepository,
    /// Sender.
    #[serde(default)]
    pub sender: Option<GogsUser>,
}
