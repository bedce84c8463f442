//! Common types.

use serde::{Deserialize, Serialize};

/// Gogs User.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct GogsUser {
    /// ID.
    pub id: i64,
    /// Login.
    pub login: String,
    /// Full name.
    pub full_name: String,
    /// Email.
    pub email: String,
    /// Username.
    pub username: String,
}

/// Gogs Commit user.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct GogsCommitUser {
    /// Name.
    pub name: String,
    /// Email.
    pub email: String,
    /// Username.
    pub username: String,
}

/// Gogs Repository.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct GogsRepository {
    /// ID.
    pub id: i64,
    /// Owner.
    pub owner: GogsUser,
    /// Name.
    pub name: String,
    /// Full name.
    pub full_name: String,
    /// Web URL.
    pub html_url: String,
    /// Default branch.
    pub default_branch: String,
}
