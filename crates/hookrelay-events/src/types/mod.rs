//! Gogs payload types.

mod common;
mod issues;
mod pulls;
mod push;
mod release;

pub use common::{GogsCommitUser, GogsRepository, GogsUser};
pub use issues::{GogsComment, GogsIssue, GogsIssueCommentEvent, GogsIssuesEvent};
pub use pulls::{GogsPullRequest, GogsPullRequestEvent};
pub use push::{GogsCommit, GogsPushEvent};
pub use release::{GogsRelease, GogsReleaseEvent};
