//! Sample Gogs payloads.

#![allow(missing_docs)]

pub const RELEASE_PUBLISHED_DATA: &str = include_str!("release_published.json");
pub const PUSH_DATA: &str = include_str!("push.json");
pub const ISSUES_OPENED_DATA: &str = include_str!("issues_opened.json");
pub const ISSUE_COMMENT_CREATED_DATA: &str = include_str!("issue_comment_created.json");
pub const PULL_REQUEST_OPENED_DATA: &str = include_str!("pull_request_opened.json");
pub const PULL_REQUEST_LABEL_UPDATED_DATA: &str = include_str!("pull_request_label_updated.json");
