//! Pull-request host abstraction.
//!
//! `PullRequestHost` is the capability interface the check pipeline uses to
//! talk to a code host: list the files changed in a pull request and post
//! comments on it. The production implementation lives in `prsweep-github`;
//! an in-memory fake for testing lives in the `fakes` module.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::HostError;

/// Result type for host operations
pub type HostResult<T> = std::result::Result<T, HostError>;

/// Coordinates of a pull request.
///
/// Owner and repository are always carried explicitly; no ambient repository
/// context is ever substituted on the way to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestRef {
    /// Repository owner (user or organisation).
    pub owner: String,

    /// Repository name.
    pub repo: String,

    /// Pull request number.
    pub number: u64,
}

impl PullRequestRef {
    pub fn new(owner: &str, repo: &str, number: u64) -> Self {
        PullRequestRef {
            owner: owner.to_string(),
            repo: repo.to_string(),
            number,
        }
    }
}

impl std::fmt::Display for PullRequestRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}#{}", self.owner, self.repo, self.number)
    }
}

/// Code-host capabilities needed by the check pipeline.
///
/// Guarantees:
/// - `list_changed_files` returns repo-relative paths in the host's diff
///   order, with files whose diff status is `removed` already excluded.
/// - `post_comment` rejects an empty body with `HostError::EmptyCommentBody`
///   before any remote call is made.
#[async_trait]
pub trait PullRequestHost: Send + Sync {
    /// List the changed (non-removed) files of a pull request.
    async fn list_changed_files(&self, pr: &PullRequestRef) -> HostResult<Vec<String>>;

    /// Post a comment on the pull request.
    async fn post_comment(&self, pr: &PullRequestRef, body: &str) -> HostResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pull_request_ref_display() {
        let pr = PullRequestRef::new("acme", "widgets", 42);
        assert_eq!(pr.to_string(), "acme/widgets#42");
    }
}
