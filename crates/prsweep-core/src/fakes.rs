//! In-memory fakes for host traits (testing only)
//!
//! Provides `MemoryHost`, which satisfies the `PullRequestHost` contract
//! without any network access.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::HostError;
use crate::host::{HostResult, PullRequestHost, PullRequestRef};

/// In-memory pull-request host backed by a fixed changed-file list.
///
/// Posted comments are recorded for later inspection. A listing failure can
/// be injected to exercise the fatal-error path.
#[derive(Debug, Default)]
pub struct MemoryHost {
    files: Vec<String>,
    list_error: Option<u16>,
    comments: Mutex<Vec<String>>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Host whose pull request changed the given files.
    pub fn with_files(files: &[&str]) -> Self {
        MemoryHost {
            files: files.iter().map(|f| f.to_string()).collect(),
            ..Self::default()
        }
    }

    /// Host whose listing call fails with the given HTTP status.
    pub fn with_list_error(status: u16) -> Self {
        MemoryHost {
            list_error: Some(status),
            ..Self::default()
        }
    }

    /// All comment bodies posted so far, in posting order.
    pub fn posted_comments(&self) -> Vec<String> {
        self.comments.lock().unwrap().clone()
    }
}

#[async_trait]
impl PullRequestHost for MemoryHost {
    async fn list_changed_files(&self, _pr: &PullRequestRef) -> HostResult<Vec<String>> {
        if let Some(status) = self.list_error {
            return Err(HostError::ListFiles { status });
        }
        Ok(self.files.clone())
    }

    async fn post_comment(&self, _pr: &PullRequestRef, body: &str) -> HostResult<()> {
        if body.is_empty() {
            return Err(HostError::EmptyCommentBody);
        }
        let mut comments = self.comments.lock().unwrap();
        comments.push(body.to_string());
        Ok(())
    }
}
