//! GitHub REST implementation of the pull request host.

use std::time::Duration;

use async_trait::async_trait;
use prsweep_core::{HostError, HostResult, PullRequestHost, PullRequestRef};
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

const DEFAULT_API_URL: &str = "https://api.github.com";

/// Page size used when listing changed files.
const PER_PAGE: usize = 100;

/// Connection settings for the GitHub REST API.
#[derive(Debug, Clone)]
pub struct GithubConfig {
    /// Base URL of the REST API.
    pub api_url: String,

    /// Token sent as a bearer credential.
    pub token: String,
}

impl GithubConfig {
    /// Build a config for the given token.
    ///
    /// The API base is taken from `GITHUB_API_URL` when set (the Actions
    /// runner sets it, and GitHub Enterprise hosts need it), falling back to
    /// the public endpoint.
    pub fn new(token: impl Into<String>) -> Self {
        let api_url =
            std::env::var("GITHUB_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        GithubConfig {
            api_url: api_url.trim_end_matches('/').to_string(),
            token: token.into(),
        }
    }

    /// Override the API base URL. Trailing slashes are stripped so URL
    /// building stays predictable.
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into().trim_end_matches('/').to_string();
        self
    }
}

/// One row of the changed-file listing.
#[derive(Debug, Clone, Deserialize)]
pub struct ChangedFile {
    /// Repo-relative path of the file.
    pub filename: String,

    /// Change status reported by GitHub ("added", "modified", "removed", ...).
    pub status: String,
}

/// Keep the paths of listing rows that still exist in the head tree.
///
/// Rows with status `removed` have no file in the checkout to scan, so they
/// are dropped while iterating the listing.
pub fn collect_changed_paths(rows: Vec<ChangedFile>) -> Vec<String> {
    let mut paths = Vec::with_capacity(rows.len());
    for row in rows {
        debug!(status = %row.status, file = %row.filename, "Changed file");
        if row.status == "removed" {
            continue;
        }
        paths.push(row.filename);
    }
    paths
}

/// GitHub REST implementation of [`PullRequestHost`].
pub struct GithubClient {
    config: GithubConfig,
    http_client: Client,
}

impl GithubClient {
    /// Build a client with a 30 second request timeout.
    pub fn new(config: GithubConfig) -> HostResult<Self> {
        let http_client = Client::builder()
            .user_agent(format!("prsweep/{}", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(transport)?;

        Ok(GithubClient {
            config,
            http_client,
        })
    }

    async fn fetch_files_page(
        &self,
        pr: &PullRequestRef,
        page: usize,
    ) -> HostResult<Vec<ChangedFile>> {
        let url = format!(
            "{}/repos/{}/{}/pulls/{}/files",
            self.config.api_url, pr.owner, pr.repo, pr.number
        );

        let response = self
            .http_client
            .get(&url)
            .query(&[("per_page", PER_PAGE), ("page", page)])
            .bearer_auth(&self.config.token)
            .header("Accept", "application/vnd.github+json")
            .send()
            .await
            .map_err(transport)?;

        if !response.status().is_success() {
            return Err(HostError::ListFiles {
                status: response.status().as_u16(),
            });
        }

        response.json().await.map_err(transport)
    }
}

#[async_trait]
impl PullRequestHost for GithubClient {
    /// Page through the changed-file listing until a short page ends it.
    async fn list_changed_files(&self, pr: &PullRequestRef) -> HostResult<Vec<String>> {
        let mut rows = Vec::new();
        let mut page = 1;
        loop {
            let batch = self.fetch_files_page(pr, page).await?;
            debug!(page = page, received = batch.len(), "Fetched listing page");
            let last_page = batch.len() < PER_PAGE;
            rows.extend(batch);
            if last_page {
                break;
            }
            page += 1;
        }

        debug!(pull_request = %pr, rows = rows.len(), "Fetched changed-file listing");
        Ok(collect_changed_paths(rows))
    }

    async fn post_comment(&self, pr: &PullRequestRef, body: &str) -> HostResult<()> {
        if body.is_empty() {
            return Err(HostError::EmptyCommentBody);
        }

        let url = format!(
            "{}/repos/{}/{}/issues/{}/comments",
            self.config.api_url, pr.owner, pr.repo, pr.number
        );

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&self.config.token)
            .header("Accept", "application/vnd.github+json")
            .json(&json!({ "body": body }))
            .send()
            .await
            .map_err(transport)?;

        if !response.status().is_success() {
            return Err(HostError::PostComment {
                status: response.status().as_u16(),
            });
        }
        Ok(())
    }
}

fn transport(err: reqwest::Error) -> HostError {
    HostError::Transport(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_api_url_trims_trailing_slash() {
        let config = GithubConfig {
            api_url: DEFAULT_API_URL.to_string(),
            token: "t".to_string(),
        }
        .with_api_url("https://github.example.com/api/v3/");

        assert_eq!(config.api_url, "https://github.example.com/api/v3");
    }

    #[test]
    fn test_changed_file_parses_and_ignores_extra_fields() {
        let row: ChangedFile = serde_json::from_value(json!({
            "filename": "src/app.js",
            "status": "modified",
            "sha": "abc123",
            "additions": 10,
            "deletions": 2,
        }))
        .expect("parse listing row");

        assert_eq!(row.filename, "src/app.js");
        assert_eq!(row.status, "modified");
    }

    #[test]
    fn test_collect_changed_paths_drops_removed_rows() {
        let rows = vec![
            ChangedFile {
                filename: "kept.rs".to_string(),
                status: "modified".to_string(),
            },
            ChangedFile {
                filename: "gone.rs".to_string(),
                status: "removed".to_string(),
            },
            ChangedFile {
                filename: "new.rs".to_string(),
                status: "added".to_string(),
            },
        ];

        let paths = collect_changed_paths(rows);
        assert_eq!(paths, vec!["kept.rs".to_string(), "new.rs".to_string()]);
    }

    #[tokio::test]
    async fn test_post_empty_comment_is_rejected_before_sending() {
        let client = GithubClient::new(GithubConfig::new("token")).expect("build client");
        let pr = PullRequestRef::new("acme", "widgets", 1);

        let result = client.post_comment(&pr, "").await;
        assert!(matches!(result, Err(HostError::EmptyCommentBody)));
    }
}
