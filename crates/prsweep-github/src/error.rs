//! Error types for prsweep-github

use thiserror::Error;

/// Errors raised while resolving the GitHub Actions event context.
#[derive(Error, Debug)]
pub enum GithubError {
    /// The repository reference is not of the form `owner/repo`.
    #[error("Invalid repository reference: {0}")]
    InvalidRepo(String),

    /// The event payload file could not be read.
    #[error("Failed to read event payload: {0}")]
    PayloadRead(#[from] std::io::Error),

    /// The event payload is not valid JSON.
    #[error("Failed to parse event payload: {0}")]
    PayloadParse(#[from] serde_json::Error),
}
