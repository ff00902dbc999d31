//! GitHub Actions event context.
//!
//! In a workflow run the Actions runner exposes the triggering event as a
//! JSON payload file (path in `GITHUB_EVENT_PATH`) and the repository as
//! `owner/repo` in `GITHUB_REPOSITORY`. These helpers pull the pull request
//! number and the repository coordinates out of that context so the caller
//! can decide whether there is anything to check.

use serde_json::Value;
use tracing::debug;

use crate::error::GithubError;

/// Split an `owner/repo` reference into its two halves.
pub fn split_repository(reference: &str) -> Result<(String, String), GithubError> {
    match reference.split_once('/') {
        Some((owner, repo)) if !owner.is_empty() && !repo.is_empty() => {
            Ok((owner.to_string(), repo.to_string()))
        }
        _ => Err(GithubError::InvalidRepo(reference.to_string())),
    }
}

/// Read the pull request number from an Actions event payload file.
///
/// Returns `Ok(None)` when the payload holds no `pull_request` object, which
/// is how non-PR triggers (push, schedule) look. A missing or malformed
/// payload file is an error: if the runner names an event file, it has to be
/// readable.
pub async fn pull_request_number(event_path: &str) -> Result<Option<u64>, GithubError> {
    let raw = tokio::fs::read_to_string(event_path).await?;
    let payload: Value = serde_json::from_str(&raw)?;

    let number = payload
        .get("pull_request")
        .and_then(|pr| pr.get("number"))
        .and_then(Value::as_u64);

    debug!(event_path = %event_path, number = ?number, "Resolved event payload");
    Ok(number)
}
