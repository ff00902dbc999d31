//! Check orchestration against a pull request host.

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use uuid::Uuid;

use crate::analyzer::analyze_files;
use crate::host::{PullRequestHost, PullRequestRef};
use crate::obs::{
    emit_check_finished, emit_check_started, emit_comment_posted, emit_files_listed, CheckSpan,
};
use crate::report::{build_conflict_report, build_debug_report};
use crate::verdict::CheckVerdict;

/// Result of a complete hazard check against one pull request.
#[derive(Debug, Clone)]
pub struct CheckOutcome {
    /// Unique ID of this check run.
    pub run_id: String,

    /// Number of changed files reported by the host.
    pub files_listed: usize,

    /// Number of files that were read and scanned.
    pub files_scanned: usize,

    /// Number of files skipped because they could not be read.
    pub files_skipped: usize,

    /// Number of hazard reports posted back to the pull request.
    pub comments_posted: usize,

    /// Aggregate hazard flags for the run.
    pub verdict: CheckVerdict,

    /// Total duration in milliseconds.
    pub duration_ms: u64,
}

impl CheckOutcome {
    /// Whether the check passes.
    pub fn passed(&self) -> bool {
        self.verdict.passed()
    }

    /// Failure message for the run, or `None` when the check passes.
    pub fn failure_message(&self) -> Option<&'static str> {
        self.verdict.failure_message()
    }
}

/// Hazard check orchestrator.
pub struct CheckPipeline;

impl CheckPipeline {
    /// Run the full hazard check for one pull request.
    ///
    /// The pipeline:
    /// 1. Lists the pull request's changed files from the host.
    /// 2. Reads and scans each file concurrently, skipping unreadable ones.
    /// 3. Posts the conflict-marker report, then the debug-call report,
    ///    when the matching hazard was found anywhere.
    ///
    /// A listing or posting failure aborts the run with an error. Hazards do
    /// not: they are carried in the returned outcome so the caller decides
    /// how to fail the check.
    pub async fn run(
        host: Arc<dyn PullRequestHost>,
        pr: &PullRequestRef,
        workspace: &Path,
    ) -> anyhow::Result<CheckOutcome> {
        let start = Instant::now();
        let run_id = Uuid::new_v4().to_string();
        let _span = CheckSpan::enter(&run_id);

        emit_check_started(&run_id, &pr.to_string());

        let files = host
            .list_changed_files(pr)
            .await
            .with_context(|| format!("Failed to list changed files for {}", pr))?;
        emit_files_listed(&run_id, files.len());

        let analyses = analyze_files(workspace, &files).await;
        let files_scanned = analyses.len();
        let files_skipped = files.len() - files_scanned;

        let verdict = CheckVerdict::from_analyses(&analyses);

        let mut comments_posted = 0;
        if let Some(body) = build_conflict_report(&analyses) {
            host.post_comment(pr, &body)
                .await
                .with_context(|| format!("Failed to post conflict report to {}", pr))?;
            emit_comment_posted(&run_id, "conflict", body.len());
            comments_posted += 1;
        }
        if let Some(body) = build_debug_report(&analyses) {
            host.post_comment(pr, &body)
                .await
                .with_context(|| format!("Failed to post debug report to {}", pr))?;
            emit_comment_posted(&run_id, "debug", body.len());
            comments_posted += 1;
        }

        let duration_ms = start.elapsed().as_millis() as u64;
        emit_check_finished(&run_id, duration_ms, verdict.passed());

        Ok(CheckOutcome {
            run_id,
            files_listed: files.len(),
            files_scanned,
            files_skipped,
            comments_posted,
            verdict,
            duration_ms,
        })
    }
}
