//! Structured observability hooks for check lifecycle events.
//!
//! This module provides:
//! - Check-scoped tracing spans via `CheckSpan` RAII guard
//! - Emission functions for key lifecycle events: start, file listing, comment posting, finish
//!
//! Events are emitted at `info!` level (configurable via `PRSWEEP_LOG` env var).

use tracing::info;

/// RAII guard that enters a check-scoped tracing span for the duration of a run.
///
/// # Example
///
/// ```ignore
/// let _span = CheckSpan::enter("check-12345");
/// // Now all tracing calls are automatically associated with run_id = "check-12345"
/// ```
pub struct CheckSpan {
    _span: tracing::span::EnteredSpan,
}

impl CheckSpan {
    /// Create and enter a span tagged with the run_id.
    pub fn enter(run_id: &str) -> Self {
        let span = tracing::info_span!("prsweep.check", run_id = %run_id);
        Self {
            _span: span.entered(),
        }
    }
}

/// Emit event: check started against a pull request.
pub fn emit_check_started(run_id: &str, pull_request: &str) {
    info!(event = "check.started", run_id = %run_id, pull_request = %pull_request);
}

/// Emit event: changed-file listing fetched from the host.
pub fn emit_files_listed(run_id: &str, count: usize) {
    info!(event = "check.files_listed", run_id = %run_id, count = count);
}

/// Emit event: a hazard report was posted back to the pull request.
pub fn emit_comment_posted(run_id: &str, kind: &str, body_len: usize) {
    info!(event = "check.comment_posted", run_id = %run_id, kind = %kind, body_len = body_len);
}

/// Emit event: check finished with duration and pass/fail status.
pub fn emit_check_finished(run_id: &str, duration_ms: u64, passed: bool) {
    info!(
        event = "check.finished",
        run_id = %run_id,
        duration_ms = duration_ms,
        passed = passed,
    );
}
