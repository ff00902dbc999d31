//! Prsweep Core Library
//!
//! Hazard scanners, report rendering, and check orchestration for sweeping
//! pull requests. The scanners find unresolved merge conflict markers and
//! leftover debug calls in changed files; the pipeline ties them to a
//! [`host::PullRequestHost`] so the same check runs against the real GitHub
//! API or an in-memory fake.

pub mod analyzer;
pub mod debug_calls;
pub mod error;
pub mod fakes;
pub mod host;
pub mod markers;
pub mod obs;
pub mod pipeline;
pub mod report;
pub mod telemetry;
pub mod verdict;

pub use analyzer::{analyze_content, analyze_file, analyze_files, FileAnalysis};
pub use debug_calls::{scan_debug_calls, DebugCall};
pub use error::{HostError, ScanError};
pub use host::{HostResult, PullRequestHost, PullRequestRef};
pub use markers::scan_conflict_markers;
pub use pipeline::{CheckOutcome, CheckPipeline};
pub use report::{
    build_conflict_report, build_debug_report, CONFLICT_REPORT_HEADER, DEBUG_REPORT_HEADER,
};
pub use verdict::CheckVerdict;

pub use obs::{
    emit_check_finished, emit_check_started, emit_comment_posted, emit_files_listed, CheckSpan,
};
pub use telemetry::init_tracing;

/// Prsweep version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
