//! Changed-file analysis.
//!
//! Reads each changed file from the working tree and runs both hazard
//! scanners over its lines. Reads are issued concurrently and awaited as one
//! batch; a file that cannot be read is warned about and dropped from the
//! batch instead of aborting it.

use std::path::Path;

use futures::future::join_all;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::debug_calls::{scan_debug_calls, DebugCall};
use crate::error::ScanError;
use crate::markers::scan_conflict_markers;

/// Scan results for a single changed file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileAnalysis {
    /// Repo-relative path of the file.
    pub path: String,

    /// 1-based line numbers where conflict blocks open, ascending.
    pub conflict_starts: Vec<usize>,

    /// Leftover debug calls, in line order.
    pub debug_calls: Vec<DebugCall>,
}

impl FileAnalysis {
    /// Whether any unresolved conflict block was found.
    pub fn has_conflicts(&self) -> bool {
        !self.conflict_starts.is_empty()
    }

    /// Whether any leftover debug call was found.
    pub fn has_debug_calls(&self) -> bool {
        !self.debug_calls.is_empty()
    }

    /// Whether the file is free of both hazards.
    pub fn is_clean(&self) -> bool {
        !self.has_conflicts() && !self.has_debug_calls()
    }
}

/// Run both scanners over in-memory content.
pub fn analyze_content(path: &str, content: &str) -> FileAnalysis {
    let lines: Vec<&str> = content.lines().collect();
    FileAnalysis {
        path: path.to_string(),
        conflict_starts: scan_conflict_markers(&lines),
        debug_calls: scan_debug_calls(&lines),
    }
}

/// Read one changed file from the working tree and analyze it.
///
/// `path` is joined onto `root`, mirroring how a CI checkout lays the
/// repository out. Missing files, permission problems, and non-UTF-8 content
/// all surface as [`ScanError::Read`].
pub async fn analyze_file(root: &Path, path: &str) -> Result<FileAnalysis, ScanError> {
    debug!(file = %path, "Analyzing changed file");

    let content = tokio::fs::read_to_string(root.join(path))
        .await
        .map_err(|source| ScanError::Read {
            path: path.to_string(),
            source,
        })?;

    Ok(analyze_content(path, &content))
}

/// Analyze a batch of changed files concurrently.
///
/// All reads are issued together and awaited through a single join barrier.
/// Files that fail to read are warned about and excluded; the returned
/// analyses keep the listing order of `paths`.
pub async fn analyze_files(root: &Path, paths: &[String]) -> Vec<FileAnalysis> {
    let results = join_all(paths.iter().map(|path| analyze_file(root, path))).await;

    let mut analyses = Vec::with_capacity(results.len());
    for result in results {
        match result {
            Ok(analysis) => analyses.push(analysis),
            Err(err) => warn!("{}", err),
        }
    }
    analyses
}
