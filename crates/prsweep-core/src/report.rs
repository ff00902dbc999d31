//! Markdown report rendering.
//!
//! Turns a batch of file analyses into the two comment bodies posted back to
//! the pull request: one for unresolved conflict markers, one for leftover
//! debug calls. A report is only produced when at least one file is affected,
//! so clean runs never post.

use crate::analyzer::FileAnalysis;

/// Header line of the conflict-marker report.
pub const CONFLICT_REPORT_HEADER: &str =
    "Heads up! Found unresolved merge conflict markers in this Pull Request:\n\n";

/// Header line of the debug-call report.
pub const DEBUG_REPORT_HEADER: &str =
    "Heads up! Found leftover debugging functions in this Pull Request:\n\n";

fn file_section(path: &str, bullets: Vec<String>) -> String {
    format!("**File:** `{}`\n{}\n\n", path, bullets.join("\n"))
}

/// Render the conflict-marker report, or `None` when no file has one.
///
/// Sections appear in the order the analyses were listed, one per affected
/// file, each bullet naming the 1-based line where a conflict block opens.
pub fn build_conflict_report(analyses: &[FileAnalysis]) -> Option<String> {
    let mut body = String::from(CONFLICT_REPORT_HEADER);
    let mut affected = false;

    for analysis in analyses.iter().filter(|a| a.has_conflicts()) {
        affected = true;
        let bullets = analysis
            .conflict_starts
            .iter()
            .map(|line| format!("  - Conflict marker starting at line #{}", line))
            .collect();
        body.push_str(&file_section(&analysis.path, bullets));
    }

    affected.then_some(body)
}

/// Render the debug-call report, or `None` when no file has one.
///
/// Each bullet carries the 1-based line number and the trimmed offending
/// line so reviewers can judge the hit without opening the file.
pub fn build_debug_report(analyses: &[FileAnalysis]) -> Option<String> {
    let mut body = String::from(DEBUG_REPORT_HEADER);
    let mut affected = false;

    for analysis in analyses.iter().filter(|a| a.has_debug_calls()) {
        affected = true;
        let bullets = analysis
            .debug_calls
            .iter()
            .map(|call| format!("  - Line #{}: `{}`", call.line, call.text))
            .collect();
        body.push_str(&file_section(&analysis.path, bullets));
    }

    affected.then_some(body)
}
