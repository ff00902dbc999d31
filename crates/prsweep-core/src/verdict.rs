//! Check verdicts.
//!
//! Collapses a batch of file analyses into the pass/fail outcome of the
//! whole check, with the human-facing message used when it fails.

use serde::{Deserialize, Serialize};

use crate::analyzer::FileAnalysis;

/// Aggregate hazard flags for one check run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckVerdict {
    /// At least one file holds an unresolved conflict block.
    pub conflicts_found: bool,

    /// At least one file holds a leftover debug call.
    pub debug_found: bool,
}

impl CheckVerdict {
    /// Fold per-file analyses into the aggregate verdict.
    pub fn from_analyses(analyses: &[FileAnalysis]) -> Self {
        Self {
            conflicts_found: analyses.iter().any(FileAnalysis::has_conflicts),
            debug_found: analyses.iter().any(FileAnalysis::has_debug_calls),
        }
    }

    /// Whether the check passes.
    pub fn passed(&self) -> bool {
        !self.conflicts_found && !self.debug_found
    }

    /// Failure message for the run, or `None` when the check passes.
    pub fn failure_message(&self) -> Option<&'static str> {
        match (self.conflicts_found, self.debug_found) {
            (true, true) => {
                Some("Found merge conflict markers AND leftover debug calls. Please fix both.")
            }
            (true, false) => Some("Found merge conflict markers. Please resolve them."),
            (false, true) => Some("Found leftover debug calls. Please remove them."),
            (false, false) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::analyze_content;

    #[test]
    fn test_clean_analyses_pass() {
        let analyses = vec![analyze_content("a.rs", "fn main() {}\n")];
        let verdict = CheckVerdict::from_analyses(&analyses);

        assert!(verdict.passed());
        assert_eq!(verdict.failure_message(), None);
    }

    #[test]
    fn test_conflicts_only_message() {
        let analyses = vec![analyze_content("a.txt", "<<<<<<< x\n=======\n>>>>>>> y\n")];
        let verdict = CheckVerdict::from_analyses(&analyses);

        assert!(!verdict.passed());
        assert_eq!(
            verdict.failure_message(),
            Some("Found merge conflict markers. Please resolve them.")
        );
    }

    #[test]
    fn test_debug_only_message() {
        let analyses = vec![analyze_content("a.js", "dump(x)\n")];
        let verdict = CheckVerdict::from_analyses(&analyses);

        assert!(!verdict.passed());
        assert_eq!(
            verdict.failure_message(),
            Some("Found leftover debug calls. Please remove them.")
        );
    }

    #[test]
    fn test_both_hazards_message() {
        let analyses = vec![
            analyze_content("a.txt", "<<<<<<< x\n=======\n>>>>>>> y\n"),
            analyze_content("b.js", "show(x)\n"),
        ];
        let verdict = CheckVerdict::from_analyses(&analyses);

        assert!(!verdict.passed());
        assert_eq!(
            verdict.failure_message(),
            Some("Found merge conflict markers AND leftover debug calls. Please fix both.")
        );
    }

    #[test]
    fn test_empty_batch_passes() {
        let verdict = CheckVerdict::from_analyses(&[]);
        assert!(verdict.passed());
    }
}
