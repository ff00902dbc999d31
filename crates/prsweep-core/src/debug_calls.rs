//! Leftover debug-call detection.
//!
//! Flags lines that invoke one of the debug-print helpers `show`, `showe`,
//! `dump`, or `dumps`, optionally prefixed with `@`, case-insensitively.
//! The helper set is fixed; there is no configuration surface.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Pattern for a debug-call invocation: optional `@`, one of the helper
/// names, optional whitespace, then an opening parenthesis.
///
/// The pattern is unanchored on the left, so `slideshow(` is flagged through
/// its embedded `show(`. The parenthesis must follow a helper name directly,
/// so longer identifiers such as `showError(` do not match.
static DEBUG_CALL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)@?(showe|show|dump|dumps)\s*\(").expect("debug-call pattern is valid")
});

/// A single leftover debug invocation found in a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebugCall {
    /// 1-based line number.
    pub line: usize,

    /// The offending line, trimmed of surrounding whitespace.
    pub text: String,
}

/// Scan a file's lines for leftover debug calls.
///
/// Each matching line yields exactly one [`DebugCall`], even when the
/// pattern occurs several times on that line. Results are in ascending line
/// order.
pub fn scan_debug_calls(lines: &[&str]) -> Vec<DebugCall> {
    lines
        .iter()
        .enumerate()
        .filter(|(_, line)| DEBUG_CALL.is_match(line))
        .map(|(idx, line)| DebugCall {
            line: idx + 1,
            text: line.trim().to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines_of(content: &str) -> Vec<&str> {
        content.lines().collect()
    }

    #[test]
    fn test_plain_call_is_flagged() {
        let calls = scan_debug_calls(&lines_of("dump(user)\n"));
        assert_eq!(
            calls,
            vec![DebugCall {
                line: 1,
                text: "dump(user)".to_string(),
            }]
        );
    }

    #[test]
    fn test_at_prefixed_call_is_flagged_and_trimmed() {
        let calls = scan_debug_calls(&lines_of("    @dump(payload);\n"));
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].line, 1);
        assert_eq!(calls[0].text, "@dump(payload);");
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let calls = scan_debug_calls(&lines_of("SHOW(x)\nDump(y)\n"));
        assert_eq!(calls.len(), 2);
    }

    #[test]
    fn test_whitespace_before_parenthesis_is_allowed() {
        let calls = scan_debug_calls(&lines_of("show   (x)\n"));
        assert_eq!(calls.len(), 1);
    }

    #[test]
    fn test_all_helper_names_are_flagged() {
        let calls = scan_debug_calls(&lines_of("show(a)\nshowe(b)\ndump(c)\ndumps(d)\n"));
        assert_eq!(calls.len(), 4);
    }

    #[test]
    fn test_name_without_call_is_ignored() {
        let calls = scan_debug_calls(&lines_of("let dump = 1;\nshowcase\n"));
        assert!(calls.is_empty());
    }

    #[test]
    fn test_longer_identifier_is_not_flagged() {
        let calls = scan_debug_calls(&lines_of("showError(err)\nshowerror(err)\n"));
        assert!(calls.is_empty());
    }

    #[test]
    fn test_embedded_helper_name_is_flagged() {
        let calls = scan_debug_calls(&lines_of("slideshow(deck)\n"));
        assert_eq!(calls.len(), 1);
    }

    #[test]
    fn test_line_with_several_calls_is_reported_once() {
        let calls = scan_debug_calls(&lines_of("dump(a); show(b);\n"));
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].text, "dump(a); show(b);");
    }

    #[test]
    fn test_lines_are_reported_in_order() {
        let content = "ok\ndump(a)\nok\nshow(b)\n";
        let calls = scan_debug_calls(&lines_of(content));
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].line, 2);
        assert_eq!(calls[1].line, 4);
    }
}
