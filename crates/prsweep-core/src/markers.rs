//! Merge-conflict marker detection.
//!
//! Recognises the three-line delimiter pattern left behind by an unresolved
//! merge:
//!
//! ```text
//! <<<<<<< HEAD
//! =======
//! >>>>>>> feature
//! ```
//!
//! A block only counts once all three delimiters have been seen in that
//! order. An opening marker that is never separated and closed before the
//! end of the file is discarded.

/// Find unresolved merge-conflict blocks in a file's lines.
///
/// Returns the 1-based line number of each `<<<<<<<` line that is later
/// followed by a `=======` line and then a `>>>>>>>` line. Delimiters are
/// matched by line prefix, so trailing branch labels (`<<<<<<< HEAD`) are
/// recognised. Results are in ascending line order.
pub fn scan_conflict_markers(lines: &[&str]) -> Vec<usize> {
    let mut starts = Vec::new();
    let mut open_at: Option<usize> = None;
    let mut separator_seen = false;

    for (idx, line) in lines.iter().enumerate() {
        match open_at {
            None => {
                if line.starts_with("<<<<<<<") {
                    open_at = Some(idx);
                }
            }
            Some(start) => {
                if !separator_seen {
                    if line.starts_with("=======") {
                        separator_seen = true;
                    }
                } else if line.starts_with(">>>>>>>") {
                    starts.push(start + 1);
                    open_at = None;
                    separator_seen = false;
                }
            }
        }
    }

    starts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines_of(content: &str) -> Vec<&str> {
        content.lines().collect()
    }

    #[test]
    fn test_clean_file_has_no_markers() {
        let lines = lines_of("fn main() {\n    println!(\"hello\");\n}\n");
        assert!(scan_conflict_markers(&lines).is_empty());
    }

    #[test]
    fn test_complete_block_reports_opening_line() {
        let lines = lines_of("<<<<<<< HEAD\nours\n=======\ntheirs\n>>>>>>> feature\n");
        assert_eq!(scan_conflict_markers(&lines), vec![1]);
    }

    #[test]
    fn test_block_in_middle_of_file() {
        let lines = lines_of("one\ntwo\nthree\n<<<<<<< HEAD\na\n=======\nb\n>>>>>>> topic\n");
        assert_eq!(scan_conflict_markers(&lines), vec![4]);
    }

    #[test]
    fn test_multiple_blocks_reported_in_order() {
        let content = "<<<<<<< HEAD\n=======\n>>>>>>> a\nplain\n<<<<<<< HEAD\n=======\n>>>>>>> b\n";
        let lines = lines_of(content);
        assert_eq!(scan_conflict_markers(&lines), vec![1, 5]);
    }

    #[test]
    fn test_unclosed_block_is_discarded() {
        let lines = lines_of("<<<<<<< HEAD\nours\n=======\ntheirs\n");
        assert!(scan_conflict_markers(&lines).is_empty());
    }

    #[test]
    fn test_open_without_separator_is_discarded() {
        let lines = lines_of("<<<<<<< HEAD\nours\n>>>>>>> feature\n");
        assert!(scan_conflict_markers(&lines).is_empty());
    }

    #[test]
    fn test_close_before_open_is_ignored() {
        let lines = lines_of(">>>>>>> feature\n=======\nplain\n");
        assert!(scan_conflict_markers(&lines).is_empty());
    }

    #[test]
    fn test_second_open_before_separator_keeps_first() {
        let lines = lines_of("<<<<<<< a\n<<<<<<< b\n=======\n>>>>>>> c\n");
        assert_eq!(scan_conflict_markers(&lines), vec![1]);
    }

    #[test]
    fn test_separator_must_start_the_line() {
        let lines = lines_of("<<<<<<< HEAD\nx =======\n>>>>>>> feature\n");
        assert!(scan_conflict_markers(&lines).is_empty());
    }

    #[test]
    fn test_crlf_line_endings_are_handled() {
        let lines = lines_of("<<<<<<< HEAD\r\nours\r\n=======\r\ntheirs\r\n>>>>>>> feature\r\n");
        assert_eq!(scan_conflict_markers(&lines), vec![1]);
    }

    #[test]
    fn test_markers_of_completed_block_reset_state() {
        // The separator of a closed block must not satisfy the next block.
        let content = "<<<<<<< a\n=======\n>>>>>>> a\n<<<<<<< b\n>>>>>>> b\n";
        let lines = lines_of(content);
        assert_eq!(scan_conflict_markers(&lines), vec![1]);
    }
}
