//! Error types for prsweep-core

use thiserror::Error;

/// Errors that can occur while reading a changed file for scanning.
#[derive(Error, Debug)]
pub enum ScanError {
    /// The file could not be read: missing, unreadable, or not valid UTF-8.
    #[error("Could not read or process file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised by a pull-request host implementation.
#[derive(Error, Debug)]
pub enum HostError {
    /// Listing the changed files returned a non-success status.
    #[error("Fetching list of changed files from GitHub API failed with error code {status}")]
    ListFiles { status: u16 },

    /// Posting a comment returned a non-success status.
    #[error("Posting comment failed with error code {status}")]
    PostComment { status: u16 },

    /// A comment body must not be empty.
    #[error("Comment body is empty")]
    EmptyCommentBody,

    /// Transport-level failure talking to the host.
    #[error("Host transport error: {0}")]
    Transport(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_error_names_the_file() {
        let err = ScanError::Read {
            path: "src/app.js".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        let msg = err.to_string();
        assert!(msg.contains("Could not read or process file src/app.js"));
    }

    #[test]
    fn test_list_files_error_names_the_status() {
        let err = HostError::ListFiles { status: 502 };
        assert!(err.to_string().contains("error code 502"));
    }
}
