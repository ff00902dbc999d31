//! Prsweep GitHub Library
//!
//! GitHub REST implementation of the prsweep host trait, plus helpers for
//! resolving the pull request context of a GitHub Actions run.

pub mod client;
pub mod error;
pub mod event;

pub use client::{collect_changed_paths, ChangedFile, GithubClient, GithubConfig};
pub use error::GithubError;
pub use event::{pull_request_number, split_repository};
