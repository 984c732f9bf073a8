//! Run-scoped diagnostics sink
//!
//! Contained errors are counted here and logged with their context, so a run
//! can report how much it skipped without aborting.

use serde::Serialize;

use crate::error::GoldsetError;

/// Counters for every recoverable failure seen during one run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Diagnostics {
    pub files_resolved: usize,
    pub dialect_fallbacks: usize,
    pub parse_failures: usize,
    pub missing_content: usize,
    pub malformed_hunks: usize,
    pub unpackaged_files: usize,
    pub rootless_commits: usize,
    pub other_errors: usize,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count `err` and log it.
    ///
    /// Errors that only invalidate one hunk, file or commit are warnings; the
    /// rest are logged as errors but still contained.
    pub fn warn(&mut self, err: &GoldsetError) {
        let counter = match err {
            GoldsetError::ParseFailure { .. } => &mut self.parse_failures,
            GoldsetError::ContentNotFound { .. } => &mut self.missing_content,
            GoldsetError::MalformedHunk { .. } => &mut self.malformed_hunks,
            GoldsetError::NoPackageResolved { .. } => &mut self.unpackaged_files,
            GoldsetError::RootlessCommit { .. } => &mut self.rootless_commits,
            GoldsetError::Git(_)
            | GoldsetError::Io(_)
            | GoldsetError::TreeSitter(_)
            | GoldsetError::InvalidConfig(_) => &mut self.other_errors,
        };
        *counter += 1;
        if err.is_recoverable() {
            log::warn!("{err}");
        } else {
            log::error!("{err}");
        }
    }

    /// Total number of warnings recorded
    pub fn warnings(&self) -> usize {
        self.parse_failures
            + self.missing_content
            + self.malformed_hunks
            + self.unpackaged_files
            + self.rootless_commits
            + self.other_errors
    }
}
