//! Source repository trait for content-access abstraction
//!
//! Decouples entity resolution from git object storage.

use git2::Oid;

use crate::error::Result;
use crate::model::{Commit, FileDiff};

/// Read access to commits, file contents and diffs
///
/// This trait abstracts the repository operations needed by the resolver,
/// allowing resolution logic to be tested without a real git repository.
pub trait SourceRepository {
    /// Look up a commit by id
    fn commit(&self, id: Oid) -> Result<Commit>;

    /// Full text of `path` as of `commit`
    ///
    /// Fails with `ContentNotFound` if the path is not a file at that revision.
    fn file_content(&self, commit: Oid, path: &str) -> Result<String>;

    /// Whether `path` exists in the tree of `commit`. Never fails.
    fn path_exists(&self, commit: Oid, path: &str) -> bool;

    /// Added and modified files ending in `extension` between two commits
    fn changed_files(
        &self,
        parent: Oid,
        commit: Oid,
        extension: &str,
        context_lines: usize,
    ) -> Result<Vec<FileDiff>>;
}
