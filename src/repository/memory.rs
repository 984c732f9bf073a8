//! In-memory repository for unit tests and benchmarks

use git2::Oid;
use rustc_hash::FxHashMap;

use super::SourceRepository;
use crate::error::{GoldsetError, Result};
use crate::model::{Commit, FileDiff};

#[derive(Debug, Clone, Default)]
struct Revision {
    commit: Option<Commit>,
    files: FxHashMap<String, String>,
    diffs: Vec<FileDiff>,
}

/// Repository snapshot held entirely in memory
///
/// Each revision carries its files and the diff against its last parent.
#[derive(Debug, Clone, Default)]
pub struct MemoryRepository {
    revisions: FxHashMap<Oid, Revision>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a commit
    pub fn add_commit(&mut self, commit: Commit) {
        let id = commit.id;
        self.revisions.entry(id).or_default().commit = Some(commit);
    }

    /// Record `content` for `path` as of `commit`
    pub fn add_file(&mut self, commit: Oid, path: &str, content: &str) {
        self.revisions
            .entry(commit)
            .or_default()
            .files
            .insert(path.to_string(), content.to_string());
    }

    /// Record the diff of `path` introduced by `commit`
    pub fn add_diff(&mut self, commit: Oid, path: &str, hunk_headers: &[&str]) {
        self.revisions.entry(commit).or_default().diffs.push(FileDiff {
            path: path.to_string(),
            hunk_headers: hunk_headers.iter().map(|h| h.to_string()).collect(),
        });
    }
}

impl SourceRepository for MemoryRepository {
    fn commit(&self, id: Oid) -> Result<Commit> {
        self.revisions
            .get(&id)
            .and_then(|r| r.commit.clone())
            .ok_or_else(|| GoldsetError::Git(git2::Error::from_str(&format!("unknown commit {id}"))))
    }

    fn file_content(&self, commit: Oid, path: &str) -> Result<String> {
        self.revisions
            .get(&commit)
            .and_then(|r| r.files.get(path))
            .cloned()
            .ok_or_else(|| GoldsetError::ContentNotFound {
                commit,
                path: path.to_string(),
            })
    }

    fn path_exists(&self, commit: Oid, path: &str) -> bool {
        self.revisions.get(&commit).is_some_and(|r| {
            r.files.contains_key(path)
                || r.files.keys().any(|p| {
                    p.strip_prefix(path)
                        .is_some_and(|rest| rest.starts_with('/'))
                })
        })
    }

    fn changed_files(
        &self,
        _parent: Oid,
        commit: Oid,
        extension: &str,
        _context_lines: usize,
    ) -> Result<Vec<FileDiff>> {
        Ok(self
            .revisions
            .get(&commit)
            .map(|r| {
                r.diffs
                    .iter()
                    .filter(|d| d.path.ends_with(extension))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }
}
