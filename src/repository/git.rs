use git2::{Delta, DiffOptions, ObjectType, Oid, Patch, Repository, Sort};
use std::path::{Path, PathBuf};

use super::SourceRepository;
use crate::error::{GoldsetError, Result};
use crate::model::{Commit, FileDiff};

/// [`SourceRepository`] backed by a local git repository
///
/// All content is read from git objects; the working tree is never touched.
pub struct GitRepository {
    repo: Repository,
    path: PathBuf,
}

impl GitRepository {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let repo = Repository::open(&path)?;
        Ok(Self { repo, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Resolve a revision spec (branch, tag, hash) to a commit id
    pub fn resolve(&self, spec: &str) -> Result<Oid> {
        Ok(self.repo.revparse_single(spec)?.peel_to_commit()?.id())
    }

    /// Commits of the window `from...to`, newest first.
    ///
    /// This is the symmetric difference: commits reachable from either end
    /// but not from their merge base.
    pub fn commit_range(&self, from: &str, to: &str) -> Result<Vec<Commit>> {
        let from = self.resolve(from)?;
        let to = self.resolve(to)?;

        let mut revwalk = self.repo.revwalk()?;
        revwalk.push(to)?;
        revwalk.push(from)?;
        if let Ok(base) = self.repo.merge_base(from, to) {
            revwalk.hide(base)?;
        }
        revwalk.set_sorting(Sort::TIME)?;

        revwalk
            .map(|oid| oid.map_err(GoldsetError::from).and_then(|oid| self.commit(oid)))
            .collect()
    }
}

impl SourceRepository for GitRepository {
    fn commit(&self, id: Oid) -> Result<Commit> {
        let commit = self.repo.find_commit(id)?;
        Ok(Commit {
            id,
            message: String::from_utf8_lossy(commit.message_bytes()).into_owned(),
            parents: commit.parent_ids().collect(),
        })
    }

    fn file_content(&self, commit: Oid, path: &str) -> Result<String> {
        let not_found = || GoldsetError::ContentNotFound {
            commit,
            path: path.to_string(),
        };

        let tree = self.repo.find_commit(commit)?.tree()?;
        let entry = tree.get_path(Path::new(path)).map_err(|_| not_found())?;
        if entry.kind() != Some(ObjectType::Blob) {
            return Err(not_found());
        }
        let blob = self.repo.find_blob(entry.id()).map_err(|_| not_found())?;
        Ok(String::from_utf8_lossy(blob.content()).into_owned())
    }

    fn path_exists(&self, commit: Oid, path: &str) -> bool {
        self.repo
            .find_commit(commit)
            .and_then(|c| c.tree())
            .and_then(|t| t.get_path(Path::new(path)))
            .is_ok()
    }

    fn changed_files(
        &self,
        parent: Oid,
        commit: Oid,
        extension: &str,
        context_lines: usize,
    ) -> Result<Vec<FileDiff>> {
        let old_tree = self.repo.find_commit(parent)?.tree()?;
        let new_tree = self.repo.find_commit(commit)?.tree()?;

        let mut opts = DiffOptions::new();
        opts.context_lines(u32::try_from(context_lines).unwrap_or(u32::MAX));
        let diff = self
            .repo
            .diff_tree_to_tree(Some(&old_tree), Some(&new_tree), Some(&mut opts))?;

        let mut files = Vec::new();
        for (idx, delta) in diff.deltas().enumerate() {
            if !matches!(delta.status(), Delta::Added | Delta::Modified) {
                continue;
            }
            let Some(path) = delta.new_file().path().and_then(|p| p.to_str()) else {
                continue;
            };
            if !path.ends_with(extension) {
                continue;
            }

            let mut hunk_headers = Vec::new();
            if let Some(patch) = Patch::from_diff(&diff, idx)? {
                for i in 0..patch.num_hunks() {
                    let (hunk, _) = patch.hunk(i)?;
                    hunk_headers.push(String::from_utf8_lossy(hunk.header()).trim_end().to_string());
                }
            }

            files.push(FileDiff {
                path: path.to_string(),
                hunk_headers,
            });
        }

        Ok(files)
    }
}
