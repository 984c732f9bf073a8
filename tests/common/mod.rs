// Shared test fixtures for integration tests
// Functions here are used across different test files
#![allow(dead_code)]

use git2::{Oid, Repository, Signature};
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temporary git repository
pub fn create_test_repo() -> (TempDir, PathBuf, Repository) {
    let dir = TempDir::new().unwrap();
    let repo_path = dir.path().to_path_buf();
    let repo = Repository::init(&repo_path).unwrap();

    // Configure git user for commits
    let mut config = repo.config().unwrap();
    config.set_str("user.name", "Test User").unwrap();
    config.set_str("user.email", "test@example.com").unwrap();

    (dir, repo_path, repo)
}

/// Write files to the working tree, stage them and commit on HEAD
pub fn add_commit(repo: &Repository, files: &[(&str, &str)], message: &str) -> Oid {
    let sig = Signature::now("Test User", "test@example.com").unwrap();

    let mut index = repo.index().unwrap();

    for (path, content) in files {
        let full_path = repo.workdir().unwrap().join(path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&full_path, content).unwrap();

        index.add_path(std::path::Path::new(path)).unwrap();
    }

    index.write().unwrap();
    let tree_id = index.write_tree().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();

    let parent = repo.head().ok().and_then(|h| h.peel_to_commit().ok());
    let parents: Vec<&git2::Commit> = parent.iter().collect();

    repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
        .unwrap()
}

/// Remove a file from the repository and commit
pub fn remove_file_commit(repo: &Repository, path: &str, message: &str) -> Oid {
    let sig = Signature::now("Test User", "test@example.com").unwrap();

    let full_path = repo.workdir().unwrap().join(path);
    if full_path.exists() {
        std::fs::remove_file(&full_path).unwrap();
    }

    let mut index = repo.index().unwrap();
    index.remove_path(std::path::Path::new(path)).unwrap();
    index.write().unwrap();

    let tree_id = index.write_tree().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();
    let parent = repo.head().unwrap().peel_to_commit().unwrap();

    repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &[&parent])
        .unwrap()
}

/// Point a lightweight tag at `commit`
pub fn tag(repo: &Repository, name: &str, commit: Oid) {
    let object = repo.find_object(commit, None).unwrap();
    repo.tag_lightweight(name, &object, false).unwrap();
}

/// Python source made of top-level functions, each `body` lines long.
///
/// Function `i` starts at line `1 + i * (body + 1)`.
pub fn functions(names: &[&str], body: usize) -> String {
    let mut out = String::new();
    for name in names {
        out.push_str(&format!("def {name}():\n"));
        for i in 0..body {
            out.push_str(&format!("    v{i} = {i}\n"));
        }
    }
    out
}

/// Replace line `line` (1-based) of `source` with `text`
pub fn edit_line(source: &str, line: usize, text: &str) -> String {
    source
        .lines()
        .enumerate()
        .map(|(i, l)| if i + 1 == line { text } else { l })
        .map(|l| format!("{l}\n"))
        .collect()
}
