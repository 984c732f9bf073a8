use git2::Oid;
use serde::{Deserialize, Serialize};

use crate::repository::SourceRepository;
use crate::util::ancestor_dirs;

/// Which package directory wins when several ancestors carry a marker
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageSearch {
    /// Deepest package directory
    #[default]
    Innermost,
    /// Shallowest package directory
    Outermost,
}

/// A directory recognized as a package at some revision
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRoot {
    /// Final path segment of `dir`
    pub name: String,
    pub dir: String,
}

/// Find the package directory of `file_path` as of `commit`.
///
/// Ancestor directories are probed outermost first for a `marker` file.
/// Absence of a marker is not an error.
pub fn infer_package<R: SourceRepository + ?Sized>(
    repo: &R,
    commit: Oid,
    file_path: &str,
    marker: &str,
    search: PackageSearch,
) -> Option<PackageRoot> {
    let mut found = None;
    for dir in ancestor_dirs(file_path) {
        if !repo.path_exists(commit, &format!("{dir}/{marker}")) {
            continue;
        }
        found = Some(dir);
        if search == PackageSearch::Outermost {
            break;
        }
    }

    found.map(|dir| PackageRoot {
        name: dir.rsplit('/').next().unwrap_or(dir).to_string(),
        dir: dir.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MemoryRepository;

    fn repo_with(files: &[&str]) -> (MemoryRepository, Oid) {
        let commit = Oid::from_bytes(&[7; 20]).unwrap();
        let mut repo = MemoryRepository::new();
        for f in files {
            repo.add_file(commit, f, "");
        }
        (repo, commit)
    }

    #[test]
    fn test_single_package() {
        let (repo, c) = repo_with(&["mypkg/sub/__init__.py", "mypkg/sub/a.py"]);
        let root = infer_package(&repo, c, "mypkg/sub/a.py", "__init__.py", PackageSearch::Innermost);
        assert_eq!(
            root,
            Some(PackageRoot {
                name: "sub".into(),
                dir: "mypkg/sub".into()
            })
        );
    }

    #[test]
    fn test_innermost_keeps_searching() {
        let (repo, c) = repo_with(&["src/pkg/__init__.py", "src/pkg/sub/__init__.py"]);
        let root = infer_package(&repo, c, "src/pkg/sub/a.py", "__init__.py", PackageSearch::Innermost).unwrap();
        assert_eq!(root.dir, "src/pkg/sub");
        assert_eq!(root.name, "sub");
    }

    #[test]
    fn test_outermost_stops_at_first() {
        let (repo, c) = repo_with(&["src/pkg/__init__.py", "src/pkg/sub/__init__.py"]);
        let root = infer_package(&repo, c, "src/pkg/sub/a.py", "__init__.py", PackageSearch::Outermost).unwrap();
        assert_eq!(root.dir, "src/pkg");
        assert_eq!(root.name, "pkg");
    }

    #[test]
    fn test_no_marker() {
        let (repo, c) = repo_with(&["scripts/run.py"]);
        assert_eq!(
            infer_package(&repo, c, "scripts/run.py", "__init__.py", PackageSearch::Innermost),
            None
        );
    }

    #[test]
    fn test_root_level_file_has_no_package() {
        let (repo, c) = repo_with(&["__init__.py", "setup.py"]);
        assert_eq!(
            infer_package(&repo, c, "setup.py", "__init__.py", PackageSearch::Innermost),
            None
        );
    }

    #[test]
    fn test_custom_marker() {
        let (repo, c) = repo_with(&["lib/PACKAGE"]);
        let root = infer_package(&repo, c, "lib/mod.py", "PACKAGE", PackageSearch::Innermost).unwrap();
        assert_eq!(root.name, "lib");
    }
}
