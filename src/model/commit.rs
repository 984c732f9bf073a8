use git2::Oid;

/// A commit as observed in the repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    pub id: Oid,
    pub message: String,
    pub parents: Vec<Oid>,
}

impl Commit {
    /// Parent the commit is diffed against (the last one for merges)
    pub fn diff_parent(&self) -> Option<Oid> {
        self.parents.last().copied()
    }

    /// First line of the message
    pub fn summary(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }
}

/// Changed file between two revisions, with its raw hunk headers in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDiff {
    pub path: String,
    pub hunk_headers: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diff_parent_is_last_parent() {
        let a = Oid::from_bytes(&[1; 20]).unwrap();
        let b = Oid::from_bytes(&[2; 20]).unwrap();
        let merge = Commit {
            id: Oid::from_bytes(&[3; 20]).unwrap(),
            message: "Merge branch 'fix'".into(),
            parents: vec![a, b],
        };
        assert_eq!(merge.diff_parent(), Some(b));

        let root = Commit { parents: vec![], ..merge };
        assert_eq!(root.diff_parent(), None);
    }

    #[test]
    fn test_summary() {
        let commit = Commit {
            id: Oid::zero(),
            message: "Fixes #12 crash\n\nLonger body".into(),
            parents: vec![],
        };
        assert_eq!(commit.summary(), "Fixes #12 crash");
    }
}
