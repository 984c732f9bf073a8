use git2::Oid;
use regex::Regex;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::{GoldsetError, Result};
use crate::model::Commit;

/// Matches issue references such as `fixes #123` in commit messages
#[derive(Debug, Clone)]
pub struct IssuePattern {
    regex: Regex,
}

impl IssuePattern {
    pub fn new(keywords: &[String]) -> Result<Self> {
        if keywords.is_empty() {
            return Err(GoldsetError::invalid_config("issue_keywords must not be empty"));
        }

        let alternatives: Vec<String> = keywords
            .iter()
            .map(|k| regex::escape(&k.to_lowercase()))
            .collect();
        let regex = Regex::new(&format!(r"(?:{}) #(\d+)", alternatives.join("|")))
            .map_err(|e| GoldsetError::invalid_config(format!("bad issue keyword: {e}")))?;

        Ok(Self { regex })
    }

    /// Issue id referenced by `message`, if any. Only the first reference counts.
    pub fn issue_id(&self, message: &str) -> Option<String> {
        self.regex
            .captures(&message.to_lowercase())
            .map(|caps| caps[1].to_string())
    }
}

/// Commits linked to each issue, ordered by issue id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueCommitMap {
    entries: BTreeMap<String, Vec<Oid>>,
}

impl IssueCommitMap {
    pub fn from_commits<'a>(
        commits: impl IntoIterator<Item = &'a Commit>,
        pattern: &IssuePattern,
    ) -> Self {
        let mut map = Self::default();
        for commit in commits {
            if let Some(issue) = pattern.issue_id(&commit.message) {
                map.insert(&issue, commit.id);
            }
        }
        map
    }

    pub fn insert(&mut self, issue_id: &str, commit: Oid) {
        self.entries.entry(issue_id.to_string()).or_default().push(commit);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn commits(&self, issue_id: &str) -> &[Oid] {
        self.entries.get(issue_id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Oid])> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Write the map as `issue commit1 commit2 ...` lines, replacing `path`
    pub fn save(&self, path: &Path) -> Result<()> {
        let mut out = String::new();
        for (issue, commits) in &self.entries {
            out.push_str(issue);
            for commit in commits {
                out.push(' ');
                out.push_str(&commit.to_string());
            }
            out.push('\n');
        }
        fs::write(path, out)?;
        Ok(())
    }

    /// Read a map written by [`IssueCommitMap::save`]
    pub fn load(path: &Path) -> Result<Self> {
        let mut map = Self::default();
        for line in fs::read_to_string(path)?.lines() {
            let mut fields = line.split_whitespace();
            let Some(issue) = fields.next() else {
                continue;
            };
            for field in fields {
                match Oid::from_str(field) {
                    Ok(oid) => map.insert(issue, oid),
                    Err(_) => log::warn!("Skipping invalid commit id {field:?} for issue {issue}"),
                }
            }
        }
        Ok(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn keywords(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn commit(byte: u8, message: &str) -> Commit {
        Commit {
            id: Oid::from_bytes(&[byte; 20]).unwrap(),
            message: message.to_string(),
            parents: vec![],
        }
    }

    #[test]
    fn test_pattern_matches_any_keyword() {
        let pattern = IssuePattern::new(&keywords(&["fix", "closes"])).unwrap();
        assert_eq!(pattern.issue_id("Fix #12: crash on start"), Some("12".into()));
        assert_eq!(pattern.issue_id("cleanup, closes #7"), Some("7".into()));
        assert_eq!(pattern.issue_id("refactor parser"), None);
        assert_eq!(pattern.issue_id("fix#12 without space"), None);
    }

    #[test]
    fn test_pattern_first_reference_wins() {
        let pattern = IssuePattern::new(&keywords(&["fixes"])).unwrap();
        assert_eq!(pattern.issue_id("fixes #3 and fixes #4"), Some("3".into()));
    }

    #[test]
    fn test_pattern_escapes_keywords() {
        let pattern = IssuePattern::new(&keywords(&["bug+"])).unwrap();
        assert_eq!(pattern.issue_id("bug+ #5"), Some("5".into()));
        assert_eq!(pattern.issue_id("bugg #5"), None);
    }

    #[test]
    fn test_pattern_rejects_empty_keywords() {
        assert!(IssuePattern::new(&[]).is_err());
    }

    #[test]
    fn test_map_groups_commits_by_issue() {
        let pattern = IssuePattern::new(&keywords(&["fix"])).unwrap();
        let commits = vec![
            commit(1, "fix #2 first attempt"),
            commit(2, "unrelated"),
            commit(3, "Fix #2 for real"),
            commit(4, "fix #10"),
        ];
        let map = IssueCommitMap::from_commits(&commits, &pattern);

        assert_eq!(map.len(), 2);
        assert_eq!(map.commits("2"), &[commits[0].id, commits[2].id]);
        assert_eq!(map.commits("10"), &[commits[3].id]);
        assert!(map.commits("99").is_empty());

        let unlinked = IssueCommitMap::from_commits(&commits[1..2], &pattern);
        assert!(unlinked.is_empty());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Issue_Commit_Map.txt");

        let mut map = IssueCommitMap::default();
        map.insert("42", Oid::from_bytes(&[1; 20]).unwrap());
        map.insert("42", Oid::from_bytes(&[2; 20]).unwrap());
        map.insert("7", Oid::from_bytes(&[3; 20]).unwrap());
        map.save(&path).unwrap();

        let loaded = IssueCommitMap::load(&path).unwrap();
        assert_eq!(loaded, map);
    }

    #[test]
    fn test_load_skips_blank_lines_and_bad_ids() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("map.txt");
        let good = Oid::from_bytes(&[9; 20]).unwrap();
        fs::write(&path, format!("\n5 not-a-hash {good}\r\n\n")).unwrap();

        let loaded = IssueCommitMap::load(&path).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.commits("5"), &[good]);
    }
}
