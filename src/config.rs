use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{GoldsetError, Result};
use crate::resolve::PackageSearch;

/// Top-level run configuration, usually loaded from a TOML file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Git repository to mine
    pub repo_path: PathBuf,

    /// Root directory for per-version output
    pub output_dir: PathBuf,

    /// Append log output to this file instead of stderr
    pub log_file: Option<PathBuf>,

    /// Words that, followed by ` #<number>`, link a commit to an issue
    pub issue_keywords: Vec<String>,

    /// Version windows to process, in order
    pub versions: Vec<VersionRange>,

    pub resolver: ResolverOptions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            repo_path: PathBuf::from("."),
            output_dir: PathBuf::from("goldsets"),
            log_file: None,
            issue_keywords: [
                "fix", "fixes", "fixed", "close", "closes", "closed", "resolve", "resolves",
                "resolved",
            ]
            .iter()
            .map(|k| k.to_string())
            .collect(),
            versions: Vec::new(),
            resolver: ResolverOptions::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file; missing fields take defaults
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| GoldsetError::invalid_config(e.to_string()))
    }

    pub fn validate(&self) -> Result<()> {
        if self.versions.is_empty() {
            return Err(GoldsetError::invalid_config("no version ranges configured"));
        }
        if self.issue_keywords.is_empty() {
            return Err(GoldsetError::invalid_config("issue_keywords must not be empty"));
        }
        self.resolver.validate()
    }
}

/// Knobs of the changed-entity resolver
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverOptions {
    /// Unchanged context lines around each hunk; trimmed from hunk edges and
    /// requested from the diff producer
    pub context_lines: usize,

    /// File whose presence marks a package directory
    pub package_marker: String,

    /// Only files with this suffix are resolved
    pub source_extension: String,

    pub package_search: PackageSearch,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            context_lines: 3,
            package_marker: "__init__.py".to_string(),
            source_extension: ".py".to_string(),
            package_search: PackageSearch::default(),
        }
    }
}

impl ResolverOptions {
    pub fn validate(&self) -> Result<()> {
        if self.package_marker.is_empty() || self.package_marker.contains('/') {
            return Err(GoldsetError::invalid_config(
                "package_marker must be a plain file name",
            ));
        }
        if self.source_extension.is_empty() {
            return Err(GoldsetError::invalid_config("source_extension must not be empty"));
        }
        Ok(())
    }
}

/// A window of history between two revisions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionRange {
    pub from: String,
    pub to: String,
    /// Output directory name; derived from `from` and `to` when absent
    #[serde(default)]
    pub name: Option<String>,
}

impl VersionRange {
    pub fn new(from: &str, to: &str) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            name: None,
        }
    }

    pub fn label(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("{}_{}", self.from, self.to).replace(['/', '\\', ':'], "-"),
        }
    }
}

impl FromStr for VersionRange {
    type Err = String;

    /// Parse `FROM..TO` or `FROM...TO`
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (from, to) = s
            .split_once("...")
            .or_else(|| s.split_once(".."))
            .ok_or_else(|| format!("expected FROM..TO, got {s:?}"))?;
        if from.is_empty() || to.is_empty() {
            return Err(format!("expected FROM..TO, got {s:?}"));
        }
        Ok(Self::new(from, to))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.resolver.context_lines, 3);
        assert_eq!(config.resolver.package_marker, "__init__.py");
        assert_eq!(config.resolver.package_search, PackageSearch::Innermost);
        assert!(config.issue_keywords.contains(&"fixes".to_string()));
    }

    #[test]
    fn test_from_toml_partial() {
        let config = Config::from_toml(
            r#"
repo_path = "/srv/project"
issue_keywords = ["fix"]

[[versions]]
from = "v1.0"
to = "v1.1"

[[versions]]
from = "v1.1"
to = "main"
name = "next"

[resolver]
context_lines = 5
package_search = "outermost"
"#,
        )
        .unwrap();

        assert_eq!(config.repo_path, PathBuf::from("/srv/project"));
        assert_eq!(config.output_dir, PathBuf::from("goldsets"));
        assert_eq!(config.issue_keywords, vec!["fix".to_string()]);
        assert_eq!(config.versions.len(), 2);
        assert_eq!(config.versions[0].label(), "v1.0_v1.1");
        assert_eq!(config.versions[1].label(), "next");
        assert_eq!(config.resolver.context_lines, 5);
        assert_eq!(config.resolver.package_marker, "__init__.py");
        assert_eq!(config.resolver.package_search, PackageSearch::Outermost);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_toml_rejects_unknown_search() {
        let err = Config::from_toml("[resolver]\npackage_search = \"deepest\"\n").unwrap_err();
        assert!(matches!(err, GoldsetError::InvalidConfig(_)));
    }

    #[test]
    fn test_validate() {
        let mut config = Config::default();
        assert!(config.validate().is_err());

        config.versions.push(VersionRange::new("a", "b"));
        assert!(config.validate().is_ok());

        config.resolver.package_marker = "pkg/__init__.py".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_version_range_from_str() {
        assert_eq!("v1..v2".parse::<VersionRange>().unwrap(), VersionRange::new("v1", "v2"));
        assert_eq!(
            "release/1.0...main".parse::<VersionRange>().unwrap(),
            VersionRange::new("release/1.0", "main")
        );
        assert!("v1".parse::<VersionRange>().is_err());
        assert!("..v2".parse::<VersionRange>().is_err());
    }

    #[test]
    fn test_label_sanitizes_separators() {
        assert_eq!(VersionRange::new("release/1.0", "main").label(), "release-1.0_main");
    }
}
