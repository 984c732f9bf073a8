//! Per-version run: issue map, queries and goldsets.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::config::{Config, VersionRange};
use crate::diagnostics::Diagnostics;
use crate::goldset::{GoldsetAggregator, GoldsetStore};
use crate::progress::{IndicatifProgress, NoopProgress, ProgressReporter};
use crate::queries::write_queries;
use crate::repository::{GitRepository, IssueCommitMap, IssuePattern};

/// File name of the persisted issue → commit map
pub const ISSUE_MAP_FILE: &str = "Issue_Commit_Map.txt";

/// Output directories of one version window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionLayout {
    pub root: PathBuf,
    pub data_dir: PathBuf,
    pub query_dir: PathBuf,
    pub goldset_dir: PathBuf,
}

impl VersionLayout {
    pub fn new(output_dir: &Path, range: &VersionRange) -> Self {
        let root = output_dir.join(range.label());
        Self {
            data_dir: root.join("data"),
            query_dir: root.join("queries"),
            goldset_dir: root.join("goldsets"),
            root,
        }
    }

    pub fn create(&self) -> std::io::Result<()> {
        for dir in [&self.data_dir, &self.query_dir, &self.goldset_dir] {
            fs::create_dir_all(dir)?;
        }
        Ok(())
    }

    pub fn issue_map_path(&self) -> PathBuf {
        self.data_dir.join(ISSUE_MAP_FILE)
    }
}

/// Outcome of one version window
#[derive(Debug, Clone, Serialize)]
pub struct VersionReport {
    pub label: String,
    pub from: String,
    pub to: String,
    pub commits: usize,
    pub issues: usize,
    pub queries_written: usize,
    pub goldsets_written: usize,
    pub diagnostics: Diagnostics,
}

/// Mines every configured version window of one repository
pub struct Pipeline {
    repo: GitRepository,
    config: Config,
    pattern: IssuePattern,
    progress: Box<dyn ProgressReporter>,
}

impl Pipeline {
    pub fn new(config: Config) -> Result<Self> {
        config.validate().context("Invalid configuration")?;
        let repo = GitRepository::open(&config.repo_path).with_context(|| {
            format!("Failed to open git repository at {}", config.repo_path.display())
        })?;
        let pattern = IssuePattern::new(&config.issue_keywords)?;

        Ok(Self {
            repo,
            config,
            pattern,
            progress: Box::new(IndicatifProgress),
        })
    }

    /// Disable progress bars
    pub fn quiet(mut self) -> Self {
        self.progress = Box::new(NoopProgress);
        self
    }

    /// Process all version windows in order
    pub fn run(&self) -> Result<Vec<VersionReport>> {
        self.config
            .versions
            .iter()
            .map(|range| self.run_version(range))
            .collect()
    }

    pub fn run_version(&self, range: &VersionRange) -> Result<VersionReport> {
        let start = Instant::now();
        let label = range.label();
        let layout = VersionLayout::new(&self.config.output_dir, range);
        layout
            .create()
            .with_context(|| format!("Failed to create {}", layout.root.display()))?;

        log::info!(
            "[{label}] Collecting commits {}...{} in {}",
            range.from,
            range.to,
            self.repo.path().display()
        );
        let commits = self
            .repo
            .commit_range(&range.from, &range.to)
            .with_context(|| format!("Failed to walk {}...{}", range.from, range.to))?;

        let map = IssueCommitMap::from_commits(&commits, &self.pattern);
        map.save(&layout.issue_map_path())
            .context("Failed to write issue map")?;
        log::info!(
            "[{label}] {} commits, {} linked to {} issues",
            commits.len(),
            map.iter().map(|(_, c)| c.len()).sum::<usize>(),
            map.len()
        );

        let map = IssueCommitMap::load(&layout.issue_map_path())
            .context("Failed to read issue map")?;
        if map.is_empty() {
            log::warn!("[{label}] No commit references an issue");
        }

        let mut diagnostics = Diagnostics::new();
        let queries_written = write_queries(&self.repo, &map, &layout.query_dir, &mut diagnostics)
            .context("Failed to write queries")?;

        let store = GoldsetStore::open(&layout.goldset_dir)?;
        let mut aggregator = GoldsetAggregator::new(&self.repo, self.config.resolver.clone())?;
        let pb = self.progress.start("Goldsets", map.len() as u64);
        let mut goldsets_written = 0;
        for (issue, commits) in map.iter() {
            pb.set_item(issue);
            let goldset = aggregator.aggregate(issue, commits, &mut diagnostics);
            if !goldset.entities.is_empty() {
                store
                    .persist(&goldset)
                    .with_context(|| format!("Failed to write goldset for issue {issue}"))?;
                goldsets_written += 1;
            }
            pb.inc(1);
        }
        pb.finish();

        log::info!(
            "[{label}] {goldsets_written} goldsets, {} warnings in {:?}",
            diagnostics.warnings(),
            start.elapsed()
        );

        Ok(VersionReport {
            label,
            from: range.from.clone(),
            to: range.to.clone(),
            commits: commits.len(),
            issues: map.len(),
            queries_written,
            goldsets_written,
            diagnostics,
        })
    }
}
