use rustc_hash::FxHashSet;
use std::collections::BTreeSet;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::model::Goldset;

/// Names newly written for one issue
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PersistOutcome {
    pub classes: usize,
    pub methods: usize,
}

/// Line-delimited goldset files, one per issue under `class/` and `method/`
#[derive(Debug, Clone)]
pub struct GoldsetStore {
    class_dir: PathBuf,
    method_dir: PathBuf,
}

impl GoldsetStore {
    /// Open a store rooted at `root`, creating its directories
    pub fn open(root: &Path) -> Result<Self> {
        let store = Self {
            class_dir: root.join("class"),
            method_dir: root.join("method"),
        };
        fs::create_dir_all(&store.class_dir)?;
        fs::create_dir_all(&store.method_dir)?;
        Ok(store)
    }

    pub fn class_path(&self, issue_id: &str) -> PathBuf {
        self.class_dir.join(format!("{issue_id}.txt"))
    }

    pub fn method_path(&self, issue_id: &str) -> PathBuf {
        self.method_dir.join(format!("{issue_id}.txt"))
    }

    /// Append names not yet recorded for the issue.
    ///
    /// An empty set writes no file.
    pub fn persist(&self, goldset: &Goldset) -> Result<PersistOutcome> {
        Ok(PersistOutcome {
            classes: append_new(&self.class_path(&goldset.issue_id), goldset.classes())?,
            methods: append_new(&self.method_path(&goldset.issue_id), goldset.methods())?,
        })
    }

    /// Read back the goldset recorded for `issue_id`
    pub fn load(&self, issue_id: &str) -> Result<Goldset> {
        let mut goldset = Goldset::new(issue_id);
        goldset.entities.classes = read_names(&self.class_path(issue_id))?.into_iter().collect();
        goldset.entities.methods = read_names(&self.method_path(issue_id))?.into_iter().collect();
        Ok(goldset)
    }
}

fn read_names(path: &Path) -> io::Result<FxHashSet<String>> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(FxHashSet::default()),
        Err(e) => Err(e),
    }
}

fn append_new(path: &Path, names: &BTreeSet<String>) -> Result<usize> {
    if names.is_empty() {
        return Ok(0);
    }

    let existing = read_names(path)?;
    let fresh: Vec<&String> = names.iter().filter(|n| !existing.contains(*n)).collect();
    if fresh.is_empty() {
        return Ok(0);
    }

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut out = String::new();
    for name in &fresh {
        out.push_str(name);
        out.push('\n');
    }
    file.write_all(out.as_bytes())?;
    Ok(fresh.len())
}
