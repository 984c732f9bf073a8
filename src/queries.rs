//! Natural-language queries derived from the commit messages of each issue.

use std::fs;
use std::path::Path;

use crate::diagnostics::Diagnostics;
use crate::error::Result;
use crate::repository::{IssueCommitMap, SourceRepository};

/// Write `<issue>_description_<i>.txt` for every linked commit into `dir`.
///
/// Each file holds the message summary on its first line followed by the
/// full message. Returns the number of files written.
pub fn write_queries<R: SourceRepository + ?Sized>(
    repo: &R,
    map: &IssueCommitMap,
    dir: &Path,
    diag: &mut Diagnostics,
) -> Result<usize> {
    fs::create_dir_all(dir)?;

    let mut written = 0;
    for (issue, commits) in map.iter() {
        for (i, &id) in commits.iter().enumerate() {
            let commit = match repo.commit(id) {
                Ok(commit) => commit,
                Err(err) => {
                    diag.warn(&err);
                    continue;
                }
            };
            let path = dir.join(format!("{issue}_description_{i}.txt"));
            fs::write(&path, format!("{}\n{}", commit.summary(), commit.message))?;
            written += 1;
        }
    }

    Ok(written)
}
