use git2::Oid;

use crate::config::ResolverOptions;
use crate::diagnostics::Diagnostics;
use crate::error::{GoldsetError, Result};
use crate::model::Goldset;
use crate::repository::SourceRepository;
use crate::resolve::EntityResolver;

/// Unions the entities changed by every commit linked to an issue
pub struct GoldsetAggregator<'r, R: SourceRepository + ?Sized> {
    repo: &'r R,
    resolver: EntityResolver<'r, R>,
}

impl<'r, R: SourceRepository + ?Sized> GoldsetAggregator<'r, R> {
    pub fn new(repo: &'r R, options: ResolverOptions) -> Result<Self> {
        Ok(Self {
            repo,
            resolver: EntityResolver::new(repo, options)?,
        })
    }

    /// Build the goldset of `issue_id` from its linked `commits`.
    ///
    /// A commit that cannot be diffed is skipped with a warning in `diag`.
    pub fn aggregate(&mut self, issue_id: &str, commits: &[Oid], diag: &mut Diagnostics) -> Goldset {
        let mut goldset = Goldset::new(issue_id);
        for &commit in commits {
            if let Err(err) = self.add_commit(&mut goldset, commit, diag) {
                diag.warn(&err);
            }
        }
        goldset
    }

    fn add_commit(&mut self, goldset: &mut Goldset, id: Oid, diag: &mut Diagnostics) -> Result<()> {
        let commit = self.repo.commit(id)?;
        let parent = commit
            .diff_parent()
            .ok_or(GoldsetError::RootlessCommit { commit: id })?;

        let options = self.resolver.options();
        let files = self.repo.changed_files(
            parent,
            id,
            &options.source_extension,
            options.context_lines,
        )?;

        for file in files {
            let entities = self.resolver.resolve(id, &file.path, &file.hunk_headers, diag);
            goldset.entities.merge(entities);
        }
        Ok(())
    }
}
