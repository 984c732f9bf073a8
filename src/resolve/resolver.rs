use git2::Oid;
use rustc_hash::FxHashSet;

use super::{infer_package, locate};
use crate::config::ResolverOptions;
use crate::diagnostics::Diagnostics;
use crate::error::{GoldsetError, Result};
use crate::model::{ChangedEntities, DeclKind, Declaration, DiffHunk};
use crate::repository::SourceRepository;
use crate::syntax::{Dialect, DualParser};
use crate::util::module_path;

/// Inclusive range of post-image lines believed to be actually changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineSpan {
    pub start: usize,
    pub end: usize,
}

impl LineSpan {
    /// Shrink `hunk` by `context` lines on each edge.
    ///
    /// The start is kept when the hunk begins at the first line, and the end
    /// when it reaches the last line (`line_count`) of the file. If trimming
    /// crosses the bounds over, they are swapped.
    pub fn trimmed(hunk: DiffHunk, line_count: usize, context: usize) -> Self {
        let end = hunk.end();
        let start = if hunk.start > 1 {
            hunk.start.saturating_add(context)
        } else {
            hunk.start
        };
        let end = if line_count != end {
            end.saturating_sub(context)
        } else {
            end
        };

        if start <= end {
            Self { start, end }
        } else {
            Self { start: end, end: start }
        }
    }
}

/// Unqualified names collected from one file
#[derive(Debug, Default)]
struct RawEntities {
    classes: FxHashSet<String>,
    methods: FxHashSet<String>,
}

impl RawEntities {
    fn qualify(self, module: &str) -> ChangedEntities {
        let prefix = |name: String| format!("{module}.{name}");
        ChangedEntities {
            classes: self.classes.into_iter().map(prefix).collect(),
            methods: self.methods.into_iter().map(prefix).collect(),
        }
    }
}

/// Maps the diff hunks of a changed file to the classes and methods they touch
pub struct EntityResolver<'r, R: SourceRepository + ?Sized> {
    repo: &'r R,
    parser: DualParser,
    options: ResolverOptions,
}

impl<'r, R: SourceRepository + ?Sized> EntityResolver<'r, R> {
    pub fn new(repo: &'r R, options: ResolverOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self {
            repo,
            parser: DualParser::new()?,
            options,
        })
    }

    pub fn options(&self) -> &ResolverOptions {
        &self.options
    }

    /// Qualified classes and methods of `file_path` touched by `hunk_headers` in `commit`.
    ///
    /// Never fails: a file that cannot be resolved yields an empty result and
    /// a warning in `diag`, and a malformed hunk only skips that hunk.
    pub fn resolve<H: AsRef<str>>(
        &mut self,
        commit: Oid,
        file_path: &str,
        hunk_headers: &[H],
        diag: &mut Diagnostics,
    ) -> ChangedEntities {
        match self.try_resolve(commit, file_path, hunk_headers, diag) {
            Ok(entities) => entities,
            Err(err) => {
                diag.warn(&err);
                ChangedEntities::default()
            }
        }
    }

    fn try_resolve<H: AsRef<str>>(
        &mut self,
        commit: Oid,
        file_path: &str,
        hunk_headers: &[H],
        diag: &mut Diagnostics,
    ) -> Result<ChangedEntities> {
        let no_package = || GoldsetError::NoPackageResolved {
            commit,
            path: file_path.to_string(),
        };
        let package = infer_package(
            self.repo,
            commit,
            file_path,
            &self.options.package_marker,
            self.options.package_search,
        )
        .ok_or_else(no_package)?;
        let module = module_path(file_path, &package.dir, &self.options.source_extension)
            .ok_or_else(no_package)?;

        log::debug!("{file_path}: package `{}` at {}", package.name, package.dir);

        let source = self.repo.file_content(commit, file_path)?;
        let tree = self.parser.parse(&source, &format!("{commit}:{file_path}"))?;
        if tree.dialect != Dialect::FALLBACK_ORDER[0] {
            diag.dialect_fallbacks += 1;
        }

        let mut raw = RawEntities::default();
        for header in hunk_headers {
            let header = header.as_ref();
            let Some(hunk) = DiffHunk::parse(header) else {
                diag.warn(&GoldsetError::MalformedHunk {
                    commit,
                    path: file_path.to_string(),
                    fragment: header.to_string(),
                });
                continue;
            };

            let span = LineSpan::trimmed(hunk, tree.line_count, self.options.context_lines);
            collect_span(&tree.declarations, span, &mut raw);
        }

        diag.files_resolved += 1;
        Ok(raw.qualify(&module))
    }
}

/// Declarations whose span overlaps `span`
fn covered(declarations: &[Declaration], span: LineSpan) -> &[Declaration] {
    // An end before the first declaration means only module preamble changed
    let Some(end) = locate(declarations, span.end) else {
        return &[];
    };
    let start = locate(declarations, span.start).unwrap_or(0);
    &declarations[start..=end]
}

fn collect_span(declarations: &[Declaration], span: LineSpan, raw: &mut RawEntities) {
    for decl in covered(declarations, span) {
        match &decl.kind {
            DeclKind::Function => {
                raw.methods.insert(decl.name.clone());
            }
            DeclKind::Class { body } => {
                raw.classes.insert(decl.name.clone());
                for member in covered(body, span) {
                    if member.kind == DeclKind::Function {
                        raw.methods.insert(format!("{}.{}", decl.name, member.name));
                    }
                }
            }
            DeclKind::Other => {}
        }
    }
}
