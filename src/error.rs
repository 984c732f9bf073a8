use git2::Oid;
use thiserror::Error;

/// Result type for goldset operations
pub type Result<T> = std::result::Result<T, GoldsetError>;

/// Errors raised while mining changed entities
#[derive(Error, Debug)]
pub enum GoldsetError {
    /// Every grammar dialect rejected the source text
    #[error("Failed to parse {origin}: {}", .reasons.join("; "))]
    ParseFailure { origin: String, reasons: Vec<String> },

    /// The requested path does not exist at the given revision
    #[error("{path} does not exist at {commit}")]
    ContentNotFound { commit: Oid, path: String },

    /// A hunk header did not parse into `(start, count)`
    #[error("Malformed hunk header in {path} at {commit}: {fragment:?}")]
    MalformedHunk {
        commit: Oid,
        path: String,
        fragment: String,
    },

    /// No ancestor directory of the file carries a package marker
    #[error("No package marker above {path} at {commit}")]
    NoPackageResolved { commit: Oid, path: String },

    /// The commit has no parent to diff against
    #[error("Commit {commit} has no parent commit")]
    RootlessCommit { commit: Oid },

    /// Git error occurred
    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Tree-sitter error
    #[error("Tree-sitter error: {0}")]
    TreeSitter(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl GoldsetError {
    /// Create a tree-sitter error
    pub fn tree_sitter(msg: impl Into<String>) -> Self {
        Self::TreeSitter(msg.into())
    }

    /// Create an invalid config error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Whether the error only invalidates the current hunk, file or commit.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::ParseFailure { .. }
                | Self::ContentNotFound { .. }
                | Self::MalformedHunk { .. }
                | Self::NoPackageResolved { .. }
                | Self::RootlessCommit { .. }
        )
    }
}
