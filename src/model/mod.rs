mod commit;
mod declaration;
mod entities;
mod hunk;

pub use commit::{Commit, FileDiff};
pub use declaration::{DeclKind, Declaration, SyntaxTree};
pub use entities::{ChangedEntities, Goldset};
pub use hunk::DiffHunk;
