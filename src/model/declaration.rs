use crate::syntax::Dialect;

/// Kind of a declaration node, normalized across grammar dialects
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclKind {
    Function,
    /// A class with its body declarations in source order
    Class { body: Vec<Declaration> },
    Other,
}

/// A statement-level node with the line it starts on (1-based)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub kind: DeclKind,
    pub name: String,
    pub line: usize,
}

impl Declaration {
    pub fn function(name: &str, line: usize) -> Self {
        Self {
            kind: DeclKind::Function,
            name: name.to_string(),
            line,
        }
    }

    pub fn class(name: &str, line: usize, body: Vec<Declaration>) -> Self {
        Self {
            kind: DeclKind::Class { body },
            name: name.to_string(),
            line,
        }
    }

    pub fn other(kind: &str, line: usize) -> Self {
        Self {
            kind: DeclKind::Other,
            name: kind.to_string(),
            line,
        }
    }

    /// Nested declarations, empty for anything but a class
    pub fn body(&self) -> &[Declaration] {
        match &self.kind {
            DeclKind::Class { body } => body,
            DeclKind::Function | DeclKind::Other => &[],
        }
    }
}

/// Top-level declarations of one parsed source file.
///
/// Declarations at every nesting level are kept in ascending line order,
/// which is what [`crate::resolve::locate`] relies on.
#[derive(Debug, Clone)]
pub struct SyntaxTree {
    pub dialect: Dialect,
    pub declarations: Vec<Declaration>,
    /// Number of `\n` characters in the source
    pub line_count: usize,
}
