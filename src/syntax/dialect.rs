use serde::Serialize;
use tree_sitter::{Node, Tree};

/// Node kinds only Python 3 can produce
const PY3_ONLY_KINDS: &[&str] = &[
    "async",
    "await",
    "nonlocal_statement",
    "typed_parameter",
    "typed_default_parameter",
    "type",
    "keyword_separator",
    "positional_separator",
    "named_expression",
    "interpolation",
    "match_statement",
    "type_alias_statement",
];

/// Node kinds only Python 2 can produce
const PY2_ONLY_KINDS: &[&str] = &["print_statement", "exec_statement"];

/// Source-language grammar dialect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// Python 2.7
    Legacy,
    /// Python 3
    Modern,
}

impl Dialect {
    /// Order in which dialects are attempted
    pub const FALLBACK_ORDER: [Dialect; 2] = [Dialect::Legacy, Dialect::Modern];

    pub fn as_str(&self) -> &'static str {
        match self {
            Dialect::Legacy => "python2",
            Dialect::Modern => "python3",
        }
    }

    fn foreign_kinds(&self) -> &'static [&'static str] {
        match self {
            Dialect::Legacy => PY3_ONLY_KINDS,
            Dialect::Modern => PY2_ONLY_KINDS,
        }
    }

    /// Check that `tree` is valid under this dialect.
    ///
    /// Returns the rejection reason otherwise.
    pub(crate) fn accept(&self, tree: &Tree) -> Result<(), String> {
        let root = tree.root_node();
        if root.has_error() {
            let (line, col) = first_error(root)
                .map(|n| (n.start_position().row + 1, n.start_position().column + 1))
                .unwrap_or((0, 0));
            return Err(format!("{}: syntax error at {}:{}", self.as_str(), line, col));
        }

        if let Some(node) = find_kind(root, self.foreign_kinds()) {
            return Err(format!(
                "{}: unsupported `{}` at line {}",
                self.as_str(),
                node.kind(),
                node.start_position().row + 1
            ));
        }

        Ok(())
    }
}

/// Depth-first search for the first node whose kind is in `kinds`
fn find_kind<'t>(root: Node<'t>, kinds: &[&str]) -> Option<Node<'t>> {
    let mut cursor = root.walk();
    loop {
        let node = cursor.node();
        if kinds.contains(&node.kind()) {
            return Some(node);
        }
        if cursor.goto_first_child() {
            continue;
        }
        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return None;
            }
        }
    }
}

fn first_error(root: Node<'_>) -> Option<Node<'_>> {
    let mut cursor = root.walk();
    loop {
        let node = cursor.node();
        if node.is_error() || node.is_missing() {
            return Some(node);
        }
        if node.has_error() && cursor.goto_first_child() {
            continue;
        }
        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return None;
            }
        }
    }
}
