use tree_sitter::Parser;

use super::Dialect;
use super::lower::lower_block;
use crate::error::{GoldsetError, Result};
use crate::model::SyntaxTree;

/// Parser that tries each [`Dialect`] in turn and keeps the first that accepts
/// the source.
pub struct DualParser {
    parser: Parser,
}

impl DualParser {
    pub fn new() -> Result<Self> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_python::LANGUAGE.into())
            .map_err(|e| GoldsetError::tree_sitter(format!("Failed to set language: {e}")))?;
        Ok(Self { parser })
    }

    /// Parse `source` into a [`SyntaxTree`].
    ///
    /// `origin` identifies the source in the `ParseFailure` raised when no
    /// dialect accepts it.
    pub fn parse(&mut self, source: &str, origin: &str) -> Result<SyntaxTree> {
        let tree = self
            .parser
            .parse(source, None)
            .ok_or_else(|| GoldsetError::tree_sitter("parser returned no tree"))?;

        let mut reasons = Vec::new();
        for dialect in Dialect::FALLBACK_ORDER {
            match dialect.accept(&tree) {
                Ok(()) => {
                    if !reasons.is_empty() {
                        log::debug!("{origin} parsed as {} after: {}", dialect.as_str(), reasons.join("; "));
                    }
                    return Ok(SyntaxTree {
                        dialect,
                        declarations: lower_block(tree.root_node(), source.as_bytes()),
                        line_count: source.matches('\n').count(),
                    });
                }
                Err(reason) => reasons.push(reason),
            }
        }

        Err(GoldsetError::ParseFailure {
            origin: origin.to_string(),
            reasons,
        })
    }
}
