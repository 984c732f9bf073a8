use tree_sitter::Node;

use crate::model::Declaration;

/// Lower the statements of a `module` or `block` node into declarations.
///
/// Comments are dropped; they are not statements.
pub(crate) fn lower_block(block: Node<'_>, source: &[u8]) -> Vec<Declaration> {
    let mut cursor = block.walk();
    block
        .named_children(&mut cursor)
        .filter(|child| child.kind() != "comment")
        .map(|child| lower_statement(child, source))
        .collect()
}

fn lower_statement(node: Node<'_>, source: &[u8]) -> Declaration {
    let line = node.start_position().row + 1;

    match node.kind() {
        "function_definition" => Declaration::function(&name_of(node, source), line),
        "class_definition" => {
            let body = node
                .child_by_field_name("body")
                .map(|block| lower_block(block, source))
                .unwrap_or_default();
            Declaration::class(&name_of(node, source), line, body)
        }
        // Decorated definitions start at their first decorator
        "decorated_definition" => match node.child_by_field_name("definition") {
            Some(definition) => Declaration {
                line,
                ..lower_statement(definition, source)
            },
            None => Declaration::other(node.kind(), line),
        },
        kind => Declaration::other(kind, line),
    }
}

fn name_of(node: Node<'_>, source: &[u8]) -> String {
    node.child_by_field_name("name")
        .and_then(|n| n.utf8_text(source).ok())
        .unwrap_or(node.kind())
        .to_string()
}
