//! Go source parsing.
//!
//! Source text is parsed with the tree-sitter Go grammar and the resulting
//! syntax tree is lowered to the [`SourceFile`] model. Only the parts the
//! type generator consumes are kept: the package name and top-level type
//! declarations with their documentation.

mod docs;
mod lower;


use arborium_tree_sitter as tree_sitter;
use tree_sitter::{Language, Node, Parser, Tree};

use gotots_core::SourceFile;

use crate::{Error, Result};

pub use docs::comment_text;

/// Parse Go source into the declaration model.
///
/// Any syntax error is fatal; the position of the first one is reported.
pub fn parse(source: &str) -> Result<SourceFile> {
    let tree = parse_tree(source)?;
    let root = tree.root_node();

    if let Some(node) = first_error(root) {
        let pos = node.start_position();
        return Err(Error::Syntax {
            line: pos.row + 1,
            column: pos.column + 1,
        });
    }

    lower::Lowerer::new(source).lower_file(root)
}

/// Parse Go source into a raw tree-sitter tree.
pub fn parse_tree(source: &str) -> Result<Tree> {
    let language: Language = arborium_go::language().into();
    let mut parser = Parser::new();
    parser
        .set_language(&language)
        .map_err(|e| Error::Language(e.to_string()))?;
    parser
        .parse(source, None)
        .ok_or_else(|| Error::Language("parser returned no tree".to_owned()))
}

/// First `ERROR` or missing node in document order.
fn first_error(node: Node<'_>) -> Option<Node<'_>> {
    if !node.has_error() {
        return None;
    }
    if node.is_error() || node.is_missing() {
        return Some(node);
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if let Some(found) = first_error(child) {
            return Some(found);
        }
    }
    Some(node)
}
