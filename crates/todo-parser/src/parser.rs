//! ast-grep wrapper used by the front-ends.

use ast_grep_core::Node;
use ast_grep_core::tree_sitter::StrDoc;
use ast_grep_language::SupportLang;

/// The concrete AST tree type returned by `parse_source`.
pub type AstTree = ast_grep_core::AstGrep<StrDoc<SupportLang>>;

/// Parse source code into an ast-grep tree for the given language.
#[must_use]
pub fn parse_source(source: &str, lang: SupportLang) -> AstTree {
    use ast_grep_language::LanguageExt;
    lang.ast_grep(source)
}

/// Byte offset of the first `ERROR` or `MISSING` node in the tree, if any.
///
/// tree-sitter always produces a tree; a file only counts as unparseable
/// when error recovery had to kick in. Recovery either wraps bad input in an
/// `ERROR` node or inserts a zero-width `MISSING` token (an unclosed brace at
/// the end of the file, for instance).
pub fn first_error_offset<D: ast_grep_core::Doc>(root: &Node<D>) -> Option<usize> {
    root.dfs()
        .find(|node| node.kind().as_ref() == "ERROR" || node.is_missing())
        .map(|node| node.range().start)
}
