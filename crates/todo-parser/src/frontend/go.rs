//! Go front-end.
//!
//! Comment groups follow `go/ast`: comments separated only by whitespace with
//! at most one newline between them form a group, except that a comment
//! trailing code on its line only groups with comments on that same line.
//!
//! Each group is attached to a node the way `ast.NewCommentMap` does it:
//! 1. the previous sibling, when the group starts on the line it ends on;
//! 2. the previous sibling, when the group starts on the following line and a
//!    blank line separates the group from whatever comes next;
//! 3. otherwise the next sibling;
//! 4. otherwise the enclosing node, unless that is the whole file.

use std::ops::Range;

use ast_grep_core::Node;
use ast_grep_language::SupportLang;

use super::{CommentGroup, FrontEnd, ParsedSource, RawComment};
use crate::error::ParserError;
use crate::parser::{first_error_offset, parse_source};
use crate::source_map::LineIndex;

#[derive(Debug, Clone, Copy, Default)]
pub struct GoFrontEnd;

impl FrontEnd for GoFrontEnd {
    fn language(&self) -> &'static str {
        "go"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["go"]
    }

    fn parse(&self, source: &str) -> Result<ParsedSource, ParserError> {
        let tree = parse_source(source, SupportLang::Go);
        let root = tree.root();
        let index = LineIndex::new(source);

        if let Some(offset) = first_error_offset(&root) {
            return Err(ParserError::Parse {
                language: self.language().to_string(),
                line: index.position(offset).line,
                message: "syntax error".to_string(),
            });
        }

        let comments: Vec<_> = root.dfs().filter(is_comment).collect();
        let mut groups = Vec::new();
        for run in group_runs(source, &comments) {
            let members = &comments[run];
            let (Some(first), Some(last)) = (members.first(), members.last()) else {
                continue;
            };
            groups.push(CommentGroup {
                comments: members
                    .iter()
                    .map(|node| RawComment {
                        offset: node.range().start,
                        text: node.text().to_string(),
                    })
                    .collect(),
                node: attached_node(&index, first, last).map(|node| line_span(source, node.range())),
            });
        }

        tracing::trace!(
            comments = comments.len(),
            groups = groups.len(),
            "grouped go comments"
        );
        Ok(ParsedSource { groups })
    }
}

fn is_comment<D: ast_grep_core::Doc>(node: &Node<D>) -> bool {
    node.kind().as_ref() == "comment"
}

// ── Grouping ──────────────────────────────────────────────────────

/// Split comments (in source order) into index runs, one per group.
fn group_runs<D: ast_grep_core::Doc>(source: &str, comments: &[Node<D>]) -> Vec<Range<usize>> {
    let mut runs = Vec::new();
    let mut start = 0;
    for i in 1..comments.len() {
        let group_start = comments[start].range().start;
        let prev_end = comments[i - 1].range().end;
        let next_start = comments[i].range().start;
        if !continues_group(source, group_start, prev_end, next_start) {
            runs.push(start..i);
            start = i;
        }
    }
    if !comments.is_empty() {
        runs.push(start..comments.len());
    }
    runs
}

fn continues_group(source: &str, group_start: usize, prev_end: usize, next_start: usize) -> bool {
    let Some(gap) = source.get(prev_end..next_start) else {
        return false;
    };
    if !gap.chars().all(char::is_whitespace) {
        return false;
    }
    match gap.matches('\n').count() {
        0 => true,
        1 => !trails_code(source, group_start),
        _ => false,
    }
}

/// Whether non-whitespace precedes `offset` on its line.
fn trails_code(source: &str, offset: usize) -> bool {
    let line_start = source[..offset].rfind('\n').map_or(0, |i| i + 1);
    !source[line_start..offset].trim().is_empty()
}

// ── Attachment ────────────────────────────────────────────────────

fn attached_node<'r, D: ast_grep_core::Doc>(
    index: &LineIndex,
    first: &Node<'r, D>,
    last: &Node<'r, D>,
) -> Option<Node<'r, D>> {
    let (group_start, _) = index.lines_of(&first.range());
    let (_, group_end) = index.lines_of(&last.range());
    let next = next_code_sibling(last);

    if let Some(prev) = prev_code_sibling(first) {
        let (_, prev_end) = index.lines_of(&prev.range());
        let blank_after = next
            .as_ref()
            .is_none_or(|n| index.lines_of(&n.range()).0 > group_end + 1);
        if prev_end == group_start || (prev_end + 1 == group_start && blank_after) {
            return Some(prev);
        }
    }

    if next.is_some() {
        return next;
    }

    first
        .parent()
        .filter(|parent| parent.kind().as_ref() != "source_file")
}

fn prev_code_sibling<'r, D: ast_grep_core::Doc>(node: &Node<'r, D>) -> Option<Node<'r, D>> {
    let mut current = node.prev();
    while let Some(sibling) = current {
        if sibling.is_named() && !is_comment(&sibling) {
            return Some(sibling);
        }
        current = sibling.prev();
    }
    None
}

fn next_code_sibling<'r, D: ast_grep_core::Doc>(node: &Node<'r, D>) -> Option<Node<'r, D>> {
    let mut current = node.next();
    while let Some(sibling) = current {
        if sibling.is_named() && !is_comment(&sibling) {
            return Some(sibling);
        }
        current = sibling.next();
    }
    None
}

/// Widen `range` to the start of its line when only indentation precedes it.
fn line_span(source: &str, range: Range<usize>) -> Range<usize> {
    let line_start = source[..range.start].rfind('\n').map_or(0, |i| i + 1);
    if source[line_start..range.start].trim().is_empty() {
        line_start..range.end
    } else {
        range
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(source: &str) -> ParsedSource {
        GoFrontEnd.parse(source).expect("go source should parse")
    }

    fn texts(group: &CommentGroup) -> Vec<&str> {
        group.comments.iter().map(|c| c.text.as_str()).collect()
    }

    fn node_text<'a>(source: &'a str, group: &CommentGroup) -> &'a str {
        let span = group.node.clone().expect("group should have a node");
        &source[span]
    }

    #[test]
    fn adjacent_line_comments_form_one_group() {
        let source = "package p\n\n// a\n// b\nfunc F() {}\n";
        let parsed = parse(source);
        assert_eq!(parsed.groups.len(), 1);
        assert_eq!(texts(&parsed.groups[0]), vec!["// a", "// b"]);
        assert_eq!(node_text(source, &parsed.groups[0]), "func F() {}");
    }

    #[test]
    fn blank_line_splits_groups() {
        let source = "// a\n\n// b\npackage p\n";
        let parsed = parse(source);
        assert_eq!(parsed.groups.len(), 2);
        assert_eq!(texts(&parsed.groups[0]), vec!["// a"]);
        assert_eq!(texts(&parsed.groups[1]), vec!["// b"]);
        assert_eq!(node_text(source, &parsed.groups[1]), "package p");
    }

    #[test]
    fn trailing_comment_is_its_own_group() {
        let source = "package p\n\nfunc F() {\n\tx := 1 // a\n\t// b\n\t_ = x\n}\n";
        let parsed = parse(source);
        assert_eq!(parsed.groups.len(), 2);
        assert_eq!(texts(&parsed.groups[0]), vec!["// a"]);
        assert_eq!(texts(&parsed.groups[1]), vec!["// b"]);
        assert_eq!(node_text(source, &parsed.groups[0]).trim(), "x := 1");
    }

    #[test]
    fn block_comment_is_one_group() {
        let source = "package p\n\n/*\nTODO one\ntwo\n*/\nfunc F() {}\n";
        let parsed = parse(source);
        assert_eq!(parsed.groups.len(), 1);
        assert_eq!(parsed.groups[0].comments.len(), 1);
        assert!(parsed.groups[0].comments[0].text.starts_with("/*"));
        assert_eq!(node_text(source, &parsed.groups[0]), "func F() {}");
    }

    #[test]
    fn comment_offsets_point_at_the_slash() {
        let source = "package p\n\n// TODO x\nfunc F() {}\n";
        let parsed = parse(source);
        let offset = parsed.groups[0].comments[0].offset;
        assert_eq!(&source[offset..offset + 2], "//");
    }

    #[test]
    fn comment_after_last_declaration_has_no_node() {
        let source = "package p\n\nfunc F() {}\n\n// TODO later\n";
        let parsed = parse(source);
        assert_eq!(parsed.groups.len(), 1);
        assert_eq!(parsed.groups[0].node, None);
    }

    #[test]
    fn comment_directly_below_declaration_followed_by_blank_attaches_upward() {
        let source = "package p\n\nfunc F() {}\n// TODO about F\n\nfunc G() {}\n";
        let parsed = parse(source);
        assert_eq!(node_text(source, &parsed.groups[0]), "func F() {}");
    }

    #[test]
    fn indented_node_span_starts_at_line_start() {
        let source = "package p\n\nfunc F() {\n\t// TODO indent\n\treturn\n}\n";
        let parsed = parse(source);
        assert_eq!(node_text(source, &parsed.groups[0]), "\treturn");
    }

    #[test]
    fn syntax_error_is_reported_with_line() {
        let source = "package p\n\nfunc F() {\n\tx := := 1\n}\n";
        let err = GoFrontEnd.parse(source).expect_err("should fail");
        match err {
            ParserError::Parse { language, line, .. } => {
                assert_eq!(language, "go");
                assert!(line >= 3, "line {line}");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unclosed_body_at_end_of_file_is_a_parse_error() {
        let source = "package p\n\nfunc F() {\n\tx := 1\n// TODO x\n";
        let err = GoFrontEnd.parse(source).expect_err("unclosed body should fail");
        assert!(matches!(err, ParserError::Parse { .. }), "{err}");
    }

    #[test]
    fn file_without_comments_has_no_groups() {
        assert!(parse("package p\n\nfunc F() {}\n").groups.is_empty());
    }
}
