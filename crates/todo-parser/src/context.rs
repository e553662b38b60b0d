//! Context snippet rendering.

use std::ops::Range;

/// Render the source of the node a comment group is attached to.
///
/// The group's own bytes (`excluded`) are cut out of the node text first, so a
/// comment trailing a statement never shows up in its own context. The rest
/// is split into lines and passed through [`strip_comments`]. A group without
/// a node has no context.
#[must_use]
pub fn render_context(source: &str, node: Option<Range<usize>>, excluded: &[Range<usize>]) -> Vec<String> {
    let Some(node) = node else {
        return Vec::new();
    };
    let Some(text) = excise(source, &node, excluded) else {
        return Vec::new();
    };
    strip_comments(text.split('\n').map(|line| line.trim_end_matches('\r')))
}

/// Copy `node` out of `source`, skipping every byte covered by `excluded`.
/// Whitespace left dangling before a cut on the same line is dropped too.
fn excise(source: &str, node: &Range<usize>, excluded: &[Range<usize>]) -> Option<String> {
    let mut cuts: Vec<Range<usize>> = excluded
        .iter()
        .filter(|span| span.start < node.end && span.end > node.start)
        .map(|span| span.start.max(node.start)..span.end.min(node.end))
        .collect();
    cuts.sort_by_key(|span| span.start);

    let mut out = String::with_capacity(node.len());
    let mut cursor = node.start;
    for cut in cuts {
        if cut.start > cursor {
            out.push_str(source.get(cursor..cut.start)?);
            let kept = out.trim_end_matches([' ', '\t']).len();
            out.truncate(kept);
        }
        cursor = cursor.max(cut.end);
    }
    if cursor < node.end {
        out.push_str(source.get(cursor..node.end)?);
    }
    Some(out)
}

/// Drop comment-only content from `lines`.
///
/// Block comments are tracked across lines: the opening line is cut at `/*`,
/// lines inside the block are dropped, and whatever follows `*/` on the
/// closing line is kept. A `/* ... */` closed on its own line is removed in
/// place. A `/*` that sits after `//` is part of a line comment and ignored.
/// Blank lines and lines holding only a line comment are dropped.
pub fn strip_comments<'a>(lines: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut result = Vec::new();
    let mut in_block = false;

    for line in lines {
        let mut kept = String::new();
        let mut rest = line;
        loop {
            if in_block {
                match rest.find("*/") {
                    Some(end) => {
                        rest = &rest[end + 2..];
                        in_block = false;
                    }
                    None => break,
                }
            } else {
                let opener = rest.find("/*");
                let line_comment = rest.find("//");
                match (opener, line_comment) {
                    (Some(start), Some(slash)) if slash < start => {
                        kept.push_str(rest);
                        break;
                    }
                    (Some(start), _) => {
                        kept.push_str(&rest[..start]);
                        rest = &rest[start + 2..];
                        in_block = true;
                    }
                    (None, _) => {
                        kept.push_str(rest);
                        break;
                    }
                }
            }
        }

        let trimmed = kept.trim();
        if trimmed.is_empty() || trimmed.starts_with("//") {
            continue;
        }
        result.push(kept);
    }
    result
}
