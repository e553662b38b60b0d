//! Comment group to normalized line records.

use crate::frontend::CommentGroup;

/// Characters trimmed from both ends of a comment line.
pub(crate) const TRIM_CHARS: &[char] = &[' ', '\t', '\r'];

/// One physical line of a comment group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentLine<'a> {
    /// Byte offset of the physical line start (the comment opener on the
    /// first line of a token).
    pub offset: usize,
    /// Line with comment delimiters stripped, whitespace untouched.
    pub raw: &'a str,
    /// `raw` trimmed of spaces, tabs and carriage returns.
    pub text: &'a str,
}

/// Split every comment token of `group` into its physical lines.
///
/// A leading `//` or `/*` and a trailing `*/` are stripped per line. Offsets
/// advance over each line and its newline so positions stay exact inside
/// multi-line block comments.
#[must_use]
pub fn tokenize(group: &CommentGroup) -> Vec<CommentLine<'_>> {
    let mut lines = Vec::new();
    for comment in &group.comments {
        let mut offset = comment.offset;
        for physical in comment.text.split('\n') {
            let body = physical
                .strip_prefix("//")
                .or_else(|| physical.strip_prefix("/*"))
                .unwrap_or(physical);
            let body = body.strip_suffix("*/").unwrap_or(body);
            lines.push(CommentLine {
                offset,
                raw: body,
                text: body.trim_matches(TRIM_CHARS),
            });
            offset += physical.len() + 1;
        }
    }
    lines
}
