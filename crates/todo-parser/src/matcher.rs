//! Tag pattern matching and assignee extraction.
//!
//! The micro-syntax after a tag is fixed:
//!
//! ```text
//! TAG(assignee): text
//! TAG(assignee) text
//! TAG: text
//! TAGtext
//! ```

use crate::tokenizer::{CommentLine, TRIM_CHARS};

/// Result of a successful tag match on one comment line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagMatch<'l, 'p> {
    /// The configured pattern that matched.
    pub tag: &'p str,
    /// Lower-cased assignee, empty when none was written.
    pub assignee: String,
    /// Free text after the tag and assignee, one leading `:` removed. Untrimmed.
    pub remainder: &'l str,
}

/// Match `line` against `patterns` in priority order.
///
/// The first pattern that is a prefix of the normalized text wins; a pattern
/// appearing anywhere but offset 0 is not a match. Empty patterns never match.
#[must_use]
pub fn match_tag<'l, 'p>(line: &CommentLine<'l>, patterns: &'p [String]) -> Option<TagMatch<'l, 'p>> {
    let tag = patterns
        .iter()
        .find(|pattern| !pattern.is_empty() && line.text.starts_with(pattern.as_str()))?;

    // `text` is `raw` trimmed, so the untrimmed line also starts with the tag
    // once leading whitespace is skipped.
    let after = &line.raw.trim_start_matches(TRIM_CHARS)[tag.len()..];
    let (assignee, rest) = match split_assignee(after) {
        Some((assignee, rest)) => (assignee.to_lowercase(), rest),
        None => (String::new(), after),
    };

    Some(TagMatch {
        tag,
        assignee,
        remainder: rest.strip_prefix(':').unwrap_or(rest),
    })
}

/// Split `(<ident>)<rest>` into `ident` and `rest`. `ident` is any non-empty
/// run of characters other than `)`.
fn split_assignee(text: &str) -> Option<(&str, &str)> {
    let inner = text.strip_prefix('(')?;
    let close = inner.find(')')?;
    if close == 0 {
        return None;
    }
    Some((&inner[..close], &inner[close + 1..]))
}
