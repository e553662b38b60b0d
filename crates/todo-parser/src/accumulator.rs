//! Entry accumulator: the state machine that turns comment lines into entries.
//!
//! ```text
//!            tag line                    tag line (flush, reopen)
//!   Idle ─────────────────> Open(entry) ──────────┐
//!    ^                        │   ^               │
//!    │ group boundary / finish│   └───────────────┘
//!    └────────── (flush) ─────┘   plain line: append to entry.text
//! ```
//!
//! Plain lines seen while `Idle` belong to no entry and are dropped. An entry
//! never survives a group boundary.

use todo_core::CommentEntry;

use crate::matcher::match_tag;
use crate::source_map::Position;
use crate::tokenizer::CommentLine;

#[derive(Debug)]
enum State {
    Idle,
    Open(CommentEntry),
}

/// Accumulates the entries of one file. One instance per file; lines must be
/// fed in source order.
#[derive(Debug)]
pub struct EntryAccumulator<'p> {
    filename: String,
    patterns: &'p [String],
    state: State,
    group_context: Vec<String>,
    entries: Vec<CommentEntry>,
}

impl<'p> EntryAccumulator<'p> {
    #[must_use]
    pub fn new(filename: impl Into<String>, patterns: &'p [String]) -> Self {
        Self {
            filename: filename.into(),
            patterns,
            state: State::Idle,
            group_context: Vec::new(),
            entries: Vec::new(),
        }
    }

    /// Start a new comment group. Flushes any open entry; `context` is
    /// attached to every entry opened until the next group.
    pub fn begin_group(&mut self, context: Vec<String>) {
        self.flush();
        self.group_context = context;
    }

    /// Feed the next line of the current group.
    pub fn push_line(&mut self, line: &CommentLine<'_>, position: Position) {
        if let Some(tag) = match_tag(line, self.patterns) {
            self.flush();
            self.state = State::Open(CommentEntry {
                filename: self.filename.clone(),
                line: position.line,
                column: position.column,
                tag: tag.tag.to_string(),
                assignee: tag.assignee,
                text: vec![tag.remainder.trim().to_string()],
                context: self.group_context.clone(),
            });
        } else if let State::Open(entry) = &mut self.state {
            entry.text.push(line.text.trim().to_string());
        }
    }

    /// Flush the open entry (end of file) and return every entry in order.
    #[must_use]
    pub fn finish(mut self) -> Vec<CommentEntry> {
        self.flush();
        self.entries
    }

    fn flush(&mut self) {
        if let State::Open(entry) = std::mem::replace(&mut self.state, State::Idle) {
            self.entries.push(entry);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::TRIM_CHARS;
    use pretty_assertions::assert_eq;

    fn patterns() -> Vec<String> {
        vec!["FIXME".to_string(), "TODO".to_string(), "NOTE".to_string()]
    }

    fn line(raw: &str) -> CommentLine<'_> {
        CommentLine {
            offset: 0,
            raw,
            text: raw.trim_matches(TRIM_CHARS),
        }
    }

    const fn at(line: u32) -> Position {
        Position { line, column: 1 }
    }

    /// Feed `groups` (each a list of raw comment lines) through one accumulator.
    fn run(groups: &[&[&str]]) -> Vec<CommentEntry> {
        let patterns = patterns();
        let mut acc = EntryAccumulator::new("main.go", &patterns);
        let mut line_no = 1;
        for group in groups {
            acc.begin_group(Vec::new());
            for raw in *group {
                acc.push_line(&line(raw), at(line_no));
                line_no += 1;
            }
        }
        acc.finish()
    }

    fn texts(entry: &CommentEntry) -> Vec<&str> {
        entry.text.iter().map(String::as_str).collect()
    }

    #[test]
    fn consecutive_tags_split_into_two_entries() {
        let entries = run(&[&[" TODO: first", " FIXME: second"]]);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].tag, "TODO");
        assert_eq!(texts(&entries[0]), vec!["first"]);
        assert_eq!(entries[1].tag, "FIXME");
        assert_eq!(texts(&entries[1]), vec!["second"]);
        assert_eq!((entries[0].line, entries[1].line), (1, 2));
    }

    #[test]
    fn continuation_lines_are_appended_in_order() {
        let entries = run(&[&[" TODO: wrap", " line two", " line three", "   line four  "]]);
        assert_eq!(entries.len(), 1);
        assert_eq!(
            texts(&entries[0]),
            vec!["wrap", "line two", "line three", "line four"]
        );
    }

    #[test]
    fn assignee_is_taken_from_opening_line_only() {
        let entries = run(&[&[" TODO(Alice): fix this", " TODO(bob) is not a new owner"]]);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].assignee, "alice");
        assert_eq!(texts(&entries[0]), vec!["fix this"]);
        assert_eq!(entries[1].assignee, "bob");
    }

    #[test]
    fn bare_tag_has_no_assignee() {
        let entries = run(&[&[" TODO just fix this"]]);
        assert_eq!(entries[0].assignee, "");
        assert_eq!(texts(&entries[0]), vec!["just fix this"]);
    }

    #[test]
    fn lines_before_any_tag_are_discarded() {
        let entries = run(&[&[" Package docs.", " More docs.", " NOTE: keep", " tail"]]);
        assert_eq!(entries.len(), 1);
        assert_eq!(texts(&entries[0]), vec!["keep", "tail"]);
        assert_eq!(entries[0].line, 3);
    }

    #[test]
    fn group_boundary_forces_flush() {
        let entries = run(&[&[" TODO: first group"], &[" unrelated prose"]]);
        assert_eq!(entries.len(), 1);
        assert_eq!(texts(&entries[0]), vec!["first group"]);
    }

    #[test]
    fn end_of_input_flushes_open_entry() {
        let patterns = patterns();
        let mut acc = EntryAccumulator::new("main.go", &patterns);
        acc.begin_group(Vec::new());
        acc.push_line(&line(" FIXME: last thing"), at(9));
        let entries = acc.finish();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].line, 9);
    }

    #[test]
    fn no_tags_no_entries() {
        assert!(run(&[&[" just a comment"], &[" another"]]).is_empty());
    }

    #[test]
    fn group_context_is_shared_by_entries_of_that_group_only() {
        let patterns = patterns();
        let mut acc = EntryAccumulator::new("main.go", &patterns);
        acc.begin_group(vec!["func A() {}".to_string()]);
        acc.push_line(&line(" TODO: a1"), at(1));
        acc.push_line(&line(" NOTE: a2"), at(2));
        acc.begin_group(Vec::new());
        acc.push_line(&line(" TODO: b"), at(4));
        let entries = acc.finish();

        assert_eq!(entries[0].context, vec!["func A() {}"]);
        assert_eq!(entries[1].context, vec!["func A() {}"]);
        assert!(entries[2].context.is_empty());
    }

    #[test]
    fn entries_carry_filename_and_column() {
        let patterns = patterns();
        let mut acc = EntryAccumulator::new("pkg/a.go", &patterns);
        acc.begin_group(Vec::new());
        acc.push_line(&line(" TODO x"), Position { line: 4, column: 13 });
        let entries = acc.finish();
        assert_eq!(entries[0].filename, "pkg/a.go");
        assert_eq!(entries[0].column, 13);
    }
}
