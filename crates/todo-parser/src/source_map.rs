//! Byte offset to line/column mapping.

use std::ops::Range;

/// 1-based source position. `column` counts bytes, like Go's `token.Position`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

/// Line start table for one source text.
#[derive(Debug, Clone)]
pub struct LineIndex {
    starts: Vec<usize>,
}

impl LineIndex {
    #[must_use]
    pub fn new(source: &str) -> Self {
        let starts = std::iter::once(0)
            .chain(source.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self { starts }
    }

    /// Zero-based line containing `offset`. A `\n` belongs to the line it ends.
    #[must_use]
    pub fn line_of(&self, offset: usize) -> usize {
        self.starts
            .partition_point(|&start| start <= offset)
            .saturating_sub(1)
    }

    /// 1-based line and byte column of `offset`.
    #[must_use]
    pub fn position(&self, offset: usize) -> Position {
        let line = self.line_of(offset);
        let column = offset - self.starts[line];
        Position {
            line: to_u32(line + 1),
            column: to_u32(column + 1),
        }
    }

    /// Zero-based first and last line touched by `range`.
    #[must_use]
    pub fn lines_of(&self, range: &Range<usize>) -> (usize, usize) {
        let last = range.end.max(range.start + 1) - 1;
        (self.line_of(range.start), self.line_of(last))
    }
}

fn to_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_byte_is_line_one_column_one() {
        let index = LineIndex::new("package main\n");
        assert_eq!(index.position(0), Position { line: 1, column: 1 });
    }

    #[test]
    fn offsets_after_newline_start_next_line() {
        let source = "ab\ncd\n\nef";
        let index = LineIndex::new(source);
        assert_eq!(index.position(3), Position { line: 2, column: 1 });
        assert_eq!(index.position(4), Position { line: 2, column: 2 });
        assert_eq!(index.position(7), Position { line: 4, column: 1 });
    }

    #[test]
    fn newline_belongs_to_the_line_it_ends() {
        let index = LineIndex::new("ab\ncd");
        assert_eq!(index.line_of(2), 0);
        assert_eq!(index.line_of(3), 1);
    }

    #[test]
    fn columns_count_bytes() {
        let source = "\tx := 1 // TODO";
        let index = LineIndex::new(source);
        let offset = source.find("//").expect("comment");
        assert_eq!(index.position(offset).column, 9);
    }

    #[test]
    fn lines_of_range_uses_last_byte() {
        let source = "a\nbc\nd";
        let index = LineIndex::new(source);
        // "bc\n" ends on the newline of line 1
        assert_eq!(index.lines_of(&(2..5)), (1, 1));
        assert_eq!(index.lines_of(&(0..6)), (0, 2));
    }
}
