//! Language front-ends.
//!
//! A front-end turns file contents into comment groups in source order and,
//! for each group, the byte span of the syntax node the group is attached to.
//! The extraction engine only ever sees [`ParsedSource`], so adding a language
//! means registering another [`FrontEnd`] in [`FRONTENDS`].

pub mod go;

use std::ops::Range;
use std::path::Path;

use crate::error::ParserError;

/// One physical comment token (`// ...` or a whole `/* ... */`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawComment {
    /// Byte offset of the comment's first character in the source.
    pub offset: usize,
    pub text: String,
}

impl RawComment {
    #[must_use]
    pub fn span(&self) -> Range<usize> {
        self.offset..self.offset + self.text.len()
    }
}

/// A maximal run of adjacent comments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentGroup {
    pub comments: Vec<RawComment>,
    /// Byte span of the node this group documents or trails, if any.
    pub node: Option<Range<usize>>,
}

impl CommentGroup {
    pub fn spans(&self) -> impl Iterator<Item = Range<usize>> + '_ {
        self.comments.iter().map(RawComment::span)
    }
}

/// Front-end output for one file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedSource {
    pub groups: Vec<CommentGroup>,
}

/// Parse capability for one source language.
pub trait FrontEnd: Send + Sync {
    /// Human-readable language name used in diagnostics.
    fn language(&self) -> &'static str;

    /// File extensions (without the dot) handled by this front-end.
    fn extensions(&self) -> &'static [&'static str];

    /// Split `source` into comment groups with their attached node spans.
    ///
    /// # Errors
    /// Returns `ParserError::Parse` when no usable syntax tree can be built.
    fn parse(&self, source: &str) -> Result<ParsedSource, ParserError>;
}

/// Registered front-ends, consulted in order.
pub static FRONTENDS: &[&dyn FrontEnd] = &[&go::GoFrontEnd];

/// Find the front-end responsible for `path`, by extension.
#[must_use]
pub fn frontend_for_path(path: &Path) -> Option<&'static dyn FrontEnd> {
    let ext = path.extension()?.to_str()?;
    FRONTENDS
        .iter()
        .copied()
        .find(|frontend| frontend.extensions().contains(&ext))
}
