//! Per-file extraction pipeline.
//!
//! front-end groups -> context per group -> tokenizer -> matcher -> accumulator

use std::path::{Path, PathBuf};

use todo_core::CommentEntry;

use crate::accumulator::EntryAccumulator;
use crate::context::render_context;
use crate::error::ParserError;
use crate::frontend::{FrontEnd, frontend_for_path};
use crate::source_map::LineIndex;
use crate::tokenizer::tokenize;

/// Settings shared by every file of a run.
#[derive(Debug, Clone, Default)]
pub struct ExtractOptions {
    /// Tag patterns in priority order.
    pub patterns: Vec<String>,
    /// Reported filenames are made relative to this root when set.
    pub rel_root: Option<PathBuf>,
}

/// Read `path` and extract its entries with the front-end its extension
/// selects.
///
/// # Errors
/// Returns `ParserError::UnsupportedLanguage` for unknown extensions,
/// `ParserError::Io` / `ParserError::Encoding` when the file cannot be read as
/// UTF-8, and `ParserError::Parse` when the front-end rejects the contents.
pub fn extract_file(path: &Path, options: &ExtractOptions) -> Result<Vec<CommentEntry>, ParserError> {
    let frontend = frontend_for_path(path)
        .ok_or_else(|| ParserError::UnsupportedLanguage(path.display().to_string()))?;
    let bytes = std::fs::read(path)?;
    let source = String::from_utf8(bytes)?;
    extract_entries(path, &source, frontend, options)
}

/// Extract entries from already-loaded `source`. `path` only names the file.
///
/// # Errors
/// Returns `ParserError::Parse` when the front-end rejects `source`.
pub fn extract_entries(
    path: &Path,
    source: &str,
    frontend: &dyn FrontEnd,
    options: &ExtractOptions,
) -> Result<Vec<CommentEntry>, ParserError> {
    let parsed = frontend.parse(source)?;
    let index = LineIndex::new(source);
    let filename = display_name(path, options.rel_root.as_deref());

    let mut accumulator = EntryAccumulator::new(filename, &options.patterns);
    for group in &parsed.groups {
        let spans: Vec<_> = group.spans().collect();
        accumulator.begin_group(render_context(source, group.node.clone(), &spans));
        for line in tokenize(group) {
            accumulator.push_line(&line, index.position(line.offset));
        }
    }
    let entries = accumulator.finish();

    tracing::debug!(
        path = %path.display(),
        language = frontend.language(),
        groups = parsed.groups.len(),
        entries = entries.len(),
        "extracted comments"
    );
    Ok(entries)
}

/// Filename as reported in entries: relative to `rel_root` when the file lies
/// under it, otherwise the path as given. A leading `./` is dropped.
#[must_use]
pub fn display_name(path: &Path, rel_root: Option<&Path>) -> String {
    let relative = rel_root.and_then(|root| {
        let root = std::path::absolute(root).ok()?;
        let file = std::path::absolute(path).ok()?;
        file.strip_prefix(&root).ok().map(Path::to_path_buf)
    });
    let shown = relative.unwrap_or_else(|| path.to_path_buf());
    let shown = shown.strip_prefix(".").unwrap_or(&shown);
    shown.display().to_string()
}
