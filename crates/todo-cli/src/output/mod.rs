//! Report rendering and delivery.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use todo_config::OutputFormat;
use todo_core::CommentEntry;

pub mod console;
pub mod dashboard;
pub mod json;

/// Destination of the rendered report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Stdout,
    Stderr,
    File(PathBuf),
}

impl Target {
    /// `stdout`/`stderr` (any case, empty means stdout); anything else is a
    /// file path.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        if value.is_empty() || value.eq_ignore_ascii_case("stdout") {
            Self::Stdout
        } else if value.eq_ignore_ascii_case("stderr") {
            Self::Stderr
        } else {
            Self::File(PathBuf::from(value))
        }
    }
}

/// Renderer settings that do not come from the entries themselves.
#[derive(Clone, Copy, Debug)]
pub struct RenderOptions<'a> {
    /// Configured tag patterns, used to order dashboard sections.
    pub patterns: &'a [String],
    pub context_lines: usize,
    pub color: bool,
}

/// Render `entries` in the requested format.
pub fn render(
    entries: &[CommentEntry],
    format: OutputFormat,
    options: &RenderOptions<'_>,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Console => Ok(console::render(entries, options.context_lines, options.color)),
        OutputFormat::Json => json::render(entries),
        OutputFormat::Dashboard => dashboard::render(entries, options.patterns),
    }
}

/// Write a rendered report to `target`, creating (or truncating) files.
pub fn write_report(target: &Target, rendered: &str) -> anyhow::Result<()> {
    match target {
        Target::Stdout => {
            let mut out = std::io::stdout().lock();
            out.write_all(rendered.as_bytes())?;
            out.flush()?;
        }
        Target::Stderr => {
            let mut out = std::io::stderr().lock();
            out.write_all(rendered.as_bytes())?;
            out.flush()?;
        }
        Target::File(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("unable to create output file '{}'", path.display()))?;
        }
    }
    Ok(())
}
