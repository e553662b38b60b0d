use std::path::PathBuf;

use clap::Parser;
use todo_config::{TodoConfig, expand_path};

pub mod global;

pub use global::{ColorMode, FormatArg};

/// Top-level CLI parser for the `todoscan` binary.
///
/// Every option overrides the matching configuration value; anything left
/// unset keeps the value from config files and `TODOSCAN_*` variables.
#[derive(Debug, Parser)]
#[command(
    name = "todoscan",
    version,
    about = "Report TODO, FIXME and NOTE comments in Go source trees"
)]
pub struct Cli {
    /// Files or directories to scan (replaces `scan.include`)
    pub paths: Vec<PathBuf>,

    /// Explicit config file (TOML, or JSON by extension)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Tag pattern to look for; repeat for several (replaces `scan.patterns`)
    #[arg(short = 't', long = "pattern", value_name = "TAG")]
    pub patterns: Vec<String>,

    /// Only report entries assigned to this person
    #[arg(short, long)]
    pub assignee: Option<String>,

    /// Keep unassigned entries when filtering by assignee
    #[arg(long, value_name = "BOOL")]
    pub include_unassigned: Option<bool>,

    /// Glob to exclude from the walk; repeat for several (added to `scan.exclude`)
    #[arg(long, value_name = "GLOB")]
    pub exclude: Vec<String>,

    /// Output format: console, json, dashboard
    #[arg(short, long)]
    pub format: Option<FormatArg>,

    /// Where to write the report: stdout, stderr or a file path
    #[arg(short, long, value_name = "TARGET")]
    pub output: Option<String>,

    /// Report filenames relative to this directory
    #[arg(long, value_name = "DIR")]
    pub rel_root: Option<PathBuf>,

    /// Context lines shown per entry in console output
    #[arg(short = 'C', long, value_name = "N")]
    pub context_lines: Option<usize>,

    /// Exit with status 2 when an entry with this tag is found; repeatable
    #[arg(long, value_name = "TAG")]
    pub fail_on: Vec<String>,

    /// Color console output: auto, always, never
    #[arg(long, default_value = "auto")]
    pub color: ColorMode,

    /// Quiet mode (errors only, no progress)
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Layer command-line overrides on top of the loaded configuration.
    ///
    /// # Errors
    /// Fails when `--rel-root` cannot be expanded.
    pub fn apply(&self, config: &mut TodoConfig) -> anyhow::Result<()> {
        if !self.paths.is_empty() {
            config.scan.include.clone_from(&self.paths);
        }
        if !self.patterns.is_empty() {
            config.scan.patterns.clone_from(&self.patterns);
        }
        config.scan.exclude.extend(self.exclude.iter().cloned());
        if let Some(root) = &self.rel_root {
            config.scan.rel_root = Some(expand_path(root)?);
        }

        if let Some(assignee) = &self.assignee {
            config.filter.assignee.clone_from(assignee);
        }
        if let Some(include) = self.include_unassigned {
            config.filter.include_unassigned = include;
        }

        if let Some(format) = self.format {
            config.output.format = format.into();
        }
        if let Some(output) = &self.output {
            config.output.output.clone_from(output);
        }
        if let Some(lines) = self.context_lines {
            config.output.context_lines = lines;
        }
        if !self.fail_on.is_empty() {
            config.output.fail_on.clone_from(&self.fail_on);
        }
        Ok(())
    }
}
