//! Presentation configuration.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Renderer used for the final entry list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Colored `file:line:col` listing, one block per entry.
    #[default]
    #[serde(alias = "error")]
    Console,
    /// Pretty-printed JSON array of entries.
    Json,
    /// InfraBox-style dashboard markup.
    #[serde(alias = "infrabox")]
    Dashboard,
}

impl OutputFormat {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Console => "console",
            Self::Json => "json",
            Self::Dashboard => "dashboard",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const fn default_context_lines() -> usize {
    3
}

fn default_output() -> String {
    "stdout".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,

    /// `stdout`, `stderr` (case-insensitive) or a file path to create.
    #[serde(default = "default_output")]
    pub output: String,

    /// Maximum context lines shown per entry by the console renderer.
    #[serde(default = "default_context_lines")]
    pub context_lines: usize,

    /// Tags that make the run exit non-zero when present.
    #[serde(default)]
    pub fail_on: Vec<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            output: default_output(),
            context_lines: default_context_lines(),
            fail_on: Vec::new(),
        }
    }
}
