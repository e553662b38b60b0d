//! What to scan and which tags to look for.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_patterns() -> Vec<String> {
    vec!["FIXME".to_string(), "TODO".to_string(), "NOTE".to_string()]
}

fn default_include() -> Vec<PathBuf> {
    vec![PathBuf::from(".")]
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ScanConfig {
    /// Tag patterns in match priority order (first match wins).
    #[serde(default = "default_patterns")]
    pub patterns: Vec<String>,

    /// Roots to scan. A root may be a directory or a single file.
    #[serde(default = "default_include")]
    pub include: Vec<PathBuf>,

    /// Globs excluded from the walk (e.g. `vendor/**`, `*_test.go`).
    #[serde(default)]
    pub exclude: Vec<String>,

    /// When set, reported filenames are made relative to this directory.
    #[serde(default)]
    pub rel_root: Option<PathBuf>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            patterns: default_patterns(),
            include: default_include(),
            exclude: Vec::new(),
            rel_root: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = ScanConfig::default();
        assert_eq!(config.patterns, vec!["FIXME", "TODO", "NOTE"]);
        assert_eq!(config.include, vec![PathBuf::from(".")]);
        assert!(config.exclude.is_empty());
        assert!(config.rel_root.is_none());
    }
}
