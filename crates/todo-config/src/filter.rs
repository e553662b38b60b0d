//! Assignee filtering configuration.

use serde::{Deserialize, Serialize};

const fn default_include_unassigned() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FilterConfig {
    /// Only report entries assigned to this person (case-insensitive).
    /// Empty reports everyone.
    #[serde(default)]
    pub assignee: String,

    /// Whether unassigned entries survive an assignee filter.
    #[serde(default = "default_include_unassigned")]
    pub include_unassigned: bool,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            assignee: String::new(),
            include_unassigned: default_include_unassigned(),
        }
    }
}
