//! Aggregate severity of a scan, used to pick a process exit status.
//!
//! ```text
//! no entries                      -> clean
//! entries, none with a fail tag   -> pending
//! any entry with a fail tag       -> blocking
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::entry::CommentEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Clean,
    Pending,
    Blocking,
}

impl Severity {
    /// Derive the severity of `entries` given the tags that should fail a run.
    ///
    /// Tag comparison is exact, matching how patterns are matched.
    #[must_use]
    pub fn of(entries: &[CommentEntry], fail_on: &[String]) -> Self {
        if entries.is_empty() {
            return Self::Clean;
        }
        if entries
            .iter()
            .any(|entry| fail_on.iter().any(|tag| *tag == entry.tag))
        {
            Self::Blocking
        } else {
            Self::Pending
        }
    }

    #[must_use]
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::Clean | Self::Pending => 0,
            Self::Blocking => 2,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Clean => "clean",
            Self::Pending => "pending",
            Self::Blocking => "blocking",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
