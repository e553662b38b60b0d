//! The extracted comment entry.

use serde::{Deserialize, Serialize};

/// One tagged remark found in a source file.
///
/// `line` and `column` are 1-based and point at the comment line that opened
/// the entry. `assignee` is already lower-cased (empty when unassigned).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentEntry {
    pub filename: String,
    pub line: u32,
    pub column: u32,
    pub tag: String,
    pub assignee: String,
    pub text: Vec<String>,
    pub context: Vec<String>,
}

impl CommentEntry {
    /// `file:line:col` location string used by the renderers.
    #[must_use]
    pub fn location(&self) -> String {
        format!("{}:{}:{}", self.filename, self.line, self.column)
    }

    #[must_use]
    pub const fn is_assigned(&self) -> bool {
        !self.assignee.is_empty()
    }
}
