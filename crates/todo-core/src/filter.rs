//! Assignee post-filter.

use crate::entry::CommentEntry;

/// Keep the entries that belong to `assignee`.
///
/// An empty target keeps everything. Otherwise an entry survives when its
/// assignee equals the target case-insensitively, or when it is unassigned and
/// `include_unassigned` is set. Entry assignees are lower-cased at extraction.
#[must_use]
pub fn filter_by_assignee(
    entries: Vec<CommentEntry>,
    assignee: &str,
    include_unassigned: bool,
) -> Vec<CommentEntry> {
    let target = assignee.to_lowercase();
    if target.is_empty() {
        return entries;
    }

    entries
        .into_iter()
        .filter(|entry| {
            if entry.assignee.is_empty() {
                include_unassigned
            } else {
                entry.assignee == target
            }
        })
        .collect()
}
