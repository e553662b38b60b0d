use todo_core::CommentEntry;

/// Pretty-printed JSON array of entries, newline-terminated.
pub fn render(entries: &[CommentEntry]) -> anyhow::Result<String> {
    let mut out = serde_json::to_string_pretty(entries)?;
    out.push('\n');
    Ok(out)
}
