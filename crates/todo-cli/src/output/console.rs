//! Compiler-style console listing.
//!
//! ```text
//! pkg/server.go:12:2 TODO(alice)
//!     // retry on timeout
//!     func serve() {
//!
//! ```

use todo_core::CommentEntry;

const RESET: &str = "\u{1b}[0m";

/// Bright ANSI color for the well-known tags; other tags stay plain.
fn tag_color(tag: &str) -> Option<&'static str> {
    match tag {
        "NOTE" => Some("92"),
        "TODO" => Some("93"),
        "FIXME" => Some("91"),
        _ => None,
    }
}

fn paint(code: Option<&str>, text: &str) -> String {
    match code {
        Some(code) => format!("\u{1b}[{code}m{text}{RESET}"),
        None => text.to_string(),
    }
}

fn header(entry: &CommentEntry, color: bool) -> String {
    let location = entry.location();
    if !color {
        return if entry.is_assigned() {
            format!("{location} {}({})", entry.tag, entry.assignee)
        } else {
            format!("{location} {}", entry.tag)
        };
    }

    let tag = if entry.is_assigned() {
        format!("\u{1b}[1m{}(\u{1b}[4m{}\u{1b}[24m)", entry.tag, entry.assignee)
    } else {
        format!("\u{1b}[1m{}", entry.tag)
    };
    match tag_color(&entry.tag) {
        Some(code) => format!("\u{1b}[{code}m{location} {tag}{RESET}"),
        None => format!("{location} {tag}{RESET}"),
    }
}

/// One block per entry: header, `// text` lines, then at most
/// `context_lines` lines of context, followed by a blank line.
#[must_use]
pub fn render(entries: &[CommentEntry], context_lines: usize, color: bool) -> String {
    let mut lines = Vec::new();
    for entry in entries {
        let code = if color { tag_color(&entry.tag) } else { None };
        lines.push(header(entry, color));
        for text in &entry.text {
            lines.push(paint(code, &format!("\t// {text}")));
        }
        for context in entry.context.iter().take(context_lines) {
            lines.push(format!("\t{context}"));
        }
        lines.push(String::new());
    }

    let mut out = lines.join("\n");
    if !out.is_empty() {
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use todo_core::CommentEntry;

    use super::render;

    fn entry(tag: &str, assignee: &str) -> CommentEntry {
        CommentEntry {
            filename: "pkg/server.go".to_string(),
            line: 12,
            column: 2,
            tag: tag.to_string(),
            assignee: assignee.to_string(),
            text: vec!["retry on timeout".to_string(), "with backoff".to_string()],
            context: vec![
                "func serve() {".to_string(),
                "\tdial()".to_string(),
                "}".to_string(),
            ],
        }
    }

    #[test]
    fn plain_block_layout() {
        let out = render(&[entry("TODO", "alice")], 3, false);
        assert_eq!(
            out,
            "pkg/server.go:12:2 TODO(alice)\n\
             \t// retry on timeout\n\
             \t// with backoff\n\
             \tfunc serve() {\n\
             \t\tdial()\n\
             \t}\n\
             \n"
        );
    }

    #[test]
    fn context_is_capped() {
        let out = render(&[entry("FIXME", "")], 1, false);
        assert!(out.starts_with("pkg/server.go:12:2 FIXME\n"));
        assert!(out.contains("\tfunc serve() {\n"));
        assert!(!out.contains("dial()"));
    }

    #[test]
    fn zero_context_lines_hides_context() {
        let out = render(&[entry("NOTE", "")], 0, false);
        assert!(!out.contains("func serve"));
    }

    #[test]
    fn empty_report_renders_nothing() {
        assert_eq!(render(&[], 3, false), "");
    }

    #[test]
    fn known_tags_are_colored() {
        let out = render(&[entry("TODO", "alice")], 3, true);
        assert!(out.starts_with("\u{1b}[93mpkg/server.go:12:2 \u{1b}[1mTODO(\u{1b}[4malice\u{1b}[24m)"));
        assert!(out.contains("\u{1b}[93m\t// retry on timeout\u{1b}[0m"));
        assert!(out.contains("\n\tfunc serve() {\n"));
    }

    #[test]
    fn unknown_tags_are_bold_only() {
        let out = render(&[entry("HACK", "")], 0, true);
        assert!(out.starts_with("pkg/server.go:12:2 \u{1b}[1mHACK\u{1b}[0m\n"));
        assert!(out.contains("\t// retry on timeout\n"));
    }
}
