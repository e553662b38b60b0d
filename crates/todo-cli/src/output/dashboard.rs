//! InfraBox-style dashboard markup.
//!
//! One `h1` heading and one table per tag, in configured pattern order. Cell
//! text is emitted as-is: `<br/>` and `<pre>` are markup, not escaped.

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use todo_core::CommentEntry;

const HEADERS: [&str; 4] = ["Location", "Assignee", "Text", "Context"];

#[derive(Debug, Serialize)]
struct Markup {
    version: u32,
    title: &'static str,
    elements: Vec<Element>,
}

#[derive(Debug, Serialize)]
struct Element {
    #[serde(rename = "type")]
    kind: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    rows: Vec<Vec<Element>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    headers: Vec<Element>,
    #[serde(skip_serializing_if = "String::is_empty")]
    text: String,
}

impl Element {
    fn text(text: impl Into<String>) -> Self {
        Self {
            kind: "text",
            rows: Vec::new(),
            headers: Vec::new(),
            text: text.into(),
        }
    }

    fn heading(text: String) -> Self {
        Self {
            kind: "h1",
            ..Self::text(text)
        }
    }

    fn table(rows: Vec<Vec<Self>>) -> Self {
        Self {
            kind: "table",
            rows,
            headers: HEADERS.into_iter().map(Self::text).collect(),
            text: String::new(),
        }
    }
}

fn row(entry: &CommentEntry) -> Vec<Element> {
    vec![
        Element::text(entry.location()),
        Element::text(entry.assignee.as_str()),
        Element::text(entry.text.join("<br/>\n")),
        Element::text(format!("<pre>{}</pre>", entry.context.join("\n"))),
    ]
}

fn document(entries: &[CommentEntry], patterns: &[String]) -> Markup {
    let mut elements = Vec::new();
    for tag in patterns {
        let rows: Vec<_> = entries
            .iter()
            .filter(|entry| entry.tag == *tag)
            .map(row)
            .collect();
        if rows.is_empty() {
            continue;
        }
        elements.push(Element::heading(format!("{tag} ({})", rows.len())));
        elements.push(Element::table(rows));
    }
    Markup {
        version: 1,
        title: "Todo",
        elements,
    }
}

/// Render the dashboard document, tab-indented and newline-terminated.
pub fn render(entries: &[CommentEntry], patterns: &[String]) -> anyhow::Result<String> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"\t"));
    document(entries, patterns).serialize(&mut serializer)?;
    buf.push(b'\n');
    Ok(String::from_utf8(buf)?)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};
    use todo_core::CommentEntry;

    use super::render;

    fn entry(tag: &str, line: u32, assignee: &str) -> CommentEntry {
        CommentEntry {
            filename: "main.go".to_string(),
            line,
            column: 1,
            tag: tag.to_string(),
            assignee: assignee.to_string(),
            text: vec!["first".to_string(), "second".to_string()],
            context: vec!["func main() {".to_string(), "}".to_string()],
        }
    }

    fn patterns() -> Vec<String> {
        vec!["FIXME".to_string(), "TODO".to_string(), "NOTE".to_string()]
    }

    fn parse(out: &str) -> Value {
        serde_json::from_str(out).expect("dashboard should be valid json")
    }

    #[test]
    fn sections_follow_pattern_order_and_skip_empty_tags() {
        let entries = vec![entry("TODO", 3, "bob"), entry("FIXME", 9, ""), entry("TODO", 12, "")];
        let doc = parse(&render(&entries, &patterns()).expect("render"));

        assert_eq!(doc["version"], 1);
        assert_eq!(doc["title"], "Todo");
        let elements = doc["elements"].as_array().expect("elements");
        assert_eq!(elements.len(), 4);
        assert_eq!(elements[0], json!({"type": "h1", "text": "FIXME (1)"}));
        assert_eq!(elements[2], json!({"type": "h1", "text": "TODO (2)"}));
        assert_eq!(elements[3]["rows"].as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn table_cells_carry_markup() {
        let doc = parse(&render(&[entry("TODO", 3, "bob")], &patterns()).expect("render"));
        let table = &doc["elements"][1];

        assert_eq!(table["type"], "table");
        let headers: Vec<&str> = table["headers"]
            .as_array()
            .expect("headers")
            .iter()
            .filter_map(|h| h["text"].as_str())
            .collect();
        assert_eq!(headers, vec!["Location", "Assignee", "Text", "Context"]);

        let cells = &table["rows"][0];
        assert_eq!(cells[0]["text"], "main.go:3:1");
        assert_eq!(cells[1]["text"], "bob");
        assert_eq!(cells[2]["text"], "first<br/>\nsecond");
        assert_eq!(cells[3]["text"], "<pre>func main() {\n}</pre>");
    }

    #[test]
    fn html_is_not_escaped_and_output_is_tab_indented() {
        let out = render(&[entry("NOTE", 1, "")], &patterns()).expect("render");
        assert!(out.contains("<pre>"));
        assert!(!out.contains("\\u003c"));
        assert!(out.contains("\n\t\"version\": 1"));
        assert!(out.ends_with("}\n"));
    }

    #[test]
    fn empty_assignee_cell_has_no_text() {
        let doc = parse(&render(&[entry("NOTE", 1, "")], &patterns()).expect("render"));
        assert_eq!(doc["elements"][1]["rows"][0][1], json!({"type": "text"}));
    }

    #[test]
    fn no_entries_yield_no_elements() {
        let doc = parse(&render(&[], &patterns()).expect("render"));
        assert_eq!(doc["elements"], json!([]));
    }
}
