//! Front matter parsing
//!
//! Parses the `---`-delimited header block at the top of a document into an
//! ordered [`FrontMatter`] mapping plus the remaining body. The grammar is a
//! deliberately minimal, line-oriented subset of YAML: enough for simple blog
//! headers, nothing more. Full YAML compliance is out of scope and must not
//! be attempted here.
//!
//! Recognized forms inside the block:
//!
//! ```text
//! title: "Hello World"        # quoted scalar, quotes stripped
//! featured: true              # true/false become booleans
//! tags: ["a", "b"]            # strict JSON array, else kept as literal text
//! author:                     # two-space-indented lines form a nested map
//!   name: "Jane Doe"
//!   email: "x@y.com"
//! ```
//!
//! Lines that match none of the forms are skipped silently.

use crate::core::value::{FrontMatter, Value};
use crate::error::{FeedmillError, Result};
use log::debug;
use regex::Regex;
use std::sync::LazyLock;

static ENTRY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\w+):\s*(.*)$").unwrap());

const DELIMITER: &str = "---";

/// Parse a document into its front matter mapping and body.
///
/// The first line must be exactly `---`, closed by another `---` line;
/// everything after the closing delimiter is the body. A document without
/// both delimiters is malformed, which is fatal for that document only.
pub fn parse(id: &str, text: &str) -> Result<(FrontMatter, String)> {
    let lines: Vec<&str> = text.lines().collect();

    if lines.first().map(|l| l.trim_end()) != Some(DELIMITER) {
        return Err(FeedmillError::malformed_document(
            id,
            "missing opening front matter delimiter",
        ));
    }

    let close = lines
        .iter()
        .skip(1)
        .position(|l| l.trim_end() == DELIMITER)
        .ok_or_else(|| {
            FeedmillError::malformed_document(id, "missing closing front matter delimiter")
        })?;

    let header = &lines[1..close + 1];
    let body = lines[close + 2..].join("\n");

    Ok((parse_header(id, header), body))
}

/// Interpret the header block line by line, top to bottom.
fn parse_header(id: &str, header: &[&str]) -> FrontMatter {
    let mut front_matter = FrontMatter::new();
    let mut i = 0;

    while i < header.len() {
        let line = header[i];
        let Some(caps) = ENTRY.captures(line) else {
            if !line.trim().is_empty() {
                debug!("{id}: skipping header line {:?}", line);
            }
            i += 1;
            continue;
        };

        let key = caps[1].to_string();

        // Two-space-indented continuation lines win over the scalar text on
        // the key's own line.
        let mut nested = Vec::new();
        let mut j = i + 1;
        while j < header.len() && is_indented(header[j]) {
            if let Some(nc) = ENTRY.captures(header[j].trim_start()) {
                nested.push((nc[1].to_string(), strip_quotes(nc[2].trim()).to_string()));
            } else {
                debug!("{id}: skipping nested header line {:?}", header[j]);
            }
            j += 1;
        }

        if j > i + 1 {
            front_matter.insert(key, Value::Mapping(nested));
            i = j;
        } else {
            front_matter.insert(key, parse_scalar(caps[2].trim()));
            i += 1;
        }
    }

    front_matter
}

fn is_indented(line: &str) -> bool {
    line.starts_with("  ")
}

/// Post-process a scalar: strip one matching pair of quotes, map `true` and
/// `false` to booleans, attempt strict JSON array parsing for bracketed text.
/// Never fails; anything unrecognized stays a literal string.
fn parse_scalar(raw: &str) -> Value {
    let text = strip_quotes(raw);

    match text {
        "true" => return Value::Bool(true),
        "false" => return Value::Bool(false),
        _ => {}
    }

    if text.starts_with('[') && text.ends_with(']') {
        if let Ok(serde_json::Value::Array(items)) = serde_json::from_str(text) {
            return Value::Sequence(items.iter().map(json_item_to_string).collect());
        }
    }

    Value::String(text.to_string())
}

/// Strip a single matching pair of leading/trailing double or single quotes
fn strip_quotes(s: &str) -> &str {
    let bytes = s.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if (first == b'"' && last == b'"') || (first == b'\'' && last == b'\'') {
            return &s[1..s.len() - 1];
        }
    }
    s
}

fn json_item_to_string(item: &serde_json::Value) -> String {
    match item {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_basic_document() {
        let text = "---\ntitle: \"Hello World\"\ndate: 2024-01-15\ntags: [\"a\",\"b\"]\nfeatured: true\n---\nSome **bold** text here.";
        let (fm, body) = parse("hello.md", text).unwrap();

        assert_eq!(fm.get("title").unwrap().as_str(), Some("Hello World"));
        assert_eq!(fm.get("date").unwrap().as_str(), Some("2024-01-15"));
        assert_eq!(
            fm.get("tags").unwrap().as_sequence().unwrap(),
            &["a".to_string(), "b".to_string()]
        );
        assert_eq!(fm.get("featured").unwrap().as_bool(), Some(true));
        assert_eq!(body, "Some **bold** text here.");
    }

    #[test]
    fn test_missing_opening_delimiter() {
        let err = parse("plain.md", "# Just markdown\n\nNo header here.").unwrap_err();
        assert!(matches!(err, FeedmillError::MalformedDocument { .. }));
        assert!(err.is_document_scoped());
    }

    #[test]
    fn test_missing_closing_delimiter() {
        let err = parse("broken.md", "---\ntitle: Oops\nBody without a close").unwrap_err();
        assert!(matches!(err, FeedmillError::MalformedDocument { .. }));
    }

    #[test]
    fn test_empty_header_block() {
        let (fm, body) = parse("empty.md", "---\n---\nBody only.").unwrap();
        assert!(fm.is_empty());
        assert_eq!(body, "Body only.");
    }

    #[test]
    fn test_nested_mapping() {
        let text = "---\nauthor:\n  name: \"Jane Doe\"\n  email: \"x@y.com\"\n---\nBody";
        let (fm, _) = parse("nested.md", text).unwrap();

        let author = fm.get("author").unwrap();
        assert!(author.is_mapping());
        assert_eq!(author.mapping_get("name"), Some("Jane Doe"));
        assert_eq!(author.mapping_get("email"), Some("x@y.com"));
    }

    #[test]
    fn test_nested_mapping_wins_over_scalar() {
        let text = "---\nauthor: ignored\n  name: Jane\n---\n";
        let (fm, _) = parse("doc.md", text).unwrap();
        assert_eq!(fm.get("author").unwrap().mapping_get("name"), Some("Jane"));
    }

    #[test]
    fn test_nesting_stops_at_first_unindented_line() {
        let text = "---\nauthor:\n  name: Jane\ntitle: After\n---\n";
        let (fm, _) = parse("doc.md", text).unwrap();
        assert!(fm.get("author").unwrap().is_mapping());
        assert_eq!(fm.get("title").unwrap().as_str(), Some("After"));
    }

    #[test]
    fn test_single_quotes_stripped() {
        let (fm, _) = parse("doc.md", "---\ntitle: 'Quoted'\n---\n").unwrap();
        assert_eq!(fm.get("title").unwrap().as_str(), Some("Quoted"));
    }

    #[test]
    fn test_mismatched_quotes_kept() {
        let (fm, _) = parse("doc.md", "---\ntitle: \"half quoted\n---\n").unwrap();
        assert_eq!(fm.get("title").unwrap().as_str(), Some("\"half quoted"));
    }

    #[test]
    fn test_booleans() {
        let (fm, _) = parse("doc.md", "---\nfeatured: true\ndraft: false\n---\n").unwrap();
        assert_eq!(fm.get("featured").unwrap().as_bool(), Some(true));
        assert_eq!(fm.get("draft").unwrap().as_bool(), Some(false));
    }

    #[test]
    fn test_invalid_json_array_kept_as_string() {
        // Unquoted items are not valid JSON; the literal text survives.
        let (fm, _) = parse("doc.md", "---\ntags: [a, b]\n---\n").unwrap();
        assert_eq!(fm.get("tags").unwrap().as_str(), Some("[a, b]"));
    }

    #[test]
    fn test_json_array_with_mixed_scalars() {
        let (fm, _) = parse("doc.md", "---\ntags: [\"a\", 2, true]\n---\n").unwrap();
        assert_eq!(
            fm.get("tags").unwrap().as_sequence().unwrap(),
            &["a".to_string(), "2".to_string(), "true".to_string()]
        );
    }

    #[test]
    fn test_unrecognized_lines_skipped() {
        let text = "---\ntitle: Ok\nthis line has no colon token !\n- a stray list item\n---\n";
        let (fm, _) = parse("doc.md", text).unwrap();
        assert_eq!(fm.len(), 1);
        assert_eq!(fm.get("title").unwrap().as_str(), Some("Ok"));
    }

    #[test]
    fn test_crlf_input() {
        let text = "---\r\ntitle: Windows\r\n---\r\nBody line.";
        let (fm, body) = parse("doc.md", text).unwrap();
        assert_eq!(fm.get("title").unwrap().as_str(), Some("Windows"));
        assert_eq!(body, "Body line.");
    }

    #[test]
    fn test_body_preserved_verbatim() {
        let text = "---\ntitle: T\n---\nline one\n\nline three\n";
        let (_, body) = parse("doc.md", text).unwrap();
        assert_eq!(body, "line one\n\nline three");
    }
}
