//! Post metadata derivation
//!
//! Converts a parsed document (front matter + body) into the normalized
//! [`PostRecord`] the renderers and any UI consume. Schema enforcement lives
//! here, not in the parser: every field has a default substitution rule, so
//! derivation is total and a missing or oddly shaped field is never an error.

use crate::core::value::{FrontMatter, Value};
use crate::utils;
use serde::Serialize;

/// File extensions recognized as content documents, stripped when deriving slugs
pub const CONTENT_EXTENSIONS: &[&str] = &["md", "markdown", "mdown", "mkd", "mkdn"];

/// Words-per-minute figure behind the `"<N> min read"` estimate
const WORDS_PER_MINUTE: usize = 200;

/// The canonical, schema-enforced post shape
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRecord {
    pub slug: String,
    pub title: String,
    pub date: String,
    pub author: String,
    pub excerpt: String,
    pub tags: Vec<String>,
    pub featured: bool,
    pub read_time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

/// Derive a normalized post record from a parsed document.
///
/// `source_id` is the document's file name; one trailing recognized content
/// extension is stripped to form the slug. A `date` that fails to parse is
/// replaced with the current UTC time so every record sorts somewhere sane.
pub fn derive(source_id: &str, front_matter: &FrontMatter, body: &str) -> PostRecord {
    let date = match front_matter.get("date") {
        Some(Value::String(s)) if utils::parse_date(s).is_some() => s.clone(),
        _ => utils::now_iso8601(),
    };

    let author = match front_matter.get("author") {
        Some(Value::String(s)) => s.clone(),
        Some(mapping @ Value::Mapping(_)) => {
            mapping.mapping_get("name").unwrap_or("Unknown").to_string()
        }
        _ => "Unknown".to_string(),
    };

    PostRecord {
        slug: strip_content_extension(source_id),
        title: string_field(front_matter, "title").unwrap_or("Untitled").to_string(),
        date,
        author,
        excerpt: string_field(front_matter, "excerpt").unwrap_or("").to_string(),
        tags: front_matter
            .get("tags")
            .and_then(Value::as_sequence)
            .map(<[String]>::to_vec)
            .unwrap_or_default(),
        featured: front_matter
            .get("featured")
            .and_then(Value::as_bool)
            .unwrap_or(false),
        read_time: read_time(body),
        body: Some(body.to_string()),
    }
}

fn string_field<'a>(front_matter: &'a FrontMatter, key: &str) -> Option<&'a str> {
    front_matter.get(key).and_then(Value::as_str)
}

/// Strip one trailing recognized content extension (case-insensitive)
fn strip_content_extension(id: &str) -> String {
    let lower = id.to_lowercase();
    for ext in CONTENT_EXTENSIONS {
        if lower.ends_with(&format!(".{ext}")) {
            return id[..id.len() - ext.len() - 1].to_string();
        }
    }
    id.to_string()
}

/// Estimate reading time from whitespace-separated word count, floored at one
/// minute so an empty body never reads "0 min read".
fn read_time(body: &str) -> String {
    let words = body.split_whitespace().count();
    let minutes = words.div_ceil(WORDS_PER_MINUTE).max(1);
    format!("{minutes} min read")
}
