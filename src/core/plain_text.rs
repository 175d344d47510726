//! Markdown to plain text reduction
//!
//! Strips common markdown markup from a post body so feed readers get a clean
//! plain-text preview. The passes run in a fixed order: structural noise
//! (front matter, code fences) goes first so the later inline patterns do not
//! fire inside it. Best effort only; tables, nested blockquotes, raw HTML and
//! image syntax are left untouched.

use regex::Regex;
use std::sync::LazyLock;

static FRONT_MATTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\A---\r?\n.*?\r?\n---\r?\n").unwrap());
static FENCED_CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)```.*?```").unwrap());
static INLINE_CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`([^`]*)`").unwrap());
static HEADING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^#{1,6}[ \t]*").unwrap());
static BOLD_STARS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*([^*]+)\*\*").unwrap());
static BOLD_UNDERSCORES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"__([^_]+)__").unwrap());
static ITALIC_STAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*([^*]+)\*").unwrap());
static ITALIC_UNDERSCORE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_([^_]+)_").unwrap());
static LINK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[([^\]]*)\]\([^)]*\)").unwrap());
static HORIZONTAL_RULE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^-{3,}[ \t]*$").unwrap());
static UNORDERED_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*[-*+][ \t]+").unwrap());
static ORDERED_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*\d+\.[ \t]+").unwrap());
static BLANK_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

/// Reduce markdown to plain text. Pure and total: never fails, and an empty
/// input yields an empty output.
pub fn to_plain_text(markdown: &str) -> String {
    let text = FRONT_MATTER.replace(markdown, "");
    let text = FENCED_CODE.replace_all(&text, "");
    let text = INLINE_CODE.replace_all(&text, "$1");
    let text = HEADING.replace_all(&text, "");
    let text = BOLD_STARS.replace_all(&text, "$1");
    let text = BOLD_UNDERSCORES.replace_all(&text, "$1");
    let text = ITALIC_STAR.replace_all(&text, "$1");
    let text = ITALIC_UNDERSCORE.replace_all(&text, "$1");
    let text = LINK.replace_all(&text, "$1");
    let text = HORIZONTAL_RULE.replace_all(&text, "");
    let text = UNORDERED_MARKER.replace_all(&text, "");
    let text = ORDERED_MARKER.replace_all(&text, "");
    let text = BLANK_RUNS.replace_all(&text, "\n\n");
    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_input() {
        assert_eq!(to_plain_text(""), "");
    }

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!(to_plain_text("Just a sentence."), "Just a sentence.");
    }

    #[test]
    fn test_bold_and_italic() {
        assert_eq!(to_plain_text("Some **bold** text here."), "Some bold text here.");
        assert_eq!(to_plain_text("an _emphasized_ word"), "an emphasized word");
        assert_eq!(to_plain_text("a *starred* word"), "a starred word");
        assert_eq!(to_plain_text("__strong__ and **strong**"), "strong and strong");
    }

    #[test]
    fn test_leading_front_matter_stripped() {
        let input = "---\ntitle: T\n---\nBody text.";
        assert_eq!(to_plain_text(input), "Body text.");
    }

    #[test]
    fn test_front_matter_only_stripped_at_start() {
        let input = "Intro.\n---\ntitle: not front matter\n---\n";
        let out = to_plain_text(input);
        assert!(out.contains("Intro."));
        assert!(out.contains("title: not front matter"));
    }

    #[test]
    fn test_fenced_code_removed_entirely() {
        let input = "Before.\n```rust\nlet x = 1;\n```\nAfter.";
        assert_eq!(to_plain_text(input), "Before.\n\nAfter.");
    }

    #[test]
    fn test_inline_code_keeps_inner_text() {
        assert_eq!(to_plain_text("run `cargo test` often"), "run cargo test often");
    }

    #[test]
    fn test_headings_keep_text() {
        assert_eq!(to_plain_text("# Title\n## Sub\nBody"), "Title\nSub\nBody");
    }

    #[test]
    fn test_links_keep_text_only() {
        assert_eq!(
            to_plain_text("see [the docs](https://example.com/docs) for more"),
            "see the docs for more"
        );
    }

    #[test]
    fn test_horizontal_rule_removed() {
        assert_eq!(to_plain_text("above\n\n---\n\nbelow"), "above\n\nbelow");
    }

    #[test]
    fn test_list_markers_removed() {
        assert_eq!(to_plain_text("- one\n- two\n+ three"), "one\ntwo\nthree");
        assert_eq!(to_plain_text("1. first\n2. second"), "first\nsecond");
    }

    #[test]
    fn test_blank_lines_collapsed() {
        assert_eq!(to_plain_text("a\n\n\n\nb"), "a\n\nb");
    }

    #[test]
    fn test_result_trimmed() {
        assert_eq!(to_plain_text("\n\n  hello  \n\n"), "hello");
    }

    #[test]
    fn test_combined_document() {
        let input = "---\ntitle: T\n---\n# Heading\n\nSome **bold** and a [link](http://x).\n\n```\ncode\n```\n\n- item one\n";
        assert_eq!(
            to_plain_text(input),
            "Heading\n\nSome bold and a link.\n\nitem one"
        );
    }
}
