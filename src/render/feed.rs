//! RSS 2.0 feed generation.
//!
//! Renders an RSS 2.0 document with an Atom self-link and content-module
//! bodies from an ordered list of post records. Callers pre-sort the list,
//! newest first; this module emits items in the order given.
//!
//! Two quirks of the feed's observed contract are preserved on purpose:
//! every post's tags appear both as one `<category>` per tag and as one
//! extra combined comma-joined `<category>` (reader compatibility), and the
//! "Read more" URL inside the CDATA block is XML-escaped even though CDATA
//! would not require it.

use crate::core::plain_text::to_plain_text;
use crate::core::post::PostRecord;
use crate::render::escape_xml;
use crate::utils;

const ATOM_NS: &str = "http://www.w3.org/2005/Atom";
const CONTENT_NS: &str = "http://purl.org/rss/1.0/modules/content/";

/// Channel-level feed configuration, constructed once per generation run
#[derive(Debug, Clone)]
pub struct FeedConfig {
    pub site_url: String,
    pub feed_url: String,
    pub title: String,
    pub description: String,
    pub language: String,
    pub copyright: String,
}

/// Render the feed document for the given posts, in the given order.
pub fn render(posts: &[PostRecord], config: &FeedConfig) -> String {
    let last_build_date = utils::now_rfc2822();
    let pub_date = posts
        .first()
        .and_then(|post| utils::to_rfc2822(&post.date))
        .unwrap_or_else(|| last_build_date.clone());

    let mut xml = String::with_capacity(8192);
    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str(&format!(
        "<rss version=\"2.0\" xmlns:atom=\"{ATOM_NS}\" xmlns:content=\"{CONTENT_NS}\">\n"
    ));
    xml.push_str("  <channel>\n");

    push_element(&mut xml, "    ", "title", &config.title);
    push_element(&mut xml, "    ", "link", &config.site_url);
    push_element(&mut xml, "    ", "description", &config.description);
    push_element(&mut xml, "    ", "language", &config.language);
    push_element(&mut xml, "    ", "copyright", &config.copyright);
    xml.push_str(&format!(
        "    <atom:link href=\"{}\" rel=\"self\" type=\"application/rss+xml\"/>\n",
        escape_xml(&config.feed_url)
    ));
    push_element(&mut xml, "    ", "lastBuildDate", &last_build_date);
    push_element(&mut xml, "    ", "pubDate", &pub_date);

    for post in posts {
        push_item(&mut xml, post, config, &last_build_date);
    }

    xml.push_str("  </channel>\n");
    xml.push_str("</rss>\n");
    xml
}

fn push_item(xml: &mut String, post: &PostRecord, config: &FeedConfig, fallback_date: &str) {
    let url = format!(
        "{}/blog/{}",
        config.site_url.trim_end_matches('/'),
        post.slug
    );
    let pub_date =
        utils::to_rfc2822(&post.date).unwrap_or_else(|| fallback_date.to_string());

    xml.push_str("    <item>\n");
    push_element(xml, "      ", "title", &post.title);
    push_element(xml, "      ", "link", &url);
    xml.push_str(&format!(
        "      <guid isPermaLink=\"true\">{}</guid>\n",
        escape_xml(&url)
    ));
    push_element(xml, "      ", "pubDate", &pub_date);
    push_element(xml, "      ", "author", &post.author);
    push_element(xml, "      ", "description", &post.excerpt);

    let preview = match post.body.as_deref() {
        Some(body) if !body.is_empty() => to_plain_text(body),
        _ => post.excerpt.clone(),
    };
    xml.push_str(&format!(
        "      <content:encoded><![CDATA[{preview}\n\n---\n\nRead more: <a href=\"{}\">View full article</a>]]></content:encoded>\n",
        escape_xml(&url)
    ));

    for tag in &post.tags {
        push_element(xml, "      ", "category", tag);
    }
    push_element(xml, "      ", "category", &post.tags.join(", "));

    xml.push_str("    </item>\n");
}

fn push_element(xml: &mut String, indent: &str, name: &str, text: &str) {
    xml.push_str(indent);
    xml.push('<');
    xml.push_str(name);
    xml.push('>');
    xml.push_str(&escape_xml(text));
    xml.push_str("</");
    xml.push_str(name);
    xml.push_str(">\n");
}
