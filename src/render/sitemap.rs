//! Sitemap generation.
//!
//! Renders a sitemap.xml document listing the site's static routes plus one
//! entry per published blog post, for search engine indexing.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://example.com/</loc>
//!     <lastmod>2025-01-01</lastmod>
//!     <changefreq>weekly</changefreq>
//!     <priority>1.0</priority>
//!   </url>
//! </urlset>
//! ```

use crate::render::escape_xml;
use std::fmt;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Suggested crawl frequency for a sitemap URL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFreq {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFreq {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::Never => "never",
        }
    }
}

impl fmt::Display for ChangeFreq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `<url>` block: a site-relative path plus optional crawl hints
#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    pub url: String,
    pub lastmod: Option<String>,
    pub changefreq: Option<ChangeFreq>,
    pub priority: Option<f32>,
}

impl SitemapEntry {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            lastmod: None,
            changefreq: None,
            priority: None,
        }
    }
}

/// The hand-declared static routes, home first, each with its own crawl
/// policy. Dynamic blog entries are appended by the pipeline.
pub fn static_routes() -> Vec<SitemapEntry> {
    const ROUTES: &[(&str, ChangeFreq, f32)] = &[
        ("/", ChangeFreq::Weekly, 1.0),
        ("/services", ChangeFreq::Weekly, 0.9),
        ("/projects", ChangeFreq::Weekly, 0.8),
        ("/blog", ChangeFreq::Daily, 0.8),
        ("/about", ChangeFreq::Monthly, 0.7),
        ("/contact", ChangeFreq::Monthly, 0.7),
    ];

    ROUTES
        .iter()
        .map(|&(url, changefreq, priority)| SitemapEntry {
            url: url.to_string(),
            lastmod: None,
            changefreq: Some(changefreq),
            priority: Some(priority),
        })
        .collect()
}

/// Render the sitemap document, one `<url>` block per entry in input order.
pub fn render(entries: &[SitemapEntry], site_base_url: &str) -> String {
    let base = site_base_url.trim_end_matches('/');
    let mut xml = String::with_capacity(4096);

    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<urlset xmlns=\"");
    xml.push_str(SITEMAP_NS);
    xml.push_str("\">\n");

    for entry in entries {
        xml.push_str("  <url>\n    <loc>");
        xml.push_str(&escape_xml(&format!("{base}{}", entry.url)));
        xml.push_str("</loc>\n");
        if let Some(lastmod) = &entry.lastmod {
            xml.push_str("    <lastmod>");
            xml.push_str(&escape_xml(lastmod));
            xml.push_str("</lastmod>\n");
        }
        if let Some(changefreq) = entry.changefreq {
            xml.push_str("    <changefreq>");
            xml.push_str(changefreq.as_str());
            xml.push_str("</changefreq>\n");
        }
        if let Some(priority) = entry.priority {
            xml.push_str("    <priority>");
            xml.push_str(&format!("{priority:.1}"));
            xml.push_str("</priority>\n");
        }
        xml.push_str("  </url>\n");
    }

    xml.push_str("</urlset>\n");
    xml
}
