//! Content pipeline orchestration
//!
//! One run: enumerate documents, parse and derive each, sort, render. A bad
//! document is logged and excluded; it never aborts its siblings. Records are
//! sorted by date descending with the original enumeration order preserved
//! for equal dates, so the renderers receive a deterministic list.

use crate::config::SiteConfig;
use crate::core::{front_matter, post, PostRecord};
use crate::error::Result;
use crate::io::source::DocumentSource;
use crate::render::feed;
use crate::render::sitemap::{self, ChangeFreq, SitemapEntry};
use crate::utils;
use log::{info, warn};
use std::cmp::Reverse;
use std::collections::HashSet;

/// The artifacts of one pipeline run
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    /// Derived records, sorted by date descending
    pub posts: Vec<PostRecord>,
    /// The rendered feed, or `None` when no valid posts were found.
    /// Zero posts producing no feed at all matches the long-observed site
    /// behavior; see DESIGN.md before changing it.
    pub rss_xml: Option<String>,
    /// The rendered sitemap; always produced, static entries at minimum
    pub sitemap_xml: String,
}

/// Orchestrates one run of the content pipeline against a document source
pub struct ContentPipeline<'a> {
    config: &'a SiteConfig,
}

impl<'a> ContentPipeline<'a> {
    pub fn new(config: &'a SiteConfig) -> Self {
        Self { config }
    }

    /// Run the pipeline: discover, parse, derive, sort, render.
    pub fn run(&self, source: &dyn DocumentSource) -> Result<PipelineOutput> {
        let documents = source.enumerate()?;
        info!("processing {} documents", documents.len());

        let mut derived: Vec<(PostRecord, Option<std::time::SystemTime>)> = Vec::new();
        let mut seen_slugs = HashSet::new();

        for document in &documents {
            let (front_matter, body) = match front_matter::parse(&document.id, &document.raw) {
                Ok(parsed) => parsed,
                Err(e) => {
                    warn!("excluding document: {e}");
                    continue;
                }
            };
            let record = post::derive(&document.id, &front_matter, &body);
            if !seen_slugs.insert(record.slug.clone()) {
                warn!(
                    "excluding {}: duplicate slug {:?}",
                    document.id, record.slug
                );
                continue;
            }
            derived.push((record, document.modified));
        }

        // Stable sort keeps enumeration order for equal dates.
        derived.sort_by_key(|(record, _)| {
            Reverse(utils::parse_date(&record.date).map_or(0, |dt| dt.timestamp()))
        });

        let mut entries = sitemap::static_routes();
        for (record, modified) in &derived {
            match modified {
                Some(timestamp) => entries.push(SitemapEntry {
                    url: format!("/blog/{}", record.slug),
                    lastmod: Some(utils::format_ymd(*timestamp)),
                    changefreq: Some(ChangeFreq::Never),
                    priority: Some(0.7),
                }),
                None => warn!(
                    "no modification time for {}; leaving it out of the sitemap",
                    record.slug
                ),
            }
        }
        let sitemap_xml = sitemap::render(&entries, &self.config.site.url);

        let posts: Vec<PostRecord> = derived.into_iter().map(|(record, _)| record).collect();
        let rss_xml = if posts.is_empty() {
            info!("no valid posts; skipping feed generation");
            None
        } else {
            Some(feed::render(&posts, &self.config.feed_config()))
        };

        Ok(PipelineOutput {
            posts,
            rss_xml,
            sitemap_xml,
        })
    }
}
