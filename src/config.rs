//! Site configuration
//!
//! Loaded once per run from a TOML file (`feedmill.toml` by default). Every
//! field has a default so a missing file still yields a usable configuration
//! for local experimentation; the binary warns when it falls back.

use crate::error::{FeedmillError, Result};
use crate::render::feed::FeedConfig;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Top-level configuration: `[site]`, `[content]`, and `[feed]` sections
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    pub site: SiteSection,
    pub content: ContentSection,
    pub feed: FeedSection,
}

/// `[site]`: identity of the published site
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteSection {
    pub url: String,
    pub title: String,
    pub description: String,
    pub language: String,
    pub copyright: String,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            url: "https://example.com".to_string(),
            title: String::new(),
            description: String::new(),
            language: "en".to_string(),
            copyright: String::new(),
        }
    }
}

/// `[content]`: where documents come from and where artifacts go
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ContentSection {
    pub dir: PathBuf,
    pub output_dir: PathBuf,
}

impl Default for ContentSection {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("content/blog"),
            output_dir: PathBuf::from("public"),
        }
    }
}

/// `[feed]`: feed file name and the optional secondary distribution directory
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct FeedSection {
    pub path: String,
    pub secondary_dir: Option<PathBuf>,
}

impl Default for FeedSection {
    fn default() -> Self {
        Self {
            path: "rss.xml".to_string(),
            secondary_dir: None,
        }
    }
}

impl SiteConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .map_err(|e| FeedmillError::config(path, e.to_string()))?;
        toml::from_str(&text).map_err(|e| FeedmillError::config(path, e.to_string()))
    }

    /// Project the channel-level feed configuration for this run
    pub fn feed_config(&self) -> FeedConfig {
        let site_url = self.site.url.trim_end_matches('/');
        FeedConfig {
            site_url: site_url.to_string(),
            feed_url: format!("{site_url}/{}", self.feed.path),
            title: self.site.title.clone(),
            description: self.site.description.clone(),
            language: self.site.language.clone(),
            copyright: self.site.copyright.clone(),
        }
    }
}
