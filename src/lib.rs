//! feedmill: a library for turning front-matter markdown posts into RSS feeds and sitemaps
//!
//! This library is the single canonical content pipeline behind a blog-bearing
//! site: it parses `---`-delimited front matter headers, derives normalized
//! post metadata, and renders an RSS 2.0 feed and a sitemaps.org sitemap. It
//! exists to replace several near-identical copies of the same logic (a build
//! script, a bundler hook, a client loader) with one module those callers all
//! consume.
//!
//! # Features
//!
//! - **A closed front matter value model** — string, boolean, sequence,
//!   nested mapping — handled by exhaustive matching, not runtime shape checks
//! - **Total metadata derivation** with default substitution for every field;
//!   one bad document never aborts the rest of a run
//! - **Byte-stable renderers**: output changes only when content changes,
//!   aside from the build timestamps the formats require
//! - **Source abstraction**: documents come from a directory walk or a fixed
//!   manifest, and both produce identical records
//!
//! # Quick Start
//!
//! ## Parsing and deriving
//!
//! ```rust
//! use feedmill::core::{front_matter, post};
//!
//! let text = "---\ntitle: \"Hello World\"\ndate: 2024-01-15\n---\nSome **bold** text.";
//! let (header, body) = front_matter::parse("hello-world.md", text).unwrap();
//! let record = post::derive("hello-world.md", &header, &body);
//!
//! assert_eq!(record.slug, "hello-world");
//! assert_eq!(record.title, "Hello World");
//! assert_eq!(record.read_time, "1 min read");
//! ```
//!
//! ## Running the whole pipeline
//!
//! ```rust,no_run
//! use feedmill::{ContentPipeline, DirectorySource, Result, SiteConfig};
//!
//! fn main() -> Result<()> {
//!     let config = SiteConfig::default();
//!     let source = DirectorySource::new("content/blog");
//!     let output = ContentPipeline::new(&config).run(&source)?;
//!
//!     println!("{} posts", output.posts.len());
//!     if let Some(rss) = &output.rss_xml {
//!         println!("feed is {} bytes", rss.len());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - [`core`]: pure transforms — header parsing, metadata derivation,
//!   markdown-to-plain-text reduction
//! - [`render`]: side-effect-free XML assembly for the feed and the sitemap
//! - [`io`]: document sources and artifact writing
//! - [`pipeline`]: the orchestration tying the above together
//! - [`config`]: TOML site configuration
//! - [`error`]: the error taxonomy and propagation policy

// Public API exports
pub use error::{FeedmillError, Result};

// Core types
pub use crate::core::{FrontMatter, PostRecord, Value};

// Configuration and orchestration
pub use config::SiteConfig;
pub use io::source::{DirectorySource, DocumentSource, ManifestSource, SourceDocument};
pub use pipeline::{ContentPipeline, PipelineOutput};
pub use render::feed::FeedConfig;
pub use render::sitemap::{ChangeFreq, SitemapEntry};

// Internal modules
pub mod config;
pub mod core;
pub mod error;
pub mod io;
pub mod pipeline;
pub mod render;
pub mod utils;

// CLI components are available only in the binary, not as part of the library API
