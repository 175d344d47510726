//! Command-line argument definitions
//!
//! Clean clap-derive argument parsing, kept separate from the command
//! implementations in [`super::commands`].

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI application
#[derive(Parser)]
#[command(
    name = "feedmill",
    version,
    about = "Build RSS feeds and sitemaps from front-matter markdown posts",
    long_about = "feedmill discovers front-matter markdown documents, derives normalized \
                  post metadata from them, and renders an RSS 2.0 feed plus an XML sitemap. \
                  It runs once as a build step or continuously in watch mode."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the site configuration file
    #[arg(short, long, global = true, default_value = "feedmill.toml")]
    pub config: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Run the pipeline once and write the feed and sitemap
    Build,
    /// Build, then rebuild whenever the content directory changes
    Watch,
    /// Parse every discovered document and report problems
    Check,
    /// Print the derived, sorted post records as JSON
    Posts,
}
