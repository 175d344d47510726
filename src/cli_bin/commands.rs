//! Command implementations
//!
//! The thin orchestration layer over the library: load configuration, run the
//! pipeline, write artifacts, decide the exit code. Artifact writes are
//! attempted independently so a failed sitemap never suppresses feed output,
//! and vice versa; the run still fails afterwards if anything could not be
//! written.

use anyhow::{bail, Context, Result};
use feedmill::io::source::{DirectorySource, DocumentSource};
use feedmill::io::writer::write_artifact;
use feedmill::pipeline::{ContentPipeline, PipelineOutput};
use feedmill::{core, SiteConfig};
use log::{error, info, warn};
use notify::{Event, EventKind, RecursiveMode, Watcher};
use std::path::Path;
use std::sync::mpsc;
use std::time::Duration;

/// Run the pipeline once and write both artifacts.
pub fn build(config_path: &Path) -> Result<()> {
    let config = load_config(config_path)?;
    let source = DirectorySource::new(&config.content.dir);
    let output = ContentPipeline::new(&config).run(&source)?;
    write_artifacts(&output, &config)
}

/// Build, then rebuild on changes to the content directory or config file.
pub fn watch(config_path: &Path) -> Result<()> {
    if let Err(e) = build(config_path) {
        error!("initial build failed: {e:#}");
    }

    let config = load_config(config_path)?;
    let (tx, rx) = mpsc::channel();
    let mut watcher =
        notify::recommended_watcher(tx).context("failed to create file watcher")?;

    if config.content.dir.exists() {
        watcher
            .watch(&config.content.dir, RecursiveMode::Recursive)
            .with_context(|| format!("failed to watch {}", config.content.dir.display()))?;
        info!("watching {} for changes", config.content.dir.display());
    } else {
        warn!(
            "content directory {} does not exist; nothing to watch",
            config.content.dir.display()
        );
    }
    if config_path.exists() {
        watcher
            .watch(config_path, RecursiveMode::NonRecursive)
            .with_context(|| format!("failed to watch {}", config_path.display()))?;
    }

    loop {
        match rx.recv() {
            Ok(Ok(event)) if is_relevant(&event) => {
                // Editors fire bursts of events per save; drain them before
                // rebuilding once.
                while rx.recv_timeout(Duration::from_millis(200)).is_ok() {}
                info!("change detected; rebuilding");
                if let Err(e) = build(config_path) {
                    error!("rebuild failed: {e:#}");
                }
            }
            Ok(Ok(_)) => {}
            Ok(Err(e)) => warn!("watch error: {e}"),
            Err(_) => break,
        }
    }

    Ok(())
}

/// Parse every discovered document and report per-file status.
pub fn check(config_path: &Path) -> Result<()> {
    let config = load_config(config_path)?;
    let documents = DirectorySource::new(&config.content.dir).enumerate()?;

    let mut invalid = 0usize;
    for document in &documents {
        match core::front_matter::parse(&document.id, &document.raw) {
            Ok(_) => println!("{}: OK", document.id),
            Err(e) => {
                invalid += 1;
                println!("{}: Invalid ({})", document.id, e);
            }
        }
    }

    if invalid > 0 {
        bail!("{invalid} of {} documents are malformed", documents.len());
    }
    Ok(())
}

/// Print derived, sorted post records as JSON for downstream consumers.
pub fn posts(config_path: &Path) -> Result<()> {
    let config = load_config(config_path)?;
    let source = DirectorySource::new(&config.content.dir);
    let output = ContentPipeline::new(&config).run(&source)?;
    println!("{}", serde_json::to_string_pretty(&output.posts)?);
    Ok(())
}

fn load_config(path: &Path) -> Result<SiteConfig> {
    if path.exists() {
        Ok(SiteConfig::load(path)?)
    } else {
        warn!(
            "configuration file {} not found; using defaults",
            path.display()
        );
        Ok(SiteConfig::default())
    }
}

fn write_artifacts(output: &PipelineOutput, config: &SiteConfig) -> Result<()> {
    let mut failed = false;

    let sitemap_path = config.content.output_dir.join("sitemap.xml");
    if let Err(e) = write_artifact("sitemap", &sitemap_path, &output.sitemap_xml) {
        error!("{e}");
        failed = true;
    }

    match &output.rss_xml {
        Some(rss) => {
            let primary = config.content.output_dir.join(&config.feed.path);
            if let Err(e) = write_artifact("feed", &primary, rss) {
                error!("{e}");
                failed = true;
            }
            if let Some(secondary_dir) = &config.feed.secondary_dir {
                let secondary = secondary_dir.join(&config.feed.path);
                if let Err(e) = write_artifact("feed", &secondary, rss) {
                    error!("{e}");
                    failed = true;
                }
            }
        }
        None => info!("no feed to write"),
    }

    if failed {
        bail!("one or more artifacts could not be written");
    }
    Ok(())
}

fn is_relevant(event: &Event) -> bool {
    matches!(
        event.kind,
        EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
    )
}
