//! Artifact writing
//!
//! Writes rendered XML to its destination, creating parent directories as
//! needed. Each artifact fails independently: the caller decides whether a
//! failed sitemap should sink the build, and a sitemap failure never
//! suppresses feed output or vice versa.

use crate::error::{FeedmillError, Result};
use log::info;
use std::fs;
use std::path::Path;

/// Write one rendered artifact to `path`.
///
/// `artifact` names the output ("feed", "sitemap") for error and log
/// messages.
pub fn write_artifact(artifact: &str, path: &Path, xml: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| FeedmillError::render_target_unwritable(artifact, path, e))?;
    }
    fs::write(path, xml)
        .map_err(|e| FeedmillError::render_target_unwritable(artifact, path, e))?;

    info!("wrote {artifact} to {}", path.display());
    Ok(())
}
