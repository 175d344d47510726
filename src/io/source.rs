//! Document sources
//!
//! The pipeline never knows where document bytes came from. A
//! [`DocumentSource`] enumerates [`SourceDocument`]s; the two shipped
//! implementations walk a content directory or read a fixed manifest of known
//! file names, and both converge on the same document shape.

use crate::core::post::CONTENT_EXTENSIONS;
use crate::error::{FeedmillError, Result};
use log::warn;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use walkdir::WalkDir;

/// The raw content of one discoverable unit, immutable once read
#[derive(Debug, Clone)]
pub struct SourceDocument {
    /// File name, e.g. `hello-world.md`
    pub id: String,
    /// Raw UTF-8 text
    pub raw: String,
    /// Filesystem modification time, when available
    pub modified: Option<SystemTime>,
}

/// Where documents come from
pub trait DocumentSource {
    /// Enumerate all documents. Per-document read failures are logged and
    /// skipped; an error here means the source as a whole is unavailable.
    fn enumerate(&self) -> Result<Vec<SourceDocument>>;
}

/// Filesystem-backed source: walks a directory for content files, in
/// file-name order so runs are deterministic
#[derive(Debug, Clone)]
pub struct DirectorySource {
    dir: PathBuf,
}

impl DirectorySource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl DocumentSource for DirectorySource {
    fn enumerate(&self) -> Result<Vec<SourceDocument>> {
        if !self.dir.exists() {
            // Missing content directory is a soft condition: empty blog,
            // static-only sitemap.
            warn!(
                "content directory {} does not exist; no documents to process",
                self.dir.display()
            );
            return Ok(Vec::new());
        }
        if !self.dir.is_dir() {
            return Err(FeedmillError::source_unavailable(
                &self.dir,
                "not a directory",
            ));
        }

        let mut documents = Vec::new();
        for entry in WalkDir::new(&self.dir).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("skipping unreadable entry under {}: {e}", self.dir.display());
                    continue;
                }
            };
            if !entry.file_type().is_file() || !is_content_file(entry.path()) {
                continue;
            }
            match read_document(entry.path()) {
                Ok(document) => documents.push(document),
                Err(e) => warn!("skipping {}: {e}", entry.path().display()),
            }
        }
        Ok(documents)
    }
}

/// Manifest-backed source: a fixed list of known file names under a root,
/// for callers that cannot enumerate a directory
#[derive(Debug, Clone)]
pub struct ManifestSource {
    root: PathBuf,
    files: Vec<String>,
}

impl ManifestSource {
    pub fn new(root: impl Into<PathBuf>, files: Vec<String>) -> Self {
        Self {
            root: root.into(),
            files,
        }
    }
}

impl DocumentSource for ManifestSource {
    fn enumerate(&self) -> Result<Vec<SourceDocument>> {
        let mut documents = Vec::new();
        for name in &self.files {
            let path = self.root.join(name);
            match read_document(&path) {
                Ok(document) => documents.push(document),
                Err(e) => warn!("skipping {}: {e}", path.display()),
            }
        }
        Ok(documents)
    }
}

/// Check whether a path carries a recognized content extension
pub fn is_content_file(path: &Path) -> bool {
    path.extension()
        .map(|ext| {
            let ext = ext.to_string_lossy().to_lowercase();
            CONTENT_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

fn read_document(path: &Path) -> Result<SourceDocument> {
    let raw = fs::read_to_string(path)?;
    let id = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let modified = fs::metadata(path).and_then(|m| m.modified()).ok();
    Ok(SourceDocument { id, raw, modified })
}
