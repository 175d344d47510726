//! Error types for the feedmill library
//!
//! This module provides the error taxonomy for the content pipeline: malformed
//! documents (recoverable per document), unavailable sources, unwritable render
//! targets, and configuration failures.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for all library operations
#[derive(Error, Debug)]
pub enum FeedmillError {
    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Front matter delimiters absent or the header block is unparseable.
    /// Scoped to a single document; callers skip the document, not the run.
    #[error("malformed document {id}: {reason}")]
    MalformedDocument { id: String, reason: String },

    /// The document source (directory or manifest) cannot be enumerated at all
    #[error("document source unavailable: {path}: {reason}")]
    SourceUnavailable { path: PathBuf, reason: String },

    /// A render target could not be written. Fatal for that artifact only;
    /// a sitemap failure never blocks feed output or vice versa.
    #[error("cannot write {artifact} to {path}: {source}")]
    RenderTargetUnwritable {
        artifact: String,
        path: PathBuf,
        source: std::io::Error,
    },

    /// Site configuration file could not be read or parsed
    #[error("invalid configuration {path}: {reason}")]
    Config { path: PathBuf, reason: String },
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, FeedmillError>;

impl FeedmillError {
    /// Create a new malformed document error
    pub fn malformed_document(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedDocument {
            id: id.into(),
            reason: reason.into(),
        }
    }

    /// Create a new source unavailable error
    pub fn source_unavailable(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::SourceUnavailable {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a new render target unwritable error
    pub fn render_target_unwritable(
        artifact: impl Into<String>,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::RenderTargetUnwritable {
            artifact: artifact.into(),
            path: path.into(),
            source,
        }
    }

    /// Create a new configuration error
    pub fn config(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Whether this error is scoped to a single document. Document-scoped
    /// errors are caught at the pipeline boundary and logged; everything else
    /// propagates to the build step.
    pub fn is_document_scoped(&self) -> bool {
        matches!(self, Self::MalformedDocument { .. })
    }
}
