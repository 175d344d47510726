pub mod source;
pub mod writer;

pub use source::{DirectorySource, DocumentSource, ManifestSource, SourceDocument};
pub use writer::write_artifact;
