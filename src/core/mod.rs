//! Core content pipeline types and transforms
//!
//! Everything in this module is pure: parsing a header, deriving a post
//! record, reducing markdown to plain text. No file system, no clock beyond
//! the date-default substitution, no output targets.

pub mod front_matter;
pub mod plain_text;
pub mod post;
pub mod value;

pub use front_matter::parse;
pub use plain_text::to_plain_text;
pub use post::{derive, PostRecord};
pub use value::{FrontMatter, Value};
