//! Tag system

pub mod parser;
pub mod query;
pub mod tag;

// Re-export main types
pub use parser::{parse_tag, SearchQuery};
pub use query::{Match, TagCollection, DEFAULT_TAG_LIMIT};
pub use tag::{Tag, Taggable};
