//! Application layer - Use cases and orchestration

pub mod init;
pub mod list_tags;
pub mod manage_config;
pub mod record_memory;
pub mod remove_memory;
pub mod search_memories;
pub mod tag_memory;

pub use list_tags::{ListTagsService, TagListOptions, TagRanking};
pub use manage_config::ConfigService;
pub use record_memory::{RecordMemoryService, RecordOptions};
pub use remove_memory::{RemoveMemoryService, Removed};
pub use search_memories::{SearchOptions, SearchService};
pub use tag_memory::TagMemoryService;
