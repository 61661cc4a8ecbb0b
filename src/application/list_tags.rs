//! List tags use case

use crate::domain::tags::TagCollection;
use crate::domain::Memory;
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, JournalRepository};
use chrono::NaiveDate;

/// Order in which tags are listed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TagRanking {
    /// Every distinct tag, sorted by name
    #[default]
    Alphabetical,
    /// Most frequent first; `None` uses the configured limit
    MostUsed(Option<usize>),
    /// Least frequent first; `None` uses the configured limit
    LeastUsed(Option<usize>),
}

#[derive(Debug, Clone, Default)]
pub struct TagListOptions {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub ranking: TagRanking,
}

/// Rank the tags of `memories`, pairing each with its frequency.
pub fn rank_tags(
    memories: &[Memory],
    ranking: TagRanking,
    default_limit: usize,
) -> Vec<(String, usize)> {
    let frequency = memories.raw_tags_frequency();
    let with_count = |tags: Vec<String>| -> Vec<(String, usize)> {
        tags.into_iter()
            .map(|tag| {
                let count = frequency.get(&tag).copied().unwrap_or_default();
                (tag, count)
            })
            .collect()
    };

    match ranking {
        TagRanking::Alphabetical => {
            let mut tags: Vec<String> = memories.unique_raw_tags().into_iter().collect();
            tags.sort();
            with_count(tags)
        }
        TagRanking::MostUsed(limit) => {
            with_count(memories.most_used_raw_tags(limit.unwrap_or(default_limit)))
        }
        TagRanking::LeastUsed(limit) => {
            with_count(memories.least_used_raw_tags(limit.unwrap_or(default_limit)))
        }
    }
}

/// Service for listing the tags used across memories.
pub struct ListTagsService {
    repository: FileSystemRepository,
}

impl ListTagsService {
    /// Create a new list tags service.
    pub fn new(repository: FileSystemRepository) -> Self {
        Self { repository }
    }

    /// Execute tag listing with optional date filters.
    pub fn execute(&self, options: &TagListOptions) -> Result<Vec<(String, usize)>> {
        let config = self.repository.load_config()?;
        let memories = self.repository.list_memories(options.from, options.to)?;
        Ok(rank_tags(&memories, options.ranking, config.tag_limit))
    }
}
