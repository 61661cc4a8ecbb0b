//! Search memories use case

use crate::domain::tags::{Match, SearchQuery, TagCollection};
use crate::domain::Memory;
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, JournalRepository};
use chrono::NaiveDate;
use log::debug;

/// Options for searching memories
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    /// Tags to match against, in the order given
    pub tags: Vec<String>,

    /// Words that must each be a tag of the memory or appear in its text
    pub terms: Vec<String>,

    /// How `tags` are matched; falls back to the configured default
    pub match_policy: Option<Match>,

    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl SearchOptions {
    /// Add the hashtags and words of free-form search text.
    pub fn with_query(mut self, text: &str) -> Self {
        let query = SearchQuery::parse(text);
        if query.is_empty() {
            return self;
        }
        self.tags.extend(query.tags);
        self.terms.extend(query.terms);
        self
    }
}

/// Filter `memories` by tags and terms, keeping their order.
///
/// With no tags the tag filter is skipped entirely, so an empty `Any`
/// query does not reject everything.
pub fn filter_memories<'a>(
    memories: &'a [Memory],
    tags: &[String],
    terms: &[String],
    policy: Match,
) -> Vec<&'a Memory> {
    let candidates: Vec<&Memory> = if tags.is_empty() {
        memories.iter().collect()
    } else {
        memories.tagged_with_raw_tags(tags, policy)
    };

    candidates
        .into_iter()
        .filter(|memory| {
            terms
                .iter()
                .all(|term| memory.tagged_with(term) || memory.contains(term))
        })
        .collect()
}

/// Service for searching memories by tag, text and date.
pub struct SearchService {
    repository: FileSystemRepository,
}

impl SearchService {
    pub fn new(repository: FileSystemRepository) -> Self {
        Self { repository }
    }

    /// Matching memories, oldest first.
    pub fn execute(&self, options: &SearchOptions) -> Result<Vec<Memory>> {
        let config = self.repository.load_config()?;
        let policy = options.match_policy.unwrap_or(config.default_match);
        let memories = self.repository.list_memories(options.from, options.to)?;

        let found: Vec<Memory> = filter_memories(&memories, &options.tags, &options.terms, policy)
            .into_iter()
            .cloned()
            .collect();

        debug!(
            "event=search tags={} terms={} policy={} scanned={} found={}",
            options.tags.len(),
            options.terms.len(),
            policy,
            memories.len(),
            found.len()
        );
        Ok(found)
    }
}
