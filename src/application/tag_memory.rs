//! Tag memory use case

use crate::domain::tags::{parse_tag, Tag, Taggable};
use crate::domain::Memory;
use crate::error::{CozyError, Result};
use crate::infrastructure::FileSystemRepository;
use chrono::NaiveDate;
use log::info;

/// Service for appending tags to a recorded memory.
pub struct TagMemoryService {
    repository: FileSystemRepository,
}

impl TagMemoryService {
    pub fn new(repository: FileSystemRepository) -> Self {
        Self { repository }
    }

    /// Append `tags` to the memory of `date` in the order given and save it.
    ///
    /// A single leading `#` is dropped, so `#home` and `home` are the same tag.
    /// Nothing is written if any tag is invalid.
    pub fn execute(&self, date: NaiveDate, tags: &[String]) -> Result<Memory> {
        let names: Vec<&str> = tags
            .iter()
            .map(|tag| parse_tag(tag).ok_or_else(|| CozyError::InvalidTag(tag.clone())))
            .collect::<Result<_>>()?;

        let mut memory = self.repository.load_memory(date)?;
        for name in names {
            memory.add_tag(Tag::new(name.to_string()));
        }
        self.repository.save_memory(&memory)?;

        info!("event=tag_memory date={} added={}", date, tags.len());
        Ok(memory)
    }
}
