//! Record memory use case

use crate::domain::tags::{parse_tag, Tag, Taggable};
use crate::domain::Memory;
use crate::error::{CozyError, Result};
use crate::infrastructure::FileSystemRepository;
use chrono::NaiveDate;
use log::info;
use std::path::PathBuf;

/// Content to add to the memory of a day
#[derive(Debug, Clone, Default)]
pub struct RecordOptions {
    pub texts: Vec<String>,
    /// Photo file paths
    pub photos: Vec<PathBuf>,
    /// Sketch file paths
    pub graffiti: Vec<PathBuf>,
    /// Voice note locations
    pub voices: Vec<String>,
    pub tags: Vec<String>,
}

impl RecordOptions {
    fn chunk_count(&self) -> usize {
        self.texts.len() + self.photos.len() + self.graffiti.len() + self.voices.len()
    }
}

/// Service for adding chunks and tags to the memory of a day.
pub struct RecordMemoryService {
    repository: FileSystemRepository,
}

impl RecordMemoryService {
    pub fn new(repository: FileSystemRepository) -> Self {
        Self { repository }
    }

    /// Fetch the memory of `date`, or start it, then append texts, photos,
    /// sketches and voice notes in that order, followed by the tags.
    ///
    /// With nothing to add, an empty memory is still recorded for the day.
    pub fn execute(&self, date: NaiveDate, options: &RecordOptions) -> Result<Memory> {
        let tags: Vec<&str> = options
            .tags
            .iter()
            .map(|tag| parse_tag(tag).ok_or_else(|| CozyError::InvalidTag(tag.clone())))
            .collect::<Result<_>>()?;

        let mut memory = self.repository.load_or_create_memory(date)?;
        for text in &options.texts {
            memory.insert_text(text.as_str());
        }
        for path in &options.photos {
            memory.insert_photo(path.as_path());
        }
        for path in &options.graffiti {
            memory.insert_graffiti(path.as_path());
        }
        for url in &options.voices {
            memory.insert_voice(url.as_str());
        }
        for tag in tags {
            memory.add_tag(Tag::new(tag.to_string()));
        }
        self.repository.save_memory(&memory)?;

        info!(
            "event=record_memory date={} chunks={} tags={}",
            date,
            options.chunk_count(),
            options.tags.len()
        );
        Ok(memory)
    }
}
