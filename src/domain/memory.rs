//! Memory: one journal entry per day
//!
//! A memory is made of ordered chunks (text, photos, sketches, voice notes)
//! plus the tags the user assigned to it.

use super::tags::{Tag, Taggable};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One piece of a memory. `index` is its position within the memory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Chunk {
    Text { index: usize, text: String },
    Photo { index: usize, path: PathBuf },
    /// A hand-drawn sketch
    Graffiti { index: usize, path: PathBuf },
    Voice { index: usize, url: String },
}

impl Chunk {
    pub fn index(&self) -> usize {
        match self {
            Chunk::Text { index, .. }
            | Chunk::Photo { index, .. }
            | Chunk::Graffiti { index, .. }
            | Chunk::Voice { index, .. } => *index,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Chunk::Text { .. } => "text",
            Chunk::Photo { .. } => "photo",
            Chunk::Graffiti { .. } => "graffiti",
            Chunk::Voice { .. } => "voice",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Memory {
    date: NaiveDate,

    /// Index handed to the next inserted chunk. Never lowered by removal.
    #[serde(default)]
    next_index: usize,

    #[serde(default)]
    tags: Vec<Tag<Memory>>,

    #[serde(default, rename = "chunk")]
    chunks: Vec<Chunk>,
}

impl Taggable for Memory {
    type RawTag = String;

    fn tags(&self) -> &[Tag<Self>] {
        &self.tags
    }

    fn tags_mut(&mut self) -> &mut Vec<Tag<Self>> {
        &mut self.tags
    }
}

impl Memory {
    /// Create an empty memory for the given day
    pub fn new(date: NaiveDate) -> Self {
        Memory {
            date,
            next_index: 0,
            tags: Vec::new(),
            chunks: Vec::new(),
        }
    }

    pub fn with_tags<I, S>(date: NaiveDate, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut memory = Memory::new(date);
        memory.tags = tags.into_iter().map(|t| Tag::new(t.into())).collect();
        memory
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    /// Chunks ordered by their index
    pub fn sorted_chunks(&self) -> Vec<&Chunk> {
        let mut chunks: Vec<&Chunk> = self.chunks.iter().collect();
        chunks.sort_by_key(|c| c.index());
        chunks
    }

    /// Text of every text chunk, in index order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.sorted_chunks().into_iter().filter_map(|c| match c {
            Chunk::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Claim the next chunk index. A file without a stored counter starts
    /// past its highest chunk.
    fn take_index(&mut self) -> usize {
        let floor = self
            .chunks
            .iter()
            .map(Chunk::index)
            .max()
            .map_or(0, |max| max + 1);
        let index = self.next_index.max(floor);
        self.next_index = index + 1;
        index
    }

    /// Append a text chunk, returning its index
    pub fn insert_text(&mut self, text: impl Into<String>) -> usize {
        let index = self.take_index();
        self.chunks.push(Chunk::Text {
            index,
            text: text.into(),
        });
        index
    }

    pub fn insert_photo(&mut self, path: impl Into<PathBuf>) -> usize {
        let index = self.take_index();
        self.chunks.push(Chunk::Photo {
            index,
            path: path.into(),
        });
        index
    }

    pub fn insert_graffiti(&mut self, path: impl Into<PathBuf>) -> usize {
        let index = self.take_index();
        self.chunks.push(Chunk::Graffiti {
            index,
            path: path.into(),
        });
        index
    }

    pub fn insert_voice(&mut self, url: impl Into<String>) -> usize {
        let index = self.take_index();
        self.chunks.push(Chunk::Voice {
            index,
            url: url.into(),
        });
        index
    }

    /// Remove the chunk at `index`, if any
    pub fn remove_chunk(&mut self, index: usize) -> Option<Chunk> {
        let pos = self.chunks.iter().position(|c| c.index() == index)?;
        Some(self.chunks.remove(pos))
    }

    /// Whether `term` is exactly one of this memory's tags
    pub fn tagged_with(&self, term: &str) -> bool {
        self.tags.iter().any(|t| t.raw_value() == term)
    }

    /// Whether any text chunk contains `term`, ignoring case
    pub fn contains(&self, term: &str) -> bool {
        let needle = term.to_lowercase();
        self.texts().any(|text| text.to_lowercase().contains(&needle))
    }
}
