//! Remove memory use case

use crate::domain::{Chunk, Memory};
use crate::error::{CozyError, Result};
use crate::infrastructure::FileSystemRepository;
use chrono::NaiveDate;
use log::info;

/// What a removal took away
#[derive(Debug, Clone, PartialEq)]
pub enum Removed {
    /// One chunk, with the memory as it is now
    Chunk { chunk: Chunk, memory: Memory },
    /// The whole memory of the day
    Memory(NaiveDate),
}

/// Service for removing a chunk from a memory, or the memory itself.
pub struct RemoveMemoryService {
    repository: FileSystemRepository,
}

impl RemoveMemoryService {
    pub fn new(repository: FileSystemRepository) -> Self {
        Self { repository }
    }

    /// Remove chunk `chunk` of the memory of `date`, or delete the memory
    /// when no chunk is given.
    pub fn execute(&self, date: NaiveDate, chunk: Option<usize>) -> Result<Removed> {
        let Some(index) = chunk else {
            self.repository.delete_memory(date)?;
            info!("event=delete_memory date={}", date);
            return Ok(Removed::Memory(date));
        };

        let mut memory = self.repository.load_memory(date)?;
        let chunk = memory
            .remove_chunk(index)
            .ok_or(CozyError::ChunkNotFound { date, index })?;
        self.repository.save_memory(&memory)?;

        info!("event=remove_chunk date={} index={}", date, index);
        Ok(Removed::Chunk { chunk, memory })
    }
}
