//! File system repository
//!
//! A journal is a directory holding `.cozy/config.toml` and one
//! `YYYY-MM-DD.toml` file per memory, either at the root or in any
//! non-hidden subdirectory.

use crate::domain::Memory;
use crate::error::{CozyError, Result};
use crate::infrastructure::Config;
use chrono::NaiveDate;
use log::debug;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// File name a memory for `date` is stored under
pub fn memory_filename(date: NaiveDate) -> String {
    format!("{}.toml", date.format("%Y-%m-%d"))
}

/// Date encoded in a memory file name, if it is one
pub fn date_from_filename(name: &str) -> Option<NaiveDate> {
    let stem = name.strip_suffix(".toml")?;
    NaiveDate::parse_from_str(stem, "%Y-%m-%d").ok()
}

/// Abstract repository for journal operations
pub trait JournalRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .cozy/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .cozy/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .cozy directory exists
    fn is_initialized(&self) -> bool;

    /// Create .cozy directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of JournalRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover journal root by walking up from current directory
    /// First checks COZY_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("COZY_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_cozy_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(CozyError::Config(format!(
                    "COZY_ROOT is set to '{}' but no .cozy directory found. \
                    Run 'cozy init' in that directory or unset COZY_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover journal root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_cozy_dir(&current) {
                debug!("event=discover root={}", current.display());
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(CozyError::NotCozyDirectory(start.to_path_buf())),
            }
        }
    }

    fn has_cozy_dir(path: &Path) -> bool {
        path.join(".cozy").is_dir()
    }
}

impl JournalRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_cozy_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let cozy_dir = self.root.join(".cozy");

        if cozy_dir.exists() {
            return Err(CozyError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&cozy_dir)?;
        Ok(())
    }
}

// Memory operations (not part of trait - filesystem-specific)
impl FileSystemRepository {
    /// Every memory file under the root, skipping hidden directories.
    ///
    /// Two files named for the same day are an error.
    fn memory_files(&self) -> Result<Vec<(NaiveDate, PathBuf)>> {
        let walker = WalkDir::new(&self.root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                if entry.depth() == 0 || !entry.file_type().is_dir() {
                    return true;
                }
                entry
                    .file_name()
                    .to_str()
                    .is_none_or(|name| !name.starts_with('.'))
            });

        let mut seen: HashMap<NaiveDate, PathBuf> = HashMap::new();
        let mut files = Vec::new();
        for entry in walker {
            let Ok(entry) = entry else {
                continue;
            };
            if !entry.file_type().is_file() {
                continue;
            }
            let Some(date) = entry.file_name().to_str().and_then(date_from_filename) else {
                continue;
            };
            let path = entry.into_path();
            if let Some(first) = seen.insert(date, path.clone()) {
                return Err(CozyError::DuplicateMemory {
                    date,
                    first,
                    second: path,
                });
            }
            files.push((date, path));
        }
        Ok(files)
    }

    fn locate(&self, date: NaiveDate) -> Result<Option<PathBuf>> {
        Ok(self
            .memory_files()?
            .into_iter()
            .find(|(d, _)| *d == date)
            .map(|(_, path)| path))
    }

    /// Decode the memory at `path`, which must record the day it is named for
    fn read_memory(named: NaiveDate, path: &Path) -> Result<Memory> {
        let contents = fs::read_to_string(path)?;
        let memory: Memory = toml::from_str(&contents)?;
        if memory.date() != named {
            return Err(CozyError::DateMismatch {
                path: path.to_path_buf(),
                named,
                stored: memory.date(),
            });
        }
        Ok(memory)
    }

    /// Load every memory, optionally limited to a date range, oldest first.
    ///
    /// A file that fails to decode aborts the listing with that error.
    pub fn list_memories(
        &self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<Vec<Memory>> {
        let mut memories = Vec::new();

        for (date, path) in self.memory_files()? {
            let memory = Self::read_memory(date, &path)?;
            if from.is_some_and(|f| date < f) || to.is_some_and(|t| date > t) {
                continue;
            }
            memories.push(memory);
        }

        memories.sort_by_key(Memory::date);
        debug!("event=list_memories count={}", memories.len());
        Ok(memories)
    }

    /// Load the memory recorded on `date`
    pub fn load_memory(&self, date: NaiveDate) -> Result<Memory> {
        let path = self.locate(date)?.ok_or(CozyError::MemoryNotFound(date))?;
        Self::read_memory(date, &path)
    }

    /// Load the memory of `date`, or start an empty one if none is recorded yet
    pub fn load_or_create_memory(&self, date: NaiveDate) -> Result<Memory> {
        match self.load_memory(date) {
            Err(CozyError::MemoryNotFound(_)) => {
                debug!("event=create_memory date={}", date);
                Ok(Memory::new(date))
            }
            other => other,
        }
    }

    /// Delete the file of the memory recorded on `date`
    pub fn delete_memory(&self, date: NaiveDate) -> Result<()> {
        let path = self.locate(date)?.ok_or(CozyError::MemoryNotFound(date))?;
        fs::remove_file(&path)?;
        debug!("event=delete_memory path={}", path.display());
        Ok(())
    }

    /// Write a memory back to its file, creating `YYYY-MM-DD.toml` at the root
    /// when it has none yet.
    ///
    /// Writes to a temp file in the same directory, then renames into place.
    pub fn save_memory(&self, memory: &Memory) -> Result<()> {
        let path = self
            .locate(memory.date())?
            .unwrap_or_else(|| self.root.join(memory_filename(memory.date())));
        let contents = toml::to_string(memory)?;

        let tmp_path = path.with_file_name(format!(
            "{}.cozy-tmp-{}",
            memory_filename(memory.date()),
            std::process::id()
        ));
        fs::write(&tmp_path, contents)?;

        if path.exists() {
            // On Windows, rename does not overwrite
            fs::remove_file(&path)?;
        }
        fs::rename(&tmp_path, &path)?;

        debug!("event=save_memory path={}", path.display());
        Ok(())
    }
}
