//! Error types for cozy

use chrono::NaiveDate;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the cozy application
#[derive(Debug, Error)]
pub enum CozyError {
    #[error("Not a cozy directory: {0}")]
    NotCozyDirectory(PathBuf),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("No memory recorded on {0}")]
    MemoryNotFound(NaiveDate),

    #[error("Invalid match policy: {0}")]
    InvalidMatch(String),

    #[error("Invalid tag: {0}")]
    InvalidTag(String),

    #[error("Memory of {date} has no chunk {index}")]
    ChunkNotFound { date: NaiveDate, index: usize },

    #[error("More than one memory file for {date}: {first} and {second}")]
    DuplicateMemory {
        date: NaiveDate,
        first: PathBuf,
        second: PathBuf,
    },

    #[error("{path} is named for {named} but records {stored}")]
    DateMismatch {
        path: PathBuf,
        named: NaiveDate,
        stored: NaiveDate,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Logging error: {0}")]
    Logging(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl CozyError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CozyError::NotCozyDirectory(_) => 2,
            CozyError::InvalidDate(_) => 3,
            CozyError::MemoryNotFound(_) | CozyError::ChunkNotFound { .. } => 4,
            CozyError::InvalidMatch(_) => 5,
            CozyError::InvalidTag(_) => 6,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            CozyError::NotCozyDirectory(path) => {
                format!(
                    "Not a cozy directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'cozy init' in this directory to start a journal\n\
                    • Navigate to an existing cozy directory\n\
                    • Set COZY_ROOT environment variable to your journal path",
                    path.display()
                )
            }
            CozyError::InvalidDate(date) => {
                format!(
                    "Invalid date: '{}'\n\n\
                    Expected format: YYYY-MM-DD\n\
                    Example: cozy search --from 2025-01-01 --to 2025-01-31",
                    date
                )
            }
            CozyError::MemoryNotFound(date) => {
                format!(
                    "No memory recorded on {}\n\n\
                    Suggestions:\n\
                    • Check the date with 'cozy search'\n\
                    • Memories are stored as YYYY-MM-DD.toml in the journal root",
                    date.format("%Y-%m-%d")
                )
            }
            CozyError::InvalidMatch(value) => {
                format!(
                    "Invalid match policy: '{}'\n\n\
                    Valid policies: all, any, none\n\
                    Example: cozy search --tag travel --tag family --match all",
                    value
                )
            }
            CozyError::InvalidTag(tag) => {
                format!(
                    "Invalid tag: '{}'\n\n\
                    Tags are letters, digits, '-' and '_', with an optional leading #\n\
                    Example: cozy tag 2025-01-17 travel #family",
                    tag
                )
            }
            CozyError::DuplicateMemory { .. } | CozyError::DateMismatch { .. } => {
                format!(
                    "{}\n\n\
                    Each day has exactly one YYYY-MM-DD.toml file whose `date` matches its name.\n\
                    Merge or rename the files, then try again.",
                    self
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using CozyError
pub type Result<T> = std::result::Result<T, CozyError>;
