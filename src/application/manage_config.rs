//! Config management use case

use crate::domain::tags::Match;
use crate::error::{CozyError, Result};
use crate::infrastructure::{Config, FileSystemRepository, JournalRepository};

/// Service for managing journal configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "default_match" => Ok(config.default_match.to_string()),
            "tag_limit" => Ok(config.tag_limit.to_string()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(CozyError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: default_match, tag_limit, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "default_match" => {
                config.default_match = value.parse::<Match>()?;
            }
            "tag_limit" => {
                config.tag_limit = value.parse().map_err(|_| {
                    CozyError::Config(format!("tag_limit must be a whole number, got '{}'", value))
                })?;
            }
            "created" => {
                return Err(CozyError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(CozyError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: default_match, tag_limit",
                    key
                )));
            }
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}
