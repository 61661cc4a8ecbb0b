//! Configuration management

use crate::domain::tags::{Match, DEFAULT_TAG_LIMIT};
use crate::error::{CozyError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

fn default_tag_limit() -> usize {
    DEFAULT_TAG_LIMIT
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Match policy used by `cozy search` when `--match` is not given
    #[serde(default)]
    pub default_match: Match,

    /// Number of tags shown by `cozy tags --most/--least` without a value
    #[serde(default = "default_tag_limit")]
    pub tag_limit: usize,

    pub created: DateTime<Utc>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_match: Match::default(),
            tag_limit: DEFAULT_TAG_LIMIT,
            created: Utc::now(),
        }
    }
}

impl Config {
    /// Load config from .cozy/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".cozy").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                CozyError::NotCozyDirectory(path.to_path_buf())
            } else {
                CozyError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| CozyError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .cozy/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let cozy_dir = path.join(".cozy");
        let config_path = cozy_dir.join("config.toml");

        if !cozy_dir.exists() {
            fs::create_dir(&cozy_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| CozyError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }
}
