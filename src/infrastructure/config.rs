//! Configuration management

use crate::error::{NewsdeskError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const DEFAULT_AUTHOR_FILE: &str = "author.json";
const DEFAULT_NEWS_FILE: &str = "news.json";

/// Process-wide configuration: the data file names and the desk
/// creation time. Loaded once at startup and never mutated after.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub author_file: String,
    pub news_file: String,
    pub created: DateTime<Utc>,
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            author_file: DEFAULT_AUTHOR_FILE.to_string(),
            news_file: DEFAULT_NEWS_FILE.to_string(),
            created: Utc::now(),
        }
    }

    /// Load config from .newsdesk/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".newsdesk").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                NewsdeskError::NotInitialized(path.to_path_buf())
            } else {
                NewsdeskError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| NewsdeskError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .newsdesk/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let desk_dir = path.join(".newsdesk");
        let config_path = desk_dir.join("config.toml");

        // Ensure .newsdesk directory exists
        if !desk_dir.exists() {
            fs::create_dir(&desk_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| NewsdeskError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_new_config_defaults() {
        let config = Config::new();
        assert_eq!(config.author_file, "author.json");
        assert_eq!(config.news_file, "news.json");
    }

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let config = Config::new();

        // Save config
        config.save_to_dir(temp.path()).unwrap();

        // Check .newsdesk directory was created
        assert!(temp.path().join(".newsdesk").exists());
        assert!(temp.path().join(".newsdesk/config.toml").exists());

        // Load config
        let loaded = Config::load_from_dir(temp.path()).unwrap();

        // Verify it matches
        assert_eq!(loaded.author_file, config.author_file);
        assert_eq!(loaded.news_file, config.news_file);
        assert_eq!(loaded.created, config.created);
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();

        // Try to load config from directory without .newsdesk
        let result = Config::load_from_dir(temp.path());

        assert!(result.is_err());
        match result.unwrap_err() {
            NewsdeskError::NotInitialized(_) => {}
            _ => panic!("Expected NotInitialized error"),
        }
    }
}
