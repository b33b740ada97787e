//! Workspace discovery and store wiring

use crate::domain::{Author, News};
use crate::error::{NewsdeskError, Result};
use crate::infrastructure::repository::Repository;
use crate::infrastructure::Config;
use std::fs;
use std::path::{Path, PathBuf};

/// A directory holding one desk: the `.newsdesk/` marker with its
/// config, plus the per-entity data files named by that config.
#[derive(Debug, Clone)]
pub struct Workspace {
    pub root: PathBuf,
}

impl Workspace {
    /// Create a workspace with the given root directory
    pub fn new(root: PathBuf) -> Self {
        Workspace { root }
    }

    /// Discover the desk root by walking up from the current directory.
    /// First checks the NEWSDESK_ROOT environment variable, then falls
    /// back to discovery.
    pub fn discover() -> Result<Self> {
        // 1. Check NEWSDESK_ROOT environment variable first
        if let Ok(root_path) = std::env::var("NEWSDESK_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_desk_dir(&path) {
                return Ok(Workspace::new(path));
            } else {
                return Err(NewsdeskError::Config(format!(
                    "NEWSDESK_ROOT is set to '{}' but no .newsdesk directory found. \
                    Run 'newsdesk init' in that directory or unset NEWSDESK_ROOT.",
                    path.display()
                )));
            }
        }

        // 2. Fall back to walking up from current directory
        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the desk root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_desk_dir(&current) {
                return Ok(Workspace::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    // Reached filesystem root without finding .newsdesk
                    return Err(NewsdeskError::NotInitialized(start.to_path_buf()));
                }
            }
        }
    }

    fn has_desk_dir(path: &Path) -> bool {
        path.join(".newsdesk").is_dir()
    }

    /// Check if the .newsdesk directory exists
    pub fn is_initialized(&self) -> bool {
        Self::has_desk_dir(&self.root)
    }

    /// Create the .newsdesk directory structure
    pub fn initialize(&self) -> Result<()> {
        let desk_dir = self.root.join(".newsdesk");

        if desk_dir.exists() {
            return Err(NewsdeskError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&desk_dir)?;
        Ok(())
    }

    pub fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    pub fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    /// Open the author store named by the config.
    pub fn author_repository(&self) -> Result<Repository<Author>> {
        let config = self.load_config()?;
        Repository::open(self.root.join(config.author_file))
    }

    /// Open the news store named by the config.
    pub fn news_repository(&self) -> Result<Repository<News>> {
        let config = self.load_config()?;
        Repository::open(self.root.join(config.news_file))
    }
}
