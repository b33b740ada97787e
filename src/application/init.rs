//! Initialize desk use case

use crate::error::Result;
use crate::infrastructure::{Config, Workspace};
use std::fs;
use std::path::Path;

/// Initialize a new desk at the specified path.
pub fn init(path: &Path) -> Result<()> {
    // Create the directory if it doesn't exist
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let workspace = Workspace::new(path.to_path_buf());

    // Create .newsdesk directory
    workspace.initialize()?;

    // Create default config
    let config = Config::new();
    workspace.save_config(&config)?;

    // Seed empty data files so a fresh desk is immediately readable
    fs::write(path.join(&config.author_file), "[]")?;
    fs::write(path.join(&config.news_file), "[]")?;

    println!("Initialized newsdesk at {}", path.display());

    Ok(())
}
