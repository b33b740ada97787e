//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "newsdesk")]
#[command(about = "File-backed news and author record store", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new desk
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Manage authors
    Author {
        #[command(subcommand)]
        command: AuthorCommands,
    },

    /// Manage news items
    News {
        #[command(subcommand)]
        command: NewsCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum AuthorCommands {
    /// Add a new author
    Add {
        /// Author name (3 to 15 characters)
        name: String,
    },

    /// List all authors
    List,

    /// Remove an author by id
    Remove { id: i64 },
}

#[derive(Subcommand, Debug)]
pub enum NewsCommands {
    /// Add a news item
    Add {
        /// Title (5 to 30 characters)
        #[arg(short, long)]
        title: String,

        /// Content (5 to 255 characters)
        #[arg(short, long)]
        content: String,

        /// Id of an existing author
        #[arg(short, long)]
        author: i64,
    },

    /// Update a news item, replacing title, content and author
    Update {
        id: i64,

        #[arg(short, long)]
        title: String,

        #[arg(short, long)]
        content: String,

        #[arg(short, long)]
        author: i64,
    },

    /// Show one news item with its author
    Show { id: i64 },

    /// List news items with their authors
    List {
        /// Number of items to skip from the start
        #[arg(long, default_value_t = 0)]
        offset: i64,

        /// Maximum number of items to return; -1 means all remaining
        #[arg(long, default_value_t = -1)]
        limit: i64,
    },

    /// Remove a news item by id
    Remove { id: i64 },

    /// Print the number of news items
    Count,
}
