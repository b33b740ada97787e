//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{AuthorCommands, Cli, Commands, NewsCommands};
pub use output::{format_author_list, format_news_item, format_news_list};
