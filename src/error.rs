//! Error types for newsdesk

use crate::domain::EntityId;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the newsdesk application
#[derive(Debug, Error)]
pub enum NewsdeskError {
    #[error("Not a newsdesk directory: {0}")]
    NotInitialized(PathBuf),

    // Storage-layer kinds, raised by the data stores only.
    #[error("Null key passed to a keyed operation")]
    NullKey,

    #[error("Null entity passed to a write operation")]
    NullEntity,

    #[error("Entity not found: {0}")]
    NotFound(EntityId),

    // Repository-layer kind; message lists every violated field.
    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    // Service-layer kinds; storage vocabulary never crosses this line.
    #[error("Invalid request: {0}")]
    RequestInvalid(String),

    #[error("News not found: {0}")]
    NewsNotFound(EntityId),

    #[error("Author not found: {0}")]
    AuthorNotFound(EntityId),

    #[error("News id is missing")]
    NewsIdMissing,

    #[error("Author id is missing")]
    AuthorIdMissing,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl NewsdeskError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            NewsdeskError::NotInitialized(_) => 2,
            NewsdeskError::ValidationFailed(_) | NewsdeskError::RequestInvalid(_) => 3,
            NewsdeskError::NotFound(_)
            | NewsdeskError::NewsNotFound(_)
            | NewsdeskError::AuthorNotFound(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            NewsdeskError::NotInitialized(path) => {
                format!(
                    "Not a newsdesk directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'newsdesk init' in this directory to create a new desk\n\
                    • Navigate to an existing newsdesk directory\n\
                    • Set NEWSDESK_ROOT environment variable to your desk path",
                    path.display()
                )
            }
            NewsdeskError::ValidationFailed(msg) | NewsdeskError::RequestInvalid(msg) => {
                format!(
                    "{}\n\n\
                    Field constraints:\n\
                    • author name: 3 to 15 characters\n\
                    • news title: 5 to 30 characters\n\
                    • news content: 5 to 255 characters",
                    msg
                )
            }
            NewsdeskError::AuthorNotFound(id) => {
                format!(
                    "Author not found: {}\n\n\
                    Suggestions:\n\
                    • Use 'newsdesk author list' to see known authors\n\
                    • Add the author first: newsdesk author add <name>",
                    id
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using NewsdeskError
pub type Result<T> = std::result::Result<T, NewsdeskError>;
