//! Error types for tagsearch

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for tagsearch
#[derive(Debug, Error)]
pub enum TagsearchError {
    #[error("Invalid query term: {0}")]
    InvalidQuery(String),

    #[error("Directory not found: {0}")]
    DirectoryNotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),
}

impl TagsearchError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            TagsearchError::InvalidQuery(_) => 2,
            TagsearchError::DirectoryNotFound(_) => 3,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            TagsearchError::InvalidQuery(term) => {
                format!(
                    "Invalid query term: '{}'\n\n\
                    Suggestions:\n\
                    • Each keyword must name a tag, e.g. 'work'\n\
                    • Prefix a keyword with ! to exclude it, e.g. '!draft'\n\
                    • Quote negated keywords so the shell leaves them alone",
                    term
                )
            }
            TagsearchError::DirectoryNotFound(path) => {
                format!(
                    "Directory not found: {}\n\n\
                    Suggestions:\n\
                    • Check the path passed to --dir\n\
                    • Omit --dir to search the current directory",
                    path.display()
                )
            }
            TagsearchError::Config(msg) => {
                if msg.contains("empty_query") || msg.contains("sort") {
                    format!(
                        "{}\n\n\
                        Valid values:\n\
                        • empty_query = \"list\" | \"files\"\n\
                        • sort = \"alpha\" | \"frequency\"",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using TagsearchError
pub type Result<T> = std::result::Result<T, TagsearchError>;
