use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Task title must not be empty")]
    EmptyTitle,

    #[error("Invalid due date '{0}': expected YYYY-MM-DD")]
    InvalidDueDate(String),

    #[error("Task not found: {0}")]
    NotFound(String),

    #[error("Could not determine the home directory")]
    NoHomeDir,

    #[error("Failed to read task file {}: {source}", .path.display())]
    ReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write task file {}: {source}", .path.display())]
    WriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Task file {} is corrupt: {source}", .path.display())]
    Corrupt {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to encode tasks: {0}")]
    Encode(serde_json::Error),
}

impl Error {
    /// True for errors caused by bad input rather than store state.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::EmptyTitle | Error::InvalidDueDate(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
