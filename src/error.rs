//! Error types and exit status mapping.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TodoError {
    #[error("failed to read {}: {source}", .path.display())]
    StorageRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed task data in {}: {source}", .path.display())]
    MalformedStore {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    StorageWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Task number that does not parse or is out of range.
    #[error("Invalid input.")]
    InvalidIndex(String),

    /// `--add` value that is not `<taskName>,<taskTime>`.
    #[error("Invalid input.")]
    InvalidTaskSpec(String),

    #[error("No valid option provided.")]
    NoOperation,
}

impl TodoError {
    /// Process exit status for this error kind.
    pub fn exit_code(&self) -> i32 {
        match self {
            TodoError::NoOperation => 2,
            TodoError::InvalidIndex(_) => 3,
            TodoError::InvalidTaskSpec(_) => 4,
            TodoError::StorageRead { .. } | TodoError::MalformedStore { .. } => 5,
            TodoError::StorageWrite { .. } => 6,
        }
    }

    /// Whether the error stems from user input rather than the store.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            TodoError::NoOperation | TodoError::InvalidIndex(_) | TodoError::InvalidTaskSpec(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, TodoError>;
