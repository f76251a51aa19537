use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("Task description cannot be empty")]
    EmptyDescription,

    #[error("Failed to read {}: {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not parse {}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Could not load {}: task id {id} is zero or used more than once", .path.display())]
    InvalidId { path: PathBuf, id: u32 },

    #[error("Failed to save {}: {source}", .path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl TaskError {
    /// Validation errors leave the collection untouched; I/O errors may
    /// follow an in-memory change that was kept.
    pub fn is_validation(&self) -> bool {
        matches!(self, TaskError::EmptyDescription)
    }
}

pub type Result<T> = std::result::Result<T, TaskError>;
