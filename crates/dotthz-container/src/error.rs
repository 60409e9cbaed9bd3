use std::path::PathBuf;

use thiserror::Error;

pub type ContainerResult<T> = Result<T, ContainerError>;

#[derive(Debug, Error)]
pub enum ContainerError {
    #[error("Failed to open container '{}': {reason}", path.display())]
    Open { path: PathBuf, reason: String },
    #[error("No member named '{0}'")]
    NotFound(String),
    #[error("Failed reading '{name}': {reason}")]
    Read { name: String, reason: String },
}

impl ContainerError {
    pub fn open(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::Open {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub fn read(name: impl Into<String>, reason: impl ToString) -> Self {
        Self::Read {
            name: name.into(),
            reason: reason.to_string(),
        }
    }
}
