//! Error types for the acronym store

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for store operations
#[derive(Error, Debug)]
pub enum AcronymError {
    #[error("Failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Failed to serialize acronyms")]
    Serialize(#[from] serde_yaml::Error),

    #[error("Failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AcronymError {
    /// The store could not be loaded (missing, unreadable or malformed)
    pub fn is_unreadable(&self) -> bool {
        matches!(self, AcronymError::Read { .. } | AcronymError::Parse { .. })
    }

    /// The store could not be written back
    pub fn is_unwritable(&self) -> bool {
        matches!(self, AcronymError::Serialize(_) | AcronymError::Write { .. })
    }
}

pub type Result<T> = std::result::Result<T, AcronymError>;
