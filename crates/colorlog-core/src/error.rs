//! Logger error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while constructing a logger
#[derive(Debug, Error)]
pub enum LoggerError {
    /// The log file could not be created
    #[error("failed to create log file {}: {source}", path.display())]
    CreateFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LoggerError {
    /// Create a file-creation error
    pub fn create_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::CreateFile {
            path: path.into(),
            source,
        }
    }
}

pub type LoggerResult<T> = Result<T, LoggerError>;
