use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// namedlog unified error type
#[derive(Error, Debug)]
pub enum NamedLogError {
    #[error("Failed to create log directory {}: {source}", .path.display())]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to open log file {}: {source}", .path.display())]
    OpenFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid logger name: {0:?}")]
    InvalidName(String),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Global dispatcher error: {0}")]
    GlobalDefault(String),

    #[error("Logging has not been initialized")]
    NotInitialized,
}

impl NamedLogError {
    /// True for the failures that leave a logger without an output sink.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::CreateDirectory { .. } | Self::OpenFile { .. })
    }
}

pub type NamedLogResult<T> = Result<T, NamedLogError>;
