//! Error types for mbox-rs

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for split operations
pub type Result<T> = std::result::Result<T, SplitError>;

/// Split error types
///
/// Subject decoding problems are deliberately absent: they degrade to a
/// sentinel label and never abort a run.
#[derive(Error, Debug)]
pub enum SplitError {
    /// Missing or inconsistent command-line arguments
    #[error("Usage error: {0}")]
    Usage(String),

    /// The archive could not be read into memory
    #[error("Failed to read archive {path:?}: {source}")]
    ReadArchive {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The destination directory could not be created
    #[error("Failed to create directory {path:?}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A message file could not be written
    #[error("Failed to write message {path:?}: {source}")]
    WriteMessage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
