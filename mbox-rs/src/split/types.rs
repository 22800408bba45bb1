//! Split types
//!
//! Data structures describing split jobs and their results.

use std::path::PathBuf;

/// One archive to split and where its messages go
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitJob {
    /// Archive to read
    pub archive: PathBuf,
    /// Directory receiving the message files
    pub destination: PathBuf,
    /// Prepended to every file name when several archives share a destination
    pub prefix: Option<String>,
}

impl SplitJob {
    /// Job writing into the archive's own `<archive>.d` directory
    pub fn standalone(archive: PathBuf) -> Self {
        let mut destination = archive.clone().into_os_string();
        destination.push(".d");

        Self {
            archive,
            destination: PathBuf::from(destination),
            prefix: None,
        }
    }
}

/// Outcome of splitting one archive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitReport {
    /// Archive that was split
    pub archive: PathBuf,
    /// Directory the messages were written into
    pub destination: PathBuf,
    /// File names written, in message order
    pub files: Vec<String>,
    /// Total bytes written
    pub bytes_written: u64,
}

impl SplitReport {
    /// Number of messages written
    pub fn message_count(&self) -> usize {
        self.files.len()
    }
}
