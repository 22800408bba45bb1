//! Mailbox types
//!
//! Data structures for archives and the messages extracted from them.

use std::path::{Path, PathBuf};

use crate::error::{Result, SplitError};
use crate::subject::resolve_label;

/// A mailbox archive loaded fully into memory
#[derive(Debug, Clone)]
pub struct Archive {
    /// Source path, if loaded from disk
    path: Option<PathBuf>,
    /// Raw archive bytes
    bytes: Vec<u8>,
}

impl Archive {
    /// Read a whole archive file into memory
    pub fn from_path(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path).map_err(|source| SplitError::ReadArchive {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self {
            path: Some(path.to_path_buf()),
            bytes,
        })
    }

    /// Wrap bytes that are already in memory
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            path: None,
            bytes: bytes.into(),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Get the size of the archive in bytes
    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    /// Split the archive into lines, each keeping its `\n` terminator.
    ///
    /// A trailing fragment without a terminator is returned as the last line,
    /// so concatenating the lines always reproduces the archive exactly.
    pub fn lines(&self) -> Vec<&[u8]> {
        self.bytes.split_inclusive(|&b| b == b'\n').collect()
    }
}

/// A single message sliced out of an archive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Raw message bytes, exactly as they appeared in the archive
    content: Vec<u8>,
    /// Filename-safe label derived from the Subject header
    label: String,
}

impl Message {
    /// Create a message from its raw bytes, resolving its label
    pub fn new(content: Vec<u8>) -> Self {
        let label = resolve_label(&content);
        Self { content, label }
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Get the size of the message content
    pub fn size(&self) -> usize {
        self.content.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_keep_terminators() {
        let raw = b"a\r\nb\n\nc";
        let archive = Archive::from_bytes(&raw[..]);
        let lines = archive.lines();

        assert_eq!(lines, vec![&b"a\r\n"[..], &b"b\n"[..], &b"\n"[..], &b"c"[..]]);
        assert_eq!(lines.concat(), &raw[..]);
    }

    #[test]
    fn test_empty_archive_has_no_lines() {
        let archive = Archive::from_bytes(Vec::new());
        assert!(archive.lines().is_empty());
        assert_eq!(archive.size(), 0);
    }

    #[test]
    fn test_from_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = Archive::from_path(&dir.path().join("nope.mbox")).unwrap_err();
        assert!(matches!(err, SplitError::ReadArchive { .. }));
    }

    #[test]
    fn test_message_label() {
        let message = Message::new(b"From x\nSubject: Hi there\n\nbody\n".to_vec());
        assert_eq!(message.label(), "Hi there");
        assert_eq!(message.size(), 31);
    }
}
