//! Split manager
//!
//! Drives the split of each archive: load, segment, name and write.

use std::path::Path;

use tracing::{debug, info};

use super::types::{SplitJob, SplitReport};
use crate::config::SplitConfig;
use crate::error::{Result, SplitError};
use crate::mbox::{detect_boundaries, extract_messages, Archive, Message};

/// Splits archives into one file per message
pub struct SplitManager {
    config: SplitConfig,
}

impl SplitManager {
    /// Create a new split manager
    pub fn new(config: SplitConfig) -> Self {
        Self { config }
    }

    /// Slice a loaded archive into messages
    pub fn read_messages(&self, archive: &Archive) -> Vec<Message> {
        let lines = archive.lines();
        let starts = detect_boundaries(&lines, self.config.boundary_marker.as_bytes());
        let messages = extract_messages(&lines, &starts);

        let source = archive
            .path()
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| "<memory>".to_string());
        let total = messages.len();
        for (idx, message) in messages.iter().enumerate() {
            if self.config.verbose {
                info!("Extracting {} from '{}': {}", progress(idx + 1, total), source, message.label());
            } else {
                debug!("Extracting {} from '{}': {}", progress(idx + 1, total), source, message.label());
            }
        }

        messages
    }

    /// Split every job in order, stopping at the first failure
    pub fn split_all(&self, jobs: &[SplitJob]) -> Result<Vec<SplitReport>> {
        jobs.iter().map(|job| self.split_archive(job)).collect()
    }

    /// Split one archive into its destination directory
    pub fn split_archive(&self, job: &SplitJob) -> Result<SplitReport> {
        let archive = Archive::from_path(&job.archive)?;
        let messages = self.read_messages(&archive);

        info!(
            "Found {} message(s) in {:?} ({} bytes)",
            messages.len(),
            job.archive,
            archive.size()
        );

        ensure_directory(&job.destination)?;

        let total = messages.len();
        let mut files = Vec::with_capacity(total);
        let mut bytes_written = 0u64;

        for (idx, message) in messages.iter().enumerate() {
            let file_name = output_file_name(
                idx + 1,
                total,
                message.label(),
                job.prefix.as_deref(),
                &self.config.extension,
            );
            let path = job.destination.join(&file_name);

            if self.config.verbose {
                info!("Writing {} into {:?}", progress(idx + 1, total), job.destination);
            } else {
                debug!("Writing {} into {:?}", progress(idx + 1, total), job.destination);
            }

            std::fs::write(&path, message.content())
                .map_err(|source| SplitError::WriteMessage { path, source })?;

            bytes_written += message.size() as u64;
            files.push(file_name);
        }

        Ok(SplitReport {
            archive: job.archive.clone(),
            destination: job.destination.clone(),
            files,
            bytes_written,
        })
    }
}

/// Create `path` unless it already exists as a directory
pub fn ensure_directory(path: &Path) -> Result<()> {
    if path.is_dir() {
        return Ok(());
    }

    std::fs::create_dir_all(path).map_err(|source| SplitError::CreateDir {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("Created directory {:?}", path);
    Ok(())
}

/// Number of decimal digits in `n`
fn digits(n: usize) -> usize {
    n.to_string().len()
}

/// `"07 / 12"` style counter, padded to the width of `total`
fn progress(index: usize, total: usize) -> String {
    let width = digits(total);
    format!("{:0width$} / {:0width$}", index, total, width = width)
}

/// Build the file name for message `index` (1-based) of `total`.
///
/// The index is zero-padded to the digit count of `total`, giving
/// `<index>-<label>.<ext>` or `<prefix>-<index>-<label>.<ext>`.
pub fn output_file_name(
    index: usize,
    total: usize,
    label: &str,
    prefix: Option<&str>,
    extension: &str,
) -> String {
    let width = digits(total);
    match prefix {
        Some(prefix) => format!(
            "{}-{:0width$}-{}.{}",
            prefix,
            index,
            label,
            extension,
            width = width
        ),
        None => format!("{:0width$}-{}.{}", index, label, extension, width = width),
    }
}
