//! Job planning from command-line paths

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use super::types::SplitJob;
use crate::error::{Result, SplitError};

/// Turn positional paths into split jobs.
///
/// - With `output`, every path is an archive and all of them share `output`.
/// - Otherwise, if there are several paths and the last one is an existing
///   directory, it is the shared destination for the others.
/// - Otherwise every path is an archive split into its own `<path>.d`. A
///   missing last path is rejected up front: it is most likely a new output
///   directory, which has to be given with `--output`.
///
/// When more than one archive shares a destination, each job gets the
/// archive's file name as prefix so outputs cannot collide.
pub fn plan_jobs(paths: &[PathBuf], output: Option<&Path>) -> Result<Vec<SplitJob>> {
    if paths.is_empty() {
        return Err(SplitError::Usage("No mailbox file given".to_string()));
    }

    let (archives, shared) = match output {
        Some(dir) => (paths, dir.to_path_buf()),
        None => match paths.split_last() {
            Some((last, rest)) if !rest.is_empty() && last.is_dir() => (rest, last.clone()),
            Some((last, rest)) if !rest.is_empty() && !last.exists() => {
                return Err(SplitError::Usage(format!(
                    "{:?} does not exist; to split into a new directory use --output {:?}",
                    last, last
                )));
            }
            _ => return Ok(paths.iter().cloned().map(SplitJob::standalone).collect()),
        },
    };

    if archives.len() == 1 {
        return Ok(vec![SplitJob {
            archive: archives[0].clone(),
            destination: shared,
            prefix: None,
        }]);
    }

    let mut seen = HashSet::new();
    let mut jobs = Vec::with_capacity(archives.len());

    for archive in archives {
        let prefix = archive
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| SplitError::Usage(format!("{:?} is not a file", archive)))?;

        if !seen.insert(prefix.clone()) {
            return Err(SplitError::Usage(format!(
                "Archives sharing {:?} must have distinct file names ('{}' repeats)",
                shared, prefix
            )));
        }

        jobs.push(SplitJob {
            archive: archive.clone(),
            destination: shared.clone(),
            prefix: Some(prefix),
        });
    }

    Ok(jobs)
}
