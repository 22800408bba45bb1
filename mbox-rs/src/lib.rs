//! mbox-rs: split mbox archives into individual messages
//!
//! Reads a mailbox archive into memory, finds where each message begins and
//! writes every message to its own `.eml` file, named after its subject.
//!
//! # Example
//!
//! ```no_run
//! use mbox_rs::config::SplitConfig;
//! use mbox_rs::split::{SplitJob, SplitManager};
//! use std::path::PathBuf;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let manager = SplitManager::new(SplitConfig::default());
//!     let job = SplitJob::standalone(PathBuf::from("inbox.mbox"));
//!
//!     let report = manager.split_archive(&job)?;
//!     for file in &report.files {
//!         println!("{}", file);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Modules
//!
//! - [`config`]: Run configuration
//! - [`error`]: Error types and handling
//! - [`mbox`]: Archive loading, boundary detection and message extraction
//! - [`subject`]: Subject decoding and file-name labels
//! - [`split`]: Job planning and message file output

pub mod config;
pub mod error;
pub mod mbox;
pub mod split;
pub mod subject;

// Re-export commonly used types
pub use config::SplitConfig;
pub use error::{Result, SplitError};
pub use split::{SplitJob, SplitManager, SplitReport};
