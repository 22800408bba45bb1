//! Mailbox segmentation
//!
//! Loads an archive into memory, finds the lines where new messages begin
//! and slices the archive into per-message byte blobs.

pub mod boundary;
pub mod extract;
pub mod types;

pub use boundary::detect_boundaries;
pub use extract::extract_messages;
pub use types::{Archive, Message};
