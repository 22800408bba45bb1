//! Subject resolution
//!
//! Turns a message's Subject header into a label usable as part of a file
//! name: encoded words decoded, `/` removed, sentinels when nothing usable
//! is left.

pub mod decoder;
pub mod resolver;

pub use decoder::{decode_first_word, Decoded, EncodedWord, SubjectDecoder};
pub use resolver::{find_subject_line, resolve_label, INVALID_SUBJECT, NO_SUBJECT, SUBJECT_MARKER};
