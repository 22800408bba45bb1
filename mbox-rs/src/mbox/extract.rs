//! Message extraction
//!
//! Slices an archive's lines into messages, one per boundary.

use tracing::warn;

use super::types::Message;

/// Build one message per boundary.
///
/// Message `k` spans `lines[starts[k]..starts[k + 1]]`, the last one running
/// to the end of the archive. Bytes are concatenated untouched. A span that
/// is empty or falls outside `lines` (unsorted or out-of-range boundaries)
/// is skipped.
pub fn extract_messages(lines: &[&[u8]], starts: &[usize]) -> Vec<Message> {
    starts
        .iter()
        .enumerate()
        .filter_map(|(k, &start)| {
            let end = starts.get(k + 1).copied().unwrap_or(lines.len());
            match lines.get(start..end) {
                Some(span) if !span.is_empty() => Some(Message::new(span.concat())),
                _ => {
                    warn!("Skipping invalid message span {}..{}", start, end);
                    None
                }
            }
        })
        .collect()
}
