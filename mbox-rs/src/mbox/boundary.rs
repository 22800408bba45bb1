//! Message boundary detection
//!
//! An archive is a run of messages with no explicit framing the splitter can
//! rely on. Every message carries a delivery header (`Delivered-To:` by
//! default), and the line right before it is the separator that opens the
//! message. Those separator lines are the boundaries.

use tracing::debug;

/// Find the line indices at which messages begin.
///
/// A line containing `marker` anywhere (byte-exact, case-sensitive) records
/// the index of the line before it. A marker on the very first line has no
/// line before it, so that message starts at line 0 instead. Indices are
/// strictly increasing; a clamped index that repeats the previous one is not
/// recorded twice.
pub fn detect_boundaries(lines: &[&[u8]], marker: &[u8]) -> Vec<usize> {
    let mut starts: Vec<usize> = Vec::new();

    if marker.is_empty() {
        return starts;
    }

    for (idx, line) in lines.iter().enumerate() {
        if !contains(line, marker) {
            continue;
        }

        let start = idx.saturating_sub(1);
        if starts.last().map_or(true, |&last| start > last) {
            starts.push(start);
        }
    }

    debug!("Detected {} message boundaries in {} lines", starts.len(), lines.len());

    starts
}

/// Byte-exact substring search
pub(crate) fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    find(haystack, needle, 0).is_some()
}

/// Position of the first `needle` in `haystack` at or after `from`
pub(crate) fn find(haystack: &[u8], needle: &[u8], from: usize) -> Option<usize> {
    if needle.is_empty() || from > haystack.len() {
        return None;
    }

    haystack[from..]
        .windows(needle.len())
        .position(|window| window == needle)
        .map(|pos| pos + from)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MARKER: &[u8] = b"Delivered-To:";

    fn lines(text: &[u8]) -> Vec<&[u8]> {
        text.split_inclusive(|&b| b == b'\n').collect()
    }

    #[test]
    fn test_boundary_is_line_before_marker() {
        let text = b"From a\nDelivered-To: a@example.com\nSubject: one\n\nFrom b\nDelivered-To: b@example.com\nSubject: two\n";
        assert_eq!(detect_boundaries(&lines(text), MARKER), vec![0, 4]);
    }

    #[test]
    fn test_no_markers() {
        let text = b"From a\nSubject: one\n\nbody\n";
        assert!(detect_boundaries(&lines(text), MARKER).is_empty());
        assert!(detect_boundaries(&[], MARKER).is_empty());
    }

    #[test]
    fn test_marker_is_case_sensitive() {
        let text = b"From a\ndelivered-to: a@example.com\n";
        assert!(detect_boundaries(&lines(text), MARKER).is_empty());
    }

    #[test]
    fn test_marker_anywhere_in_line() {
        let text = b"sep\nX-Was-Delivered-To: a@example.com\n";
        assert_eq!(detect_boundaries(&lines(text), MARKER), vec![0]);
    }

    #[test]
    fn test_marker_on_first_line_clamps_to_zero() {
        let text = b"Delivered-To: a@example.com\nSubject: one\n\nFrom b\nDelivered-To: b@example.com\n";
        assert_eq!(detect_boundaries(&lines(text), MARKER), vec![0, 3]);
    }

    #[test]
    fn test_markers_on_first_two_lines() {
        let text = b"Delivered-To: a@example.com\nDelivered-To: b@example.com\nSubject: one\n";
        assert_eq!(detect_boundaries(&lines(text), MARKER), vec![0]);
    }

    #[test]
    fn test_find() {
        assert_eq!(find(b"abcabc", b"bc", 0), Some(1));
        assert_eq!(find(b"abcabc", b"bc", 2), Some(4));
        assert_eq!(find(b"abcabc", b"bc", 5), None);
        assert_eq!(find(b"abc", b"abcd", 0), None);
        assert_eq!(find(b"abc", b"", 0), None);
        assert_eq!(find(b"abc", b"c", 4), None);
    }
}
