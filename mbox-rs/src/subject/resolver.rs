//! Subject label resolution

use tracing::{debug, warn};

use super::decoder::{decode_first_word, Decoded};
use crate::mbox::boundary::find;

/// Prefix of the header line the label is taken from
pub const SUBJECT_MARKER: &[u8] = b"Subject: ";

/// Label used when a message has no usable Subject header
pub const NO_SUBJECT: &str = "_NO-SUBJECT_";

/// Label used when the subject bytes are not valid UTF-8 once decoded
pub const INVALID_SUBJECT: &str = "_INVALID-SUBJECT_";

/// Locate the Subject header line in a raw message.
///
/// Walks every occurrence of `"Subject: "` in order and returns the first
/// whose remainder (up to the next `\n`, minus a trailing `\r`) is not blank.
/// The returned slice starts with the marker itself.
pub fn find_subject_line(content: &[u8]) -> Option<&[u8]> {
    let mut from = 0;

    while let Some(idx) = find(content, SUBJECT_MARKER, from) {
        let end = find(content, b"\n", idx).unwrap_or(content.len());
        let line = &content[idx..end];
        let line = line.strip_suffix(b"\r").unwrap_or(line);

        if !line[SUBJECT_MARKER.len()..]
            .iter()
            .all(u8::is_ascii_whitespace)
        {
            return Some(line);
        }

        from = idx + SUBJECT_MARKER.len();
    }

    None
}

/// Derive a filename-safe label from a raw message.
///
/// The result is never empty and never contains `/`. No other characters
/// are altered.
pub fn resolve_label(content: &[u8]) -> String {
    let Some(line) = find_subject_line(content) else {
        debug!("No Subject header found");
        return NO_SUBJECT.to_string();
    };

    let bytes = match decode_first_word(line) {
        Decoded::Untouched => line.to_vec(),
        Decoded::Bytes(bytes) => bytes,
        Decoded::Invalid => {
            warn!("Malformed encoded subject: {}", String::from_utf8_lossy(line));
            return INVALID_SUBJECT.to_string();
        }
    };

    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(_) => {
            warn!("Subject is not valid UTF-8: {}", String::from_utf8_lossy(line));
            return INVALID_SUBJECT.to_string();
        }
    };

    let label: String = text
        .strip_prefix("Subject: ")
        .unwrap_or(&text)
        .chars()
        .filter(|&c| c != '/')
        .collect();

    if label.is_empty() {
        NO_SUBJECT.to_string()
    } else {
        label
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_subject() {
        assert_eq!(resolve_label(b"From: a\nSubject: Quarterly report\n\nbody"), "Quarterly report");
    }

    #[test]
    fn test_base64_subject() {
        assert_eq!(resolve_label(b"Subject: =?utf-8?b?SGVsbG8=?=\n"), "Hello");
        assert_eq!(resolve_label(b"Subject: =?US-ASCII?B?SGVsbG8=?=\n"), "Hello");
    }

    #[test]
    fn test_quoted_subject() {
        assert_eq!(resolve_label(b"Subject: =?utf-8?q?Hello_World?=\n"), "Hello World");
        assert_eq!(resolve_label(b"Subject: =?UTF-8?Q?Hello_World?=\r\n"), "Hello World");
    }

    #[test]
    fn test_reply_prefix_dropped_with_encoded_word() {
        assert_eq!(resolve_label(b"Subject: Re: =?utf-8?b?SGk=?=\n"), "Hi");
    }

    #[test]
    fn test_only_first_encoded_word_used() {
        assert_eq!(
            resolve_label(b"Subject: =?utf-8?b?SGVs?= =?utf-8?b?bG8=?=\n"),
            "Hel"
        );
    }

    #[test]
    fn test_multibyte_subject() {
        assert_eq!(
            resolve_label("Subject: =?utf-8?b?44GT44KT44Gr44Gh44Gv44CC?=\n".as_bytes()),
            "こんにちは。"
        );
    }

    #[test]
    fn test_missing_subject() {
        assert_eq!(resolve_label(b"From: a\nTo: b\n\nno subject here\n"), NO_SUBJECT);
        assert_eq!(resolve_label(b""), NO_SUBJECT);
    }

    #[test]
    fn test_blank_subject_skipped() {
        let message = b"Subject: \nX-Note: quoted\n\n> Subject: Real one\n";
        assert_eq!(resolve_label(message), "Real one");
    }

    #[test]
    fn test_only_blank_subjects() {
        assert_eq!(resolve_label(b"Subject:   \r\nSubject: \n"), NO_SUBJECT);
    }

    #[test]
    fn test_invalid_utf8_after_decoding() {
        // 0xFF 0xFE
        assert_eq!(resolve_label(b"Subject: =?utf-8?b?//4=?=\n"), INVALID_SUBJECT);
    }

    #[test]
    fn test_invalid_raw_bytes() {
        assert_eq!(resolve_label(b"Subject: caf\xe9\n"), INVALID_SUBJECT);
    }

    #[test]
    fn test_malformed_encoded_word() {
        assert_eq!(resolve_label(b"Subject: =?utf-8?b?SGVsbG8\n"), INVALID_SUBJECT);
    }

    #[test]
    fn test_slashes_removed() {
        assert_eq!(resolve_label(b"Subject: A/B\n"), "AB");
        assert_eq!(resolve_label(b"Subject: =?utf-8?q?1/2_done?=\n"), "12 done");
    }

    #[test]
    fn test_slash_only_subject() {
        assert_eq!(resolve_label(b"Subject: //\n"), NO_SUBJECT);
    }

    #[test]
    fn test_find_subject_line() {
        assert_eq!(find_subject_line(b"Subject: hi\r\nmore"), Some(&b"Subject: hi"[..]));
        assert_eq!(find_subject_line(b"Subject: end"), Some(&b"Subject: end"[..]));
        assert_eq!(find_subject_line(b"Subject:no-space\n"), None);
    }
}
