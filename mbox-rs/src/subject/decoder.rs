//! Encoded-word decoding for Subject headers
//!
//! Handles the two encoded-word forms seen in practice for UTF-8 and
//! US-ASCII subjects (RFC 2047 "B" and "Q"). Anything else is either left
//! alone or treated as undecodable.
//!
//! The "Q" form only maps `_` to a space. `=XX` escapes are kept verbatim.

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::Engine as _;

use crate::mbox::boundary::find;

/// Standard alphabet, padding optional
const BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Charsets whose encoded words are decoded
const SUPPORTED_CHARSETS: [&[u8]; 2] = [b"utf-8", b"us-ascii"];

/// Decoder selected by the encoding letter of an encoded word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubjectDecoder {
    /// `?b?` / `?B?`
    Base64,
    /// `?q?` / `?Q?`
    Quoted,
    /// Any other encoding letter
    Undecodable,
}

impl SubjectDecoder {
    /// Select a decoder from the encoding token between the `?` delimiters
    pub fn from_token(token: &[u8]) -> Self {
        match token {
            b"b" | b"B" => Self::Base64,
            b"q" | b"Q" => Self::Quoted,
            _ => Self::Undecodable,
        }
    }

    /// Decode an encoded-word payload into raw bytes
    pub fn decode(&self, payload: &[u8]) -> Option<Vec<u8>> {
        match self {
            Self::Base64 => BASE64.decode(payload).ok(),
            Self::Quoted => Some(
                payload
                    .iter()
                    .map(|&b| if b == b'_' { b' ' } else { b })
                    .collect(),
            ),
            Self::Undecodable => None,
        }
    }
}

/// An encoded word located inside a header line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedWord<'a> {
    pub charset: &'a [u8],
    pub decoder: SubjectDecoder,
    pub payload: &'a [u8],
    /// Index one past the closing `?=`
    pub end: usize,
}

/// Outcome of decoding a header line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoded {
    /// No supported encoded word present
    Untouched,
    /// Decoded payload of the first supported encoded word
    Bytes(Vec<u8>),
    /// The first supported encoded word was malformed or failed to decode
    Invalid,
}

/// Parse the encoded word starting at `at`.
///
/// Returns `None` when `text[at..]` does not open an encoded word in a
/// supported charset, and `Some(Err(()))` when it does but the word is
/// malformed.
pub fn parse_encoded_word(text: &[u8], at: usize) -> Option<Result<EncodedWord<'_>, ()>> {
    let rest = text.get(at..)?;
    let body = rest.strip_prefix(b"=?")?;

    let charset_len = body.iter().position(|&b| b == b'?')?;
    let charset = &body[..charset_len];
    if !SUPPORTED_CHARSETS
        .iter()
        .any(|supported| charset.eq_ignore_ascii_case(supported))
    {
        return None;
    }

    // "=?" + charset + "?"
    let token_start = at + 2 + charset_len + 1;
    let token_end = match find(text, b"?", token_start) {
        Some(end) => end,
        None => return Some(Err(())),
    };
    let decoder = SubjectDecoder::from_token(&text[token_start..token_end]);
    if decoder == SubjectDecoder::Undecodable {
        return Some(Err(()));
    }

    let payload_start = token_end + 1;
    let payload_end = match find(text, b"?=", payload_start) {
        Some(end) => end,
        None => return Some(Err(())),
    };

    Some(Ok(EncodedWord {
        charset,
        decoder,
        payload: &text[payload_start..payload_end],
        end: payload_end + 2,
    }))
}

/// Decode the first supported encoded word in `text`.
///
/// The decoded payload replaces the whole line: text around the word and any
/// later encoded words are dropped.
pub fn decode_first_word(text: &[u8]) -> Decoded {
    let word = match (0..text.len()).find_map(|at| parse_encoded_word(text, at)) {
        None => return Decoded::Untouched,
        Some(Err(())) => return Decoded::Invalid,
        Some(Ok(word)) => word,
    };

    match word.decoder.decode(word.payload) {
        Some(bytes) => Decoded::Bytes(bytes),
        None => Decoded::Invalid,
    }
}
