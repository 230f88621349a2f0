//! Base64URL encoding/decoding per RFC 4648
//!
//! Thin wrapper around the `base64` crate using the URL-safe alphabet without
//! padding. Decoding is strict: padding characters and non-zero trailing bits
//! are rejected, so every accepted segment has exactly one encoding.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, DecodeError, Engine};

/// Encode bytes to Base64URL string
pub fn encode_bytes(input: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(input)
}

/// Encode string to Base64URL
pub fn encode(input: &str) -> String {
    encode_bytes(input.as_bytes())
}

/// Decode Base64URL string to bytes
///
/// The caller decides which segment failed and maps the error accordingly.
pub fn decode_bytes(input: &str) -> Result<Vec<u8>, DecodeError> {
    URL_SAFE_NO_PAD.decode(input)
}
