//! Encoding and decoding transforms

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use super::TransformError;

/// Everything but the `encodeURIComponent` unreserved set gets escaped
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn base64_encode(text: &str) -> String {
    STANDARD.encode(text.as_bytes())
}

/// Decode standard Base64 (whitespace ignored) into UTF-8 text
pub fn base64_decode(text: &str) -> Result<String, TransformError> {
    let compact: String = text.split_whitespace().collect();
    let bytes = STANDARD
        .decode(compact)
        .map_err(|e| TransformError::InvalidBase64(e.to_string()))?;
    String::from_utf8(bytes).map_err(|_| TransformError::InvalidUtf8)
}

pub fn url_encode(text: &str) -> String {
    utf8_percent_encode(text, URI_COMPONENT).to_string()
}

/// Decode `%XX` escapes. A `%` not followed by two hex digits is an error.
pub fn url_decode(text: &str) -> Result<String, TransformError> {
    let bytes = text.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let valid = bytes
                .get(i + 1..i + 3)
                .is_some_and(|pair| pair.iter().all(u8::is_ascii_hexdigit));
            if !valid {
                return Err(TransformError::InvalidUrlEncoding);
            }
            i += 3;
        } else {
            i += 1;
        }
    }

    percent_decode_str(text)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .map_err(|_| TransformError::InvalidUtf8)
}

/// Each char as its code point in binary, at least 8 digits, space separated
pub fn to_binary(text: &str) -> String {
    text.chars()
        .map(|ch| format!("{:08b}", ch as u32))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Inverse of [`to_binary`]; chunks may be separated by any whitespace
pub fn from_binary(text: &str) -> Result<String, TransformError> {
    let chunks: Vec<&str> = text.split_whitespace().collect();
    if chunks.is_empty() {
        return Err(TransformError::EmptyBinary);
    }

    chunks
        .into_iter()
        .map(|chunk| {
            if !chunk.bytes().all(|b| b == b'0' || b == b'1') {
                return Err(TransformError::InvalidBinary(chunk.to_string()));
            }
            u32::from_str_radix(chunk, 2)
                .ok()
                .and_then(char::from_u32)
                .ok_or_else(|| TransformError::InvalidBinary(chunk.to_string()))
        })
        .collect()
}
