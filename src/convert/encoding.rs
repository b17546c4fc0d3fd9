//! URL percent-encoding and Base64 transforms.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Returned in place of output when Base64 decoding fails.
pub const INVALID_BASE64: &str = "Invalid Base64 input.";

/// Returned in place of output when percent-decoding yields invalid UTF-8.
pub const INVALID_URL: &str = "Invalid URL encoding.";

// RFC 3986 unreserved characters stay literal.
const URL_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

pub fn url_encode(text: &str) -> String {
    utf8_percent_encode(text, URL_ENCODE_SET).to_string()
}

pub fn url_decode(text: &str) -> String {
    match percent_decode_str(text).decode_utf8() {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => INVALID_URL.to_string(),
    }
}

pub fn b64_encode(text: &str) -> String {
    STANDARD.encode(text.as_bytes())
}

pub fn b64_decode(text: &str) -> String {
    match STANDARD.decode(text.trim()) {
        Ok(bytes) => String::from_utf8(bytes).unwrap_or_else(|_| INVALID_BASE64.to_string()),
        Err(_) => INVALID_BASE64.to_string(),
    }
}
