//! JSON pretty-printing and minification.

use serde_json::Value;

/// Returned in place of output when the input does not parse.
pub const INVALID_JSON: &str = "Invalid JSON input.";

/// Re-serialize `text` with 2-space indentation, [`INVALID_JSON`] on parse
/// failure.
pub fn pretty(text: &str) -> String {
    match serde_json::from_str::<Value>(text) {
        Ok(value) => {
            serde_json::to_string_pretty(&value).unwrap_or_else(|_| INVALID_JSON.to_string())
        }
        Err(_) => INVALID_JSON.to_string(),
    }
}

/// Re-serialize `text` with no whitespace, [`INVALID_JSON`] on parse failure.
pub fn minify(text: &str) -> String {
    match serde_json::from_str::<Value>(text) {
        Ok(value) => serde_json::to_string(&value).unwrap_or_else(|_| INVALID_JSON.to_string()),
        Err(_) => INVALID_JSON.to_string(),
    }
}
