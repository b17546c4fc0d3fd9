//! Auxiliary format conversions.
//!
//! Independent pure functions with no shared state: Markdown→HTML, JSON
//! pretty/minify, URL and Base64 encode/decode. Malformed input yields a
//! literal error string in place of output; nothing here returns an error.

pub mod encoding;
pub mod json;
pub mod markdown;
