//! textool: clipboard-watching text cleaner.
//!
//! The pipeline (`pipeline`) cleans Markdown-like text, summarizes it by
//! word-frequency scoring and extracts keywords; `convert` holds the
//! stand-alone format converters; `watcher` polls the clipboard from a worker
//! thread; `app` and `repl` are the thin interactive front-end.

pub mod app;
pub mod convert;
pub mod input;
pub mod pipeline;
pub mod repl;
pub mod watcher;
