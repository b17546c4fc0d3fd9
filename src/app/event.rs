/// Application events
///
/// Everything the front-end can ask the app core to do, whether it came from
/// a typed command or from the clipboard watcher.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum AppEvent {
    /// Run the pipeline on text typed or pasted at the prompt.
    ProcessText(String),
    /// Read a UTF-8 file and run the pipeline on it.
    LoadFile(String),
    /// Read the clipboard once and run the pipeline on it.
    LoadClipboard,
    /// The watcher observed new clipboard content.
    ClipboardChange(String),
    /// The watcher hit a clipboard failure and halted.
    WatcherFailed(String),
    /// Copy the last cleaned text back to the clipboard.
    CopyCleaned,
    /// Convert the last cleaned text.
    Convert(Conversion),
    ToggleWatch,
    ToggleSummary,
    ToggleKeywords,
    Help,
    Quit,
    InvalidCommand(String),
}

/// Conversions applicable to the last cleaned text.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Conversion {
    MarkdownToHtml,
    JsonPretty,
    JsonMinify,
    UrlEncode,
    UrlDecode,
    Base64Encode,
    Base64Decode,
}
