use arboard::Clipboard;

use super::LoadError;

/// Read the current text content of the system clipboard.
pub fn read_text() -> Result<String, LoadError> {
    let mut clipboard = Clipboard::new().map_err(|e| LoadError::Clipboard(e.to_string()))?;
    clipboard
        .get_text()
        .map_err(|e| LoadError::Clipboard(e.to_string()))
}

/// Replace the system clipboard content with `text`.
pub fn write_text(text: &str) -> Result<(), LoadError> {
    let mut clipboard = Clipboard::new().map_err(|e| LoadError::Clipboard(e.to_string()))?;
    clipboard
        .set_text(text.to_string())
        .map_err(|e| LoadError::Clipboard(e.to_string()))
}
