use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("File is empty: {0}")]
    EmptyFile(PathBuf),

    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

/// Read a whole UTF-8 text file. Missing and empty files are distinct errors.
pub fn read_text_file(path: &str) -> Result<String, LoadError> {
    let path_buf = PathBuf::from(path);
    if !path_buf.exists() {
        return Err(LoadError::FileNotFound(path_buf));
    }
    let content = std::fs::read_to_string(&path_buf)?;
    if content.trim().is_empty() {
        return Err(LoadError::EmptyFile(path_buf));
    }
    Ok(content)
}

pub mod clipboard;
