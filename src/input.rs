//! Reading documents from disk and writing rendered output back.

use crate::document::Document;
use crate::error::{Error, Result};
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Reads a markdown file into a [`Document`].
///
/// # Errors
///
/// Returns `FileNotFound` if the path does not exist and `Io` for any other read failure,
/// including the path being a directory or not valid UTF-8.
pub fn read_document(path: &Path) -> Result<Document> {
    debug!("Opening file: {}", path.display());
    let content = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => Error::FileNotFound(path.to_path_buf()),
        _ => Error::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;
    debug!(
        "File read successfully ({} characters)",
        content.chars().count()
    );
    if content.trim().is_empty() {
        debug!("File appears to be empty");
    }

    let document = Document::from_text(&content);
    debug!(
        "Indexed {} lines, {} headings",
        document.len(),
        document.headings().len()
    );
    Ok(document)
}

/// Writes rendered output to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns `Io` if the file cannot be written.
pub fn write_output(path: &Path, output: &str) -> Result<()> {
    fs::write(path, output).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
#[path = "tests/input.rs"]
mod tests;
