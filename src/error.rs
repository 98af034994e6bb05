//! Error types for mdparser.
//!
//! Every failure the core can produce is a variant here, so the command line can map them
//! one-to-one onto exit codes without inspecting messages.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for mdparser operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading, extracting from, or rendering a document.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The input file does not exist.
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// The input or output file could not be read or written.
    #[error("Error accessing {}: {source}", path.display())]
    Io {
        /// File being accessed when the failure happened.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// Heading level outside 1-6.
    #[error("Heading level must be between 1 and 6, got {0}")]
    InvalidHeadingLevel(i64),

    /// A parameter other than the heading level is out of range.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// The search pattern did not compile.
    #[error("Invalid regex pattern: {pattern}. Error: {message}")]
    InvalidPattern {
        /// Pattern as supplied by the caller.
        pattern: String,
        /// Diagnostic from the regex compiler.
        message: String,
    },

    /// No heading matched the requested label.
    #[error("Section not found: {0}")]
    SectionNotFound(String),

    /// The configuration file could not be loaded.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON rendering failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
