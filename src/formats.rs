//! Format trait and implementations for different output types.
//!
//! This module defines the `Format` trait which abstracts over the ways an extraction can be
//! rendered (markdown, plain text, JSON). The core never depends on any of them; each is a thin
//! adapter over [`Extraction`].

pub mod json;
pub mod markdown;
pub mod text;

use crate::error::Result;
use crate::extraction::Extraction;
use clap::ValueEnum;

/// Renders extraction results for output.
pub trait Format {
    /// Renders `extraction`, which was taken from the document at `source`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialisation fails.
    fn render(&self, extraction: &Extraction<'_>, source: &str) -> Result<String>;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
/// Output formats selectable from the command line or config.
pub enum OutputFormat {
    #[default]
    /// Markdown that preserves the original formatting.
    Markdown,
    /// Plain text with hierarchical indentation.
    Text,
    /// A JSON envelope with operation metadata.
    Json,
}

impl OutputFormat {
    #[must_use]
    /// The renderer for this format.
    pub fn formatter(self) -> Box<dyn Format> {
        match self {
            Self::Markdown => Box::new(markdown::MarkdownFormat),
            Self::Text => Box::new(text::TextFormat),
            Self::Json => Box::new(json::JsonFormat),
        }
    }
}

#[cfg(test)]
#[path = "tests/formats.rs"]
mod tests;
