//! The line store every extraction reads from.
//!
//! A document is held as an ordered, 1-indexed sequence of lines together with the heading index
//! built from them. Results borrow from the document rather than copying text, so a document
//! must outlive any extraction made from it.

use crate::emphasis::{self, EmphasisFilter, EmphasisResult};
use crate::error::Result;
use crate::headings::{self, ContentLimit, HeadingLevel, HeadingRecord, HeadingResult};
use crate::search::{self, SearchOptions, SearchResult};
use crate::section;

#[derive(Clone, Debug, PartialEq, Eq)]
/// One line of the source text with its newline stripped.
pub struct Line {
    /// Position in the document, starting at 1.
    pub number: usize,
    /// Line content without the trailing newline.
    pub text: String,
}

/// Immutable line sequence plus the heading index computed from it.
pub struct Document {
    lines: Vec<Line>,
    headings: Vec<HeadingRecord>,
}

impl Document {
    #[must_use]
    /// Splits text on newlines (`\n` or `\r\n`) and indexes its headings.
    ///
    /// A trailing newline does not produce an extra empty line, and empty text yields a document
    /// with zero lines.
    pub fn from_text(text: &str) -> Self {
        Self::from_lines(text.lines())
    }

    #[must_use]
    /// Builds a document from already-split lines, numbering them from 1.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lines: Vec<Line> = lines
            .into_iter()
            .enumerate()
            .map(|(i, text)| Line {
                number: i + 1,
                text: text.into(),
            })
            .collect();
        let headings = headings::build_heading_index(&lines);
        Self { lines, headings }
    }

    #[must_use]
    /// All lines in document order.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    #[must_use]
    /// The full heading index, regardless of any level filter applied at query time.
    pub fn headings(&self) -> &[HeadingRecord] {
        &self.headings
    }

    #[must_use]
    /// Looks up a line by its 1-based number.
    pub fn line(&self, number: usize) -> Option<&Line> {
        number.checked_sub(1).and_then(|i| self.lines.get(i))
    }

    #[must_use]
    /// Number of lines in the document.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    /// Whether the document has no lines at all.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lists headings down to `max_level`, optionally previewing the body of the deepest ones.
    ///
    /// # Errors
    ///
    /// Returns `InvalidHeadingLevel` if `max_level` is outside 1-6.
    pub fn extract_headings(
        &self,
        max_level: i64,
        content_limit: Option<ContentLimit>,
    ) -> Result<HeadingResult<'_>> {
        let max_level = HeadingLevel::new(max_level)?;
        Ok(headings::extract_headings(
            &self.lines,
            &self.headings,
            max_level,
            content_limit,
        ))
    }

    /// Collects bold and italic spans, optionally confined to one heading's section.
    ///
    /// # Errors
    ///
    /// Returns `SectionNotFound` if `section` names no heading, or `InvalidParameter` if it is
    /// blank.
    pub fn extract_emphasis(
        &self,
        kind: EmphasisFilter,
        section: Option<&str>,
    ) -> Result<EmphasisResult<'_>> {
        let spans = emphasis::extract_emphasis(&self.lines, &self.headings, kind, section)?;
        Ok(EmphasisResult {
            spans,
            kind,
            section: section.map(str::to_string),
        })
    }

    /// Searches every line (or one section's lines) for `pattern`.
    ///
    /// When `section` is given it is resolved against the heading index and replaces any scope
    /// already set on `options`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPattern` if the pattern does not compile, and `SectionNotFound` or
    /// `InvalidParameter` if the section label cannot be resolved.
    pub fn search(
        &self,
        pattern: &str,
        mut options: SearchOptions,
        section: Option<&str>,
    ) -> Result<SearchResult<'_>> {
        if let Some(label) = section {
            options.scope = Some(section::resolve_section(&self.headings, label)?);
        }
        let matches = search::search(&self.lines, pattern, &options)?;
        Ok(SearchResult {
            matches,
            pattern: pattern.to_string(),
            options,
            section: section.map(str::to_string),
        })
    }
}

#[cfg(test)]
#[path = "tests/document.rs"]
mod tests;
