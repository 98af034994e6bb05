//! The result of one extraction, whichever operation produced it.
//!
//! Formatters take an `Extraction` and branch on its variant, which is all they need to echo the
//! request parameters and count the results.

use crate::emphasis::EmphasisResult;
use crate::headings::HeadingResult;
use crate::search::SearchResult;

/// Output of a heading, emphasis or search query.
pub enum Extraction<'a> {
    /// Headings up to a level.
    Headings(HeadingResult<'a>),
    /// Bold and italic spans.
    Emphasis(EmphasisResult<'a>),
    /// Pattern matches with context.
    Search(SearchResult<'a>),
}

impl Extraction<'_> {
    #[must_use]
    /// Stable operation name used in structured output.
    pub fn operation(&self) -> &'static str {
        match self {
            Self::Headings(_) => "extract_headings",
            Self::Emphasis(_) => "extract_emphasized",
            Self::Search(_) => "find_and_extract",
        }
    }

    #[must_use]
    /// Number of results.
    pub fn count(&self) -> usize {
        match self {
            Self::Headings(result) => result.headings.len(),
            Self::Emphasis(result) => result.spans.len(),
            Self::Search(result) => result.matches.len(),
        }
    }

    #[must_use]
    /// Whether the query found nothing.
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

impl<'a> From<HeadingResult<'a>> for Extraction<'a> {
    fn from(result: HeadingResult<'a>) -> Self {
        Self::Headings(result)
    }
}

impl<'a> From<EmphasisResult<'a>> for Extraction<'a> {
    fn from(result: EmphasisResult<'a>) -> Self {
        Self::Emphasis(result)
    }
}

impl<'a> From<SearchResult<'a>> for Extraction<'a> {
    fn from(result: SearchResult<'a>) -> Self {
        Self::Search(result)
    }
}
