//! Section scopes and the lookup of a section by its heading label.
//!
//! A section represents a hierarchical division of a document opened by a heading. It spans the
//! heading line and everything nested beneath it, stopping before the next heading of the same or
//! a shallower level. Queries are confined to a section through a `SectionScope`.

use crate::error::{Error, Result};
use crate::headings::HeadingRecord;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Half-open line range `[start_line, end_line)` fencing a query to one section.
pub struct SectionScope {
    /// First line inside the scope (the heading itself).
    pub start_line: usize,
    /// First line past the scope.
    pub end_line: usize,
}

impl SectionScope {
    #[must_use]
    /// Whether `line_number` lies inside the scope.
    pub fn contains(&self, line_number: usize) -> bool {
        (self.start_line..self.end_line).contains(&line_number)
    }

    #[must_use]
    /// Number of lines covered.
    pub fn len(&self) -> usize {
        self.end_line.saturating_sub(self.start_line)
    }

    #[must_use]
    /// Whether the scope covers no lines.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<&HeadingRecord> for SectionScope {
    fn from(heading: &HeadingRecord) -> Self {
        Self {
            start_line: heading.line_number,
            end_line: heading.section_end,
        }
    }
}

/// Finds the heading a label refers to.
///
/// Matching is case-insensitive on the trimmed label. An exact match wins; failing that, the
/// first heading in document order whose text contains the label, or is contained by it, is
/// taken. Headings with empty text never match by containment.
///
/// # Errors
///
/// Returns `InvalidParameter` for a blank label and `SectionNotFound` when nothing matches.
pub fn find_heading<'a>(index: &'a [HeadingRecord], label: &str) -> Result<&'a HeadingRecord> {
    let query = label.trim().to_lowercase();
    if query.is_empty() {
        return Err(Error::InvalidParameter(
            "section label must not be empty".to_string(),
        ));
    }

    let candidates: Vec<(&HeadingRecord, String)> = index
        .iter()
        .map(|heading| (heading, heading.text.to_lowercase()))
        .collect();

    candidates
        .iter()
        .find(|(_, text)| *text == query)
        .or_else(|| {
            candidates.iter().find(|(_, text)| {
                text.contains(&query) || (!text.is_empty() && query.contains(text.as_str()))
            })
        })
        .map(|(heading, _)| *heading)
        .ok_or_else(|| Error::SectionNotFound(label.to_string()))
}

/// Resolves a label to the line range of its section.
///
/// # Errors
///
/// Same as [`find_heading`].
pub fn resolve_section(index: &[HeadingRecord], label: &str) -> Result<SectionScope> {
    find_heading(index, label).map(SectionScope::from)
}

#[cfg(test)]
#[path = "tests/section.rs"]
mod tests;
