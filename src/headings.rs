//! Heading index construction for ATX-style markdown headings (# syntax).
//!
//! Headings are recognised by a flat scan over lines rather than a parse tree, which keeps every
//! record addressable by line number. Each record carries the extent of its section: from the
//! heading line up to, but excluding, the next heading of the same or a shallower level. Deeper
//! headings nest inside and do not end it.

use crate::document::Line;
use crate::emphasis;
use crate::error::{Error, Result};
use std::fmt;

/// Deepest heading level markdown allows.
pub const MAX_HEADING_LEVEL: u8 = 6;

#[derive(Clone, Debug, PartialEq, Eq)]
/// A heading and the line range of the section it opens.
pub struct HeadingRecord {
    /// Number of leading `#` characters (1-6).
    pub level: u8,
    /// Heading content without markup or surrounding whitespace.
    pub text: String,
    /// Line the heading sits on.
    pub line_number: usize,
    /// First line after the section (exclusive bound), or one past the last line.
    pub section_end: usize,
}

impl HeadingRecord {
    #[must_use]
    /// Whether `line_number` falls within `[line_number, section_end)`.
    pub fn contains(&self, line_number: usize) -> bool {
        (self.line_number..self.section_end).contains(&line_number)
    }

    #[must_use]
    /// The heading as it would be written in markdown, e.g. `## Title`.
    pub fn raw(&self) -> String {
        format!("{} {}", "#".repeat(usize::from(self.level)), self.text)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
/// A validated heading level in `1..=6`.
pub struct HeadingLevel(u8);

impl HeadingLevel {
    /// Validates a requested level.
    ///
    /// # Errors
    ///
    /// Returns `InvalidHeadingLevel` if `level` is outside 1-6.
    pub fn new(level: i64) -> Result<Self> {
        u8::try_from(level)
            .ok()
            .filter(|l| (1..=MAX_HEADING_LEVEL).contains(l))
            .map(Self)
            .ok_or(Error::InvalidHeadingLevel(level))
    }

    #[must_use]
    /// The level as a plain number.
    pub fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// How much of a section body to preview after its heading.
pub enum ContentLimit {
    /// Keep the first `n` non-blank body lines.
    Lines(usize),
    /// Keep the first `n` characters of the joined body.
    Chars(usize),
}

impl ContentLimit {
    #[must_use]
    /// Picks the preview limit from optional line and character counts.
    ///
    /// A positive line count wins; otherwise a positive character count is used.
    pub fn from_counts(lines: Option<usize>, chars: Option<usize>) -> Option<Self> {
        lines
            .filter(|&n| n > 0)
            .map(Self::Lines)
            .or_else(|| chars.filter(|&n| n > 0).map(Self::Chars))
    }
}

/// A heading selected by a query, with its optional body preview.
pub struct HeadingEntry<'a> {
    /// The indexed heading.
    pub heading: &'a HeadingRecord,
    /// Section body preview, present only for the deepest requested level.
    pub content: Option<String>,
}

impl HeadingEntry<'_> {
    #[must_use]
    /// Markdown for the heading followed by its preview on the next line, if any.
    pub fn raw(&self) -> String {
        match &self.content {
            Some(content) => format!("{}\n{content}", self.heading.raw()),
            None => self.heading.raw(),
        }
    }
}

/// Headings returned by a level-limited query, echoing the request.
pub struct HeadingResult<'a> {
    /// Selected headings in document order.
    pub headings: Vec<HeadingEntry<'a>>,
    /// Deepest level requested.
    pub max_level: HeadingLevel,
    /// Preview limit requested for the deepest level, if any.
    pub content_limit: Option<ContentLimit>,
}

#[must_use]
/// Recognises an ATX heading line, returning its level and text.
///
/// The line must begin with 1-6 `#` followed by a space or tab. A closing run of `#` is dropped
/// when whitespace separates it from the text, so `# C#` keeps its text intact.
pub fn parse_heading(line: &str) -> Option<(u8, &str)> {
    let hashes = line.bytes().take_while(|&b| b == b'#').count();
    let level = u8::try_from(hashes).ok()?;
    if !(1..=MAX_HEADING_LEVEL).contains(&level) {
        return None;
    }
    let rest = &line[hashes..];
    if !rest.starts_with([' ', '\t']) {
        return None;
    }
    Some((level, strip_closing_sequence(rest.trim())))
}

fn strip_closing_sequence(text: &str) -> &str {
    let stripped = text.trim_end_matches('#');
    if stripped.is_empty() {
        stripped
    } else if stripped.ends_with([' ', '\t']) {
        stripped.trim_end()
    } else {
        text
    }
}

struct Fence {
    ch: u8,
    len: usize,
    bare: bool,
}

/// A code fence marker: at least three backticks or tildes after optional indentation.
fn code_fence(line: &str) -> Option<Fence> {
    let trimmed = line.trim_start();
    let ch = *trimmed.as_bytes().first()?;
    if ch != b'`' && ch != b'~' {
        return None;
    }
    let len = trimmed.bytes().take_while(|&b| b == ch).count();
    let info = trimmed[len..].trim();
    if len < 3 || (ch == b'`' && info.contains('`')) {
        return None;
    }
    Some(Fence {
        ch,
        len,
        bare: info.is_empty(),
    })
}

#[must_use]
/// Marks the lines that belong to fenced code blocks, fence markers included.
///
/// A fence opens on a run of three or more backticks or tildes and closes on a bare run of the
/// same character at least as long. A fence left open runs to the end of the document.
pub fn code_block_mask(lines: &[Line]) -> Vec<bool> {
    let mut open: Option<(u8, usize)> = None;
    lines
        .iter()
        .map(|line| match (open, code_fence(&line.text)) {
            (None, Some(fence)) => {
                open = Some((fence.ch, fence.len));
                true
            }
            (Some((ch, len)), Some(fence))
                if fence.bare && fence.ch == ch && fence.len >= len =>
            {
                open = None;
                true
            }
            (Some(_), _) => true,
            (None, None) => false,
        })
        .collect()
}

#[must_use]
/// Scans lines for headings and computes each section's end.
///
/// Lines are expected to be numbered contiguously from 1. Lines inside fenced code blocks are
/// never headings. A stack of headings whose sections are still open is closed off whenever a
/// heading of the same or shallower level appears; whatever remains open at the end runs to one
/// past the last line.
pub fn build_heading_index(lines: &[Line]) -> Vec<HeadingRecord> {
    let end_of_document = lines.last().map_or(1, |line| line.number + 1);
    let mut headings: Vec<HeadingRecord> = Vec::new();
    let mut open: Vec<usize> = Vec::new();

    for (line, in_code) in lines.iter().zip(code_block_mask(lines)) {
        if in_code {
            continue;
        }
        let Some((level, text)) = parse_heading(&line.text) else {
            continue;
        };
        while let Some(&top) = open.last() {
            if headings[top].level < level {
                break;
            }
            headings[top].section_end = line.number;
            open.pop();
        }
        open.push(headings.len());
        headings.push(HeadingRecord {
            level,
            text: text.to_string(),
            line_number: line.number,
            section_end: end_of_document,
        });
    }

    headings
}

#[must_use]
/// Keeps the headings at or above `max_level`, in their original order.
pub fn filter_by_level(index: &[HeadingRecord], max_level: HeadingLevel) -> Vec<&HeadingRecord> {
    index
        .iter()
        .filter(|heading| heading.level <= max_level.get())
        .collect()
}

#[must_use]
/// Previews a heading's section body: its non-blank, non-heading lines, trimmed and with
/// emphasis markers removed.
///
/// Returns `None` when the section has no body or the limit leaves nothing.
pub fn section_content(
    lines: &[Line],
    heading: &HeadingRecord,
    limit: ContentLimit,
) -> Option<String> {
    let body = lines
        .get(heading.line_number..heading.section_end.saturating_sub(1))
        .unwrap_or_default()
        .iter()
        .filter(|line| parse_heading(&line.text).is_none())
        .map(|line| line.text.trim())
        .filter(|text| !text.is_empty())
        .map(emphasis::plain_text);

    let content = match limit {
        ContentLimit::Lines(n) => body.take(n).collect::<Vec<_>>().join("\n"),
        ContentLimit::Chars(n) => body.collect::<Vec<_>>().join("\n").chars().take(n).collect(),
    };

    (!content.is_empty()).then_some(content)
}

#[must_use]
/// Projects the index to `max_level` and attaches previews to headings at exactly that level.
pub fn extract_headings<'a>(
    lines: &[Line],
    index: &'a [HeadingRecord],
    max_level: HeadingLevel,
    content_limit: Option<ContentLimit>,
) -> HeadingResult<'a> {
    let headings = filter_by_level(index, max_level)
        .into_iter()
        .map(|heading| HeadingEntry {
            heading,
            content: content_limit
                .filter(|_| heading.level == max_level.get())
                .and_then(|limit| section_content(lines, heading, limit)),
        })
        .collect();

    HeadingResult {
        headings,
        max_level,
        content_limit,
    }
}

#[cfg(test)]
#[path = "tests/headings.rs"]
mod tests;
