//! Bold and italic span extraction.
//!
//! Spans are found per line by pairing delimiter runs (`*`, `**`, `***` and their `_`
//! counterparts); nothing crosses a line boundary, and lines inside fenced code are skipped.
//! Each span is attributed to the innermost heading whose section contains its line.

use crate::document::Line;
use crate::error::Result;
use crate::headings::{self, HeadingRecord};
use crate::section;
use std::borrow::Cow;
use std::fmt;
use std::ops::Range;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// The kind of emphasis a span carries.
pub enum EmphasisKind {
    /// `**text**` or `__text__`.
    Bold,
    /// `*text*` or `_text_`.
    Italic,
}

impl EmphasisKind {
    #[must_use]
    /// Lowercase name used in output.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bold => "bold",
            Self::Italic => "italic",
        }
    }

    #[must_use]
    /// Markdown delimiter used when re-emitting the span.
    pub fn marker(self) -> &'static str {
        match self {
            Self::Bold => "**",
            Self::Italic => "*",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Which kinds of emphasis a query wants.
pub enum EmphasisFilter {
    #[default]
    /// Both bold and italic.
    All,
    /// Bold only.
    Bold,
    /// Italic only.
    Italic,
}

impl EmphasisFilter {
    #[must_use]
    /// Whether spans of `kind` pass the filter.
    pub fn accepts(self, kind: EmphasisKind) -> bool {
        match self {
            Self::All => true,
            Self::Bold => kind == EmphasisKind::Bold,
            Self::Italic => kind == EmphasisKind::Italic,
        }
    }

    #[must_use]
    /// Lowercase name used in output.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Bold => "bold",
            Self::Italic => "italic",
        }
    }
}

impl fmt::Display for EmphasisFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// An emphasised run of text and where it sits.
pub struct EmphasisSpan<'a> {
    /// Bold or italic.
    pub kind: EmphasisKind,
    /// Content between the delimiters, with nested emphasis markers removed.
    pub text: Cow<'a, str>,
    /// Line the span was found on.
    pub line_number: usize,
    /// Innermost heading whose section contains the line, if any.
    pub enclosing_heading: Option<&'a HeadingRecord>,
}

/// Emphasis spans returned by a query, echoing the request.
pub struct EmphasisResult<'a> {
    /// Spans in document order.
    pub spans: Vec<EmphasisSpan<'a>>,
    /// Kind filter requested.
    pub kind: EmphasisFilter,
    /// Section label requested, if any.
    pub section: Option<String>,
}

#[derive(Clone, Copy, Debug)]
struct Delimiter {
    ch: u8,
    start: usize,
    len: usize,
}

impl Delimiter {
    fn end(&self) -> usize {
        self.start + self.len
    }
}

#[must_use]
/// Finds the emphasis spans on a single line.
///
/// Runs of one, two or three delimiters open italic, bold, or both. A run closes only against a
/// run of the same character and length. Outer spans are reported before spans nested in them,
/// and a triple run yields the bold span before the italic one. The text of each span is the raw
/// source between its delimiters.
pub fn scan_line(text: &str) -> Vec<(EmphasisKind, &str)> {
    let runs = delimiter_runs(text);
    let mut pairs = Vec::new();
    pair_runs(text, &runs, 0, &mut pairs);

    pairs
        .into_iter()
        .flat_map(|(open, close)| {
            let inner = &text[runs[open].end()..runs[close].start];
            let kinds: &[EmphasisKind] = match runs[open].len {
                1 => &[EmphasisKind::Italic],
                2 => &[EmphasisKind::Bold],
                _ => &[EmphasisKind::Bold, EmphasisKind::Italic],
            };
            kinds.iter().map(move |&kind| (kind, inner))
        })
        .collect()
}

#[must_use]
/// Removes paired emphasis delimiters, leaving the text a reader would see.
///
/// Unpaired delimiters, escapes and code spans are left as written.
pub fn plain_text(text: &str) -> Cow<'_, str> {
    let runs = delimiter_runs(text);
    let mut pairs = Vec::new();
    pair_runs(text, &runs, 0, &mut pairs);
    if pairs.is_empty() {
        return Cow::Borrowed(text);
    }

    let mut markup: Vec<Range<usize>> = pairs
        .iter()
        .flat_map(|&(open, close)| {
            [
                runs[open].start..runs[open].end(),
                runs[close].start..runs[close].end(),
            ]
        })
        .collect();
    markup.sort_by_key(|range| range.start);

    let mut plain = String::with_capacity(text.len());
    let mut at = 0;
    for range in markup {
        plain.push_str(&text[at..range.start]);
        at = range.end;
    }
    plain.push_str(&text[at..]);
    Cow::Owned(plain)
}

/// Pairs openers with closers, recording indices into the full run list. Outer pairs come
/// before the pairs nested inside them.
fn pair_runs(text: &str, runs: &[Delimiter], base: usize, pairs: &mut Vec<(usize, usize)>) {
    let mut i = 0;
    while i < runs.len() {
        let open = runs[i];
        let closer = if can_open(text, open) {
            runs[i + 1..]
                .iter()
                .position(|close| {
                    close.ch == open.ch && close.len == open.len && can_close(text, *close)
                })
                .map(|offset| i + 1 + offset)
        } else {
            None
        };
        let Some(j) = closer else {
            i += 1;
            continue;
        };

        pairs.push((base + i, base + j));
        pair_runs(text, &runs[i + 1..j], base + i + 1, pairs);
        i = j + 1;
    }
}

fn can_open(text: &str, run: Delimiter) -> bool {
    if !(1..=3).contains(&run.len) {
        return false;
    }
    let next = text[run.end()..].chars().next();
    if !next.is_some_and(|c| !c.is_whitespace()) {
        return false;
    }
    run.ch == b'*'
        || !text[..run.start]
            .chars()
            .next_back()
            .is_some_and(char::is_alphanumeric)
}

fn can_close(text: &str, run: Delimiter) -> bool {
    let prev = text[..run.start].chars().next_back();
    if !prev.is_some_and(|c| !c.is_whitespace()) {
        return false;
    }
    run.ch == b'*' || !text[run.end()..].chars().next().is_some_and(char::is_alphanumeric)
}

fn run_length(bytes: &[u8], start: usize, ch: u8) -> usize {
    bytes[start..].iter().take_while(|&&b| b == ch).count()
}

/// Maximal delimiter runs outside code spans, skipping backslash-escaped characters.
fn delimiter_runs(text: &str) -> Vec<Delimiter> {
    let bytes = text.as_bytes();
    let code = code_spans(bytes);
    let mut runs = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        if let Some(span) = code.iter().find(|span| span.contains(&i)) {
            i = span.end;
            continue;
        }
        let ch = bytes[i];
        if ch != b'*' && ch != b'_' {
            i += 1;
            continue;
        }
        let escapes = bytes[..i].iter().rev().take_while(|&&b| b == b'\\').count();
        if escapes % 2 == 1 {
            i += 1;
            continue;
        }
        let len = run_length(bytes, i, ch);
        runs.push(Delimiter { ch, start: i, len });
        i += len;
    }

    runs
}

/// Byte ranges of inline code spans: a backtick run up to the next run of equal length.
fn code_spans(bytes: &[u8]) -> Vec<Range<usize>> {
    let mut spans = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'`' {
            i += 1;
            continue;
        }
        let open = run_length(bytes, i, b'`');
        let mut j = i + open;
        let mut end = None;
        while j < bytes.len() {
            if bytes[j] == b'`' {
                let run = run_length(bytes, j, b'`');
                if run == open {
                    end = Some(j + run);
                    break;
                }
                j += run;
            } else {
                j += 1;
            }
        }
        match end {
            Some(end) => {
                spans.push(i..end);
                i = end;
            }
            None => i += open,
        }
    }

    spans
}

#[must_use]
/// The innermost heading whose section contains `line_number`.
///
/// Among the headings at or before the line, the latest one that still contains it is the most
/// deeply nested.
pub fn enclosing_heading(index: &[HeadingRecord], line_number: usize) -> Option<&HeadingRecord> {
    let preceding = index.partition_point(|heading| heading.line_number <= line_number);
    index[..preceding]
        .iter()
        .rev()
        .find(|heading| heading.contains(line_number))
}

/// Extracts emphasis spans from every line outside fenced code, or from one section's lines.
///
/// # Errors
///
/// Returns `SectionNotFound` if `section` resolves to no heading, or `InvalidParameter` if it is
/// blank.
pub fn extract_emphasis<'a>(
    lines: &'a [Line],
    index: &'a [HeadingRecord],
    filter: EmphasisFilter,
    section: Option<&str>,
) -> Result<Vec<EmphasisSpan<'a>>> {
    let scope = section
        .map(|label| section::resolve_section(index, label))
        .transpose()?;

    Ok(lines
        .iter()
        .zip(headings::code_block_mask(lines))
        .filter(|(line, in_code)| {
            !in_code && scope.is_none_or(|scope| scope.contains(line.number))
        })
        .flat_map(|(line, _)| {
            scan_line(&line.text)
                .into_iter()
                .filter(move |(kind, _)| filter.accepts(*kind))
                .map(move |(kind, text)| EmphasisSpan {
                    kind,
                    text: plain_text(text),
                    line_number: line.number,
                    enclosing_heading: enclosing_heading(index, line.number),
                })
        })
        .collect())
}

#[cfg(test)]
#[path = "tests/emphasis.rs"]
mod tests;
