//! Pattern search with context windows.
//!
//! Patterns are regular expressions evaluated one line at a time. Each hit carries up to N lines
//! of context before and M after, borrowed straight from the line store. When a scope is set it
//! is a hard fence: lines outside it are neither searched nor shown as context.

use crate::document::Line;
use crate::error::{Error, Result};
use crate::section::SectionScope;
use regex::{Regex, RegexBuilder};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Knobs for a single search.
pub struct SearchOptions {
    /// Context lines to include before each match.
    pub lines_before: usize,
    /// Context lines to include after each match.
    pub lines_after: usize,
    /// Match case exactly; otherwise the pattern is compiled case-insensitively.
    pub case_sensitive: bool,
    /// Restrict the search, and its context, to this line range.
    pub scope: Option<SectionScope>,
}

impl SearchOptions {
    /// Builds options from signed context counts as they arrive from a caller.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if either count is negative.
    pub fn new(lines_before: i64, lines_after: i64, case_sensitive: bool) -> Result<Self> {
        Ok(Self {
            lines_before: context_count("lines_before", lines_before)?,
            lines_after: context_count("lines_after", lines_after)?,
            case_sensitive,
            scope: None,
        })
    }

    #[must_use]
    /// Fences the search to `scope`.
    pub fn with_scope(self, scope: SectionScope) -> Self {
        Self {
            scope: Some(scope),
            ..self
        }
    }
}

fn context_count(name: &str, value: i64) -> Result<usize> {
    usize::try_from(value).map_err(|_| {
        Error::InvalidParameter(format!("{name} must be zero or greater, got {value}"))
    })
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// One pattern hit with the lines around it.
pub struct SearchMatch<'a> {
    /// Line the match was found on.
    pub line_number: usize,
    /// Byte offset of the match within the line.
    pub start: usize,
    /// Text the pattern matched.
    pub matched_text: &'a str,
    /// The full matching line.
    pub line: &'a Line,
    /// Up to `lines_before` lines preceding the match, clipped at the fence.
    pub context_before: &'a [Line],
    /// Up to `lines_after` lines following the match, clipped at the fence.
    pub context_after: &'a [Line],
}

impl<'a> SearchMatch<'a> {
    /// Context before, the matching line, then context after.
    pub fn context_lines(&self) -> impl Iterator<Item = &'a Line> {
        self.context_before
            .iter()
            .chain(std::iter::once(self.line))
            .chain(self.context_after)
    }

    #[must_use]
    /// The context lines joined by newlines, with trailing newlines removed.
    pub fn context(&self) -> String {
        let joined = self
            .context_lines()
            .map(|line| line.text.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        joined.trim_end_matches('\n').to_string()
    }
}

/// Matches returned by a search, echoing the request.
pub struct SearchResult<'a> {
    /// Matches in line order, then offset order within a line.
    pub matches: Vec<SearchMatch<'a>>,
    /// Pattern as supplied.
    pub pattern: String,
    /// Options the search ran with, including any resolved scope.
    pub options: SearchOptions,
    /// Section label requested, if any.
    pub section: Option<String>,
}

/// Compiles a search pattern, folding case sensitivity into the regex itself.
///
/// # Errors
///
/// Returns `InvalidPattern` for an empty pattern or one the regex compiler rejects.
pub fn compile_pattern(pattern: &str, case_sensitive: bool) -> Result<Regex> {
    if pattern.is_empty() {
        return Err(Error::InvalidPattern {
            pattern: String::new(),
            message: "pattern must not be empty".to_string(),
        });
    }
    RegexBuilder::new(pattern)
        .case_insensitive(!case_sensitive)
        .build()
        .map_err(|e| Error::InvalidPattern {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })
}

/// The lines inside `scope`, or all lines when there is none.
fn fence(lines: &[Line], scope: Option<SectionScope>) -> &[Line] {
    let Some(scope) = scope else {
        return lines;
    };
    let first = lines.first().map_or(1, |line| line.number);
    let start = scope.start_line.saturating_sub(first).min(lines.len());
    let end = scope.end_line.saturating_sub(first).clamp(start, lines.len());
    &lines[start..end]
}

/// Runs `pattern` over the lines and collects every non-overlapping match.
///
/// Lines are visited in ascending order and all matches within a line are reported before the
/// next line. Context windows may overlap neighbouring matches; they are not merged.
///
/// # Errors
///
/// Returns `InvalidPattern` if the pattern does not compile. Zero matches is not an error.
pub fn search<'a>(
    lines: &'a [Line],
    pattern: &str,
    options: &SearchOptions,
) -> Result<Vec<SearchMatch<'a>>> {
    let regex = compile_pattern(pattern, options.case_sensitive)?;
    let window = fence(lines, options.scope);
    let mut matches = Vec::new();

    for (offset, line) in window.iter().enumerate() {
        let context_before = &window[offset.saturating_sub(options.lines_before)..offset];
        let after_end = offset
            .saturating_add(1)
            .saturating_add(options.lines_after)
            .min(window.len());
        let context_after = &window[offset + 1..after_end];
        for found in regex.find_iter(&line.text) {
            matches.push(SearchMatch {
                line_number: line.number,
                start: found.start(),
                matched_text: found.as_str(),
                line,
                context_before,
                context_after,
            });
        }
    }

    Ok(matches)
}

#[cfg(test)]
#[path = "tests/search.rs"]
mod tests;
