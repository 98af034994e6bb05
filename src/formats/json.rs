//! Structured JSON output.
//!
//! Every extraction is wrapped in the same envelope: `operation`, `file`, `parameters`,
//! `results`, `count` and `status`, so consumers can branch on the operation and tell an empty
//! result (`no_matches`) from a successful one without parsing the results.

use crate::emphasis::EmphasisResult;
use crate::error::Result;
use crate::extraction::Extraction;
use crate::formats::Format;
use crate::headings::{ContentLimit, HeadingResult};
use crate::search::SearchResult;
use serde::Serialize;

/// Renders results as a pretty-printed JSON envelope.
pub struct JsonFormat;

#[derive(Serialize)]
struct Envelope<'a, P, R> {
    operation: &'a str,
    file: &'a str,
    parameters: P,
    count: usize,
    results: Vec<R>,
    status: &'a str,
}

#[derive(Serialize)]
struct HeadingParameters {
    max_level: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    include_content_for_level: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    include_content_lines: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    include_content_chars: Option<usize>,
}

#[derive(Serialize)]
struct HeadingItem<'a> {
    level: u8,
    text: &'a str,
    raw: String,
    line_number: usize,
    section_end: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<&'a str>,
}

#[derive(Serialize)]
struct EmphasisParameters<'a> {
    #[serde(rename = "type")]
    kind: &'a str,
    heading_filter: Option<&'a str>,
}

#[derive(Serialize)]
struct EmphasisItem<'a> {
    #[serde(rename = "type")]
    kind: &'a str,
    text: &'a str,
    line_number: usize,
    heading_context: Option<&'a str>,
}

#[derive(Serialize)]
struct SearchParameters<'a> {
    pattern: &'a str,
    lines_before: usize,
    lines_after: usize,
    case_sensitive: bool,
    within_section: Option<&'a str>,
}

#[derive(Serialize)]
struct MatchItem<'a> {
    #[serde(rename = "match")]
    matched: &'a str,
    line_number: usize,
    column: usize,
    context: String,
    context_lines: Vec<&'a str>,
}

fn envelope<P: Serialize, R: Serialize>(
    operation: &str,
    file: &str,
    parameters: P,
    results: Vec<R>,
) -> Result<String> {
    let envelope = Envelope {
        operation,
        file,
        parameters,
        count: results.len(),
        status: if results.is_empty() {
            "no_matches"
        } else {
            "success"
        },
        results,
    };
    Ok(serde_json::to_string_pretty(&envelope)?)
}

impl Format for JsonFormat {
    fn render(&self, extraction: &Extraction<'_>, source: &str) -> Result<String> {
        let operation = extraction.operation();
        match extraction {
            Extraction::Headings(result) => {
                envelope(operation, source, heading_parameters(result), headings(result))
            }
            Extraction::Emphasis(result) => envelope(
                operation,
                source,
                EmphasisParameters {
                    kind: result.kind.as_str(),
                    heading_filter: result.section.as_deref(),
                },
                emphasis(result),
            ),
            Extraction::Search(result) => envelope(
                operation,
                source,
                SearchParameters {
                    pattern: &result.pattern,
                    lines_before: result.options.lines_before,
                    lines_after: result.options.lines_after,
                    case_sensitive: result.options.case_sensitive,
                    within_section: result.section.as_deref(),
                },
                matches(result),
            ),
        }
    }
}

fn heading_parameters(result: &HeadingResult<'_>) -> HeadingParameters {
    let (lines, chars) = match result.content_limit {
        Some(ContentLimit::Lines(n)) => (Some(n), None),
        Some(ContentLimit::Chars(n)) => (None, Some(n)),
        None => (None, None),
    };
    HeadingParameters {
        max_level: result.max_level.get(),
        include_content_for_level: result.content_limit.map(|_| result.max_level.get()),
        include_content_lines: lines,
        include_content_chars: chars,
    }
}

fn headings<'a>(result: &'a HeadingResult<'_>) -> Vec<HeadingItem<'a>> {
    result
        .headings
        .iter()
        .map(|entry| HeadingItem {
            level: entry.heading.level,
            text: &entry.heading.text,
            raw: entry.raw(),
            line_number: entry.heading.line_number,
            section_end: entry.heading.section_end,
            content: entry.content.as_deref(),
        })
        .collect()
}

fn emphasis<'a>(result: &'a EmphasisResult<'_>) -> Vec<EmphasisItem<'a>> {
    result
        .spans
        .iter()
        .map(|span| EmphasisItem {
            kind: span.kind.as_str(),
            text: &span.text,
            line_number: span.line_number,
            heading_context: span.enclosing_heading.map(|heading| heading.text.as_str()),
        })
        .collect()
}

fn matches<'a>(result: &'a SearchResult<'_>) -> Vec<MatchItem<'a>> {
    result
        .matches
        .iter()
        .map(|found| MatchItem {
            matched: found.matched_text,
            line_number: found.line_number,
            column: found.start,
            context: found.context(),
            context_lines: found.context_lines().map(|line| line.text.as_str()).collect(),
        })
        .collect()
}
