//! Plain text output with hierarchical indentation.

use crate::emphasis::EmphasisResult;
use crate::error::Result;
use crate::extraction::Extraction;
use crate::formats::Format;
use crate::headings::HeadingResult;
use crate::search::SearchResult;

/// Renders results as indented plain text.
pub struct TextFormat;

impl Format for TextFormat {
    fn render(&self, extraction: &Extraction<'_>, _source: &str) -> Result<String> {
        let lines = match extraction {
            Extraction::Headings(result) => headings(result),
            Extraction::Emphasis(result) => emphasis(result),
            Extraction::Search(result) => matches(result),
        };
        Ok(lines.join("\n"))
    }
}

fn indent(level: u8) -> String {
    "  ".repeat(usize::from(level.saturating_sub(1)))
}

fn headings(result: &HeadingResult<'_>) -> Vec<String> {
    let mut lines = Vec::new();
    for entry in &result.headings {
        let prefix = indent(entry.heading.level);
        lines.push(format!("{prefix}{}", entry.heading.text));
        if let Some(content) = &entry.content {
            lines.extend(content.lines().map(|line| format!("{prefix}  {line}")));
        }
    }
    lines
}

fn emphasis(result: &EmphasisResult<'_>) -> Vec<String> {
    result
        .spans
        .iter()
        .map(|span| {
            let marker = span.kind.marker();
            match span.enclosing_heading {
                Some(heading) => {
                    format!("{marker}{}{marker} (under: {})", span.text, heading.text)
                }
                None => format!("{marker}{}{marker}", span.text),
            }
        })
        .collect()
}

fn matches(result: &SearchResult<'_>) -> Vec<String> {
    let mut lines = Vec::new();
    for found in &result.matches {
        lines.push(format!("Line {}: {}", found.line_number, found.matched_text));
        let context = found.context();
        if !context.is_empty() {
            lines.push(format!("Context:\n{context}"));
            lines.push(String::new());
        }
    }
    lines
}
