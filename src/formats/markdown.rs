//! Markdown output that preserves the source formatting.
//!
//! Headings are re-emitted with their `#` markers, emphasis keeps its delimiters, and each search
//! match is followed by its context in a fenced block.

use crate::emphasis::EmphasisResult;
use crate::error::Result;
use crate::extraction::Extraction;
use crate::formats::Format;
use crate::headings::HeadingResult;
use crate::search::SearchResult;

/// Renders results as markdown.
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn render(&self, extraction: &Extraction<'_>, _source: &str) -> Result<String> {
        let lines = match extraction {
            Extraction::Headings(result) => headings(result),
            Extraction::Emphasis(result) => emphasis(result),
            Extraction::Search(result) => matches(result),
        };
        Ok(lines.join("\n"))
    }
}

fn headings(result: &HeadingResult<'_>) -> Vec<String> {
    result.headings.iter().map(|entry| entry.raw()).collect()
}

fn emphasis(result: &EmphasisResult<'_>) -> Vec<String> {
    result
        .spans
        .iter()
        .map(|span| {
            let marker = span.kind.marker();
            match span.enclosing_heading {
                Some(heading) => format!(
                    "{marker}{}{marker}\n*(under: {})*",
                    span.text, heading.text
                ),
                None => format!("{marker}{}{marker}", span.text),
            }
        })
        .collect()
}

fn matches(result: &SearchResult<'_>) -> Vec<String> {
    let mut lines = Vec::new();
    for found in &result.matches {
        lines.push(format!(
            "**Match on line {}:** `{}`",
            found.line_number, found.matched_text
        ));
        let context = found.context();
        if !context.is_empty() {
            lines.push("```".to_string());
            lines.push(context);
            lines.push("```".to_string());
            lines.push(String::new());
        }
    }
    lines
}
