use super::{Format, OutputFormat};
use crate::document::Document;
use crate::emphasis::EmphasisFilter;
use crate::extraction::Extraction;
use crate::headings::ContentLimit;
use crate::search::SearchOptions;
use clap::ValueEnum;
use serde_json::{json, Value};

const SAMPLE: &str = include_str!("fixtures/sample.md");
const SOURCE: &str = "sample.md";

fn render(format: OutputFormat, extraction: &Extraction<'_>) -> String {
    format.formatter().render(extraction, SOURCE).unwrap()
}

fn render_json(extraction: &Extraction<'_>) -> Value {
    serde_json::from_str(&render(OutputFormat::Json, extraction)).unwrap()
}

fn definitions_search(doc: &Document) -> Extraction<'_> {
    let options = SearchOptions::new(0, 1, false).unwrap();
    doc.search("Fabricator", options, Some("6. DEFINITIONS"))
        .unwrap()
        .into()
}

#[test]
fn test_output_format_names() {
    assert_eq!(OutputFormat::default(), OutputFormat::Markdown);
    assert_eq!(
        OutputFormat::from_str("text", false).unwrap(),
        OutputFormat::Text
    );
    assert!(OutputFormat::from_str("yaml", true).is_err());
}

#[test]
fn test_markdown_headings_keep_markers() {
    let doc = Document::from_text(SAMPLE);
    let extraction = doc.extract_headings(2, None).unwrap().into();

    assert_eq!(
        render(OutputFormat::Markdown, &extraction),
        "# Main Title Level 1\n\
         ## Section 1: Introduction\n\
         ## Section 2: Features\n\
         ## Section 3: Definitions\n\
         ## 6. DEFINITIONS"
    );
}

#[test]
fn test_markdown_emphasis_with_heading_context() {
    let doc = Document::from_text(SAMPLE);
    let extraction = doc
        .extract_emphasis(EmphasisFilter::Bold, Some("6. DEFINITIONS"))
        .unwrap()
        .into();

    assert_eq!(
        render(OutputFormat::Markdown, &extraction),
        "**\"Fabricator\"**\n*(under: 6. DEFINITIONS)*"
    );
}

#[test]
fn test_markdown_emphasis_without_heading() {
    let doc = Document::from_text("plain *aside* here");
    let extraction = doc.extract_emphasis(EmphasisFilter::All, None).unwrap().into();

    assert_eq!(render(OutputFormat::Markdown, &extraction), "*aside*");
}

#[test]
fn test_markdown_search_fences_context() {
    let doc = Document::from_text(SAMPLE);
    let output = render(OutputFormat::Markdown, &definitions_search(&doc));

    assert!(output.starts_with(
        "**Match on line 34:** `Fabricator`\n\
         ```\n\
         **\"Fabricator\"** means the party that builds the thing.\n\
         The Fabricator shall deliver on time.\n\
         ```\n"
    ));
    assert!(output.contains("**Match on line 35:** `Fabricator`"));
}

#[test]
fn test_text_headings_are_indented() {
    let doc = Document::from_text(SAMPLE);
    let extraction = doc
        .extract_headings(2, Some(ContentLimit::Lines(1)))
        .unwrap()
        .into();
    let output = render(OutputFormat::Text, &extraction);
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines[0], "Main Title Level 1");
    assert_eq!(lines[1], "  Section 1: Introduction");
    assert_eq!(
        lines[2],
        "    Some bold text and some italic text in the intro."
    );
    assert_eq!(lines[3], "  Section 2: Features");
}

#[test]
fn test_text_emphasis_and_search() {
    let doc = Document::from_text(SAMPLE);
    let emphasis = doc
        .extract_emphasis(EmphasisFilter::Bold, Some("6. DEFINITIONS"))
        .unwrap()
        .into();

    assert_eq!(
        render(OutputFormat::Text, &emphasis),
        "**\"Fabricator\"** (under: 6. DEFINITIONS)"
    );

    let output = render(OutputFormat::Text, &definitions_search(&doc));
    assert!(output.starts_with("Line 34: Fabricator\nContext:\n**\"Fabricator\"**"));
}

#[test]
fn test_json_search_envelope() {
    let doc = Document::from_text(SAMPLE);
    let value = render_json(&definitions_search(&doc));

    assert_eq!(value["operation"], "find_and_extract");
    assert_eq!(value["file"], SOURCE);
    assert_eq!(value["status"], "success");
    assert_eq!(value["count"], 2);
    assert_eq!(
        value["parameters"],
        json!({
            "pattern": "Fabricator",
            "lines_before": 0,
            "lines_after": 1,
            "case_sensitive": false,
            "within_section": "6. DEFINITIONS",
        })
    );

    let first = &value["results"][0];
    assert_eq!(first["match"], "Fabricator");
    assert_eq!(first["line_number"], 34);
    assert_eq!(first["column"], 3);
    assert_eq!(
        first["context_lines"],
        json!([
            "**\"Fabricator\"** means the party that builds the thing.",
            "The Fabricator shall deliver on time.",
        ])
    );
    assert_eq!(
        first["context"],
        "**\"Fabricator\"** means the party that builds the thing.\n\
         The Fabricator shall deliver on time."
    );
}

#[test]
fn test_json_headings_with_content() {
    let doc = Document::from_text(SAMPLE);
    let extraction = doc
        .extract_headings(2, Some(ContentLimit::Chars(4)))
        .unwrap()
        .into();
    let value = render_json(&extraction);

    assert_eq!(value["operation"], "extract_headings");
    assert_eq!(
        value["parameters"],
        json!({
            "max_level": 2,
            "include_content_for_level": 2,
            "include_content_chars": 4,
        })
    );
    assert_eq!(value["count"], 5);

    let top = &value["results"][0];
    assert_eq!(top["level"], 1);
    assert_eq!(top["raw"], "# Main Title Level 1");
    assert_eq!(top["section_end"], 37);
    assert!(top.get("content").is_none());
    assert_eq!(value["results"][2]["content"], "Feat");
}

#[test]
fn test_json_emphasis_items() {
    let doc = Document::from_text("Intro *note*.\n# Head\n**key** point");
    let extraction = doc.extract_emphasis(EmphasisFilter::All, None).unwrap().into();
    let value = render_json(&extraction);

    assert_eq!(
        value["parameters"],
        json!({ "type": "all", "heading_filter": null })
    );
    assert_eq!(
        value["results"],
        json!([
            { "type": "italic", "text": "note", "line_number": 1, "heading_context": null },
            { "type": "bold", "text": "key", "line_number": 3, "heading_context": "Head" },
        ])
    );
}

#[test]
fn test_json_no_matches_status() {
    let doc = Document::from_text(SAMPLE);
    let extraction = doc
        .search("zebra", SearchOptions::default(), None)
        .unwrap()
        .into();
    let value = render_json(&extraction);

    assert_eq!(value["status"], "no_matches");
    assert_eq!(value["count"], 0);
    assert_eq!(value["results"], json!([]));
}
