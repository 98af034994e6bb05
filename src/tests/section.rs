use super::{find_heading, resolve_section, SectionScope};
use crate::document::Document;
use crate::error::Error;

const SAMPLE: &str = include_str!("fixtures/sample.md");

#[test]
fn test_nested_section_scopes() {
    let doc = Document::from_text("# A\n## B\n### C\ntext\n## D\nmore");
    let index = doc.headings();

    let scope = |label| resolve_section(index, label).unwrap();

    assert_eq!(scope("B"), SectionScope { start_line: 2, end_line: 5 });
    assert_eq!(scope("C"), SectionScope { start_line: 3, end_line: 5 });
    assert_eq!(scope("D"), SectionScope { start_line: 5, end_line: 7 });
}

#[test]
fn test_exact_match_is_case_insensitive() {
    let doc = Document::from_text(SAMPLE);
    let scope = resolve_section(doc.headings(), "6. definitions").unwrap();

    assert_eq!(scope, SectionScope { start_line: 32, end_line: 37 });
}

#[test]
fn test_exact_match_beats_earlier_substring_match() {
    let doc = Document::from_text("# Terms and Definitions\n# Definitions\n");
    let heading = find_heading(doc.headings(), "definitions").unwrap();

    assert_eq!(heading.line_number, 2);
}

#[test]
fn test_substring_fallback_takes_first_in_document_order() {
    let doc = Document::from_text(SAMPLE);
    let heading = find_heading(doc.headings(), "subsection").unwrap();

    assert_eq!(heading.text, "Subsection 1.1: Details");
}

#[test]
fn test_label_containing_heading_text_matches() {
    let doc = Document::from_text("# Intro\n## Scope\n");
    let heading = find_heading(doc.headings(), "## Scope of work").unwrap();

    assert_eq!(heading.text, "Scope");
}

#[test]
fn test_label_is_trimmed() {
    let doc = Document::from_text(SAMPLE);
    let heading = find_heading(doc.headings(), "  Section 2: Features  ").unwrap();

    assert_eq!(heading.line_number, 18);
}

#[test]
fn test_repeated_heading_resolves_to_first() {
    let doc = Document::from_text("## Notes\none\n## Notes\ntwo");
    let scope = resolve_section(doc.headings(), "Notes").unwrap();

    assert_eq!(scope, SectionScope { start_line: 1, end_line: 3 });
}

#[test]
fn test_missing_section_is_an_error() {
    let doc = Document::from_text(SAMPLE);
    let err = resolve_section(doc.headings(), "Appendix Z").unwrap_err();

    assert!(matches!(err, Error::SectionNotFound(label) if label == "Appendix Z"));
}

#[test]
fn test_empty_heading_text_never_matches_by_containment() {
    let doc = Document::from_text("# \n## Real\n");
    let err = resolve_section(doc.headings(), "missing").unwrap_err();

    assert!(matches!(err, Error::SectionNotFound(_)));
}

#[test]
fn test_blank_label_is_invalid() {
    let doc = Document::from_text(SAMPLE);

    assert!(matches!(
        resolve_section(doc.headings(), "   "),
        Err(Error::InvalidParameter(_))
    ));
}

#[test]
fn test_no_headings_means_not_found() {
    let doc = Document::from_text("");

    assert!(matches!(
        resolve_section(doc.headings(), "Anything"),
        Err(Error::SectionNotFound(_))
    ));
}

#[test]
fn test_scope_contains_and_len() {
    let scope = SectionScope {
        start_line: 3,
        end_line: 5,
    };

    assert!(!scope.contains(2));
    assert!(scope.contains(3));
    assert!(scope.contains(4));
    assert!(!scope.contains(5));
    assert_eq!(scope.len(), 2);
    assert!(!scope.is_empty());
}
