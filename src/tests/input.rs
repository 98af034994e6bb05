use super::{read_document, write_output};
use crate::error::Error;
use std::fs;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

#[test]
fn test_read_document_indexes_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "# Title\n\nBody with **bold**.\n## Next").unwrap();

    let doc = read_document(file.path()).unwrap();

    assert_eq!(doc.len(), 4);
    assert_eq!(doc.headings().len(), 2);
    assert_eq!(doc.line(3).unwrap().text, "Body with **bold**.");
}

#[test]
fn test_read_document_handles_crlf() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "# Title\r\ntext\r\n").unwrap();

    let doc = read_document(file.path()).unwrap();

    assert_eq!(doc.len(), 2);
    assert_eq!(doc.headings()[0].text, "Title");
    assert_eq!(doc.line(2).unwrap().text, "text");
}

#[test]
fn test_read_empty_file() {
    let file = NamedTempFile::new().unwrap();
    let doc = read_document(file.path()).unwrap();

    assert!(doc.is_empty());
    assert!(doc.headings().is_empty());
}

#[test]
fn test_missing_file_is_file_not_found() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nonexistent.md");

    let err = read_document(&path).err().unwrap();

    assert!(matches!(&err, Error::FileNotFound(p) if p == &path));
    assert!(err.to_string().starts_with("File not found: "));
}

#[test]
fn test_directory_is_an_io_error() {
    let dir = TempDir::new().unwrap();

    assert!(matches!(read_document(dir.path()), Err(Error::Io { .. })));
}

#[test]
fn test_write_output_replaces_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.json");
    fs::write(&path, "stale contents that are longer").unwrap();

    write_output(&path, "{}").unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
}

#[test]
fn test_write_output_to_missing_directory_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("no").join("such").join("out.md");

    let err = write_output(&path, "x").unwrap_err();

    assert!(matches!(err, Error::Io { path: p, .. } if p == path));
}
