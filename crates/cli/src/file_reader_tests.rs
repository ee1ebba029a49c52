#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::fs;

use super::*;
use tempfile::TempDir;

#[test]
fn reads_small_file_owned() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("small.clj");
    fs::write(&path, "(ns small)\n").unwrap();

    let content = FileContent::read(&path).unwrap();
    assert!(matches!(content, FileContent::Owned(_)));
    assert_eq!(content.as_str(), Some("(ns small)\n"));
}

#[test]
fn maps_large_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("large.clj");
    let body = ";".repeat(80 * 1024);
    fs::write(&path, &body).unwrap();

    let content = FileContent::read(&path).unwrap();
    assert!(matches!(content, FileContent::Mapped(_)));
    assert_eq!(content.as_str().map(str::len), Some(body.len()));
}

#[test]
fn non_utf8_content_yields_none() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("binary.clj");
    fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

    let content = FileContent::read(&path).unwrap();
    assert!(content.as_str().is_none());
}

#[test]
fn missing_file_is_an_io_error() {
    let tmp = TempDir::new().unwrap();
    assert!(FileContent::read(&tmp.path().join("nope.clj")).is_err());
}

#[test]
fn empty_file_reads_empty() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("empty.clj");
    fs::write(&path, "").unwrap();

    let content = FileContent::read(&path).unwrap();
    assert_eq!(content.as_str(), Some(""));
}
