//! Integration tests for the Tome CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs::{self, File};
use std::io::Write;
use tempfile::TempDir;

const SAGA_XML: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<ComicInfo>
  <Series>Saga</Series>
  <Number>54</Number>
  <AgeRating>Mature 17+</AgeRating>
</ComicInfo>"#;

/// Create a cbz with one page and an optional ComicInfo.xml
fn create_test_cbz(dir: &TempDir, name: &str, comic_info: Option<&str>) -> std::path::PathBuf {
    let path = dir.path().join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create test folder");
    }

    let mut writer = zip::ZipWriter::new(File::create(&path).expect("Failed to create test file"));
    let options = zip::write::FileOptions::default();
    writer.start_file("001.jpg", options).unwrap();
    writer.write_all(b"jpg").unwrap();
    if let Some(xml) = comic_info {
        writer.start_file("ComicInfo.xml", options).unwrap();
        writer.write_all(xml.as_bytes()).unwrap();
    }
    writer.finish().unwrap();
    path
}

fn tome() -> Command {
    let mut cmd = Command::cargo_bin("tome").unwrap();
    for var in ["TOME_LIBRARY_TYPE", "TOME_LIBRARY_ROOT", "TOME_NO_METADATA", "TOME_JOBS"] {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn test_help() {
    tome()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("parse"))
        .stdout(predicate::str::contains("scan"))
        .stdout(predicate::str::contains("sort-title"))
        .stdout(predicate::str::contains("isbn"));
}

#[test]
fn test_version() {
    tome()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("tome"));
}

#[test]
fn test_parse_help() {
    tome()
        .args(["parse", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Parse a single library file"))
        .stdout(predicate::str::contains("--library-type"))
        .stdout(predicate::str::contains("--no-metadata"))
        .stdout(predicate::str::contains("--json"));
}

#[test]
fn test_parse_with_metadata() {
    let dir = TempDir::new().unwrap();
    let path = create_test_cbz(&dir, "Saga/Saga Chapter Fifty Four.cbz", Some(SAGA_XML));

    let output = tome()
        .args(["parse", "--json", "--library-type", "comic"])
        .arg(&path)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let info: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(info["series"], "Saga");
    assert_eq!(info["chapters"], "54");
    assert_eq!(info["comic_info"]["age_rating"], "Mature17Plus");
}

#[test]
fn test_parse_without_metadata() {
    let dir = TempDir::new().unwrap();
    let path = create_test_cbz(&dir, "Saga/Saga Chapter Fifty Four.cbz", Some(SAGA_XML));

    let output = tome()
        .args(["parse", "--json", "--no-metadata"])
        .arg(&path)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let info: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(info["series"], "Saga");
    assert_eq!(info["chapters"], "-100000");
    assert!(info["comic_info"].is_null());
}

#[test]
fn test_parse_human_output() {
    let dir = TempDir::new().unwrap();
    let path = create_test_cbz(&dir, "Berserk/Berserk v01.cbz", None);

    tome()
        .arg("parse")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Series:      Berserk"))
        .stdout(predicate::str::contains("Volume:      1"));
}

#[test]
fn test_parse_library_type_from_env() {
    let dir = TempDir::new().unwrap();
    let path = create_test_cbz(&dir, "Batman/Batman #004.cbz", None);

    let output = tome()
        .env("TOME_LIBRARY_TYPE", "comic")
        .args(["parse", "--json"])
        .arg(&path)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let info: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(info["series"], "Batman");
    assert_eq!(info["chapters"], "4");
}

#[test]
fn test_parse_unparseable() {
    let dir = TempDir::new().unwrap();
    let path = create_test_cbz(&dir, "[Group].cbz", None);

    tome()
        .args(["parse", "--library-root"])
        .arg(dir.path())
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unparseable"));
}

#[test]
fn test_parse_nonexistent_file() {
    tome()
        .args(["parse", "/nonexistent/file.cbz"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_parse_invalid_library_type() {
    tome()
        .args(["parse", "--library-type", "audiobook", "file.cbz"])
        .assert()
        .failure();
}

#[test]
fn test_scan_directory() {
    let dir = TempDir::new().unwrap();
    create_test_cbz(&dir, "Saga/Saga 054.cbz", Some(SAGA_XML));
    create_test_cbz(&dir, "Berserk/Berserk v01.cbz", None);
    create_test_cbz(&dir, ".trash/Deleted v01.cbz", None);
    fs::write(dir.path().join("notes.txt"), "not a comic").unwrap();

    let output = tome()
        .args(["scan", "--jobs", "2"])
        .arg(dir.path())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let items: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let items = items.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["series"], "Berserk");
    assert_eq!(items[1]["series"], "Saga");
    assert_eq!(items[1]["chapters"], "54");
}

#[test]
fn test_scan_skips_unparseable() {
    let dir = TempDir::new().unwrap();
    create_test_cbz(&dir, "[Group].cbz", None);
    create_test_cbz(&dir, "Berserk/Berserk v01.cbz", None);

    let output = tome()
        .arg("scan")
        .arg(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Unparseable"))
        .get_output()
        .stdout
        .clone();

    let items: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(items.as_array().unwrap().len(), 1);
}

#[test]
fn test_scan_invalid_jobs() {
    let dir = TempDir::new().unwrap();
    tome()
        .args(["scan", "--jobs", "0"])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("jobs must be at least 1"));
}

#[test]
fn test_scan_not_a_directory() {
    tome()
        .args(["scan", "/nonexistent/dir"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not a directory"));
}

#[test]
fn test_sort_title() {
    tome()
        .args(["sort-title", "The Hobbit"])
        .assert()
        .success()
        .stdout("Hobbit\n");

    tome()
        .args(["sort-title", "Berserk"])
        .assert()
        .success()
        .stdout("Berserk\n");
}

#[test]
fn test_isbn() {
    tome()
        .args(["isbn", "978-0-306-40615-7"])
        .assert()
        .success()
        .stdout("978-0-306-40615-7\n");

    tome()
        .args(["isbn", "0-306-40615-3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid ISBN"));
}
