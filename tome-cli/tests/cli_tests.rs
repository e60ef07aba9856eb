//! Integration tests for the Tome CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Write a catalogue file with the given (title, year) entries
fn create_test_catalogue(dir: &TempDir, name: &str, books: &[(&str, i32)]) -> std::path::PathBuf {
    let entries: Vec<String> = books
        .iter()
        .map(|(title, year)| {
            format!(
                r#"{{"title": "{}", "author": "Author", "published_year": {}, "genre": "Fiction"}}"#,
                title, year
            )
        })
        .collect();
    let path = dir.path().join(name);
    fs::write(&path, format!("[{}]", entries.join(","))).expect("Failed to write test file");
    path
}

#[test]
fn test_help() {
    let mut cmd = Command::cargo_bin("tome-cli").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("decades"))
        .stdout(predicate::str::contains("add"))
        .stdout(predicate::str::contains("fetch"));
}

#[test]
fn test_version() {
    let mut cmd = Command::cargo_bin("tome-cli").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("tome"));
}

#[test]
fn test_decades_help() {
    let mut cmd = Command::cargo_bin("tome-cli").unwrap();
    cmd.args(["decades", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("publication decade"))
        .stdout(predicate::str::contains("--json"))
        .stdout(predicate::str::contains("--year"));
}

#[test]
fn test_decades_text_output() {
    let temp = TempDir::new().unwrap();
    let path = create_test_catalogue(&temp, "books.json", &[("Old", 1950), ("New", 2020)]);

    let mut cmd = Command::cargo_bin("tome-cli").unwrap();
    cmd.args(["decades", path.to_str().unwrap(), "--year", "2026"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2020 - 2029"))
        .stdout(predicate::str::contains("New by Author (2020)"))
        .stdout(predicate::str::contains("1960 - 2019"))
        .stdout(predicate::str::contains("No publications"))
        .stdout(predicate::str::contains("1950 - 1959"));
}

#[test]
fn test_decades_json_output() {
    let temp = TempDir::new().unwrap();
    let path = create_test_catalogue(&temp, "books.json", &[("Old", 1950), ("New", 2020)]);

    let mut cmd = Command::cargo_bin("tome-cli").unwrap();
    let output = cmd
        .args(["decades", path.to_str().unwrap(), "--json", "--year", "2026"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let shelf: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(shelf["1960 - 2019"], "No publications");
    assert_eq!(shelf["2020 - 2029"][0]["title"], "New");
}

#[test]
fn test_decades_missing_file_scaffolds() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("absent.json");

    let mut cmd = Command::cargo_bin("tome-cli").unwrap();
    cmd.args(["decades", path.to_str().unwrap(), "--year", "2026"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1900 - 2029"))
        .stdout(predicate::str::contains("No publications"));
}

#[test]
fn test_add_creates_and_appends() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("books.json");

    let mut cmd = Command::cargo_bin("tome-cli").unwrap();
    cmd.args([
        "add",
        path.to_str().unwrap(),
        "--title",
        "Dune",
        "--author",
        "Frank Herbert",
        "--year",
        "1965",
        "--genre",
        "Science Fiction",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("1 book(s)"));

    let data = fs::read_to_string(&path).unwrap();
    let stored: serde_json::Value = serde_json::from_str(&data).unwrap();
    assert_eq!(stored[0]["title"], "Dune");
    assert_eq!(stored[0]["published_year"], 1965);
}

#[test]
fn test_add_sanitizes_fields() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("books.json");

    let mut cmd = Command::cargo_bin("tome-cli").unwrap();
    cmd.args([
        "add",
        path.to_str().unwrap(),
        "--title",
        "  <Dune>  ",
        "--author",
        "Frank Herbert",
        "--year",
        "1965",
    ])
    .assert()
    .success();

    let data = fs::read_to_string(&path).unwrap();
    let stored: serde_json::Value = serde_json::from_str(&data).unwrap();
    assert_eq!(stored[0]["title"], "&lt;Dune&gt;");
}

#[test]
fn test_add_rejects_blank_title() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("books.json");

    let mut cmd = Command::cargo_bin("tome-cli").unwrap();
    cmd.args([
        "add",
        path.to_str().unwrap(),
        "--title",
        "   ",
        "--author",
        "Nobody",
        "--year",
        "2000",
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains("blank"));
}
