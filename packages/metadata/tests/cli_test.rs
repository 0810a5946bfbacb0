//! Command-line tests for the `legislation-metadata` binary.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn cmd() -> Command {
    Command::cargo_bin("legislation-metadata").unwrap()
}

#[test]
fn test_extract_yaml() {
    cmd()
        .args(["extract"])
        .arg(fixture("ukpga_2020_7/data.xml"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("---\n"))
        .stdout(predicate::str::contains("title: Coronavirus Act 2020"))
        .stdout(predicate::str::contains(
            "document_uri: http://www.legislation.gov.uk/ukpga/2020/7",
        ));
}

#[test]
fn test_extract_json() {
    let output = cmd()
        .args(["extract", "--format", "json"])
        .arg(fixture("ukpga_2020_7/data.xml"))
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["year"], 2020);
    assert_eq!(value["sections_count"], 7);
    assert_eq!(value["amendments"][0]["id"], "key-2f1b8a");
}

#[test]
fn test_extract_summary_key_sections() {
    cmd()
        .args(["extract", "--format", "summary", "--key-sections"])
        .arg(fixture("ukpga_2020_7/data.xml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Coronavirus Act 2020"))
        .stdout(predicate::str::contains("  Year:       2020"))
        .stdout(predicate::str::contains("3 [P1] Short title"));
}

#[test]
fn test_extract_malformed_fails() {
    cmd()
        .arg("extract")
        .arg(fixture("malformed.xml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed document"))
        .stderr(predicate::str::contains("1 of 1 documents could not be extracted"));
}

#[test]
fn test_extract_batch_reports_partial_failure() {
    let dir = TempDir::new().unwrap();
    let empty = dir.path().join("empty.xml");
    fs::write(&empty, "<Legislation/>").unwrap();

    cmd()
        .args(["extract", "--format", "json"])
        .arg(&empty)
        .arg(fixture("malformed.xml"))
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"title\": \"Unknown Title\""))
        .stderr(predicate::str::contains("1 of 2 documents could not be extracted"));
}

#[test]
fn test_extract_missing_file() {
    let dir = TempDir::new().unwrap();

    cmd()
        .arg("extract")
        .arg(dir.path().join("missing.xml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("IO error"));
}

#[test]
fn test_feed() {
    cmd()
        .arg("feed")
        .arg(fixture("feed.atom"))
        .assert()
        .success()
        .stdout(predicate::str::contains("2 entries"))
        .stdout(predicate::str::contains("2020-03-25"))
        .stdout(predicate::str::contains("Contingencies Fund Act 2020"));
}

#[test]
fn test_feed_invalid_utf8_is_malformed() {
    let dir = TempDir::new().unwrap();
    let feed = dir.path().join("feed.atom");
    fs::write(&feed, b"<feed xmlns=\"http://www.w3.org/2005/Atom\">\xff\xfe</feed>").unwrap();

    cmd()
        .arg("feed")
        .arg(&feed)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid UTF-8"))
        .stderr(predicate::str::contains("IO error").not());
}

#[test]
fn test_extract_rejects_dedupe_flag() {
    cmd()
        .args(["extract", "--dedupe"])
        .arg(fixture("ukpga_2020_7/data.xml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("--dedupe"));
}

#[test]
fn test_check_reports_warnings() {
    cmd()
        .arg("check")
        .arg(fixture("legacy_unqualified.xml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Metadata element DocumentMainType not found"));
}

#[test]
fn test_check_clean_document() {
    cmd()
        .arg("check")
        .arg(fixture("ukpga_2020_7/data.xml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("No structural warnings"));
}
