//! CLI behavior tests for the spm-analyzer binary

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn write_manifest(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

const SAMPLE: &str = r#"
let package = Package(
    name: "CliSample",
    products: [
        .library(name: "CliSample", targets: ["CliSample"])
    ],
    dependencies: [
        .package(url: "https://github.com/org/helper.git", branch: "main")
    ],
    targets: [
        .target(name: "CliSample")
    ]
)
"#;

#[test]
fn test_parse_json_output() {
    let manifest = write_manifest(SAMPLE);

    Command::cargo_bin("spm-analyzer")
        .unwrap()
        .args(["parse", manifest.path().to_str().unwrap(), "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"packageName\": \"CliSample\""))
        .stdout(predicate::str::contains("branch:main"));
}

#[test]
fn test_parse_text_output() {
    let manifest = write_manifest(SAMPLE);

    Command::cargo_bin("spm-analyzer")
        .unwrap()
        .args(["parse", manifest.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("CliSample"))
        .stdout(predicate::str::contains("helper"));
}

#[test]
fn test_parse_missing_file_fails() {
    Command::cargo_bin("spm-analyzer")
        .unwrap()
        .args(["parse", "/no/such/Package.swift"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("/no/such/Package.swift"));
}

#[test]
fn test_parse_requires_path_argument() {
    Command::cargo_bin("spm-analyzer")
        .unwrap()
        .arg("parse")
        .assert()
        .failure();
}
