//! Integration tests for keyword filtering

#![allow(deprecated)]

use predicates::prelude::*;
use tempfile::TempDir;

mod common;
use common::{tagsearch_cmd, write_files};

fn fixture() -> TempDir {
    let temp = TempDir::new().unwrap();
    write_files(
        temp.path(),
        &[
            ("a.md", "Notes @alpha\n\nMore @Beta"),
            ("b.txt", "@alpha only"),
            ("c.md", "nothing tagged, mail me@example.com"),
        ],
    );
    temp
}

fn stdout_lines(temp: &TempDir, args: &[&str]) -> Vec<String> {
    let output = tagsearch_cmd()
        .current_dir(temp.path())
        .args(args)
        .output()
        .unwrap();
    assert!(output.status.success());
    String::from_utf8(output.stdout)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_all_mode_requires_every_keyword() {
    let temp = fixture();
    assert_eq!(stdout_lines(&temp, &["alpha", "beta"]), vec!["a.md"]);
}

#[test]
fn test_any_mode_with_or_flag() {
    let temp = fixture();
    assert_eq!(
        stdout_lines(&temp, &["--or", "alpha", "beta"]),
        vec!["a.md", "b.txt"]
    );
}

#[test]
fn test_excluded_keyword_vetoes() {
    let temp = fixture();
    assert_eq!(stdout_lines(&temp, &["-o", "alpha", "!beta"]), vec!["b.txt"]);
    assert_eq!(stdout_lines(&temp, &["alpha", "--not", "beta"]), vec!["b.txt"]);
}

#[test]
fn test_keywords_are_case_insensitive() {
    let temp = fixture();
    assert_eq!(stdout_lines(&temp, &["ALPHA", "@Beta"]), vec!["a.md"]);
}

#[test]
fn test_only_exclusions_keep_untagged_files() {
    let temp = fixture();
    assert_eq!(
        stdout_lines(&temp, &["!beta"]),
        vec!["b.txt", "c.md"]
    );
}

#[test]
fn test_vim_format() {
    let temp = fixture();
    assert_eq!(stdout_lines(&temp, &["--vim", "alpha"]), vec!["a.md:1:", "b.txt:1:"]);
}

#[test]
fn test_unknown_tag_matches_nothing() {
    let temp = fixture();
    tagsearch_cmd()
        .current_dir(temp.path())
        .arg("alpha")
        .arg("missing")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_unknown_tag_is_reported_when_verbose() {
    let temp = fixture();
    tagsearch_cmd()
        .current_dir(temp.path())
        .arg("-v")
        .arg("missing")
        .assert()
        .success()
        .stderr(predicate::str::contains("@missing"));
}

#[test]
fn test_bare_negation_is_rejected() {
    let temp = fixture();
    tagsearch_cmd()
        .current_dir(temp.path())
        .arg("alpha")
        .arg("!")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Invalid query term"));
}

#[test]
fn test_dir_option() {
    let temp = fixture();
    tagsearch_cmd()
        .arg("--dir")
        .arg(temp.path())
        .arg("beta")
        .assert()
        .success()
        .stdout("a.md\n");
}

#[test]
fn test_missing_dir_fails() {
    let temp = TempDir::new().unwrap();
    tagsearch_cmd()
        .arg("--dir")
        .arg(temp.path().join("nowhere"))
        .arg("alpha")
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Directory not found"));
}
