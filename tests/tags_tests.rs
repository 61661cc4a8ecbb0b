//! Integration tests for tags command

#![allow(deprecated)]

use predicates::prelude::*;
use tempfile::TempDir;

mod common;
use common::{cozy_cmd, write_memory};

fn journal() -> TempDir {
    let temp = TempDir::new().unwrap();
    cozy_cmd().arg("init").arg(temp.path()).assert().success();
    temp
}

fn stdout_lines(temp: &TempDir, args: &[&str]) -> Vec<String> {
    let output = cozy_cmd()
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
fn test_tags_no_tags_found() {
    let temp = journal();

    cozy_cmd()
        .current_dir(temp.path())
        .arg("tags")
        .assert()
        .success()
        .stdout(predicate::str::contains("No tags found"));
}

#[test]
fn test_tags_lists_unique_sorted_tags() {
    let temp = journal();
    write_memory(temp.path(), "2025-01-15", &["work", "family", "work"], "Busy");
    write_memory(temp.path(), "2025-01-16", &["alpha", "Work"], "Quiet");

    assert_eq!(
        stdout_lines(&temp, &["tags"]),
        vec!["#Work", "#alpha", "#family", "#work"]
    );
}

#[test]
fn test_tags_most_used_with_counts() {
    let temp = journal();
    write_memory(temp.path(), "2025-01-15", &["work", "family"], "One");
    write_memory(temp.path(), "2025-01-16", &["family", "garden"], "Two");
    write_memory(temp.path(), "2025-01-17", &["family", "work"], "Three");

    assert_eq!(
        stdout_lines(&temp, &["tags", "--most", "2", "--counts"]),
        vec!["#family  3", "#work  2"]
    );
}

#[test]
fn test_tags_least_used_uses_configured_limit() {
    let temp = journal();
    write_memory(temp.path(), "2025-01-15", &["a", "b", "b", "c", "c", "c"], "x");

    cozy_cmd()
        .current_dir(temp.path())
        .args(["config", "tag_limit", "2"])
        .assert()
        .success();

    assert_eq!(stdout_lines(&temp, &["tags", "--least"]), vec!["#a", "#b"]);
}

#[test]
fn test_tags_with_date_range() {
    let temp = journal();
    write_memory(temp.path(), "2025-01-10", &["old"], "x");
    write_memory(temp.path(), "2025-01-15", &["mid"], "x");
    write_memory(temp.path(), "2025-01-20", &["new"], "x");

    cozy_cmd()
        .current_dir(temp.path())
        .args(["tags", "--from", "2025-01-12", "--to", "2025-01-18"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#mid"))
        .stdout(predicate::str::contains("#old").not())
        .stdout(predicate::str::contains("#new").not());
}

#[test]
fn test_tags_invalid_date() {
    let temp = journal();

    cozy_cmd()
        .current_dir(temp.path())
        .args(["tags", "--from", "15-01-2025"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("YYYY-MM-DD"));
}

#[test]
fn test_tags_outside_journal() {
    let temp = TempDir::new().unwrap();

    cozy_cmd()
        .current_dir(temp.path())
        .arg("tags")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("cozy init"));
}

#[test]
fn test_tags_honors_cozy_root() {
    let temp = journal();
    write_memory(temp.path(), "2025-01-15", &["remote"], "x");
    let elsewhere = TempDir::new().unwrap();

    cozy_cmd()
        .current_dir(elsewhere.path())
        .env("COZY_ROOT", temp.path())
        .arg("tags")
        .assert()
        .success()
        .stdout(predicate::str::contains("#remote"));
}
