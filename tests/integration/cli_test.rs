//! Tests for the CLI surface that need no oracles

use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn docref() -> assert_cmd::Command {
    assert_cmd::Command::new(cargo::cargo_bin!("docref"))
}

#[test]
fn test_version() {
    docref()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("docref"));
}

#[test]
fn test_version_json() {
    docref()
        .args(["version", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"version\""));
}

#[test]
fn test_help() {
    docref()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("future-imports"))
        .stdout(predicate::str::contains("fixers"));
}

#[test]
fn test_no_args_shows_info() {
    docref()
        .assert()
        .success()
        .stdout(predicate::str::contains("docref v"))
        .stdout(predicate::str::contains("docref all"));
}

#[test]
fn test_list_shows_sorted_rst_files() {
    let temp = TempDir::new().unwrap();
    let source = temp.path().join("source");
    fs::create_dir_all(source.join("b")).unwrap();
    fs::create_dir_all(source.join(".git")).unwrap();
    fs::write(source.join("z.rst"), "").unwrap();
    fs::write(source.join("b/a.rst"), "").unwrap();
    fs::write(source.join("conf.py"), "").unwrap();
    fs::write(source.join(".git/x.rst"), "").unwrap();

    let output = docref().arg("list").current_dir(temp.path()).output().unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "b/a.rst\nz.rst\n");
}

#[test]
fn test_list_empty_corpus() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("source")).unwrap();

    docref()
        .arg("list")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No documents matching **/*.rst"));
}

#[test]
fn test_zero_timeout_rejected() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("source")).unwrap();

    docref()
        .args(["list", "--timeout", "0"])
        .current_dir(temp.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("timeout_secs must be greater than 0"));
}
