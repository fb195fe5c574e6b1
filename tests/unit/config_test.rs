//! Tests for configuration loading

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use docref::config::{Config, ConfigError};
use tempfile::TempDir;

#[test]
fn discover_without_file_uses_defaults() {
    let temp = TempDir::new().unwrap();
    let config = Config::discover(temp.path()).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn discover_loads_docref_toml() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("docref.toml"),
        r#"
timeout_secs = 5

[corpus]
root = "docs"
extension = "txt"

[fixers]
command = ["python2", "-m", "modernize", "-l"]

[future_imports]
interpreter = ["python2", "-c"]
"#,
    )
    .unwrap();

    let config = Config::discover(temp.path()).unwrap();
    assert_eq!(config.timeout(), Duration::from_secs(5));
    assert_eq!(config.corpus.root, temp.path().join("docs"));
    assert_eq!(config.corpus.extension, "txt");
    assert_eq!(config.fixer_command().unwrap().to_string(), "python2 -m modernize -l");
    assert_eq!(config.interpreter().unwrap().to_string(), "python2 -c");
}

#[test]
fn partial_file_keeps_other_defaults() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("custom.toml");
    fs::write(&path, "[fixers]\ncommand = ['modernize-list']\n").unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.fixers.command, ["modernize-list"]);
    assert_eq!(config.future_imports.interpreter, ["python3", "-c"]);
    assert_eq!(config.corpus.root, temp.path().join("source"));
}

#[test]
fn absolute_root_is_kept() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("docref.toml");
    fs::write(&path, "[corpus]\nroot = '/srv/docs'\n").unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.corpus.root, PathBuf::from("/srv/docs"));
}

#[test]
fn empty_command_is_invalid() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("docref.toml");
    fs::write(&path, "[fixers]\ncommand = []\n").unwrap();

    assert!(matches!(Config::load(&path), Err(ConfigError::Invalid(_))));
}

#[test]
fn extension_with_dot_path_is_invalid() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("docref.toml");
    fs::write(&path, "[corpus]\nextension = 'docs/rst'\n").unwrap();

    assert!(matches!(Config::load(&path), Err(ConfigError::Invalid(_))));
}

#[test]
fn bad_toml_is_parse_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("docref.toml");
    fs::write(&path, "timeout_secs = \"soon\"\n").unwrap();

    let err = Config::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("docref.toml"));
}

#[test]
fn missing_file_is_read_error() {
    let temp = TempDir::new().unwrap();
    let err = Config::load(&temp.path().join("nope.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
}
