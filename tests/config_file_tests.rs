//! Config file loading and rule selection
use std::fs;

use clap::Parser;
use focus_lint::config::{Args, Config, FileConfig, Input, OutputFormat};
use focus_lint::RuleId;

#[test]
fn test_explicit_config_file() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("focus.toml");
    fs::write(
        &path,
        "disabled = [\"keyboard-accessible\", \"focus-indicator\"]\nformat = \"json\"\n",
    )
    .expect("write config");

    let args = Args::try_parse_from([
        "focus-lint",
        "--config",
        path.to_str().expect("utf-8 path"),
        "page.html",
    ])
    .expect("parse args");
    let config = Config::from_args(args).expect("load config");

    assert_eq!(
        config.rules,
        vec![RuleId::SkipLink, RuleId::FocusOrder, RuleId::FocusTrap]
    );
    assert_eq!(config.format, OutputFormat::Json);
    assert_eq!(config.inputs, vec![Input::File("page.html".into())]);
}

#[test]
fn test_missing_config_file_is_error() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("absent.toml");

    let args = Args::try_parse_from(["focus-lint", "--config", path.to_str().expect("utf-8 path")])
        .expect("parse args");
    let err = Config::from_args(args).unwrap_err();
    assert!(format!("{:#}", err).contains("failed to read config file"));
}

#[test]
fn test_invalid_rule_in_config_file() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("focus.toml");
    fs::write(&path, "disabled = [\"colour-contrast\"]\n").expect("write config");

    let loaded = FileConfig::load(&path).expect("valid toml");
    assert_eq!(loaded.disabled, vec!["colour-contrast".to_string()]);

    let args = Args::try_parse_from(["focus-lint", "--config", path.to_str().expect("utf-8 path")])
        .expect("parse args");
    assert!(Config::from_args(args).is_err());
}

#[test]
fn test_input_read_from_file() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("page.html");
    fs::write(&path, "<button>Go</button>").expect("write markup");

    let input = Input::File(path.clone());
    assert_eq!(input.read().expect("read input"), "<button>Go</button>");
    assert_eq!(input.name(), path.display().to_string());

    let report = focus_lint::FocusChecker::new().check(&input.read().expect("read input"));
    assert!(!report.passed());
}
