// tests/config_loading.rs

use std::io::Write;
use std::path::PathBuf;

use tempfile::NamedTempFile;

use jsp_gantt::cli::CliArgs;
use jsp_gantt::config::{load_and_validate, load_or_default, ConfigFile, RawConfigFile};
use jsp_gantt::errors::GanttError;
use jsp_gantt::geometry::PlotScale;
use jsp_gantt::resolve_paths;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{contents}").unwrap();
    file
}

fn args() -> CliArgs {
    CliArgs {
        config: None,
        problem: None,
        answer: None,
        job: None,
        output: None,
        once: false,
        dry_run: false,
        log_level: None,
    }
}

#[test]
fn test_full_config_round_trips_into_settings() {
    let file = write_config(
        r#"
[plot]
unit_width = 10.0
unit_height = 40
width = 800
height = 600
title = "ft06"

[input]
problem = "data/ft06.problem.json"
answer = "data/ft06.answer.json"

[output]
path = "gantt.json"
"#,
    );

    let cfg = load_and_validate(file.path()).unwrap();

    assert_eq!(cfg.scale(), PlotScale::new(10.0, 40.0));
    assert_eq!((cfg.plot.width, cfg.plot.height), (800, 600));
    assert_eq!(cfg.plot.title, "ft06");
    assert_eq!(cfg.input.problem, Some(PathBuf::from("data/ft06.problem.json")));
    assert_eq!(cfg.output.path, Some(PathBuf::from("gantt.json")));
}

#[test]
fn test_empty_config_uses_defaults() {
    let file = write_config("");

    let cfg = load_and_validate(file.path()).unwrap();

    assert_eq!(cfg.scale(), PlotScale::UNIT);
    assert_eq!((cfg.plot.width, cfg.plot.height), (1600, 1200));
    assert!(cfg.input.problem.is_none());
    assert!(cfg.output.path.is_none());
}

#[test]
fn test_non_positive_unit_is_config_error() {
    let file = write_config("[plot]\nunit_height = 0\n");

    match load_and_validate(file.path()) {
        Err(GanttError::ConfigError(msg)) => assert!(msg.contains("unit_height")),
        other => panic!("Expected ConfigError, got: {:?}", other),
    }
}

#[test]
fn test_zero_figure_size_is_config_error() {
    let mut raw = RawConfigFile::default();
    raw.plot.width = 0;

    assert!(matches!(
        ConfigFile::try_from(raw),
        Err(GanttError::ConfigError(_))
    ));
}

#[test]
fn test_malformed_toml_is_toml_error() {
    let file = write_config("[plot\nunit_width = ");

    assert!(matches!(
        load_and_validate(file.path()),
        Err(GanttError::TomlError(_))
    ));
}

#[test]
fn test_explicit_missing_config_is_io_error() {
    let missing = PathBuf::from("/definitely/not/here/JspGantt.toml");

    assert!(matches!(
        load_or_default(Some(missing.as_path())),
        Err(GanttError::IoError(_))
    ));
}

#[test]
fn test_cli_paths_override_config() {
    let mut cfg = ConfigFile::default();
    cfg.input.problem = Some(PathBuf::from("cfg-problem.json"));
    cfg.input.answer = Some(PathBuf::from("cfg-answer.json"));
    cfg.output.path = Some(PathBuf::from("cfg-out.json"));

    let mut cli = args();
    cli.problem = Some("cli-problem.json".to_string());

    let paths = resolve_paths(&cli, &cfg).unwrap();

    assert_eq!(paths.problem, PathBuf::from("cli-problem.json"));
    assert_eq!(paths.answer, PathBuf::from("cfg-answer.json"));
    assert_eq!(paths.output, Some(PathBuf::from("cfg-out.json")));
}

#[test]
fn test_missing_answer_path_is_config_error() {
    let mut cli = args();
    cli.problem = Some("p.json".to_string());

    match resolve_paths(&cli, &ConfigFile::default()) {
        Err(GanttError::ConfigError(msg)) => assert!(msg.contains("--answer")),
        other => panic!("Expected ConfigError, got: {:?}", other),
    }
}
