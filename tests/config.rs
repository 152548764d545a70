//! Tests for config loading and CLI merging

use std::fs;

use pageview::cli::{CliArgs, RunMode};
use pageview::config::ViewerConfig;
use pageview::theme::Color;
use pageview::transform::FitMode;
use tempfile::TempDir;

#[test]
fn test_load_from_yaml_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yaml");
    fs::write(
        &path,
        r##"
width: 640
height: 480
resolution: 144.0
fit: true
picker_command: ["zenity", "--file-selection"]
chrome:
  title_height: 30
colors:
  border: "#FF0000"
"##,
    )
    .unwrap();

    let config = ViewerConfig::load_from(&path);

    assert_eq!((config.width, config.height), (640, 480));
    assert_eq!(config.resolution, Some(144.0));
    assert!(config.fit);
    assert_eq!(
        config.picker_command,
        Some(vec!["zenity".to_string(), "--file-selection".to_string()])
    );
    assert_eq!(config.chrome.title_height, 30);
    assert_eq!(config.chrome.border_left, 4);
    assert_eq!(config.colors.border, Color::rgb(0xFF, 0, 0));
    assert!(config.show_chrome);
}

#[test]
fn test_missing_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let config = ViewerConfig::load_from(&dir.path().join("nope.yaml"));
    assert_eq!(config, ViewerConfig::default());
}

#[test]
fn test_malformed_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yaml");
    fs::write(&path, "width: [not a number").unwrap();
    assert_eq!(ViewerConfig::load_from(&path), ViewerConfig::default());
}

#[test]
fn test_cli_overrides_config() {
    let config = ViewerConfig {
        width: 640,
        height: 480,
        resolution: Some(144.0),
        ..ViewerConfig::default()
    };
    let args = CliArgs {
        inputs: vec!["a.pdf".into(), "2-4".into()],
        width: Some(300),
        resolution: Some(72.0),
        rotation: Some(-90.0),
        no_chrome: true,
        ..CliArgs::default()
    };

    let startup = args.into_config(&config).unwrap();

    assert_eq!(startup.mode, RunMode::Interactive);
    assert_eq!((startup.viewport.width, startup.viewport.height), (300, 480));
    assert_eq!(startup.params.zoom, 1.0);
    assert!(startup.params.resolution_specified);
    assert_eq!(startup.params.rotation, -90.0);
    assert_eq!(startup.params.fit_mode, FitMode::Preserve);
    assert!(!startup.show_chrome);
    assert_eq!(startup.initial_document(), Some(("a.pdf".into(), 2)));
}

#[test]
fn test_config_fit_applies_without_flag() {
    let config = ViewerConfig {
        fit: true,
        ..ViewerConfig::default()
    };
    let startup = CliArgs::default().into_config(&config).unwrap();
    assert_eq!(startup.params.fit_mode, FitMode::Stretch);
    assert!(startup.initial_document().is_none());
}

#[test]
fn test_headless_requires_documents() {
    let args = CliArgs {
        headless: true,
        ..CliArgs::default()
    };
    assert!(args.into_config(&ViewerConfig::default()).is_err());
}

#[test]
fn test_headless_json_mode() {
    let args = CliArgs {
        inputs: vec!["a.pdf".into()],
        headless: true,
        json: true,
        ..CliArgs::default()
    };
    let startup = args.into_config(&ViewerConfig::default()).unwrap();
    assert_eq!(startup.mode, RunMode::Headless { json: true });
    assert_eq!(startup.jobs[0].ranges, "1-");
}
