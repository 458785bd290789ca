//! Configuration system tests
//!
//! Tests for config paths and persisted preferences.

use std::fs;

use textsmith::config::EditorConfig;
use textsmith::config_paths;
use textsmith::model::AppModel;

// ========================================================================
// Config Paths Tests
// ========================================================================

#[test]
fn test_config_file_lives_in_app_dir() {
    if let Some(file) = config_paths::config_file() {
        assert!(file.ends_with("textsmith/config.yaml"));
    }
}

#[test]
fn test_logs_dir_under_config_dir() {
    if let (Some(config), Some(logs)) = (config_paths::config_dir(), config_paths::logs_dir()) {
        assert!(logs.starts_with(config));
    }
}

// ========================================================================
// EditorConfig Persistence Tests
// ========================================================================

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = EditorConfig::load_from(&dir.path().join("absent.yaml"));
    assert_eq!(config, EditorConfig::default());
    assert_eq!(config.loading_min_ms, 100);
    assert_eq!(config.toast_duration_ms, 3000);
    assert_eq!(config.history_limit, None);
}

#[test]
fn test_save_and_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.yaml");
    let config = EditorConfig {
        dark_mode: true,
        history_limit: Some(50),
        ..EditorConfig::default()
    };

    config.save_to(&path).unwrap();
    assert_eq!(EditorConfig::load_from(&path), config);
}

#[test]
fn test_partial_file_fills_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    fs::write(&path, "dark_mode: true\n").unwrap();

    let config = EditorConfig::load_from(&path);
    assert!(config.dark_mode);
    assert_eq!(config.loading_min_ms, 100);
}

#[test]
fn test_invalid_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    fs::write(&path, "dark_mode: [not, a, bool\n").unwrap();

    assert_eq!(EditorConfig::load_from(&path), EditorConfig::default());
}

#[test]
fn test_model_applies_config() {
    let config = EditorConfig {
        dark_mode: true,
        toast_duration_ms: 500,
        history_limit: Some(2),
        ..EditorConfig::default()
    };
    let mut model = AppModel::new(config);
    assert!(model.ui.dark_mode);
    assert_eq!(model.ui.toast_duration.as_millis(), 500);

    let id = model.workspace.active_id();
    for text in ["a", "b", "c"] {
        model
            .workspace
            .set_text(id, textsmith::model::TextChange::Edit(text.into()))
            .unwrap();
    }
    assert_eq!(model.document().history_len(), 2);
}
