//! Configuration system tests
//!
//! Tests for config paths, YAML loading and saving, and custom classes.

use maskedit::config::{ClassConfig, MaskConfig};
use maskedit::config_paths;
use maskedit::mask::{MaskState, ReflowPolicy};
use maskedit::MaskError;

// ========================================================================
// Config Paths Tests
// ========================================================================

#[test]
fn test_config_dir_contains_app_name() {
    if let Some(dir) = config_paths::config_dir() {
        assert!(dir.to_string_lossy().contains("maskedit"));
    }
}

#[test]
fn test_config_file_ends_with_yaml() {
    if let Some(path) = config_paths::config_file() {
        assert!(path.to_string_lossy().ends_with("config.yaml"));
    }
}

#[test]
fn test_logs_dir_is_subdir_of_config() {
    if let (Some(config), Some(logs)) = (config_paths::config_dir(), config_paths::logs_dir()) {
        assert!(logs.starts_with(&config));
    }
}

// ========================================================================
// Load / Save Tests
// ========================================================================

#[test]
fn test_save_and_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");

    let mut config = MaskConfig {
        placeholder: '.',
        clean_delimiters: true,
        policy: ReflowPolicy::KeepPositions,
        ..MaskConfig::default()
    };
    config.classes.push(ClassConfig {
        symbol: 'h',
        chars: None,
        regex: Some("[0-9a-f]".to_string()),
    });
    config
        .masks
        .insert("mac".to_string(), "hh:hh:hh".to_string());

    config.save_to(&path).unwrap();
    let loaded = MaskConfig::load_from(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_hash_placeholder_survives_save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    let yaml = r##"
placeholder: "#"
masks:
  tag: "#000"
"##;

    let config = MaskConfig::parse_yaml(yaml).unwrap();
    assert_eq!(config.placeholder, '#');
    assert_eq!(config.mask("tag"), Some("#000"));

    config.save_to(&path).unwrap();
    let loaded = MaskConfig::load_from(&path).unwrap();
    assert_eq!(loaded, config);

    let mut state = MaskState::new(loaded.compile("tag").unwrap().into(), loaded.options());
    state.type_char('4');
    assert_eq!(state.text(), "#4##");
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = MaskConfig::load_from(&dir.path().join("absent.yaml")).unwrap_err();
    assert!(matches!(err, MaskError::Io { .. }));
}

#[test]
fn test_load_malformed_yaml_is_yaml_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "policy: [sideways").unwrap();

    let err = MaskConfig::load_from(&path).unwrap_err();
    assert!(matches!(err, MaskError::Yaml(_)));
}

#[test]
fn test_unknown_policy_is_rejected() {
    assert!(MaskConfig::parse_yaml("policy: sideways").is_err());
}

// ========================================================================
// Custom Class Tests
// ========================================================================

#[test]
fn test_configured_mask_drives_a_field() {
    let yaml = r#"
transform: upper
classes:
  - symbol: "h"
    regex: "[0-9A-F]"
masks:
  mac: "hh:hh:hh"
"#;
    let config = MaskConfig::parse_yaml(yaml).unwrap();
    let pattern = config.compile("mac").unwrap();
    let mut state = MaskState::new(pattern.into(), config.options());

    let out = state.paste("0a1b2g3");
    assert_eq!(out.text, "0A:1B:23");
}

#[test]
fn test_config_class_overrides_builtin_symbol() {
    let yaml = "classes:\n  - symbol: \"0\"\n    chars: \"01\"\n";
    let config = MaskConfig::parse_yaml(yaml).unwrap();
    let table = config.class_table().unwrap();

    assert!(table.matches('0', '1'));
    assert!(!table.matches('0', '7'));
}
