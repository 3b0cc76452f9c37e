//! Tests for global configuration management

use std::fs;

use fundtrack::config::GlobalConfig;
use tempfile::TempDir;

// =============================================================================
// BASIC CONFIG TESTS
// =============================================================================

#[test]
fn test_config_default() {
    let config = GlobalConfig::default();
    assert!(config.defaults.status.is_none());
    assert!(config.defaults.sort.is_none());
}

#[test]
fn test_config_missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let config = GlobalConfig::load_from(&dir.path().join("config.toml"));
    assert!(config.defaults.status.is_none());
}

#[test]
fn test_config_malformed_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "not [valid toml").unwrap();

    let config = GlobalConfig::load_from(&path);
    assert!(config.defaults.status.is_none());
    assert!(config.defaults.sort.is_none());
}

// =============================================================================
// ROUND-TRIP TESTS
// =============================================================================

#[test]
fn test_config_save_and_load_roundtrip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let mut config = GlobalConfig::default();
    config.defaults.status = Some("committed".to_string());
    config.defaults.sort = Some("contributed".to_string());
    config.save_to(&path).unwrap();

    let loaded = GlobalConfig::load_from(&path);
    assert_eq!(loaded.defaults.status.as_deref(), Some("committed"));
    assert_eq!(loaded.defaults.sort.as_deref(), Some("contributed"));
}

#[test]
fn test_config_parses_partial_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[defaults]\nstatus = \"active\"\n").unwrap();

    let config = GlobalConfig::load_from(&path);
    assert_eq!(config.defaults.status.as_deref(), Some("active"));
    assert!(config.defaults.sort.is_none());
}
