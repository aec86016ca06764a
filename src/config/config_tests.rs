use super::*;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.get_output_dir(), PathBuf::from(DEFAULT_OUTPUT_DIR));
    assert_eq!(
        config.get_apps_index_path(),
        PathBuf::from(DEFAULT_APPS_INDEX_PATH)
    );
    assert_eq!(config.get_sources_dir(), PathBuf::from(DEFAULT_SOURCES_DIR));
    assert_eq!(config.get_intermediate_pattern(), DEFAULT_INTERMEDIATE_PATTERN);
    assert!(!config.get_explicit_numpad_keys());
    assert_eq!(config.get_log_file(), None);
}

#[test]
fn test_camel_case_fields() {
    let config: Config = serde_json::from_str(
        r#"{
            "outputDir": "out",
            "appsIndexPath": "site/apps.js",
            "explicitNumpadKeys": true,
            "logFile": "shmap.jsonl"
        }"#,
    )
    .unwrap();

    assert_eq!(config.get_output_dir(), PathBuf::from("out"));
    assert_eq!(config.get_apps_index_path(), PathBuf::from("site/apps.js"));
    assert!(config.get_explicit_numpad_keys());
    assert_eq!(config.get_log_file(), Some(PathBuf::from("shmap.jsonl")));
    // Unset fields keep their defaults
    assert_eq!(config.get_sources_dir(), PathBuf::from(DEFAULT_SOURCES_DIR));
}

#[test]
fn test_config_serialization_skips_unset_fields() {
    let config = Config {
        output_dir: Some("out".to_string()),
        ..Default::default()
    };
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(json, r#"{"outputDir":"out"}"#);

    let deserialized: Config = serde_json::from_str(&json).unwrap();
    assert_eq!(deserialized, config);
}

#[test]
fn test_tilde_is_expanded() {
    let config = Config {
        output_dir: Some("~/generated".to_string()),
        ..Default::default()
    };
    let dir = config.get_output_dir();
    assert!(!dir.to_string_lossy().starts_with('~'));
    assert!(dir.ends_with("generated"));
}

#[test]
fn test_intermediate_glob_joins_sources_dir() {
    let config = Config {
        sources_dir: Some("data".to_string()),
        intermediate_pattern: Some("*/*.json".to_string()),
        ..Default::default()
    };
    assert_eq!(
        PathBuf::from(config.intermediate_glob()),
        PathBuf::from("data").join("*/*.json")
    );
}

#[test]
fn test_output_layout() {
    let config = Config {
        output_dir: Some("gen".to_string()),
        apps_index_path: Some("apps.js".to_string()),
        ..Default::default()
    };
    let layout = config.output_layout();
    assert_eq!(layout.output_dir, PathBuf::from("gen"));
    assert_eq!(layout.index_path, PathBuf::from("apps.js"));
}

#[test]
fn test_load_missing_file_gives_defaults() {
    let dir = tempdir().unwrap();
    let config = load_config(&dir.path().join("shmap.json"));
    assert_eq!(config, Config::default());
}

#[test]
fn test_load_invalid_json_gives_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("shmap.json");
    fs::write(&path, "{ outputDir: nope").unwrap();
    assert_eq!(load_config(&path), Config::default());
}

#[test]
fn test_load_valid_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("shmap.json");
    fs::write(&path, r#"{"sourcesDir": "scraped"}"#).unwrap();
    assert_eq!(
        load_config(&path).get_sources_dir(),
        PathBuf::from("scraped")
    );
}
