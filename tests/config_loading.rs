//! Tests for loading game configuration files.

use maze_explorer::{GameConfig, GameSession, MazeError};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write config");
    file
}

#[test]
fn test_load_full_config() {
    let file = write_config(
        r#"{
            "rows": 11,
            "cols": 31,
            "seed": 99,
            "ticks_per_second": 20,
            "max_regeneration_attempts": 4
        }"#,
    );

    let config = GameConfig::load_from_file(file.path()).unwrap();
    assert_eq!(config.rows, 11);
    assert_eq!(config.cols, 31);
    assert_eq!(config.seed, Some(99));
    assert_eq!(config.ticks_per_second, 20);
    assert_eq!(config.max_regeneration_attempts, 4);

    let session = GameSession::new(&config).unwrap();
    assert_eq!(session.seed, 99);
    assert_eq!(session.grid().cols(), 31);
}

#[test]
fn test_partial_config_uses_defaults() {
    let file = write_config(r#"{ "seed": 5 }"#);
    let config = GameConfig::load_from_file(file.path()).unwrap();
    assert_eq!(
        config,
        GameConfig {
            seed: Some(5),
            ..GameConfig::default()
        }
    );
}

#[test]
fn test_even_dimensions_rejected() {
    let file = write_config(r#"{ "rows": 20, "cols": 21 }"#);
    assert!(matches!(
        GameConfig::load_from_file(file.path()),
        Err(MazeError::Configuration(_))
    ));
}

#[test]
fn test_malformed_json_rejected() {
    let file = write_config("rows = 21");
    assert!(matches!(
        GameConfig::load_from_file(file.path()),
        Err(MazeError::Serde(_))
    ));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let missing = dir.path().join("missing.json");
    assert!(matches!(
        GameConfig::load_from_file(&missing),
        Err(MazeError::Io(_))
    ));
}

#[test]
fn test_saved_config_reloads() {
    let config = GameConfig::for_testing(31);
    let file = write_config(&config.to_json().unwrap());
    assert_eq!(GameConfig::load_from_file(file.path()).unwrap(), config);
}
