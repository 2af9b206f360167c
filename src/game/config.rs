//! # Game Configuration
//!
//! Session settings, loadable from a JSON file.

use crate::config::{DEFAULT_COLS, DEFAULT_ROWS, MAX_REGENERATION_ATTEMPTS, TICKS_PER_SECOND};
use crate::generation::{validate_dimensions, GenerationConfig};
use crate::{MazeError, MazeResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for a game session.
///
/// Missing fields in a config file fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Maze height in cells
    pub rows: usize,
    /// Maze width in cells
    pub cols: usize,
    /// Fixed seed; a fresh seed is drawn per session when absent
    pub seed: Option<u64>,
    /// Game ticks per second
    pub ticks_per_second: u32,
    /// Regeneration attempts before giving up on a reachable maze
    pub max_regeneration_attempts: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            seed: None,
            ticks_per_second: TICKS_PER_SECOND,
            max_regeneration_attempts: MAX_REGENERATION_ATTEMPTS,
        }
    }
}

impl GameConfig {
    /// Creates a configuration for a maze of the given size.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            ..Default::default()
        }
    }

    /// Small, seeded configuration for tests.
    pub fn for_testing(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::new(9, 9)
        }
    }

    /// Reads and validates a configuration from a JSON file.
    pub fn load_from_file(path: impl AsRef<Path>) -> MazeResult<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&contents)
    }

    /// Parses and validates a configuration from a JSON string.
    ///
    /// # Examples
    ///
    /// ```
    /// use maze_explorer::GameConfig;
    ///
    /// let config = GameConfig::from_json(r#"{ "rows": 11, "seed": 3 }"#).unwrap();
    /// assert_eq!(config.rows, 11);
    /// assert_eq!(config.cols, 21);
    /// assert_eq!(config.seed, Some(3));
    /// ```
    pub fn from_json(json: &str) -> MazeResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes the configuration as pretty JSON.
    pub fn to_json(&self) -> MazeResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks that the configuration can drive a session.
    pub fn validate(&self) -> MazeResult<()> {
        validate_dimensions(self.rows, self.cols)?;
        if self.ticks_per_second == 0 {
            return Err(MazeError::Configuration(
                "ticks_per_second must be positive".to_string(),
            ));
        }
        if self.max_regeneration_attempts == 0 {
            return Err(MazeError::Configuration(
                "max_regeneration_attempts must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Generation settings for one maze with the given seed.
    pub fn generation_config(&self, seed: u64) -> GenerationConfig {
        GenerationConfig::with_size(seed, self.rows, self.cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.rows, 21);
        assert_eq!(config.ticks_per_second, 10);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_validation_failures() {
        assert!(GameConfig::new(20, 21).validate().is_err());
        let no_ticks = GameConfig {
            ticks_per_second: 0,
            ..Default::default()
        };
        assert!(matches!(no_ticks.validate(), Err(MazeError::Configuration(_))));
        let no_attempts = GameConfig {
            max_regeneration_attempts: 0,
            ..Default::default()
        };
        assert!(no_attempts.validate().is_err());
    }

    #[test]
    fn test_json_round_trip() {
        let config = GameConfig::for_testing(99);
        let json = config.to_json().unwrap();
        assert_eq!(GameConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_json_errors() {
        assert!(matches!(
            GameConfig::from_json("{ not json"),
            Err(MazeError::Serde(_))
        ));
        assert!(matches!(
            GameConfig::from_json(r#"{ "rows": 8 }"#),
            Err(MazeError::Configuration(_))
        ));
    }

    #[test]
    fn test_generation_config_derivation() {
        let config = GameConfig::new(7, 11);
        let generation = config.generation_config(5);
        assert_eq!(generation.seed, 5);
        assert_eq!(generation.rows, 7);
        assert_eq!(generation.cols, 11);
    }
}
