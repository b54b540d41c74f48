//! Game configuration.
//!
//! Built from defaults, then an optional TOML file, then command-line flags.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::GameError;
use crate::rng::GameRng;

/// How the final results are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultsFormat {
    /// Only the `Game Results:` table.
    #[default]
    Text,
    /// The table followed by a JSON summary.
    Json,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Fixed RNG seed. `None` draws a fresh seed every game.
    pub seed: Option<u64>,
    pub results: ResultsFormat,
}

impl GameConfig {
    /// Parse a TOML config file.
    pub fn load_from_file(path: &Path) -> Result<Self, GameError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| GameError::Config(format!("failed to read {}: {e}", path.display())))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, GameError> {
        toml::from_str(contents).map_err(|e| GameError::Config(format!("failed to parse TOML: {e}")))
    }

    /// The RNG for a game using this config.
    pub fn rng(&self) -> GameRng {
        match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.seed, None);
        assert_eq!(config.results, ResultsFormat::Text);
    }

    #[test]
    fn test_from_toml() {
        let config = GameConfig::from_toml("seed = 42\nresults = \"json\"\n").unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.results, ResultsFormat::Json);
    }

    #[test]
    fn test_from_toml_missing_fields() {
        let config = GameConfig::from_toml("").unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_from_toml_rejects_bad_format() {
        let err = GameConfig::from_toml("results = \"yaml\"").unwrap_err();
        assert!(matches!(err, GameError::Config(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = GameConfig::load_from_file(Path::new("/nonexistent/life.toml")).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }

    #[test]
    fn test_seeded_rng() {
        let config = GameConfig {
            seed: Some(8),
            ..Default::default()
        };
        assert_eq!(config.rng().seed(), 8);
    }
}
