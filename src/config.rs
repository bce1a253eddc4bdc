use std::path::Path;
use std::time::Duration;

use tracing::warn;

use crate::board::{Stone, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::error::ConfigError;

/// Console game settings, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side length of the square board
    pub board_size: usize,
    /// Pause before the computer moves, in milliseconds
    pub ai_delay_ms: u64,
    /// Fixed seed for the computer opponent; random when absent
    pub seed: Option<u64>,
    /// Color the human plays (Black moves first)
    pub human: Stone,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            board_size: DEFAULT_BOARD_SIZE,
            ai_delay_ms: 1000,
            seed: None,
            human: Stone::Black,
        }
    }
}

impl GameConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: GameConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size < MIN_BOARD_SIZE {
            return Err(ConfigError::Validation(format!(
                "board_size must be >= {MIN_BOARD_SIZE}"
            )));
        }
        if self.board_size > MAX_BOARD_SIZE {
            return Err(ConfigError::Validation(format!(
                "board_size must be <= {MAX_BOARD_SIZE}"
            )));
        }
        if self.human.is_empty() {
            return Err(ConfigError::Validation(
                "human must be \"black\" or \"white\"".into(),
            ));
        }
        Ok(())
    }

    /// Color the computer plays
    pub fn ai_stone(&self) -> Stone {
        self.human.opponent()
    }

    pub fn ai_delay(&self) -> Duration {
        Duration::from_millis(self.ai_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_are_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.board_size, 8);
        assert_eq!(config.ai_stone(), Stone::White);
        assert_eq!(config.ai_delay(), Duration::from_secs(1));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: GameConfig = toml::from_str("board_size = 15\nhuman = \"white\"").unwrap();
        assert_eq!(config.board_size, 15);
        assert_eq!(config.human, Stone::White);
        assert_eq!(config.ai_stone(), Stone::Black);
        assert_eq!(config.ai_delay_ms, 1000);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_small_board_rejected() {
        let config = GameConfig {
            board_size: 4,
            ..GameConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_huge_board_rejected() {
        for board_size in [MAX_BOARD_SIZE + 1, 1 << 32, usize::MAX] {
            let config = GameConfig {
                board_size,
                ..GameConfig::default()
            };
            assert!(
                matches!(config.validate(), Err(ConfigError::Validation(_))),
                "{board_size}"
            );
        }
        let config = GameConfig {
            board_size: MAX_BOARD_SIZE,
            ..GameConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_human_rejected() {
        let config = GameConfig {
            human: Stone::Empty,
            ..GameConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "board_size = 10\nai_delay_ms = 0\nseed = 5").unwrap();

        let config = GameConfig::load(file.path()).unwrap();
        assert_eq!(config.board_size, 10);
        assert_eq!(config.ai_delay_ms, 0);
        assert_eq!(config.seed, Some(5));
    }

    #[test]
    fn test_load_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "board_size = 3").unwrap();
        assert!(matches!(
            GameConfig::load(file.path()),
            Err(ConfigError::Validation(_))
        ));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "board_size = \"big\"").unwrap();
        assert!(matches!(
            GameConfig::load(file.path()),
            Err(ConfigError::TomlParse(_))
        ));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = GameConfig::load_or_default(&dir.path().join("missing.toml")).unwrap();
        assert_eq!(config, GameConfig::default());
    }
}
