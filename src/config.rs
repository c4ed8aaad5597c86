use std::path::Path;

use tracing::warn;

use crate::error::{ConfigError, GameError};
use crate::game::{GameState, MIN_SIZE};

/// Board and player settings for a new game.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side length of the square board; odd, at least 3.
    pub board_size: usize,
    pub player_one: String,
    pub player_two: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            board_size: 11,
            player_one: "Red".to_string(),
            player_two: "Blue".to_string(),
        }
    }
}

impl GameConfig {
    /// Start a game with these settings.
    pub fn new_game(&self) -> Result<GameState, GameError> {
        GameState::new(self.board_size, &*self.player_one, &*self.player_two)
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
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
        let game = &self.game;
        if game.board_size < MIN_SIZE {
            return Err(ConfigError::Validation(format!(
                "game.board_size must be >= {MIN_SIZE}"
            )));
        }
        if game.board_size % 2 == 0 {
            return Err(ConfigError::Validation(
                "game.board_size must be odd".into(),
            ));
        }
        if game.player_one.trim().is_empty() || game.player_two.trim().is_empty() {
            return Err(ConfigError::Validation(
                "game.player_one and game.player_two must not be empty".into(),
            ));
        }
        if game.player_one == game.player_two {
            return Err(ConfigError::Validation(
                "game.player_one and game.player_two must differ".into(),
            ));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
        assert_eq!(config.game.board_size, 11);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[game]
board_size = 7
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.game.board_size, 7);
        assert_eq!(config.game.player_one, "Red");
        assert_eq!(config.game.player_two, "Blue");
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_validation_rejects_even_size() {
        let mut config = AppConfig::default();
        config.game.board_size = 8;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_small_size() {
        let mut config = AppConfig::default();
        config.game.board_size = 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_blank_name() {
        let mut config = AppConfig::default();
        config.game.player_two = "  ".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_same_names() {
        let mut config = AppConfig::default();
        config.game.player_two = config.game.player_one.clone();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config.game.board_size, 11);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bridgit.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[game]
board_size = 5
player_one = "Green"
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.game.board_size, 5);
        assert_eq!(config.game.player_one, "Green");
        assert_eq!(config.game.player_two, "Blue");
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[game]\nboard_size = 4\n").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));

        std::fs::write(&path, "[game]\nboard_size = \"big\"\n").unwrap();
        assert!(matches!(AppConfig::load(&path), Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml().unwrap();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_new_game_from_config() {
        let config = GameConfig {
            board_size: 9,
            ..GameConfig::default()
        };
        let state = config.new_game().unwrap();
        assert_eq!(state.board_size(), 9);
        assert_eq!(state.player_name(crate::game::Player::Two), "Blue");
    }
}
