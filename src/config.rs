use std::path::Path;

use crate::error::ConfigError;
use crate::game::{Player, DEFAULT_HEIGHT, DEFAULT_WIDTH};

/// Largest accepted board width or height.
pub const MAX_BOARD_DIMENSION: usize = 64;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub players: PlayersConfig,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub width: usize,
    pub height: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    pub one: PlayerConfig,
    pub two: PlayerConfig,
}

impl Default for PlayersConfig {
    fn default() -> Self {
        PlayersConfig {
            one: PlayerConfig::new("one", "red"),
            two: PlayerConfig::new("two", "yellow"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PlayerConfig {
    pub name: String,
    pub color: String,
}

impl PlayerConfig {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        PlayerConfig {
            name: name.into(),
            color: color.into(),
        }
    }

    pub fn to_player(&self) -> Player {
        Player::new(self.name.clone(), self.color.clone())
    }
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
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board.width == 0 {
            return Err(ConfigError::Validation("board.width must be > 0".into()));
        }
        if self.board.height == 0 {
            return Err(ConfigError::Validation("board.height must be > 0".into()));
        }
        if self.board.width > MAX_BOARD_DIMENSION {
            return Err(ConfigError::Validation(format!(
                "board.width must be <= {MAX_BOARD_DIMENSION}"
            )));
        }
        if self.board.height > MAX_BOARD_DIMENSION {
            return Err(ConfigError::Validation(format!(
                "board.height must be <= {MAX_BOARD_DIMENSION}"
            )));
        }
        if self.players.one.name.is_empty() {
            return Err(ConfigError::Validation(
                "players.one.name must not be empty".into(),
            ));
        }
        if self.players.two.name.is_empty() {
            return Err(ConfigError::Validation(
                "players.two.name must not be empty".into(),
            ));
        }
        if self.board.width < 4 || self.board.height < 4 {
            tracing::warn!(
                width = self.board.width,
                height = self.board.height,
                "board is smaller than 4 in one dimension; no one can win"
            );
        }
        Ok(())
    }

    /// Generate a TOML string with all default values.
    pub fn default_toml() -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(&AppConfig::default())?)
    }
}
