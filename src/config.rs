use std::path::Path;

use crate::error::ConfigError;
use crate::game::Player;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub players: PlayerNames,
}

/// Display names shown by the presentation layer. The engine itself only
/// knows [`Player::One`] and [`Player::Two`].
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayerNames {
    pub one: String,
    pub two: String,
}

impl Default for PlayerNames {
    fn default() -> Self {
        PlayerNames {
            one: Player::One.label().to_string(),
            two: Player::Two.label().to_string(),
        }
    }
}

impl PlayerNames {
    pub fn name(&self, player: Player) -> &str {
        match player {
            Player::One => &self.one,
            Player::Two => &self.two,
        }
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
        if self.players.one.trim().is_empty() {
            return Err(ConfigError::Validation(
                "players.one must not be empty".into(),
            ));
        }
        if self.players.two.trim().is_empty() {
            return Err(ConfigError::Validation(
                "players.two must not be empty".into(),
            ));
        }
        if self.players.one.trim() == self.players.two.trim() {
            return Err(ConfigError::Validation(
                "players.one and players.two must differ".into(),
            ));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
