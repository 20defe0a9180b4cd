use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::game::COLS;

/// Errors returned when a move cannot be applied. The engine is unchanged
/// after any of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} is out of range (0..{})", COLS)]
    InvalidColumn { column: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("game is over; reset to play again")]
    GameOver,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_column_display() {
        let err = MoveError::InvalidColumn { column: 9 };
        assert_eq!(err.to_string(), "column 9 is out of range (0..7)");
    }

    #[test]
    fn test_column_full_display() {
        let err = MoveError::ColumnFull { column: 2 };
        assert_eq!(err.to_string(), "column 2 is full");
    }

    #[test]
    fn test_game_over_display() {
        assert_eq!(
            MoveError::GameOver.to_string(),
            "game is over; reset to play again"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("players.one must not be empty".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: players.one must not be empty"
        );
    }
}
