//! Game configuration.
//!
//! Holds the settings chosen at startup: the player's army color, an
//! optional fixed random seed, and where to write the session record.

use std::path::PathBuf;

use crate::board::{Color, Registry};

/// Errors in the startup configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown color: '{0}'")]
    UnknownColor(String),

    #[error("the {0} army owns no territory on the starting map")]
    PlayerWithoutTerritory(Color),
}

/// Settings for one interactive session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Color of the player's army.
    pub player: Color,
    /// Fixed seed for the random source. None seeds from OS entropy.
    pub seed: Option<u64>,
    /// File the session record is written to when the game ends.
    pub record: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            player: Color::Yellow,
            seed: None,
            record: None,
        }
    }
}

impl GameConfig {
    /// Sets the player color from its name.
    pub fn with_player_name(mut self, name: &str) -> Result<Self, ConfigError> {
        self.player =
            Color::from_name(name).ok_or_else(|| ConfigError::UnknownColor(name.to_string()))?;
        Ok(self)
    }

    /// Checks that the configuration can start a game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_player(self.player)
    }
}

/// Checks that `player` owns at least one territory on the starting map.
pub fn validate_player(player: Color) -> Result<(), ConfigError> {
    if Registry::initial().is_present(player) {
        Ok(())
    } else {
        Err(ConfigError::PlayerWithoutTerritory(player))
    }
}
