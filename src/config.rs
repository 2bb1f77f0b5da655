use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::layout::BoardLayout;
use crate::types::Player;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Read(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Game settings. Every field has a default, so an empty document gives the
/// classic setup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Pause before the computer's move is applied, in milliseconds.
    pub ai_delay_ms: u64,
    /// Side length of one square in pixels.
    pub cell_size: u32,
    /// Margin around the grid in pixels.
    pub border: u32,
    /// Colour controlled by the human; the computer plays the other one.
    pub human: Player,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            ai_delay_ms: 500,
            cell_size: 60,
            border: 20,
            human: Player::Black,
        }
    }
}

impl GameConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads the config at `path`, falling back to defaults when the file
    /// does not exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_size == 0 {
            return Err(ConfigError::Invalid("cell_size must be positive".into()));
        }
        Ok(())
    }

    pub fn ai_player(&self) -> Player {
        self.human.opponent()
    }

    pub fn ai_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.ai_delay_ms)
    }

    pub fn layout(&self) -> BoardLayout {
        BoardLayout::new(self.cell_size, self.border)
    }
}
