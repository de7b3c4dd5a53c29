//! Game settings, loadable from TOML

use std::path::{Path, PathBuf};
use std::time::Duration;

use lookahead_engine::{LookaheadEngine, SearchConfig};
use minichess_core::{Board, Color, Engine, LayoutError, STANDARD_LAYOUT};
use random_engine::RandomEngine;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("invalid layout: {0}")]
    Layout(#[from] LayoutError),
}

/// Who sits across the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// White is human, Black is the computer
    #[default]
    VsComputer,
    /// Both sides are human
    VsFriend,
}

/// Which engine plays the computer side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpponentKind {
    #[default]
    Lookahead,
    Random,
}

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub mode: Mode,
    /// Initial layout, see [`Board::from_layout`]
    pub layout: String,
    pub opponent: OpponentKind,
    /// Play the computer's reply inside `submit_move`. Turn off when the
    /// presentation layer paces the reply itself.
    pub auto_reply: bool,
    /// Cosmetic pause before the computer moves, honoured by the presentation layer
    pub think_delay_ms: u64,
    pub search: SearchConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: Mode::VsComputer,
            layout: STANDARD_LAYOUT.to_string(),
            opponent: OpponentKind::Lookahead,
            auto_reply: true,
            think_delay_ms: 400,
            search: SearchConfig::default(),
        }
    }
}

impl GameConfig {
    /// Load a config from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&contents)?;
        Ok(config)
    }

    /// Parse a config and check that its layout is usable
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(s)?;
        config.initial_board()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn initial_board(&self) -> Result<Board, LayoutError> {
        Board::from_layout(&self.layout)
    }

    pub fn think_delay(&self) -> Duration {
        Duration::from_millis(self.think_delay_ms)
    }

    /// The side the computer plays, if any
    pub fn computer_side(&self) -> Option<Color> {
        match self.mode {
            Mode::VsComputer => Some(Color::Black),
            Mode::VsFriend => None,
        }
    }

    pub fn build_engine(&self) -> Box<dyn Engine> {
        match self.opponent {
            OpponentKind::Lookahead => Box::new(LookaheadEngine::new(self.search)),
            OpponentKind::Random => match self.search.seed {
                Some(seed) => Box::new(RandomEngine::with_seed(seed)),
                None => Box::new(RandomEngine::new()),
            },
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
