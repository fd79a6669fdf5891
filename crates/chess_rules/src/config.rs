//! Game configuration.
//!
//! Loaded from TOML, for example:
//!
//! ```toml
//! mode = "vs-computer"
//! computer = "black"
//! reply_delay_ms = 500
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::RulesResult;
use crate::types::Color;

/// Who makes the moves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameMode {
    /// Both sides are played through `attempt_move`
    TwoPlayer,
    /// One side is automated; the human may not move for it
    #[default]
    VsComputer,
    /// Both sides are automated
    SelfPlay,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub mode: GameMode,
    /// Side played by the automated player in `VsComputer` mode
    pub computer: Color,
    /// Pause the front end should leave before the automated reply
    pub reply_delay_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::VsComputer,
            computer: Color::Black,
            reply_delay_ms: 500,
        }
    }
}

impl GameConfig {
    pub fn two_player() -> Self {
        Self {
            mode: GameMode::TwoPlayer,
            ..Self::default()
        }
    }

    pub fn self_play() -> Self {
        Self {
            mode: GameMode::SelfPlay,
            ..Self::default()
        }
    }

    pub fn from_toml_str(s: &str) -> RulesResult<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: &Path) -> RulesResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Whether `color` is moved by the automated player.
    pub fn is_automated(&self, color: Color) -> bool {
        match self.mode {
            GameMode::TwoPlayer => false,
            GameMode::VsComputer => color == self.computer,
            GameMode::SelfPlay => true,
        }
    }

    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
