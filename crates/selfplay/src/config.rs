//! Self-play run configuration, read from TOML.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelfPlayConfig {
    /// Number of games to play
    pub games: u32,
    /// Plies after which an undecided game is abandoned. The engine has no
    /// repetition or fifty-move rule, so random games need a cap.
    pub max_plies: u32,
    /// Base seed for both players (None = fresh entropy every run)
    pub seed: Option<u64>,
    /// Where to write the JSON summary
    pub output: Option<PathBuf>,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        Self {
            games: 10,
            max_plies: 400,
            seed: None,
            output: None,
        }
    }
}

impl SelfPlayConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&contents).with_context(|| format!("failed to parse {}", path.display()))
    }
}
