//! Self-play results storage and reporting

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::SelfPlayConfig;
use crate::match_runner::{GameRecord, GameResult};

/// Complete self-play run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelfPlayResults {
    /// Configuration used
    pub config: SelfPlayConfig,
    /// Every game in the order it was played
    pub games: Vec<GameRecord>,
}

impl SelfPlayResults {
    pub fn new(config: SelfPlayConfig) -> Self {
        Self {
            config,
            games: Vec::new(),
        }
    }

    pub fn add_game(&mut self, record: GameRecord) {
        self.games.push(record);
    }

    /// Number of games that ended with `result`
    pub fn count(&self, result: GameResult) -> usize {
        self.games.iter().filter(|g| g.result == result).count()
    }

    pub fn white_wins(&self) -> usize {
        self.count(GameResult::WhiteWins)
    }

    pub fn black_wins(&self) -> usize {
        self.count(GameResult::BlackWins)
    }

    pub fn stalemates(&self) -> usize {
        self.count(GameResult::Stalemate)
    }

    pub fn unfinished(&self) -> usize {
        self.count(GameResult::Unfinished)
    }

    /// Mean game length in plies (0.0 for an empty run)
    pub fn average_plies(&self) -> f64 {
        if self.games.is_empty() {
            return 0.0;
        }
        let total: u64 = self.games.iter().map(|g| u64::from(g.plies)).sum();
        total as f64 / self.games.len() as f64
    }

    /// Save results to JSON file
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load results from JSON file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str("=== Self-play ===\n\n");
        report.push_str(&format!(
            "Config: {} games, {} ply cap, seed {}\n\n",
            self.config.games,
            self.config.max_plies,
            self.config
                .seed
                .map_or_else(|| "random".to_string(), |s| s.to_string())
        ));

        report.push_str(&format!(
            "{:<6} {:>7} {:>6} {:>9} {:>10}\n",
            "Game", "Result", "Plies", "Captures", "Promotions"
        ));
        report.push_str(&"-".repeat(42));
        report.push('\n');

        for (i, game) in self.games.iter().enumerate() {
            report.push_str(&format!(
                "{:<6} {:>7} {:>6} {:>9} {:>10}\n",
                i + 1,
                game.result.score_string(),
                game.plies,
                game.captures,
                game.promotions
            ));
        }

        report.push('\n');
        report.push_str(&format!(
            "White wins: {}  Black wins: {}  Stalemates: {}  Unfinished: {}\n",
            self.white_wins(),
            self.black_wins(),
            self.stalemates(),
            self.unfinished()
        ));
        report.push_str(&format!("Average length: {:.1} plies\n", self.average_plies()));

        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod results_tests;
