//! Match runner for playing automated games through the rules engine

use chess_rules::{Color, Game, GameConfig, GameStatus, MoveSelector, RulesResult};
use random_player::CapturePreferringPlayer;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::SelfPlayConfig;
use crate::results::SelfPlayResults;

/// How a single game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameResult {
    WhiteWins,
    BlackWins,
    Stalemate,
    /// Ply cap reached with the game still going
    Unfinished,
}

impl GameResult {
    pub fn from_status(status: GameStatus) -> Self {
        match status {
            GameStatus::Checkmate { loser: Color::White } => GameResult::BlackWins,
            GameStatus::Checkmate { loser: Color::Black } => GameResult::WhiteWins,
            GameStatus::Stalemate => GameResult::Stalemate,
            GameStatus::Ongoing => GameResult::Unfinished,
        }
    }

    pub fn score_string(self) -> &'static str {
        match self {
            GameResult::WhiteWins => "1-0",
            GameResult::BlackWins => "0-1",
            GameResult::Stalemate => "1/2",
            GameResult::Unfinished => "*",
        }
    }
}

/// Summary of one played game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub result: GameResult,
    pub plies: u32,
    pub captures: u32,
    pub promotions: u32,
}

/// Runs self-play games between two automated players
pub struct MatchRunner {
    config: SelfPlayConfig,
}

impl MatchRunner {
    pub fn new(config: SelfPlayConfig) -> Self {
        Self { config }
    }

    /// Play every configured game with fresh capture-first players.
    pub fn run(&self) -> RulesResult<SelfPlayResults> {
        let mut results = SelfPlayResults::new(self.config.clone());

        for game_num in 0..self.config.games {
            let (mut white, mut black) = match self.config.seed {
                Some(seed) => {
                    let base = seed.wrapping_add(2 * u64::from(game_num));
                    (
                        CapturePreferringPlayer::with_seed(base),
                        CapturePreferringPlayer::with_seed(base.wrapping_add(1)),
                    )
                }
                None => (
                    CapturePreferringPlayer::new(),
                    CapturePreferringPlayer::new(),
                ),
            };

            let record = self.play_game(&mut white, &mut black)?;
            info!(
                game = game_num + 1,
                total = self.config.games,
                result = record.result.score_string(),
                plies = record.plies,
                "game finished"
            );
            results.add_game(record);
        }

        Ok(results)
    }

    /// Play a single game from the starting position
    pub fn play_game<'a>(
        &self,
        white: &'a mut dyn MoveSelector,
        black: &'a mut dyn MoveSelector,
    ) -> RulesResult<GameRecord> {
        let mut game = Game::new(GameConfig::self_play());
        let mut record = GameRecord {
            result: GameResult::Unfinished,
            plies: 0,
            captures: 0,
            promotions: 0,
        };

        while record.plies < self.config.max_plies && !game.status().is_over() {
            let player = match game.side_to_move() {
                Color::White => &mut *white,
                Color::Black => &mut *black,
            };
            let Some(applied) = game.play_automated(player)? else {
                break;
            };

            record.plies += 1;
            if applied.executed.captured.is_some() {
                record.captures += 1;
            }
            if applied.promoted.is_some() {
                record.promotions += 1;
            }
            debug!(ply = record.plies, mv = %applied.executed.mv, "ply");
        }

        record.result = GameResult::from_status(game.status());
        Ok(record)
    }
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
