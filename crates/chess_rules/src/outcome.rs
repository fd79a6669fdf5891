use serde::{Deserialize, Serialize};

use crate::board::Position;
use crate::check::in_check;
use crate::movegen::has_legal_move;
use crate::types::Color;

/// Game-end state for the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", tag = "status")]
pub enum GameStatus {
    Ongoing,
    Checkmate { loser: Color },
    Stalemate,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        self != GameStatus::Ongoing
    }

    pub fn winner(self) -> Option<Color> {
        match self {
            GameStatus::Checkmate { loser } => Some(loser.other()),
            _ => None,
        }
    }
}

/// Decide whether `color`, about to move, is checkmated or stalemated.
pub fn game_status(pos: &mut Position, color: Color) -> GameStatus {
    if has_legal_move(pos, color) {
        GameStatus::Ongoing
    } else if in_check(pos, color) {
        GameStatus::Checkmate { loser: color }
    } else {
        GameStatus::Stalemate
    }
}
