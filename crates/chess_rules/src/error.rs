//! Error types for the rules engine.
//!
//! Illegal moves are not errors: `Game::attempt_move` reports them as a
//! [`Rejection`](crate::Rejection). These variants cover contract violations
//! at the API boundary and configuration loading.

use thiserror::Error;

use crate::types::{Move, PieceKind};

#[derive(Error, Debug)]
pub enum RulesError {
    /// Coordinates outside the 8x8 board
    #[error("square ({row}, {col}) is off the board (rows and columns are 0-7)")]
    OutOfBounds { row: u8, col: u8 },

    #[error("invalid square name {0:?}")]
    InvalidSquareName(String),

    #[error("no promotion is pending")]
    NoPendingPromotion,

    #[error("a pawn cannot be promoted to {0:?}")]
    InvalidPromotion(PieceKind),

    /// The promotion square is not on a back rank
    #[error("no side promotes on row {0}")]
    NotAPromotionRow(u8),

    #[error("automated player chose an illegal move {0}")]
    IllegalSelection(Move),

    #[error("the game is already over")]
    GameFinished,

    #[error("a promotion must be resolved before play continues")]
    PromotionUnresolved,

    #[error("failed to parse config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
}

pub type RulesResult<T> = Result<T, RulesError>;
