//! Capture-First Random Player
//!
//! The automated opponent. It looks at every legal move, keeps only the
//! captures when there are any, and picks one of the remaining moves
//! uniformly at random. There is no evaluation and no lookahead.
//!
//! A move counts as a capture when its destination is occupied before the
//! move, so en passant (which lands on an empty square) is treated as a
//! quiet move.

use chess_rules::{legal_moves_into, Color, Move, MoveSelector, Position};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::trace;


/// Pick a move for `color`, preferring captures.
///
/// Returns `None` when `color` has no legal move.
pub fn select_move<R: Rng + ?Sized>(pos: &Position, color: Color, rng: &mut R) -> Option<Move> {
    let mut pos_copy = pos.clone();
    let mut moves = Vec::with_capacity(64);
    legal_moves_into(&mut pos_copy, color, &mut moves);

    let captures: Vec<Move> = moves
        .iter()
        .copied()
        .filter(|&mv| pos.is_capture(mv))
        .collect();
    trace!(
        legal = moves.len(),
        captures = captures.len(),
        "candidate pool"
    );

    let pool = if captures.is_empty() { &moves } else { &captures };
    pool.choose(rng).copied()
}

/// An automated player that plays random legal moves, captures first.
#[derive(Debug, Clone)]
pub struct CapturePreferringPlayer {
    rng: StdRng,
}

impl Default for CapturePreferringPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl CapturePreferringPlayer {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible player for tests and recorded self-play.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl MoveSelector for CapturePreferringPlayer {
    fn select_move(&mut self, pos: &Position, color: Color) -> Option<Move> {
        select_move(pos, color, &mut self.rng)
    }

    fn name(&self) -> &str {
        "Capture-first random v1.0"
    }
}
