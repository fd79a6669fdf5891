pub mod attacks;
pub mod board;
pub mod check;
pub mod config;
pub mod error;
pub mod execute;
pub mod game;
pub mod movegen;
pub mod outcome;
pub mod types;
pub mod validate;

// Re-export core game logic (not player-specific)
pub use attacks::*;
pub use board::*;
pub use check::*;
pub use config::*;
pub use error::*;
pub use execute::*;
pub use game::*;
pub use movegen::*;
pub use outcome::*;
pub use types::*;
pub use validate::*;

// =============================================================================
// MoveSelector trait: implemented by automated players
// =============================================================================

/// Trait that all automated players must implement.
///
/// The game controller asks the selector for a move when it is the
/// automated side's turn and validates the answer before applying it.
pub trait MoveSelector {
    /// Pick a move for `color` in `pos`.
    ///
    /// # Returns
    /// `None` if `color` has no legal move
    fn select_move(&mut self, pos: &Position, color: Color) -> Option<Move>;

    /// Returns the player's name for logs and reports
    fn name(&self) -> &str;
}
