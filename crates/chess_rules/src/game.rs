//! Game controller: owns the one authoritative position and runs the
//! validate → execute → game-end pipeline for human and automated moves.

use tracing::{debug, info};

use crate::MoveSelector;
use crate::board::Position;
use crate::config::GameConfig;
use crate::error::{RulesError, RulesResult};
use crate::execute::{Executed, execute, promote};
use crate::movegen::legal_moves;
use crate::outcome::{GameStatus, game_status};
use crate::types::*;
use crate::validate::is_legal;

/// Why `attempt_move` refused a move. Nothing is mutated on rejection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rejection {
    GameOver,
    /// A promotion must be resolved with `finalize_promotion` first
    PromotionPending,
    EmptySquare,
    /// The piece belongs to the side not on move
    NotYourTurn,
    /// The side to move is played by the automated player
    AutomatedTurn,
    Illegal,
}

/// A move that went through, with the game state it produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Applied {
    pub executed: Executed,
    /// Piece placed by an automatic promotion
    pub promoted: Option<Piece>,
    pub status: GameStatus,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttemptOutcome {
    Applied(Applied),
    /// The pawn on this square waits for `finalize_promotion`; the turn has
    /// not passed yet
    PromotionPending(Square),
    Rejected(Rejection),
}

#[derive(Clone, Debug)]
pub struct Game {
    position: Position,
    config: GameConfig,
    pending_promotion: Option<Square>,
    status: GameStatus,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl Game {
    /// Standard starting position, white to move.
    pub fn new(config: GameConfig) -> Self {
        Self::from_position(Position::startpos(), config)
    }

    /// New two-player game from the starting position.
    pub fn standard() -> Self {
        Self::new(GameConfig::two_player())
    }

    /// Start from an arbitrary position. The status is evaluated for the
    /// side to move straight away.
    pub fn from_position(mut position: Position, config: GameConfig) -> Self {
        let side = position.side_to_move;
        let status = game_status(&mut position, side);
        Self {
            position,
            config,
            pending_promotion: None,
            status,
        }
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn side_to_move(&self) -> Color {
        self.position.side_to_move
    }

    pub fn pending_promotion(&self) -> Option<Square> {
        self.pending_promotion
    }

    /// Status after the last completed move.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Evaluate checkmate/stalemate for `color` as if it were to move.
    pub fn is_game_over(&self, color: Color) -> GameStatus {
        let mut scratch = self.position.clone();
        game_status(&mut scratch, color)
    }

    /// Whether the front end should now schedule an automated reply.
    pub fn awaiting_automated(&self) -> bool {
        !self.status.is_over()
            && self.pending_promotion.is_none()
            && self.config.is_automated(self.position.side_to_move)
    }

    /// All legal moves for the side to move.
    pub fn legal_moves(&self) -> Vec<Move> {
        legal_moves(&self.position, self.position.side_to_move)
    }

    /// Legal destinations for the piece on `from`, for move highlighting.
    pub fn legal_targets(&self, from: Square) -> Vec<Square> {
        let Some(piece) = self.position.piece_at(from) else {
            return Vec::new();
        };
        let mut scratch = self.position.clone();
        Square::all()
            .filter(|&to| is_legal(&mut scratch, piece, from, to))
            .collect()
    }

    /// Validate and play a move on behalf of a human player.
    pub fn attempt_move(&mut self, from: Square, to: Square) -> AttemptOutcome {
        let piece = match self.vet(from, to) {
            Ok(piece) => piece,
            Err(reason) => {
                debug!(%from, %to, ?reason, "move rejected");
                return AttemptOutcome::Rejected(reason);
            }
        };

        let executed = execute(&mut self.position, from, to, piece);
        if let Some(square) = executed.promotion {
            self.pending_promotion = Some(square);
            info!(%square, color = %piece.color, "promotion pending");
            return AttemptOutcome::PromotionPending(square);
        }
        AttemptOutcome::Applied(self.finish_turn(executed, None))
    }

    /// The piece on `from` if a human may move it to `to` right now.
    fn vet(&mut self, from: Square, to: Square) -> Result<Piece, Rejection> {
        if self.status.is_over() {
            return Err(Rejection::GameOver);
        }
        if self.pending_promotion.is_some() {
            return Err(Rejection::PromotionPending);
        }
        if self.config.is_automated(self.position.side_to_move) {
            return Err(Rejection::AutomatedTurn);
        }
        let piece = self.position.piece_at(from).ok_or(Rejection::EmptySquare)?;
        if piece.color != self.position.side_to_move {
            return Err(Rejection::NotYourTurn);
        }
        if !is_legal(&mut self.position, piece, from, to) {
            return Err(Rejection::Illegal);
        }
        Ok(piece)
    }

    /// Resolve the pending promotion with `kind` and pass the turn.
    ///
    /// The promoted piece's colour is taken from the promotion row, and the
    /// opponent of that colour moves next.
    pub fn finalize_promotion(&mut self, kind: PieceKind) -> RulesResult<GameStatus> {
        let square = self
            .pending_promotion
            .ok_or(RulesError::NoPendingPromotion)?;
        let piece = promote(&mut self.position, square, kind)?;
        self.pending_promotion = None;
        info!(%square, ?kind, color = %piece.color, "promotion resolved");

        self.position.side_to_move = piece.color.other();
        self.update_status();
        Ok(self.status)
    }

    /// Let `selector` move for the side to move.
    ///
    /// Promotions are resolved to a queen on the spot, so the automated
    /// player never leaves a promotion pending. Returns `Ok(None)` when the
    /// selector has no move, which only happens in a finished game.
    pub fn play_automated(
        &mut self,
        selector: &mut dyn MoveSelector,
    ) -> RulesResult<Option<Applied>> {
        if self.status.is_over() {
            return Err(RulesError::GameFinished);
        }
        if self.pending_promotion.is_some() {
            return Err(RulesError::PromotionUnresolved);
        }

        let color = self.position.side_to_move;
        let Some(mv) = selector.select_move(&self.position, color) else {
            debug!(player = selector.name(), %color, "no move available");
            self.update_status();
            return Ok(None);
        };

        let piece = match self.position.piece_at(mv.from) {
            Some(pc) if pc.color == color && is_legal(&mut self.position, pc, mv.from, mv.to) => {
                pc
            }
            _ => return Err(RulesError::IllegalSelection(mv)),
        };

        let executed = execute(&mut self.position, mv.from, mv.to, piece);
        let promoted = match executed.promotion {
            Some(square) => Some(promote(&mut self.position, square, PieceKind::Queen)?),
            None => None,
        };
        debug!(player = selector.name(), %mv, "automated move");
        Ok(Some(self.finish_turn(executed, promoted)))
    }

    fn finish_turn(&mut self, executed: Executed, promoted: Option<Piece>) -> Applied {
        self.position.side_to_move = self.position.side_to_move.other();
        debug!(
            mv = %executed.mv,
            piece = ?executed.piece.kind,
            captured = ?executed.captured.map(|pc| pc.kind),
            "move applied"
        );
        self.update_status();
        Applied {
            executed,
            promoted,
            status: self.status,
        }
    }

    fn update_status(&mut self) {
        let side = self.position.side_to_move;
        self.status = game_status(&mut self.position, side);
        match self.status {
            GameStatus::Checkmate { loser } => {
                info!(winner = %loser.other(), "checkmate")
            }
            GameStatus::Stalemate => info!(%side, "stalemate"),
            GameStatus::Ongoing => {}
        }
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
