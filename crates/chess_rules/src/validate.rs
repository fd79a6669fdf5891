//! Legal move validation.
//!
//! A move is legal when it is pseudo-legal and does not leave the mover's
//! king attacked. The check is done by playing the move on the live board
//! inside a [`Scratch`] guard, which puts every touched square back when it
//! goes out of scope, so callers never observe the simulation.

use tracing::trace;

use crate::attacks::{Specials, pseudo_legal};
use crate::board::Position;
use crate::check::{checkers, in_check};
use crate::types::*;

/// Maximum number of distinct squares a single simulation touches.
const SCRATCH_SLOTS: usize = 3;

/// Scoped edits to a position's board.
///
/// Each square's original content is recorded the first time it is written
/// and restored, newest first, on drop.
struct Scratch<'a> {
    pos: &'a mut Position,
    saved: [Option<(Square, Option<Piece>)>; SCRATCH_SLOTS],
    len: usize,
}

impl<'a> Scratch<'a> {
    fn new(pos: &'a mut Position) -> Self {
        Self {
            pos,
            saved: [None; SCRATCH_SLOTS],
            len: 0,
        }
    }

    fn set(&mut self, sq: Square, pc: Option<Piece>) {
        let seen = self.saved[..self.len]
            .iter()
            .flatten()
            .any(|&(s, _)| s == sq);
        if !seen {
            assert!(self.len < SCRATCH_SLOTS, "scratch capacity exceeded");
            self.saved[self.len] = Some((sq, self.pos.piece_at(sq)));
            self.len += 1;
        }
        self.pos.set_piece(sq, pc);
    }

    fn position(&self) -> &Position {
        self.pos
    }
}

impl Drop for Scratch<'_> {
    fn drop(&mut self) {
        for &(sq, pc) in self.saved[..self.len].iter().rev().flatten() {
            self.pos.set_piece(sq, pc);
        }
    }
}

/// Whether a king move is a castling move (two columns sideways).
pub fn is_castling(piece: Piece, from: Square, to: Square) -> bool {
    piece.kind == PieceKind::King && from.row() == to.row() && from.col().abs_diff(to.col()) == 2
}

/// Whether a pawn move is an en-passant capture: one column sideways onto
/// an empty square.
pub fn is_en_passant(pos: &Position, piece: Piece, from: Square, to: Square) -> bool {
    piece.kind == PieceKind::Pawn
        && from.col().abs_diff(to.col()) == 1
        && pos.piece_at(to).is_none()
}

/// Whether `piece` on `from` may legally move to `to`.
///
/// Turn order is not checked here; the game controller does that. The
/// position is borrowed mutably for the simulation but is identical to its
/// prior state when this returns.
pub fn is_legal(pos: &mut Position, piece: Piece, from: Square, to: Square) -> bool {
    if !pseudo_legal(pos, piece, from, to, Specials::Allowed) {
        return false;
    }

    if is_castling(piece, from, to) {
        if in_check(pos, piece.color) {
            trace!(
                %from,
                %to,
                checkers = ?checkers(pos, piece.color),
                "castling rejected: king in check"
            );
            return false;
        }
        if !transit_square_safe(pos, piece, from, to) {
            trace!(%from, %to, "castling rejected: king crosses an attacked square");
            return false;
        }
    }

    let en_passant = is_en_passant(pos, piece, from, to);

    let mut scratch = Scratch::new(pos);
    scratch.set(to, Some(piece));
    scratch.set(from, None);
    if en_passant
        && let Some(captured) = from.offset(0, to.col() as i8 - from.col() as i8)
    {
        scratch.set(captured, None);
    }
    let exposed = in_check(scratch.position(), piece.color);
    drop(scratch);

    !exposed
}

/// Put the king on the square it crosses while castling and see whether it
/// is attacked there. The rook stays where it is.
fn transit_square_safe(pos: &mut Position, king: Piece, from: Square, to: Square) -> bool {
    let step = if to.col() > from.col() { 1 } else { -1 };
    let Some(mid) = from.offset(0, step) else {
        return false;
    };
    let mut scratch = Scratch::new(pos);
    scratch.set(mid, Some(king));
    scratch.set(from, None);
    !in_check(scratch.position(), king.color)
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod validate_tests;
