//! Piece geometry: whether a piece could move between two squares given the
//! current occupancy, ignoring the safety of its own king.
//!
//! This module contains:
//! - `pseudo_legal`, the per-piece movement rules
//! - `path_clear`, the sliding-piece line walk
//!
//! Whether a castling king passes through attacked squares is decided by the
//! validator, not here.

use crate::board::{Board, Position};
use crate::types::*;

/// Whether en passant and castling may be considered.
///
/// The check detector asks with `Ignored`: a king can be neither captured
/// en passant nor attacked by a castling move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Specials {
    Allowed,
    Ignored,
}

/// Whether `piece` standing on `from` may move to `to` by its movement
/// rules alone.
pub fn pseudo_legal(pos: &Position, piece: Piece, from: Square, to: Square, specials: Specials) -> bool {
    if let Some(target) = pos.piece_at(to)
        && target.color == piece.color
    {
        return false;
    }

    let dr = to.row() as i8 - from.row() as i8;
    let dc = to.col() as i8 - from.col() as i8;

    match piece.kind {
        PieceKind::Pawn => pawn_move(pos, piece.color, from, to, dr, dc, specials),
        PieceKind::Knight => {
            let (ar, ac) = (dr.abs(), dc.abs());
            (ar == 2 && ac == 1) || (ar == 1 && ac == 2)
        }
        PieceKind::Bishop => dr.abs() == dc.abs() && path_clear(&pos.board, from, to),
        PieceKind::Rook => (dr == 0 || dc == 0) && path_clear(&pos.board, from, to),
        PieceKind::Queen => {
            (dr.abs() == dc.abs() || dr == 0 || dc == 0) && path_clear(&pos.board, from, to)
        }
        PieceKind::King => {
            if dr.abs() <= 1 && dc.abs() <= 1 {
                return true;
            }
            specials == Specials::Allowed
                && dr == 0
                && dc.abs() == 2
                && castling_path_open(pos, piece.color, from, dc > 0)
        }
    }
}

fn pawn_move(
    pos: &Position,
    color: Color,
    from: Square,
    to: Square,
    dr: i8,
    dc: i8,
    specials: Specials,
) -> bool {
    let step = color.pawn_step();
    let target = pos.piece_at(to);

    if dc == 0 {
        // forward 1
        if dr == step {
            return target.is_none();
        }
        // forward 2 from start
        if dr == 2 * step && from.row() == color.pawn_start_row() {
            let passed = from.offset(step, 0);
            return target.is_none() && passed.is_some_and(|s| pos.board.is_empty(s));
        }
        return false;
    }

    if dc.abs() != 1 || dr != step {
        return false;
    }
    if target.is_some() {
        return true;
    }
    specials == Specials::Allowed && pos.en_passant == Some(to)
}

/// Castling geometry: unmoved king and rook, king and rook actually on their
/// original squares, nothing between them.
fn castling_path_open(pos: &Position, color: Color, from: Square, kingside: bool) -> bool {
    if !pos.castling.can_castle(color, kingside) {
        return false;
    }
    let back_row = color.back_row();
    if from.row() != back_row || from.col() != 4 {
        return false;
    }
    let corner_col = if kingside { 7 } else { 0 };
    let Ok(corner) = Square::new(back_row, corner_col) else {
        return false;
    };
    if !pos
        .piece_at(corner)
        .is_some_and(|pc| pc.is(color, PieceKind::Rook))
    {
        return false;
    }
    path_clear(&pos.board, from, corner)
}

/// Walk the straight or diagonal line strictly between `from` and `to`;
/// any occupied square blocks it. Callers guarantee the squares are aligned.
pub fn path_clear(board: &Board, from: Square, to: Square) -> bool {
    let step_r = (to.row() as i8 - from.row() as i8).signum();
    let step_c = (to.col() as i8 - from.col() as i8).signum();
    let mut cur = from;
    loop {
        cur = match cur.offset(step_r, step_c) {
            Some(s) => s,
            None => return true,
        };
        if cur == to {
            return true;
        }
        if !board.is_empty(cur) {
            return false;
        }
    }
}

#[cfg(test)]
#[path = "attacks_tests.rs"]
mod attacks_tests;
