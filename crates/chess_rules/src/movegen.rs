use crate::{board::Position, types::*, validate::is_legal};

/// Generate all legal moves for `color`, returning a freshly allocated vector.
/// Internally delegates to `legal_moves_into` on a private copy.
pub fn legal_moves(pos: &Position, color: Color) -> Vec<Move> {
    let mut tmp = pos.clone();
    let mut out = Vec::with_capacity(64);
    legal_moves_into(&mut tmp, color, &mut out);
    out
}

/// Generate all legal moves for `color` into the provided buffer.
///
/// Pieces are visited in row-major order and each is tried against all 64
/// destinations in row-major order, so the output order is stable.
pub fn legal_moves_into(pos: &mut Position, color: Color, out: &mut Vec<Move>) {
    out.clear();
    let pieces: Vec<(Square, Piece)> = pos.board.occupied(color).collect();
    for (from, piece) in pieces {
        for to in Square::all() {
            if is_legal(pos, piece, from, to) {
                out.push(Move::new(from, to));
            }
        }
    }
}

/// Whether `color` has any legal move, stopping at the first one found.
pub fn has_legal_move(pos: &mut Position, color: Color) -> bool {
    let pieces: Vec<(Square, Piece)> = pos.board.occupied(color).collect();
    pieces
        .into_iter()
        .any(|(from, piece)| Square::all().any(|to| is_legal(pos, piece, from, to)))
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
