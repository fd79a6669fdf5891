use crate::attacks::{Specials, pseudo_legal};
use crate::board::Position;
use crate::types::*;

/// Whether `color`'s king is attacked.
///
/// A side with no king on the board counts as in check. Normal play never
/// removes a king, so this only shows up in hand-built positions, where it
/// keeps the answer total.
pub fn in_check(pos: &Position, c: Color) -> bool {
    let ksq = match pos.king_sq(c) {
        Some(s) => s,
        None => return true,
    };
    pos.board
        .occupied(c.other())
        .any(|(from, pc)| pseudo_legal(pos, pc, from, ksq, Specials::Ignored))
}

/// Squares of every piece attacking `color`'s king, in row-major order.
/// Empty when the king is missing.
pub fn checkers(pos: &Position, c: Color) -> Vec<Square> {
    let Some(ksq) = pos.king_sq(c) else {
        return Vec::new();
    };
    pos.board
        .occupied(c.other())
        .filter(|&(from, pc)| pseudo_legal(pos, pc, from, ksq, Specials::Ignored))
        .map(|(from, _)| from)
        .collect()
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod check_tests;
