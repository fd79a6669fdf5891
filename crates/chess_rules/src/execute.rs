use crate::board::Position;
use crate::error::{RulesError, RulesResult};
use crate::types::*;
use crate::validate::{is_castling, is_en_passant};

/// Side effects of an executed move, for callers that log or render them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Executed {
    pub mv: Move,
    pub piece: Piece,
    /// Piece removed from the board, including an en-passant victim
    pub captured: Option<Piece>,
    /// Rook relocation `(from, to)` when the move was a castle
    pub rook_move: Option<(Square, Square)>,
    pub en_passant: bool,
    /// Set when a pawn reached the far back rank and still shows as a pawn
    pub promotion: Option<Square>,
}

/// Apply a move the validator has already approved.
///
/// Handles the castling rook, the en-passant victim, castling flags and the
/// en-passant target. Promotion and the change of turn are left to the
/// caller: a pawn on the last row is reported through
/// [`Executed::promotion`] and the side to move is untouched.
pub fn execute(pos: &mut Position, from: Square, to: Square, piece: Piece) -> Executed {
    let mut captured = pos.piece_at(to);
    let mut rook_move = None;

    // Castling rook
    if is_castling(piece, from, to) {
        let kingside = to.col() > from.col();
        let (corner, rook_col) = if kingside { (7, 5) } else { (0, 3) };
        if let (Some(rf), Some(rt)) = (
            from.offset(0, corner - from.col() as i8),
            from.offset(0, rook_col - from.col() as i8),
        ) {
            let rook = pos.piece_at(rf);
            pos.set_piece(rt, rook);
            pos.set_piece(rf, None);
            rook_move = Some((rf, rt));
            if let Some(rook) = rook {
                pos.castling.mark_rook_moved(rook.color, rf.col());
            }
        }
    }

    // En-passant victim sits beside the origin, in the destination column
    let en_passant = is_en_passant(pos, piece, from, to);
    if en_passant && let Some(victim) = from.offset(0, to.col() as i8 - from.col() as i8) {
        captured = pos.piece_at(victim);
        pos.set_piece(victim, None);
    }

    match piece.kind {
        PieceKind::King => pos.castling.mark_king_moved(piece.color),
        PieceKind::Rook if from.row() == piece.color.back_row() => {
            pos.castling.mark_rook_moved(piece.color, from.col())
        }
        _ => {}
    }
    // A rook captured on its corner can no longer castle
    if let Some(cp) = captured
        && cp.kind == PieceKind::Rook
        && to.row() == cp.color.back_row()
    {
        pos.castling.mark_rook_moved(cp.color, to.col());
    }

    pos.set_piece(to, Some(piece));
    pos.set_piece(from, None);

    // Double pawn push sets en-passant square, anything else clears it
    pos.en_passant = None;
    if piece.kind == PieceKind::Pawn && from.row().abs_diff(to.row()) == 2 {
        pos.en_passant = from.offset(piece.color.pawn_step(), 0);
    }

    let promotion =
        (piece.kind == PieceKind::Pawn && to.row() == piece.color.promotion_row()).then_some(to);

    Executed {
        mv: Move::new(from, to),
        piece,
        captured,
        rook_move,
        en_passant,
        promotion,
    }
}

/// Replace the pawn on `square` with `kind`.
///
/// The colour comes from the row: row 0 promotes a white piece, row 7 a
/// black one.
pub fn promote(pos: &mut Position, square: Square, kind: PieceKind) -> RulesResult<Piece> {
    if !kind.is_promotion_target() {
        return Err(RulesError::InvalidPromotion(kind));
    }
    let color = Color::promoting_on(square.row())
        .ok_or(RulesError::NotAPromotionRow(square.row()))?;
    let piece = Piece::new(color, kind);
    pos.set_piece(square, Some(piece));
    Ok(piece)
}

#[cfg(test)]
#[path = "execute_tests.rs"]
mod execute_tests;
