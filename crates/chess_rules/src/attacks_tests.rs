use super::*;

use Color::{Black, White};
use PieceKind::*;

fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

fn position(pieces: &[(&str, Color, PieceKind)]) -> Position {
    let mut board = Board::empty();
    for &(name, color, kind) in pieces {
        board.set(sq(name), Some(Piece::new(color, kind)));
    }
    Position::from_board(board)
}

fn can(pos: &Position, from: &str, to: &str) -> bool {
    let piece = pos.piece_at(sq(from)).unwrap();
    pseudo_legal(pos, piece, sq(from), sq(to), Specials::Allowed)
}

#[test]
fn test_same_color_destination_rejected() {
    let pos = Position::startpos();
    assert!(!can(&pos, "a1", "a2"));
    assert!(!can(&pos, "b1", "d2"));
    assert!(can(&pos, "b1", "c3"));
}

#[test]
fn test_pawn_pushes() {
    let pos = Position::startpos();
    assert!(can(&pos, "e2", "e3"));
    assert!(can(&pos, "e2", "e4"));
    assert!(!can(&pos, "e2", "e5"));
    assert!(can(&pos, "d7", "d5"));
    // No backward or sideways steps
    let pos = position(&[("e4", White, Pawn)]);
    assert!(!can(&pos, "e4", "e3"));
    assert!(!can(&pos, "e4", "d4"));
    // Double step only from the start row
    assert!(!can(&pos, "e4", "e6"));
}

#[test]
fn test_pawn_double_push_needs_both_squares_empty() {
    let pos = position(&[("e2", White, Pawn), ("e3", Black, Knight)]);
    assert!(!can(&pos, "e2", "e4"));
    assert!(!can(&pos, "e2", "e3"));

    let pos = position(&[("e2", White, Pawn), ("e4", Black, Knight)]);
    assert!(!can(&pos, "e2", "e4"));
    assert!(can(&pos, "e2", "e3"));
}

#[test]
fn test_pawn_captures_diagonally_forward_only() {
    let pos = position(&[
        ("e4", White, Pawn),
        ("d5", Black, Pawn),
        ("f3", Black, Pawn),
        ("e5", Black, Pawn),
    ]);
    assert!(can(&pos, "e4", "d5"));
    assert!(!can(&pos, "e4", "f3"));
    assert!(!can(&pos, "e4", "e5"));
    assert!(!can(&pos, "e4", "f5"));
}

#[test]
fn test_en_passant_only_with_specials() {
    let mut pos = position(&[("e5", White, Pawn), ("d5", Black, Pawn)]);
    pos.en_passant = Some(sq("d6"));
    let pawn = Piece::new(White, Pawn);

    assert!(pseudo_legal(&pos, pawn, sq("e5"), sq("d6"), Specials::Allowed));
    assert!(!pseudo_legal(&pos, pawn, sq("e5"), sq("d6"), Specials::Ignored));
    // The other diagonal is not the target
    assert!(!pseudo_legal(&pos, pawn, sq("e5"), sq("f6"), Specials::Allowed));
}

#[test]
fn test_knight_jumps() {
    let pos = Position::startpos();
    assert!(can(&pos, "g1", "f3"));
    assert!(can(&pos, "g1", "h3"));
    assert!(!can(&pos, "g1", "g3"));
}

#[test]
fn test_sliders_need_clear_path() {
    let pos = position(&[
        ("a1", White, Rook),
        ("a4", Black, Pawn),
        ("c1", White, Bishop),
        ("h8", White, Queen),
        ("e5", White, Knight),
    ]);
    assert!(can(&pos, "a1", "a4"));
    assert!(!can(&pos, "a1", "a5"));
    assert!(!can(&pos, "a1", "c1"));
    assert!(can(&pos, "a1", "b1"));
    assert!(!can(&pos, "a1", "b2"));

    assert!(can(&pos, "c1", "h6"));
    assert!(!can(&pos, "c1", "c2"));

    assert!(can(&pos, "h8", "a8"));
    assert!(can(&pos, "h8", "f6"));
    assert!(!can(&pos, "h8", "d4"));
    assert!(!can(&pos, "h8", "g6"));
}

#[test]
fn test_path_clear_excludes_endpoints() {
    let pos = position(&[("a1", White, Rook), ("a8", Black, Rook)]);
    assert!(path_clear(&pos.board, sq("a1"), sq("a8")));
    let pos = position(&[("a1", White, Rook), ("a5", Black, Rook), ("a8", Black, Rook)]);
    assert!(!path_clear(&pos.board, sq("a1"), sq("a8")));
    assert!(path_clear(&pos.board, sq("a1"), sq("a2")));
}

#[test]
fn test_king_steps_and_castling_geometry() {
    let pos = position(&[("e1", White, King), ("h1", White, Rook), ("a1", White, Rook)]);
    assert!(can(&pos, "e1", "e2"));
    assert!(can(&pos, "e1", "f2"));
    assert!(!can(&pos, "e1", "e3"));
    assert!(can(&pos, "e1", "g1"));
    assert!(can(&pos, "e1", "c1"));

    let king = Piece::new(White, King);
    assert!(!pseudo_legal(&pos, king, sq("e1"), sq("g1"), Specials::Ignored));
}

#[test]
fn test_castling_blocked_by_flags_pieces_or_missing_rook() {
    let base = [("e1", White, King), ("h1", White, Rook), ("a1", White, Rook)];

    let mut pos = position(&base);
    pos.castling.mark_rook_moved(White, 7);
    assert!(!can(&pos, "e1", "g1"));
    assert!(can(&pos, "e1", "c1"));

    let mut pos = position(&base);
    pos.castling.mark_king_moved(White);
    assert!(!can(&pos, "e1", "g1"));
    assert!(!can(&pos, "e1", "c1"));

    // b1 is between king and rook even though the king never crosses it
    let mut with_knight = base.to_vec();
    with_knight.push(("b1", White, Knight));
    let pos = position(&with_knight);
    assert!(!can(&pos, "e1", "c1"));
    assert!(can(&pos, "e1", "g1"));

    let pos = position(&[("e1", White, King), ("a1", White, Rook)]);
    assert!(!can(&pos, "e1", "g1"));
}

#[test]
fn test_king_off_home_square_cannot_castle() {
    let pos = position(&[("d1", White, King), ("h1", White, Rook)]);
    assert!(!can(&pos, "d1", "f1"));
}
