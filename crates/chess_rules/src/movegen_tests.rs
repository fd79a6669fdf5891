use super::*;

fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

#[test]
fn test_startpos_moves() {
    let pos = Position::startpos();
    let moves = legal_moves(&pos, Color::White);
    // Starting position has 20 legal moves
    assert_eq!(moves.len(), 20);
    assert_eq!(legal_moves(&pos, Color::Black).len(), 20);
}

#[test]
fn test_moves_are_row_major() {
    let pos = Position::startpos();
    let moves = legal_moves(&pos, Color::White);
    // Pawns on row 6 come before the knights on row 7
    assert_eq!(moves[0], Move::new(sq("a2"), sq("a4")));
    assert_eq!(moves[1], Move::new(sq("a2"), sq("a3")));
    assert_eq!(moves[16], Move::new(sq("b1"), sq("a3")));
}

#[test]
fn test_has_legal_move_matches_enumeration() {
    let mut pos = Position::startpos();
    assert!(has_legal_move(&mut pos, Color::White));
    assert_eq!(pos, Position::startpos());
}
