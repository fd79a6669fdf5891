use crate::types::*;

/// 8x8 grid of optional pieces, indexed `[row][col]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    pub fn standard() -> Self {
        let mut b = Board::empty();
        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for color in [Color::White, Color::Black] {
            let back_row = color.back_row() as usize;
            let pawn_row = color.pawn_start_row() as usize;
            for (col, &kind) in back.iter().enumerate() {
                b.squares[back_row][col] = Some(Piece { color, kind });
                b.squares[pawn_row][col] = Some(Piece {
                    color,
                    kind: PieceKind::Pawn,
                });
            }
        }
        b
    }

    pub fn get(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.row() as usize][sq.col() as usize]
    }

    pub fn set(&mut self, sq: Square, pc: Option<Piece>) {
        self.squares[sq.row() as usize][sq.col() as usize] = pc;
    }

    pub fn is_empty(&self, sq: Square) -> bool {
        self.get(sq).is_none()
    }

    /// First square (row-major) holding `color`'s king.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        Square::all().find(|&sq| {
            self.get(sq)
                .is_some_and(|pc| pc.is(color, PieceKind::King))
        })
    }

    /// Squares occupied by `color`, in row-major order.
    pub fn occupied(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| match self.get(sq) {
            Some(pc) if pc.color == color => Some((sq, pc)),
            _ => None,
        })
    }
}

/// "Has moved" flags for one side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SideCastling {
    pub king_moved: bool,
    pub kingside_rook_moved: bool,
    pub queenside_rook_moved: bool,
}

/// Castling bookkeeping for both sides.
///
/// Every flag is monotonic: once a king or rook has left its original
/// square the flag stays set for the rest of the game, even if the piece
/// later returns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CastlingRights {
    sides: [SideCastling; 2],
}

impl CastlingRights {
    pub fn side(&self, color: Color) -> SideCastling {
        self.sides[color.idx()]
    }

    pub fn mark_king_moved(&mut self, color: Color) {
        self.sides[color.idx()].king_moved = true;
    }

    /// Record that `color`'s rook left `col`. Only the corner columns carry
    /// castling rights; any other column is ignored.
    pub fn mark_rook_moved(&mut self, color: Color, col: u8) {
        let side = &mut self.sides[color.idx()];
        match col {
            0 => side.queenside_rook_moved = true,
            7 => side.kingside_rook_moved = true,
            _ => {}
        }
    }

    /// Whether the king and the rook on the given wing are both unmoved.
    pub fn can_castle(&self, color: Color, kingside: bool) -> bool {
        let side = self.side(color);
        if side.king_moved {
            return false;
        }
        if kingside {
            !side.kingside_rook_moved
        } else {
            !side.queenside_rook_moved
        }
    }

    /// Rights with every flag set, for positions built from scratch.
    pub fn none() -> Self {
        let moved = SideCastling {
            king_moved: true,
            kingside_rook_moved: true,
            queenside_rook_moved: true,
        };
        Self {
            sides: [moved, moved],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub board: Board,
    pub side_to_move: Color,
    pub castling: CastlingRights,
    pub en_passant: Option<Square>, // square behind a pawn that just advanced 2
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}

impl Position {
    pub fn startpos() -> Self {
        Position {
            board: Board::standard(),
            side_to_move: Color::White,
            castling: CastlingRights::default(),
            en_passant: None,
        }
    }

    /// Position with the given board, white to move, untouched castling
    /// flags and no en-passant target.
    pub fn from_board(board: Board) -> Self {
        Position {
            board,
            side_to_move: Color::White,
            castling: CastlingRights::default(),
            en_passant: None,
        }
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.board.get(sq)
    }
    pub fn set_piece(&mut self, sq: Square, pc: Option<Piece>) {
        self.board.set(sq, pc);
    }

    pub fn king_sq(&self, c: Color) -> Option<Square> {
        self.board.king_square(c)
    }

    /// Whether `mv` lands on an occupied square. En-passant captures land on
    /// an empty square and do not count.
    pub fn is_capture(&self, mv: Move) -> bool {
        self.piece_at(mv.to).is_some()
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
