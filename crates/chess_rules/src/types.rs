use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RulesError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Color {
    White,
    Black,
}
impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
    pub fn idx(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    /// Row holding this side's king and rooks at the start of the game.
    pub fn back_row(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// Row delta of a single pawn advance.
    pub fn pawn_step(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    pub fn pawn_start_row(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Row on which this side's pawns promote.
    pub fn promotion_row(self) -> u8 {
        self.other().back_row()
    }

    /// Colour of the piece that promotes on `row`.
    ///
    /// A promotion is always resolved from the square alone: a pawn reaching
    /// row 0 is white, one reaching row 7 is black. Any other row has no
    /// promoting side.
    pub fn promoting_on(row: u8) -> Option<Color> {
        match row {
            0 => Some(Color::White),
            7 => Some(Color::Black),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Kinds a pawn may be promoted to.
    pub const PROMOTIONS: [PieceKind; 4] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];

    pub fn is_promotion_target(self) -> bool {
        Self::PROMOTIONS.contains(&self)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    pub fn is(self, color: Color, kind: PieceKind) -> bool {
        self.color == color && self.kind == kind
    }
}

/// A board square addressed by (row, column).
///
/// Row 0 is black's back rank and row 7 is white's, so `e2` is row 6,
/// column 4. Both coordinates are always within `0..8`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "(u8, u8)", into = "(u8, u8)")]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    pub fn new(row: u8, col: u8) -> Result<Self, RulesError> {
        if row < 8 && col < 8 {
            Ok(Self { row, col })
        } else {
            Err(RulesError::OutOfBounds { row, col })
        }
    }

    /// Square `(dr, dc)` away from this one, if it is still on the board.
    pub fn offset(self, dr: i8, dc: i8) -> Option<Square> {
        let row = self.row as i8 + dr;
        let col = self.col as i8 + dc;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    pub fn row(self) -> u8 {
        self.row
    }
    pub fn col(self) -> u8 {
        self.col
    }

    /// All 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |col| Square { row, col }))
    }
}

impl TryFrom<(u8, u8)> for Square {
    type Error = RulesError;

    fn try_from((row, col): (u8, u8)) -> Result<Self, Self::Error> {
        Square::new(row, col)
    }
}

impl From<Square> for (u8, u8) {
    fn from(sq: Square) -> Self {
        (sq.row, sq.col)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.col) as char;
        let rank = (b'8' - self.row) as char;
        write!(f, "{file}{rank}")
    }
}

impl FromStr for Square {
    type Err = RulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let b = s.as_bytes();
        if b.len() != 2 {
            return Err(RulesError::InvalidSquareName(s.to_string()));
        }
        let f = b[0];
        let r = b[1];
        if !(b'a'..=b'h').contains(&f) || !(b'1'..=b'8').contains(&r) {
            return Err(RulesError::InvalidSquareName(s.to_string()));
        }
        Square::new(b'8' - r, f - b'a')
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}
