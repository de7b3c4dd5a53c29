use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MoveError;

/// Width and height of the board.
pub const BOARD_SIZE: usize = 5;
/// Number of squares on the board.
pub const NUM_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
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

    /// Row delta of a pawn step. White starts at the bottom (row 4) and
    /// advances toward row 0.
    pub fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::White => "WHITE",
            Color::Black => "BLACK",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    pub fn idx(self) -> usize {
        self as usize
    }

    /// Lowercase layout letter.
    pub fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    pub fn from_letter(c: char) -> Option<PieceKind> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    pub fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    /// Layout letter: uppercase for White, lowercase for Black.
    pub fn letter(self) -> char {
        match self.color {
            Color::White => self.kind.letter().to_ascii_uppercase(),
            Color::Black => self.kind.letter(),
        }
    }

    pub fn from_letter(c: char) -> Option<Piece> {
        let kind = PieceKind::from_letter(c)?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Piece { color, kind })
    }

    pub fn glyph(self) -> char {
        match (self.color, self.kind) {
            (Color::White, PieceKind::King) => '♔',
            (Color::White, PieceKind::Queen) => '♕',
            (Color::White, PieceKind::Rook) => '♖',
            (Color::White, PieceKind::Bishop) => '♗',
            (Color::White, PieceKind::Knight) => '♘',
            (Color::White, PieceKind::Pawn) => '♙',
            (Color::Black, PieceKind::King) => '♚',
            (Color::Black, PieceKind::Queen) => '♛',
            (Color::Black, PieceKind::Rook) => '♜',
            (Color::Black, PieceKind::Bishop) => '♝',
            (Color::Black, PieceKind::Knight) => '♞',
            (Color::Black, PieceKind::Pawn) => '♟',
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// A board coordinate. Always in bounds once constructed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "(i32, i32)", into = "(i32, i32)")]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    pub fn new(row: usize, col: usize) -> Option<Square> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Builds a square from untrusted coordinates.
    pub fn try_new(row: i32, col: i32) -> Result<Square, MoveError> {
        if row < 0 || col < 0 {
            return Err(MoveError::InvalidSquare { row, col });
        }
        Square::new(row as usize, col as usize).ok_or(MoveError::InvalidSquare { row, col })
    }

    pub fn from_index(idx: usize) -> Option<Square> {
        Square::new(idx / BOARD_SIZE, idx % BOARD_SIZE)
    }

    pub fn row(self) -> usize {
        self.row as usize
    }

    pub fn col(self) -> usize {
        self.col as usize
    }

    pub fn index(self) -> usize {
        self.row() * BOARD_SIZE + self.col()
    }

    /// The square `(dr, dc)` away, if it is still on the board.
    pub fn offset(self, dr: i8, dc: i8) -> Option<Square> {
        let r = self.row as i8 + dr;
        let c = self.col as i8 + dc;
        if r < 0 || c < 0 {
            return None;
        }
        Square::new(r as usize, c as usize)
    }

    /// All squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..NUM_SQUARES).filter_map(Square::from_index)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.row, self.col)
    }
}

impl FromStr for Square {
    type Err = MoveError;

    /// Accepts `"r,c"` or `"r-c"`. Negative coordinates parse, then fail as
    /// [`MoveError::InvalidSquare`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        // A leading '-' is a sign, never the separator
        let dash = || {
            t.get(1..)
                .and_then(|rest| rest.find('-'))
                .map(|i| (&t[..=i], &t[i + 2..]))
        };
        let (r, c) = t
            .split_once(',')
            .or_else(dash)
            .ok_or_else(|| MoveError::UnparsableSquare(s.to_string()))?;
        let row: i32 = r
            .trim()
            .parse()
            .map_err(|_| MoveError::UnparsableSquare(s.to_string()))?;
        let col: i32 = c
            .trim()
            .parse()
            .map_err(|_| MoveError::UnparsableSquare(s.to_string()))?;
        Square::try_new(row, col)
    }
}

impl TryFrom<(i32, i32)> for Square {
    type Error = MoveError;

    fn try_from((row, col): (i32, i32)) -> Result<Self, Self::Error> {
        Square::try_new(row, col)
    }
}

impl From<Square> for (i32, i32) {
    fn from(sq: Square) -> Self {
        (sq.row as i32, sq.col as i32)
    }
}

/// A candidate move. Capture information is derived from the board on demand.
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
        write!(f, "{} → {}", self.from, self.to)
    }
}
