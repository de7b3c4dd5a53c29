use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;
use crate::types::*;

/// King, bishops, knights and pawns: the set the browser game shipped with.
pub const STANDARD_LAYOUT: &str = "nbkbn/ppppp/5/PPPPP/NBKBN";

/// Gardner's minichess opening array, using all six piece types.
pub const GARDNER_LAYOUT: &str = "rnbqk/ppppp/5/PPPPP/RNBQK";

/// 5x5 mailbox. Row 0 is Black's home row, row 4 is White's.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Board {
    squares: [Option<Piece>; NUM_SQUARES],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub fn empty() -> Self {
        Board {
            squares: [None; NUM_SQUARES],
        }
    }

    pub fn standard() -> Self {
        Board::from_layout(STANDARD_LAYOUT).unwrap_or_default()
    }

    /// Parses a layout string.
    ///
    /// Rows are listed from row 0 to row 4 separated by `/`. Within a row,
    /// letters are pieces (uppercase White, lowercase Black) and digits are
    /// runs of empty squares, so `"nbkbn/ppppp/5/PPPPP/NBKBN"` is the
    /// standard opening array.
    pub fn from_layout(layout: &str) -> Result<Board, LayoutError> {
        let rows: Vec<&str> = layout.trim().split('/').collect();
        if rows.len() != BOARD_SIZE {
            return Err(LayoutError::RowCount(rows.len()));
        }

        let mut board = Board::empty();
        let mut kings = [0usize; 2];
        for (row, text) in rows.iter().enumerate() {
            let mut col = 0usize;
            for ch in text.chars() {
                if let Some(d) = ch.to_digit(10) {
                    col += d as usize;
                    continue;
                }
                let piece = Piece::from_letter(ch).ok_or(LayoutError::UnknownPiece(ch))?;
                if let Some(s) = Square::new(row, col) {
                    if piece.kind == PieceKind::King {
                        kings[piece.color.idx()] += 1;
                        if kings[piece.color.idx()] > 1 {
                            return Err(LayoutError::ExtraKing(piece.color));
                        }
                    }
                    board.set_piece(s, Some(piece));
                }
                col += 1;
            }
            if col != BOARD_SIZE {
                return Err(LayoutError::RowWidth { row, width: col });
            }
        }
        Ok(board)
    }

    /// Inverse of [`Board::from_layout`].
    pub fn to_layout(&self) -> String {
        let mut out = String::new();
        for row in 0..BOARD_SIZE {
            if row > 0 {
                out.push('/');
            }
            let mut empty = 0;
            for col in 0..BOARD_SIZE {
                match Square::new(row, col).and_then(|s| self.piece_at(s)) {
                    Some(pc) => {
                        if empty > 0 {
                            out.push_str(&empty.to_string());
                            empty = 0;
                        }
                        out.push(pc.letter());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
        }
        out
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    pub fn set_piece(&mut self, sq: Square, pc: Option<Piece>) {
        self.squares[sq.index()] = pc;
    }

    pub fn king_square(&self, c: Color) -> Option<Square> {
        self.pieces(c)
            .find(|(_, pc)| pc.kind == PieceKind::King)
            .map(|(s, _)| s)
    }

    /// Occupied squares of one side, row-major.
    pub fn pieces(&self, c: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |s| match self.piece_at(s) {
            Some(pc) if pc.color == c => Some((s, pc)),
            _ => None,
        })
    }
}

impl TryFrom<String> for Board {
    type Error = LayoutError;

    fn try_from(layout: String) -> Result<Self, Self::Error> {
        Board::from_layout(&layout)
    }
}

impl From<Board> for String {
    fn from(board: Board) -> Self {
        board.to_layout()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for col in 0..BOARD_SIZE {
            write!(f, " {col}")?;
        }
        writeln!(f)?;
        for row in 0..BOARD_SIZE {
            write!(f, " {row} ")?;
            for col in 0..BOARD_SIZE {
                let cell = Square::new(row, col)
                    .and_then(|s| self.piece_at(s))
                    .map(|pc| pc.glyph())
                    .unwrap_or('·');
                write!(f, " {cell}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
