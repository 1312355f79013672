//! One-byte encoding of what occupies a grid cell.

use std::fmt;

use crate::color::Color;

/// Contents of a grid cell.
///
/// White occupant `i` is stored as `i`, black occupant `i` as `32 + i`; the
/// two reserved values above that mark empty squares and the border.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell(u8);

/// Decoded form of a [`Cell`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellContent {
    Empty,
    OffBoard,
    /// Occupied by the piece at `index` in `color`'s registry.
    Occupied { color: Color, index: usize },
}

impl Cell {
    /// Maximum number of registry entries per side.
    pub const MAX_PIECES: usize = 32;

    pub const EMPTY: Cell = Cell(0xFE);
    pub const OFF_BOARD: Cell = Cell(0xFF);

    /// Encode an occupant. `index` must be below [`Cell::MAX_PIECES`].
    #[inline]
    pub const fn occupied(color: Color, index: usize) -> Cell {
        debug_assert!(index < Cell::MAX_PIECES);
        match color {
            Color::White => Cell(index as u8),
            Color::Black => Cell(Cell::MAX_PIECES as u8 + index as u8),
        }
    }

    #[inline]
    pub const fn content(self) -> CellContent {
        match self.0 {
            0xFE => CellContent::Empty,
            0xFF => CellContent::OffBoard,
            v if v < Cell::MAX_PIECES as u8 => CellContent::Occupied {
                color: Color::White,
                index: v as usize,
            },
            v => CellContent::Occupied {
                color: Color::Black,
                index: (v - Cell::MAX_PIECES as u8) as usize,
            },
        }
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == Cell::EMPTY.0
    }

    #[inline]
    pub const fn is_off_board(self) -> bool {
        self.0 == Cell::OFF_BOARD.0
    }

    /// Return the occupant's color, if any.
    #[inline]
    pub const fn color(self) -> Option<Color> {
        match self.content() {
            CellContent::Occupied { color, .. } => Some(color),
            _ => None,
        }
    }
}

impl fmt::Debug for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.content() {
            CellContent::Empty => write!(f, "Cell(empty)"),
            CellContent::OffBoard => write!(f, "Cell(off-board)"),
            CellContent::Occupied { color, index } => write!(f, "Cell({color}{index})"),
        }
    }
}
