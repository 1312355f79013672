//! Squares as indices into the sentinel-padded board grid.

use std::fmt;

use crate::direction::Direction;
use crate::file::File;
use crate::rank::Rank;

/// Width of the sentinel border around the 8x8 board.
///
/// Two cells are enough for a knight jump from any real square to stay
/// inside the grid.
pub const PADDING: u8 = 2;

/// Number of cells along one side of the padded grid.
pub const GRID_WIDTH: u8 = 8 + 2 * PADDING;

/// Total number of cells in the padded grid.
pub const GRID_SIZE: usize = GRID_WIDTH as usize * GRID_WIDTH as usize;

/// A cell of the 12x12 padded grid.
///
/// Index = (rank + PADDING) * 12 + (file + PADDING). Squares built through
/// the public API always name one of the 64 real squares; border cells are
/// only reached internally by stepping with [`Square::offset`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square(u8);

impl Square {
    /// Number of real squares.
    pub const COUNT: usize = 64;

    /// Create a square from a rank and file.
    #[inline]
    pub const fn new(rank: Rank, file: File) -> Square {
        Square((rank as u8 + PADDING) * GRID_WIDTH + file as u8 + PADDING)
    }

    /// Create a square from its 0..64 index (a1 = 0, h1 = 7, h8 = 63).
    #[inline]
    pub const fn from_bit_index(index: u8) -> Option<Square> {
        if index >= 64 {
            return None;
        }
        match (Rank::from_index(index / 8), File::from_index(index % 8)) {
            (Some(rank), Some(file)) => Some(Square::new(rank, file)),
            _ => None,
        }
    }

    /// Parse algebraic notation such as `"e4"`.
    pub fn from_algebraic(s: &str) -> Option<Square> {
        let mut chars = s.chars();
        let file = File::from_char(chars.next()?)?;
        let rank = Rank::from_char(chars.next()?)?;
        if chars.next().is_some() {
            return None;
        }
        Some(Square::new(rank, file))
    }

    /// Return the index into the padded grid.
    #[inline]
    pub const fn grid_index(self) -> usize {
        self.0 as usize
    }

    /// Return the 0..64 index used by square sets.
    #[inline]
    pub const fn bit_index(self) -> usize {
        self.rank().index() * 8 + self.file().index()
    }

    /// Return the rank of this square.
    #[inline]
    pub const fn rank(self) -> Rank {
        match Rank::from_index(self.0 / GRID_WIDTH - PADDING) {
            Some(rank) => rank,
            None => panic!("border cell has no rank"),
        }
    }

    /// Return the file of this square.
    #[inline]
    pub const fn file(self) -> File {
        match File::from_index(self.0 % GRID_WIDTH - PADDING) {
            Some(file) => file,
            None => panic!("border cell has no file"),
        }
    }

    /// Step once in `direction`. May land on a border cell.
    #[inline]
    pub(crate) const fn offset(self, direction: Direction) -> Square {
        Square(self.0.wrapping_add_signed(direction.delta()))
    }

    /// Iterate over the 64 real squares, a1 first, h8 last.
    pub fn all() -> impl Iterator<Item = Square> {
        Rank::ALL
            .into_iter()
            .flat_map(|rank| File::ALL.into_iter().map(move |file| Square::new(rank, file)))
    }

    pub const A1: Square = Square::new(Rank::Rank1, File::FileA);
    pub const B1: Square = Square::new(Rank::Rank1, File::FileB);
    pub const C1: Square = Square::new(Rank::Rank1, File::FileC);
    pub const D1: Square = Square::new(Rank::Rank1, File::FileD);
    pub const E1: Square = Square::new(Rank::Rank1, File::FileE);
    pub const F1: Square = Square::new(Rank::Rank1, File::FileF);
    pub const G1: Square = Square::new(Rank::Rank1, File::FileG);
    pub const H1: Square = Square::new(Rank::Rank1, File::FileH);
    pub const A2: Square = Square::new(Rank::Rank2, File::FileA);
    pub const B2: Square = Square::new(Rank::Rank2, File::FileB);
    pub const C2: Square = Square::new(Rank::Rank2, File::FileC);
    pub const D2: Square = Square::new(Rank::Rank2, File::FileD);
    pub const E2: Square = Square::new(Rank::Rank2, File::FileE);
    pub const F2: Square = Square::new(Rank::Rank2, File::FileF);
    pub const G2: Square = Square::new(Rank::Rank2, File::FileG);
    pub const H2: Square = Square::new(Rank::Rank2, File::FileH);
    pub const A3: Square = Square::new(Rank::Rank3, File::FileA);
    pub const B3: Square = Square::new(Rank::Rank3, File::FileB);
    pub const C3: Square = Square::new(Rank::Rank3, File::FileC);
    pub const D3: Square = Square::new(Rank::Rank3, File::FileD);
    pub const E3: Square = Square::new(Rank::Rank3, File::FileE);
    pub const F3: Square = Square::new(Rank::Rank3, File::FileF);
    pub const G3: Square = Square::new(Rank::Rank3, File::FileG);
    pub const H3: Square = Square::new(Rank::Rank3, File::FileH);
    pub const A4: Square = Square::new(Rank::Rank4, File::FileA);
    pub const B4: Square = Square::new(Rank::Rank4, File::FileB);
    pub const C4: Square = Square::new(Rank::Rank4, File::FileC);
    pub const D4: Square = Square::new(Rank::Rank4, File::FileD);
    pub const E4: Square = Square::new(Rank::Rank4, File::FileE);
    pub const F4: Square = Square::new(Rank::Rank4, File::FileF);
    pub const G4: Square = Square::new(Rank::Rank4, File::FileG);
    pub const H4: Square = Square::new(Rank::Rank4, File::FileH);
    pub const A5: Square = Square::new(Rank::Rank5, File::FileA);
    pub const B5: Square = Square::new(Rank::Rank5, File::FileB);
    pub const C5: Square = Square::new(Rank::Rank5, File::FileC);
    pub const D5: Square = Square::new(Rank::Rank5, File::FileD);
    pub const E5: Square = Square::new(Rank::Rank5, File::FileE);
    pub const F5: Square = Square::new(Rank::Rank5, File::FileF);
    pub const G5: Square = Square::new(Rank::Rank5, File::FileG);
    pub const H5: Square = Square::new(Rank::Rank5, File::FileH);
    pub const A6: Square = Square::new(Rank::Rank6, File::FileA);
    pub const B6: Square = Square::new(Rank::Rank6, File::FileB);
    pub const C6: Square = Square::new(Rank::Rank6, File::FileC);
    pub const D6: Square = Square::new(Rank::Rank6, File::FileD);
    pub const E6: Square = Square::new(Rank::Rank6, File::FileE);
    pub const F6: Square = Square::new(Rank::Rank6, File::FileF);
    pub const G6: Square = Square::new(Rank::Rank6, File::FileG);
    pub const H6: Square = Square::new(Rank::Rank6, File::FileH);
    pub const A7: Square = Square::new(Rank::Rank7, File::FileA);
    pub const B7: Square = Square::new(Rank::Rank7, File::FileB);
    pub const C7: Square = Square::new(Rank::Rank7, File::FileC);
    pub const D7: Square = Square::new(Rank::Rank7, File::FileD);
    pub const E7: Square = Square::new(Rank::Rank7, File::FileE);
    pub const F7: Square = Square::new(Rank::Rank7, File::FileF);
    pub const G7: Square = Square::new(Rank::Rank7, File::FileG);
    pub const H7: Square = Square::new(Rank::Rank7, File::FileH);
    pub const A8: Square = Square::new(Rank::Rank8, File::FileA);
    pub const B8: Square = Square::new(Rank::Rank8, File::FileB);
    pub const C8: Square = Square::new(Rank::Rank8, File::FileC);
    pub const D8: Square = Square::new(Rank::Rank8, File::FileD);
    pub const E8: Square = Square::new(Rank::Rank8, File::FileE);
    pub const F8: Square = Square::new(Rank::Rank8, File::FileF);
    pub const G8: Square = Square::new(Rank::Rank8, File::FileG);
    pub const H8: Square = Square::new(Rank::Rank8, File::FileH);
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self)
    }
}
