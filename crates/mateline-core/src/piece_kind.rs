//! Chess piece kinds.

use std::fmt;

use crate::direction::Direction;

/// The kind of a chess piece, without color information.
///
/// Declaration order is the registry order: sorting a side's pieces by kind
/// puts the king at index 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum PieceKind {
    King = 0,
    Queen = 1,
    Rook = 2,
    Bishop = 3,
    Knight = 4,
    Pawn = 5,
}

impl PieceKind {
    /// Total number of piece kinds.
    pub const COUNT: usize = 6;

    /// All piece kinds in index order.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::King,
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Pawn,
    ];

    /// Return the index (0..5).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Return the FEN character for this piece kind (lowercase).
    #[inline]
    pub const fn fen_char(self) -> char {
        match self {
            PieceKind::King => 'k',
            PieceKind::Queen => 'q',
            PieceKind::Rook => 'r',
            PieceKind::Bishop => 'b',
            PieceKind::Knight => 'n',
            PieceKind::Pawn => 'p',
        }
    }

    /// Parse a FEN character (case-insensitive) into a piece kind.
    #[inline]
    pub fn from_fen_char(c: char) -> Option<PieceKind> {
        match c.to_ascii_lowercase() {
            'k' => Some(PieceKind::King),
            'q' => Some(PieceKind::Queen),
            'r' => Some(PieceKind::Rook),
            'b' => Some(PieceKind::Bishop),
            'n' => Some(PieceKind::Knight),
            'p' => Some(PieceKind::Pawn),
            _ => None,
        }
    }

    /// Return `true` if this piece slides any distance along `ray`.
    ///
    /// Queens slide on every ray, rooks on orthogonal rays, bishops on
    /// diagonal rays.
    #[inline]
    pub const fn slides_along(self, ray: Direction) -> bool {
        match self {
            PieceKind::Queen => true,
            PieceKind::Rook => !ray.is_diagonal(),
            PieceKind::Bishop => ray.is_diagonal(),
            _ => false,
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fen_char())
    }
}

#[cfg(test)]
mod tests {
    use super::PieceKind;
    use crate::direction::Direction;

    #[test]
    fn king_sorts_first() {
        let mut kinds = vec![PieceKind::Pawn, PieceKind::Rook, PieceKind::King, PieceKind::Queen];
        kinds.sort();
        assert_eq!(kinds[0], PieceKind::King);
        assert_eq!(kinds[3], PieceKind::Pawn);
    }

    #[test]
    fn fen_char_roundtrip() {
        for kind in PieceKind::ALL {
            let c = kind.fen_char();
            assert_eq!(PieceKind::from_fen_char(c), Some(kind));
            assert_eq!(PieceKind::from_fen_char(c.to_ascii_uppercase()), Some(kind));
        }
    }

    #[test]
    fn from_fen_char_invalid() {
        assert_eq!(PieceKind::from_fen_char('x'), None);
        assert_eq!(PieceKind::from_fen_char('1'), None);
    }

    #[test]
    fn sliding_rays() {
        assert!(PieceKind::Queen.slides_along(Direction::NORTH));
        assert!(PieceKind::Queen.slides_along(Direction::SOUTH_EAST));
        assert!(PieceKind::Rook.slides_along(Direction::WEST));
        assert!(!PieceKind::Rook.slides_along(Direction::NORTH_WEST));
        assert!(PieceKind::Bishop.slides_along(Direction::NORTH_WEST));
        assert!(!PieceKind::Bishop.slides_along(Direction::EAST));
        assert!(!PieceKind::Knight.slides_along(Direction::NORTH));
        assert!(!PieceKind::King.slides_along(Direction::NORTH));
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", PieceKind::Pawn), "p");
        assert_eq!(format!("{}", PieceKind::King), "k");
    }
}
