//! Piece registry entries.

use crate::piece_kind::PieceKind;
use crate::square::Square;

/// One entry in a side's piece registry.
///
/// A captured piece keeps its slot with `kind` set to `None`, so registry
/// indices held by moves stay valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: Option<PieceKind>,
    pub square: Square,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, square: Square) -> Piece {
        Piece {
            kind: Some(kind),
            square,
        }
    }

    /// Return `true` if the piece has been captured.
    #[inline]
    pub const fn is_captured(&self) -> bool {
        self.kind.is_none()
    }
}
