//! Move records.

use crate::piece_kind::PieceKind;
use crate::square::Square;

/// A piece taken by a move, addressed by its slot in the opponent's registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Capture {
    pub kind: PieceKind,
    pub index: usize,
}

/// A move as produced by the generator.
///
/// Moves are plain values. Applying one that was not generated for the
/// current position leaves the board in an unspecified state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    piece: PieceKind,
    source: Square,
    dest: Square,
    capture: Option<Capture>,
    promotion: Option<PieceKind>,
}

impl Move {
    /// Create a non-capturing, non-promoting move.
    #[inline]
    pub const fn new(piece: PieceKind, source: Square, dest: Square) -> Move {
        Move {
            piece,
            source,
            dest,
            capture: None,
            promotion: None,
        }
    }

    /// Return a copy that captures `capture`.
    #[inline]
    pub const fn with_capture(self, capture: Option<Capture>) -> Move {
        Move { capture, ..self }
    }

    /// Return a copy that promotes to `kind`.
    #[inline]
    pub const fn with_promotion(self, kind: PieceKind) -> Move {
        Move {
            promotion: Some(kind),
            ..self
        }
    }

    /// Kind of the moving piece before the move.
    #[inline]
    pub const fn piece(self) -> PieceKind {
        self.piece
    }

    #[inline]
    pub const fn source(self) -> Square {
        self.source
    }

    #[inline]
    pub const fn dest(self) -> Square {
        self.dest
    }

    #[inline]
    pub const fn capture(self) -> Option<Capture> {
        self.capture
    }

    #[inline]
    pub const fn is_capture(self) -> bool {
        self.capture.is_some()
    }

    /// Requested promotion kind, if this is a promotion.
    #[inline]
    pub const fn promotion(self) -> Option<PieceKind> {
        self.promotion
    }
}
