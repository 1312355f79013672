//! Error types for FEN parsing, board validation and move text parsing.

use std::fmt;

use crate::color::Color;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Errors that occur when parsing a FEN string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// Fewer than the two required fields (placement and side to move).
    MissingFields {
        /// Number of fields found.
        found: usize,
    },
    /// The piece placement section does not have exactly 8 ranks.
    WrongRankCount {
        /// Number of ranks found.
        found: usize,
    },
    /// A rank in the piece placement describes more or fewer than 8 squares.
    BadRankLength {
        /// Zero-based rank index (0 = rank 8 in FEN, 7 = rank 1).
        rank_index: usize,
        /// Number of squares described.
        length: usize,
    },
    /// An unrecognized character appeared in the piece placement.
    InvalidPieceChar {
        /// The invalid character.
        character: char,
    },
    /// The active color field is not "w" or "b".
    InvalidColor {
        /// The invalid color string.
        found: String,
    },
    /// The parsed board fails structural validation.
    InvalidBoard {
        /// The underlying board validation error.
        source: BoardError,
    },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::MissingFields { found } => {
                write!(f, "expected at least 2 FEN fields, found {found}")
            }
            FenError::WrongRankCount { found } => {
                write!(f, "expected 8 ranks in piece placement, found {found}")
            }
            FenError::BadRankLength { rank_index, length } => {
                write!(
                    f,
                    "rank {rank_index} describes {length} squares, expected 8"
                )
            }
            FenError::InvalidPieceChar { character } => {
                write!(f, "invalid piece character: '{character}'")
            }
            FenError::InvalidColor { found } => {
                write!(f, "invalid active color: \"{found}\"")
            }
            FenError::InvalidBoard { source } => {
                write!(f, "invalid board: {source}")
            }
        }
    }
}

impl std::error::Error for FenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FenError::InvalidBoard { source } => Some(source),
            _ => None,
        }
    }
}

impl From<BoardError> for FenError {
    fn from(source: BoardError) -> Self {
        FenError::InvalidBoard { source }
    }
}

/// Errors from structural validation of a [`Board`](crate::board::Board).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A side does not have exactly one king.
    #[error("expected 1 king for {color}, found {count}")]
    InvalidKingCount {
        /// Which side has the wrong king count.
        color: Color,
        /// Number of kings found.
        count: usize,
    },
    /// A side has more pieces than a registry can index.
    #[error("{color} has {count} pieces, at most 32 allowed")]
    TooManyPieces { color: Color, count: usize },
    /// Pawns occupy the first or eighth rank.
    #[error("pawns found on back rank")]
    PawnsOnBackRank,
    /// Two pieces claim the same square.
    #[error("more than one piece on {square}")]
    OverlappingPieces { square: Square },
}

/// Errors from parsing move text against a board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveParseError {
    /// The text is not shaped like `<piece>[x]<from><to>[promotion]`.
    #[error("malformed move text: \"{text}\"")]
    Malformed { text: String },
    #[error("invalid piece letter: '{character}'")]
    InvalidPieceChar { character: char },
    #[error("invalid square: \"{found}\"")]
    InvalidSquare { found: String },
    /// No piece of the side to move stands on the source square.
    #[error("no piece to move on {square}")]
    NoPieceOnSource { square: Square },
    /// The piece letter does not match the piece on the source square.
    #[error("expected {expected} on {square}, found {found}")]
    PieceMismatch {
        square: Square,
        expected: PieceKind,
        found: PieceKind,
    },
    /// The destination holds a piece of the moving side.
    #[error("destination {square} is occupied by a friendly piece")]
    FriendlyDestination { square: Square },
    /// The capture marker disagrees with the destination square.
    #[error("capture marker does not match destination {square}")]
    CaptureMarkerMismatch { square: Square },
    #[error("invalid promotion letter: '{character}'")]
    InvalidPromotion { character: char },
    /// A promotion suffix on a move that does not reach the last rank.
    #[error("move does not promote")]
    UnexpectedPromotion,
}

#[cfg(test)]
mod tests {
    use super::{BoardError, FenError, MoveParseError};
    use crate::color::Color;
    use crate::square::Square;

    #[test]
    fn fen_error_display() {
        let err = FenError::MissingFields { found: 1 };
        assert_eq!(format!("{err}"), "expected at least 2 FEN fields, found 1");
    }

    #[test]
    fn board_error_display() {
        let err = BoardError::PawnsOnBackRank;
        assert_eq!(format!("{err}"), "pawns found on back rank");
        let err = BoardError::InvalidKingCount {
            color: Color::Black,
            count: 0,
        };
        assert_eq!(format!("{err}"), "expected 1 king for b, found 0");
    }

    #[test]
    fn fen_error_from_board_error() {
        let board_err = BoardError::OverlappingPieces { square: Square::E4 };
        let fen_err: FenError = board_err.into();
        assert!(matches!(fen_err, FenError::InvalidBoard { .. }));
    }

    #[test]
    fn move_parse_error_display() {
        let err = MoveParseError::NoPieceOnSource { square: Square::E4 };
        assert_eq!(format!("{err}"), "no piece to move on e4");
    }
}
