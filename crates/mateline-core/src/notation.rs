//! Move text: `<piece>[x]<from><to>[promotion]`, e.g. `pe2e4`, `qxh5f7`, `pb7b8n`.

use std::fmt;

use crate::board::Board;
use crate::chess_move::Move;
use crate::error::MoveParseError;
use crate::movegen::target_move;
use crate::piece_kind::PieceKind;
use crate::square::Square;

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.piece())?;
        if self.is_capture() {
            write!(f, "x")?;
        }
        write!(f, "{}{}", self.source(), self.dest())?;
        if let Some(kind) = self.promotion() {
            write!(f, "{kind}")?;
        }
        Ok(())
    }
}

impl Move {
    /// Parse move text for the side to move on `board`.
    ///
    /// The captured piece is looked up on the destination square. A pawn
    /// reaching the last rank promotes to the suffix kind, queen if none is
    /// given. The move is not checked for legality.
    pub fn parse(text: &str, board: &Board) -> Result<Move, MoveParseError> {
        let text = text.trim();
        let malformed = || MoveParseError::Malformed {
            text: text.to_string(),
        };

        let mut chars = text.chars();
        let piece_char = chars.next().ok_or_else(malformed)?;
        let piece = PieceKind::from_fen_char(piece_char).ok_or(MoveParseError::InvalidPieceChar {
            character: piece_char,
        })?;
        let rest = chars.as_str();
        let (marked_capture, rest) = match rest.strip_prefix('x') {
            Some(rest) => (true, rest),
            None => (false, rest),
        };

        let source = parse_square(rest.get(0..2).ok_or_else(malformed)?)?;
        let dest = parse_square(rest.get(2..4).ok_or_else(malformed)?)?;
        let suffix = rest.get(4..).ok_or_else(malformed)?;

        let us = board.side_to_move();
        match board.occupant(source) {
            Some((color, found)) if color == us => {
                if found != piece {
                    return Err(MoveParseError::PieceMismatch {
                        square: source,
                        expected: piece,
                        found,
                    });
                }
            }
            _ => return Err(MoveParseError::NoPieceOnSource { square: source }),
        }

        let mv = target_move(board, piece, source, dest)
            .ok_or(MoveParseError::FriendlyDestination { square: dest })?;
        if mv.is_capture() != marked_capture {
            return Err(MoveParseError::CaptureMarkerMismatch { square: dest });
        }

        let promotes = piece == PieceKind::Pawn && dest.rank() == us.promotion_rank();
        let mut suffix_chars = suffix.chars();
        match (suffix_chars.next(), suffix_chars.next()) {
            (None, _) if promotes => Ok(mv.with_promotion(PieceKind::Queen)),
            (None, _) => Ok(mv),
            (Some(c), None) if promotes => {
                let kind = PieceKind::from_fen_char(c)
                    .filter(|kind| {
                        matches!(
                            kind,
                            PieceKind::Queen | PieceKind::Rook | PieceKind::Bishop | PieceKind::Knight
                        )
                    })
                    .ok_or(MoveParseError::InvalidPromotion { character: c })?;
                Ok(mv.with_promotion(kind))
            }
            (Some(_), None) => Err(MoveParseError::UnexpectedPromotion),
            (Some(_), Some(_)) => Err(malformed()),
        }
    }
}

fn parse_square(text: &str) -> Result<Square, MoveParseError> {
    Square::from_algebraic(text).ok_or_else(|| MoveParseError::InvalidSquare {
        found: text.to_string(),
    })
}
