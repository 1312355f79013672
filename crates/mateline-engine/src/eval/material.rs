//! Material balance evaluation.
//!
//! Scores are from White's perspective (positive = White ahead).

use mateline_core::{Board, Color, PieceKind};

/// Piece values indexed by [`PieceKind::index()`].
///
/// | Piece  | value |
/// |--------|-------|
/// | King   |   0   |
/// | Queen  |  10   |
/// | Rook   |   5   |
/// | Bishop |  3.1  |
/// | Knight |   3   |
/// | Pawn   |   1   |
pub const PIECE_VALUE: [f64; PieceKind::COUNT] = [
    0.0,  // King
    10.0, // Queen
    5.0,  // Rook
    3.1,  // Bishop
    3.0,  // Knight
    1.0,  // Pawn
];

/// Value of a single piece kind.
#[inline]
pub const fn piece_value(kind: PieceKind) -> f64 {
    PIECE_VALUE[kind.index()]
}

/// Sum of White's live material minus Black's. Captured slots count zero.
pub fn material(board: &Board) -> f64 {
    side_material(board, Color::White) - side_material(board, Color::Black)
}

fn side_material(board: &Board, color: Color) -> f64 {
    board
        .pieces(color)
        .iter()
        .filter_map(|piece| piece.kind)
        .map(piece_value)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn startpos_is_balanced() {
        assert_eq!(material(&Board::starting_position()), 0.0);
    }

    #[test]
    fn startpos_side_total() {
        let board = Board::starting_position();
        let expected = 10.0 + 2.0 * 5.0 + 2.0 * 3.1 + 2.0 * 3.0 + 8.0;
        assert!((side_material(&board, Color::White) - expected).abs() < 1e-9);
    }

    #[test]
    fn extra_white_queen() {
        let board: Board = "4k3/8/8/8/8/8/8/3QK3 w".parse().unwrap();
        assert_eq!(material(&board), 10.0);
    }

    #[test]
    fn black_ahead_is_negative() {
        let board: Board = "3rk3/8/8/8/8/8/8/1N2K3 b".parse().unwrap();
        assert_eq!(material(&board), -2.0);
    }

    #[test]
    fn captured_piece_no_longer_counts() {
        let mut board: Board = "4k3/8/8/3p4/4P3/8/8/4K3 w".parse().unwrap();
        let capture = mateline_core::generate_legal_moves(&mut board)
            .into_iter()
            .find(|mv| mv.is_capture())
            .unwrap();
        let child = board.play(capture);
        assert_eq!(material(&child), 1.0);
    }

    #[test]
    fn kings_are_worth_nothing() {
        assert_eq!(piece_value(PieceKind::King), 0.0);
        let board: Board = "4k3/8/8/8/8/8/8/4K3 w".parse().unwrap();
        assert_eq!(material(&board), 0.0);
    }
}
