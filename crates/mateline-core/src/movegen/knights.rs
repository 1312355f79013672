//! Knight move generation.

use crate::board::Board;
use crate::direction::Direction;
use crate::piece_kind::PieceKind;
use crate::square::Square;

use super::{MoveList, target_move};

/// Generate knight moves from `from`. The caller skips pinned knights.
pub(super) fn gen_knight(board: &Board, from: Square, list: &mut MoveList) {
    for jump in Direction::KNIGHT_JUMPS {
        if let Some(mv) = target_move(board, PieceKind::Knight, from, from.offset(jump)) {
            list.push(mv);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::movegen::generate_legal_moves;
    use crate::piece_kind::PieceKind;
    use crate::square::Square;

    #[test]
    fn knight_in_corner() {
        let mut board: Board = "7k/8/8/8/8/8/8/N3K3 w".parse().unwrap();
        let moves = generate_legal_moves(&mut board);
        let knight = moves.iter().filter(|mv| mv.piece() == PieceKind::Knight).count();
        assert_eq!(knight, 2);
    }

    #[test]
    fn knight_captures_but_skips_friends() {
        let mut board: Board = "7k/8/8/8/8/2p5/3P4/1N2K3 w".parse().unwrap();
        let moves = generate_legal_moves(&mut board);
        let knight: Vec<_> = moves
            .iter()
            .filter(|mv| mv.piece() == PieceKind::Knight)
            .collect();
        assert_eq!(knight.len(), 2, "a3 and c3, d2 is friendly");
        assert!(knight.iter().any(|mv| mv.dest() == Square::C3 && mv.is_capture()));
        assert!(!knight.iter().any(|mv| mv.dest() == Square::D2));
    }

    #[test]
    fn pinned_knight_has_no_moves() {
        let mut board: Board = "4r2k/8/8/8/8/8/4N3/4K3 w".parse().unwrap();
        let moves = generate_legal_moves(&mut board);
        assert!(moves.iter().all(|mv| mv.source() != Square::E2));
    }
}
