//! Check-state dispatch for move generation.
//!
//! Out of check, pin handling alone keeps non-king moves legal. In check,
//! each non-king move is played and kept only if the king comes out of check.
//! King moves are already tested square by square in `gen_king`.

use crate::board::Board;
use crate::piece_kind::PieceKind;

use super::MoveList;

pub(crate) trait CheckType {
    /// Drop pseudo-legal moves in `list` that leave the mover in check.
    fn resolve(board: &mut Board, list: &mut MoveList);
}

pub(crate) struct InCheck;

impl CheckType for InCheck {
    fn resolve(board: &mut Board, list: &mut MoveList) {
        let us = board.side_to_move();
        list.retain(|mv| mv.piece() == PieceKind::King || !board.play(*mv).is_in_check(us));
    }
}

pub(crate) struct NotInCheck;

impl CheckType for NotInCheck {
    #[inline]
    fn resolve(_: &mut Board, _: &mut MoveList) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess_move::Move;
    use crate::square::Square;

    #[test]
    fn in_check_drops_moves_that_ignore_the_check() {
        // The rook on e2 checks; d2d3 does nothing about it.
        let mut board: Board = "4k3/8/8/8/8/8/3Pr3/4K3 w".parse().unwrap();
        let mut list = MoveList::new();
        list.push(Move::new(PieceKind::Pawn, Square::D2, Square::D3));
        InCheck::resolve(&mut board, &mut list);
        assert!(list.is_empty());
    }

    #[test]
    fn in_check_keeps_king_moves_untested() {
        let mut board: Board = "4k3/8/8/8/8/8/3Pr3/4K3 w".parse().unwrap();
        let mut list = MoveList::new();
        list.push(Move::new(PieceKind::King, Square::E1, Square::F1));
        InCheck::resolve(&mut board, &mut list);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn not_in_check_keeps_everything() {
        let mut board = Board::starting_position();
        let mut list = MoveList::new();
        list.push(Move::new(PieceKind::Pawn, Square::E2, Square::E4));
        NotInCheck::resolve(&mut board, &mut list);
        assert_eq!(list.len(), 1);
    }
}
