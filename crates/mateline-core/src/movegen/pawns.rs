//! Pawn move generation: pushes, double pushes, captures and promotions.

use crate::board::Board;
use crate::chess_move::Move;
use crate::direction::Direction;
use crate::piece_kind::PieceKind;
use crate::rank::Rank;
use crate::square::Square;

use super::{MoveList, target_move};

/// Kinds offered when a pawn reaches the last rank. Rook is not offered.
pub const PROMOTION_KINDS: [PieceKind; 3] = [PieceKind::Queen, PieceKind::Bishop, PieceKind::Knight];

/// Generate moves for the pawn on `from`. The caller skips pinned pawns.
pub(super) fn gen_pawn(board: &Board, from: Square, list: &mut MoveList) {
    let us = board.side_to_move();
    let push = us.pawn_push();
    let one = from.offset(push);

    if board.cell(one).is_empty() {
        push_with_promotions(Move::new(PieceKind::Pawn, from, one), us.promotion_rank(), list);
        if from.rank() == us.pawn_start_rank() {
            let two = one.offset(push);
            if board.cell(two).is_empty() {
                list.push(Move::new(PieceKind::Pawn, from, two));
            }
        }
    }

    for side in [Direction::WEST, Direction::EAST] {
        if let Some(mv) = target_move(board, PieceKind::Pawn, from, one.offset(side))
            && mv.is_capture()
        {
            push_with_promotions(mv, us.promotion_rank(), list);
        }
    }
}

fn push_with_promotions(mv: Move, promotion_rank: Rank, list: &mut MoveList) {
    if mv.dest().rank() == promotion_rank {
        for kind in PROMOTION_KINDS {
            list.push(mv.with_promotion(kind));
        }
    } else {
        list.push(mv);
    }
}
