//! King move generation.

use crate::board::Board;
use crate::direction::Direction;
use crate::piece_kind::PieceKind;
use crate::square::Square;

use super::{MoveList, target_move};

/// Generate legal king moves from `from`.
///
/// Each step is played on the board and kept only if the king is not
/// attacked on its new square.
pub(super) fn gen_king(board: &mut Board, from: Square, list: &mut MoveList) {
    let us = board.side_to_move();
    for ray in Direction::RAYS {
        let Some(mv) = target_move(board, PieceKind::King, from, from.offset(ray)) else {
            continue;
        };
        let safe = !board.play(mv).is_in_check(us);
        if safe {
            list.push(mv);
        }
    }
}
