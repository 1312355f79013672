//! Sliding piece (bishop, rook, queen) move generation.

use crate::board::Board;
use crate::direction::Direction;
use crate::piece_kind::PieceKind;
use crate::square::Square;

use super::{MoveList, target_move};

/// Rays a sliding piece moves along when unpinned.
pub(super) fn slider_rays(kind: PieceKind) -> &'static [Direction] {
    match kind {
        PieceKind::Rook => &Direction::ORTHOGONAL,
        PieceKind::Bishop => &Direction::DIAGONAL,
        PieceKind::Queen => &Direction::RAYS,
        _ => &[],
    }
}

/// Walk each ray from `from` until blocked. An enemy blocker is captured,
/// a friendly one or the border is not.
pub(super) fn gen_slider(
    board: &Board,
    kind: PieceKind,
    from: Square,
    rays: &[Direction],
    list: &mut MoveList,
) {
    for &ray in rays {
        let mut to = from.offset(ray);
        while let Some(mv) = target_move(board, kind, from, to) {
            list.push(mv);
            if mv.is_capture() {
                break;
            }
            to = to.offset(ray);
        }
    }
}
