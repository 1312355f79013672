//! Pin detection.

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::direction::Direction;
use crate::square::Square;

/// Pieces of the side to move that are pinned against their own king.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PinState {
    /// Pinned pieces that can still slide along the pin ray.
    pub partial: Bitboard,
    /// Pinned pieces that cannot move at all.
    pub absolute: Bitboard,
}

impl PinState {
    /// Compute the pins for the side to move.
    ///
    /// Each of the eight rays from the king is walked to its first piece. A
    /// friendly piece there is pinned when the next piece along the same ray
    /// is an enemy slider that moves along that ray. The pin is partial when
    /// the pinned piece slides along the ray itself.
    pub fn compute(board: &Board) -> PinState {
        let us = board.side_to_move();
        let king_sq = board.king_square(us);
        let mut pins = PinState::default();

        for ray in Direction::RAYS {
            let (blocker_sq, blocker_cell, _) = board.first_along(king_sq, ray);
            if blocker_cell.color() != Some(us) {
                continue;
            }
            let (attacker_sq, attacker_cell, _) = board.first_along(blocker_sq, ray);
            if attacker_cell.color() != Some(!us) {
                continue;
            }
            let (Some((_, blocker)), Some((_, attacker))) =
                (board.occupant(blocker_sq), board.occupant(attacker_sq))
            else {
                continue;
            };
            if !attacker.slides_along(ray) {
                continue;
            }
            if blocker.slides_along(ray) {
                pins.partial = pins.partial.with(blocker_sq);
            } else {
                pins.absolute = pins.absolute.with(blocker_sq);
            }
        }

        pins
    }

    /// Return `true` if the piece on `sq` may not move at all.
    #[inline]
    pub fn is_absolute(&self, sq: Square) -> bool {
        self.absolute.contains(sq)
    }

    /// Return `true` if the piece on `sq` may only move along its pin ray.
    #[inline]
    pub fn is_partial(&self, sq: Square) -> bool {
        self.partial.contains(sq)
    }
}

#[cfg(test)]
mod tests {
    use super::PinState;
    use crate::board::Board;
    use crate::square::Square;

    #[test]
    fn starting_position_no_pins() {
        let pins = PinState::compute(&Board::starting_position());
        assert!(pins.partial.is_empty());
        assert!(pins.absolute.is_empty());
    }

    #[test]
    fn knight_on_file_is_absolutely_pinned() {
        let board: Board = "4r2k/8/8/8/8/8/4N3/4K3 w".parse().unwrap();
        let pins = PinState::compute(&board);
        assert!(pins.is_absolute(Square::E2));
        assert!(!pins.is_partial(Square::E2));
    }

    #[test]
    fn rook_on_file_is_partially_pinned() {
        let board: Board = "4r2k/8/8/8/8/8/4R3/4K3 w".parse().unwrap();
        let pins = PinState::compute(&board);
        assert!(pins.is_partial(Square::E2));
        assert!(!pins.is_absolute(Square::E2));
    }

    #[test]
    fn rook_on_diagonal_is_absolutely_pinned() {
        let board: Board = "7k/8/8/b7/8/8/3R4/4K3 w".parse().unwrap();
        let pins = PinState::compute(&board);
        assert!(pins.is_absolute(Square::D2));
    }

    #[test]
    fn queen_pinned_on_every_ray_is_partial() {
        let board: Board = "7k/8/8/8/8/2b5/3Q4/4K3 w".parse().unwrap();
        let pins = PinState::compute(&board);
        assert!(pins.is_partial(Square::D2));
    }

    #[test]
    fn rook_behind_diagonal_is_not_a_pin() {
        let board: Board = "7k/8/8/r7/8/8/3N4/4K3 w".parse().unwrap();
        let pins = PinState::compute(&board);
        assert!(pins.absolute.is_empty());
        assert!(pins.partial.is_empty());
    }

    #[test]
    fn two_blockers_abandon_the_ray() {
        let board: Board = "4r2k/8/8/8/4N3/8/4N3/4K3 w".parse().unwrap();
        let pins = PinState::compute(&board);
        assert!(pins.absolute.is_empty());
    }

    #[test]
    fn enemy_blocker_is_not_pinned() {
        let board: Board = "4r2k/8/8/8/8/8/4n3/4K3 w".parse().unwrap();
        let pins = PinState::compute(&board);
        assert!(pins.absolute.is_empty());
        assert!(pins.partial.is_empty());
    }

    #[test]
    fn all_eight_rays_are_scanned() {
        // White king d4 with a pawn on each ray and a queen behind it.
        let board: Board = "3q3q/q7/7k/2PPP3/q1PKP2q/2PPP3/8/q2q2q1 w".parse().unwrap();
        let pins = PinState::compute(&board);
        for sq in [
            Square::D5,
            Square::D3,
            Square::E4,
            Square::C4,
            Square::E5,
            Square::C5,
            Square::E3,
            Square::C3,
        ] {
            assert!(pins.is_absolute(sq), "{sq} should be pinned");
        }
        assert_eq!(pins.absolute.count(), 8);
    }

    #[test]
    fn pins_for_black() {
        let board: Board = "4k3/4b3/8/8/8/8/8/4RK2 b".parse().unwrap();
        let pins = PinState::compute(&board);
        assert!(pins.is_absolute(Square::E7));
    }
}
