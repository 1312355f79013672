//! Attack detection by walking the padded grid.

use crate::board::Board;
use crate::cell::Cell;
use crate::color::Color;
use crate::direction::Direction;
use crate::piece_kind::PieceKind;
use crate::square::Square;

impl Board {
    /// Walk from `from` along `ray` and return the first non-empty cell with
    /// its square and step count. The walk always ends, on the border at the
    /// latest.
    pub(crate) fn first_along(&self, from: Square, ray: Direction) -> (Square, Cell, u8) {
        let mut sq = from.offset(ray);
        let mut steps = 1;
        loop {
            let cell = self.grid[sq.grid_index()];
            if !cell.is_empty() {
                return (sq, cell, steps);
            }
            sq = sq.offset(ray);
            steps += 1;
        }
    }

    /// Return `true` if any piece of `by` attacks `sq`.
    pub fn is_square_attacked(&self, sq: Square, by: Color) -> bool {
        for ray in Direction::RAYS {
            let (target, cell, steps) = self.first_along(sq, ray);
            if cell.color() != Some(by) {
                continue;
            }
            if let Some((_, kind)) = self.occupant(target)
                && (kind.slides_along(ray) || (steps == 1 && kind == PieceKind::King))
            {
                return true;
            }
        }

        // A pawn of `by` attacks diagonally forward, so look one step back.
        let behind = sq.offset(by.pawn_push().opposite());
        for side in [Direction::EAST, Direction::WEST] {
            if self.occupant(behind.offset(side)) == Some((by, PieceKind::Pawn)) {
                return true;
            }
        }

        Direction::KNIGHT_JUMPS
            .into_iter()
            .any(|jump| self.occupant(sq.offset(jump)) == Some((by, PieceKind::Knight)))
    }

    /// Return `true` if `color`'s king is attacked.
    #[inline]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.is_square_attacked(self.king_square(color), !color)
    }
}
