//! Step offsets on the padded grid.

use crate::square::{GRID_WIDTH, Square};

/// A signed step between two cells of the padded grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Direction(i8);

impl Direction {
    pub const NORTH: Direction = Direction::new(1, 0);
    pub const SOUTH: Direction = Direction::new(-1, 0);
    pub const EAST: Direction = Direction::new(0, 1);
    pub const WEST: Direction = Direction::new(0, -1);
    pub const NORTH_EAST: Direction = Direction::new(1, 1);
    pub const NORTH_WEST: Direction = Direction::new(1, -1);
    pub const SOUTH_EAST: Direction = Direction::new(-1, 1);
    pub const SOUTH_WEST: Direction = Direction::new(-1, -1);

    /// Rook rays.
    pub const ORTHOGONAL: [Direction; 4] = [
        Direction::NORTH,
        Direction::SOUTH,
        Direction::EAST,
        Direction::WEST,
    ];

    /// Bishop rays.
    pub const DIAGONAL: [Direction; 4] = [
        Direction::NORTH_EAST,
        Direction::NORTH_WEST,
        Direction::SOUTH_EAST,
        Direction::SOUTH_WEST,
    ];

    /// All eight rays, orthogonal first. Also the king's steps.
    pub const RAYS: [Direction; 8] = [
        Direction::NORTH,
        Direction::SOUTH,
        Direction::EAST,
        Direction::WEST,
        Direction::NORTH_EAST,
        Direction::NORTH_WEST,
        Direction::SOUTH_EAST,
        Direction::SOUTH_WEST,
    ];

    /// The eight L-shaped knight jumps.
    pub const KNIGHT_JUMPS: [Direction; 8] = [
        Direction::new(2, 1),
        Direction::new(2, -1),
        Direction::new(1, 2),
        Direction::new(1, -2),
        Direction::new(-1, 2),
        Direction::new(-1, -2),
        Direction::new(-2, 1),
        Direction::new(-2, -1),
    ];

    /// Build a step from rank and file deltas.
    #[inline]
    pub const fn new(rank_delta: i8, file_delta: i8) -> Direction {
        Direction(rank_delta * GRID_WIDTH as i8 + file_delta)
    }

    /// Raw offset in grid cells.
    #[inline]
    pub const fn delta(self) -> i8 {
        self.0
    }

    #[inline]
    pub const fn opposite(self) -> Direction {
        Direction(-self.0)
    }

    /// Return `true` for the four diagonal rays.
    #[inline]
    pub const fn is_diagonal(self) -> bool {
        matches!(self.0, 11 | 13 | -11 | -13)
    }

    /// Unit ray leading from `from` to `to`, if the two squares share a
    /// rank, file or diagonal.
    pub fn toward(from: Square, to: Square) -> Option<Direction> {
        let dr = to.rank().index() as i8 - from.rank().index() as i8;
        let df = to.file().index() as i8 - from.file().index() as i8;
        if (dr, df) == (0, 0) {
            return None;
        }
        if dr != 0 && df != 0 && dr.abs() != df.abs() {
            return None;
        }
        Some(Direction::new(dr.signum(), df.signum()))
    }
}
