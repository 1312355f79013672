//! Static evaluation.

pub mod material;

use mateline_core::Board;

/// Static score of `board` from White's perspective.
pub fn evaluate(board: &Board) -> f64 {
    material::material(board)
}
