//! Material evaluation and fixed-depth minimax search for mateline.

pub mod eval;
pub mod search;

pub use eval::evaluate;
pub use search::parallel::evaluate_board_parallel;
pub use search::stats::Statistics;
pub use search::{Evaluation, MATE, PositionEvaluation, evaluate_board};
