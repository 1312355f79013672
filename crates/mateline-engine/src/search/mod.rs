//! Fixed-depth search.

pub(crate) mod minimax;
pub mod parallel;
pub mod stats;

use std::fmt;
use std::time::Instant;

use mateline_core::{Board, Move};
use tracing::debug;

use minimax::minimax;
use stats::Statistics;

/// Score of a checkmate, positive when White delivers it.
pub const MATE: f64 = f64::INFINITY;

/// Score of a position with the line that leads to it.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionEvaluation {
    /// Material score from White's perspective, or `±MATE`.
    pub score: f64,
    /// Principal line, first move first. Empty at leaves and terminal nodes.
    pub line: Vec<Move>,
}

impl PositionEvaluation {
    pub fn new(score: f64, line: Vec<Move>) -> PositionEvaluation {
        PositionEvaluation { score, line }
    }

    /// Whether the score is a forced mate for either side.
    pub fn is_mate(&self) -> bool {
        self.score.is_infinite()
    }

    /// First move of the principal line.
    pub fn best_move(&self) -> Option<Move> {
        self.line.first().copied()
    }
}

impl fmt::Display for PositionEvaluation {
    /// `#N` for White mating in N moves, `#-N` for Black, otherwise the score
    /// with six decimals.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_mate() {
            let moves = self.line.len().div_ceil(2);
            if self.score < 0.0 && moves > 0 {
                write!(f, "#-{moves}")
            } else {
                write!(f, "#{moves}")
            }
        } else {
            write!(f, "{:.6}", self.score)
        }
    }
}

/// Result of a completed search.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub stats: Statistics,
    pub position: PositionEvaluation,
}

/// Search `board` to exactly `max_depth` plies.
///
/// The board is restored before returning.
pub fn evaluate_board(board: &mut Board, max_depth: u32) -> Evaluation {
    let start = Instant::now();
    let mut stats = Statistics::default();
    let position = minimax(board, max_depth, &mut stats);
    stats.elapsed = start.elapsed();

    debug!(
        depth = max_depth,
        nodes = stats.nodes,
        leaf_nodes = stats.leaf_nodes,
        elapsed_ms = stats.elapsed.as_millis() as u64,
        score = %position,
        "search complete"
    );

    Evaluation { stats, position }
}

#[cfg(test)]
mod tests {
    use mateline_core::{PieceKind, Square};

    use super::*;

    fn line(plies: usize) -> Vec<Move> {
        vec![Move::new(PieceKind::Queen, Square::D1, Square::D8); plies]
    }

    #[test]
    fn display_plain_score() {
        assert_eq!(PositionEvaluation::new(0.0, line(1)).to_string(), "0.000000");
        assert_eq!(PositionEvaluation::new(-2.1, line(1)).to_string(), "-2.100000");
    }

    #[test]
    fn display_mate_counts_moves() {
        assert_eq!(PositionEvaluation::new(MATE, line(1)).to_string(), "#1");
        assert_eq!(PositionEvaluation::new(MATE, line(3)).to_string(), "#2");
        assert_eq!(PositionEvaluation::new(-MATE, line(2)).to_string(), "#-1");
        assert_eq!(PositionEvaluation::new(-MATE, line(0)).to_string(), "#0");
    }

    #[test]
    fn evaluate_board_restores_board() {
        let mut board = Board::starting_position();
        let result = evaluate_board(&mut board, 2);
        assert_eq!(board, Board::starting_position());
        assert_eq!(result.position.line.len(), 2);
        assert_eq!(result.stats.nodes, 421);
    }

    #[test]
    fn best_move_is_line_head() {
        let mut board = Board::starting_position();
        let result = evaluate_board(&mut board, 1);
        assert_eq!(result.position.best_move(), result.position.line.first().copied());
        assert!(result.position.best_move().is_some());
    }
}
