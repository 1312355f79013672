//! Full-width fixed-depth minimax.
//!
//! Every node is played on the caller's board through [`Board::play`], so the
//! board is back in its original state when a call returns.

use mateline_core::{Board, Color, Move, generate_legal_moves};
use tracing::trace;

use super::stats::Statistics;
use super::{MATE, PositionEvaluation};
use crate::eval::evaluate;

/// Evaluate `board` `depth` plies deep, counting into `stats`.
pub(crate) fn minimax(board: &mut Board, depth: u32, stats: &mut Statistics) -> PositionEvaluation {
    stats.nodes += 1;

    if depth == 0 {
        stats.leaf_nodes += 1;
        // Mate and stalemate on the last ply are scored as terminal nodes.
        if generate_legal_moves(board).is_empty() {
            return terminal(board, stats);
        }
        return PositionEvaluation::new(evaluate(board), Vec::new());
    }

    let mover = board.side_to_move();
    let mut best: Option<(Move, PositionEvaluation)> = None;
    for mv in generate_legal_moves(board) {
        let child = minimax(&mut board.play(mv), depth - 1, stats);
        let replace = match &best {
            Some((_, current)) => is_better(&child, current, mover),
            None => true,
        };
        if replace {
            best = Some((mv, child));
        }
    }

    match best {
        Some((mv, mut eval)) => {
            eval.line.insert(0, mv);
            eval
        }
        None => terminal(board, stats),
    }
}

/// Score a node whose side to move has no legal move.
pub(crate) fn terminal(board: &Board, stats: &mut Statistics) -> PositionEvaluation {
    let us = board.side_to_move();
    if board.is_in_check(us) {
        stats.checkmates += 1;
        trace!(board = %board, "checkmate");
        PositionEvaluation::new(mated_score(us), Vec::new())
    } else {
        stats.stalemates += 1;
        trace!(board = %board, "stalemate");
        PositionEvaluation::new(0.0, Vec::new())
    }
}

/// Score of a position in which `color` is checkmated.
fn mated_score(color: Color) -> f64 {
    -color.sign() * MATE
}

/// Whether `candidate` is preferable to `best` for `mover`.
///
/// Higher scores win for White and lower for Black. Between two equal mate
/// scores the winning side prefers the shorter line and the losing side the
/// longer one. Any other tie keeps `best`.
pub(crate) fn is_better(candidate: &PositionEvaluation, best: &PositionEvaluation, mover: Color) -> bool {
    let ours = candidate.score * mover.sign();
    let theirs = best.score * mover.sign();
    if ours != theirs {
        return ours > theirs;
    }
    if ours == MATE {
        candidate.line.len() < best.line.len()
    } else if ours == -MATE {
        candidate.line.len() > best.line.len()
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use mateline_core::{PieceKind, Square};

    use super::*;

    fn eval(score: f64, plies: usize) -> PositionEvaluation {
        let filler = Move::new(PieceKind::King, Square::E1, Square::E2);
        PositionEvaluation::new(score, vec![filler; plies])
    }

    #[test]
    fn higher_is_better_for_white() {
        assert!(is_better(&eval(1.0, 1), &eval(0.0, 1), Color::White));
        assert!(!is_better(&eval(-1.0, 1), &eval(0.0, 1), Color::White));
    }

    #[test]
    fn lower_is_better_for_black() {
        assert!(is_better(&eval(-1.0, 1), &eval(0.0, 1), Color::Black));
        assert!(!is_better(&eval(1.0, 1), &eval(0.0, 1), Color::Black));
    }

    #[test]
    fn equal_plain_scores_keep_first() {
        assert!(!is_better(&eval(0.5, 1), &eval(0.5, 3), Color::White));
        assert!(!is_better(&eval(0.0, 3), &eval(-0.0, 1), Color::Black));
    }

    #[test]
    fn winner_prefers_shorter_mate() {
        assert!(is_better(&eval(MATE, 1), &eval(MATE, 3), Color::White));
        assert!(!is_better(&eval(MATE, 3), &eval(MATE, 1), Color::White));
        assert!(is_better(&eval(-MATE, 2), &eval(-MATE, 4), Color::Black));
    }

    #[test]
    fn loser_prefers_longer_mate() {
        assert!(is_better(&eval(-MATE, 4), &eval(-MATE, 2), Color::White));
        assert!(is_better(&eval(MATE, 3), &eval(MATE, 1), Color::Black));
    }

    #[test]
    fn mate_length_ignored_when_scores_differ() {
        assert!(!is_better(&eval(-MATE, 9), &eval(0.0, 1), Color::White));
        assert!(is_better(&eval(MATE, 9), &eval(20.0, 1), Color::White));
    }

    #[test]
    fn depth_zero_is_material() {
        let mut board: Board = "4k3/8/8/8/8/8/8/3QK3 w".parse().unwrap();
        let mut stats = Statistics::default();
        let result = minimax(&mut board, 0, &mut stats);
        assert_eq!(result.score, 10.0);
        assert!(result.line.is_empty());
        assert_eq!((stats.nodes, stats.leaf_nodes), (1, 1));
    }

    #[test]
    fn depth_zero_sees_checkmate() {
        let mut board: Board = "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w"
            .parse()
            .unwrap();
        let mut stats = Statistics::default();
        let result = minimax(&mut board, 0, &mut stats);
        assert_eq!(result.score, -MATE);
        assert_eq!(stats.checkmates, 1);
    }

    #[test]
    fn depth_zero_sees_stalemate() {
        let mut board: Board = "7k/5Q2/6K1/8/8/8/8/8 b".parse().unwrap();
        let mut stats = Statistics::default();
        let result = minimax(&mut board, 0, &mut stats);
        assert_eq!(result.score, 0.0);
        assert!(result.line.is_empty());
        assert_eq!(stats.stalemates, 1);
        assert_eq!(stats.leaf_nodes, 1);
    }

    #[test]
    fn counts_every_node() {
        let mut board = Board::starting_position();
        let mut stats = Statistics::default();
        minimax(&mut board, 2, &mut stats);
        assert_eq!(stats.nodes, 1 + 20 + 400);
        assert_eq!(stats.leaf_nodes, 400);
        assert_eq!(board, Board::starting_position());
    }
}
