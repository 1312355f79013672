//! Root-split search across scoped worker threads.
//!
//! Root moves are dealt round-robin to workers, each searching on its own
//! clone of the board. Results are merged in root-move order with the same
//! comparison the serial search uses, so the outcome matches
//! [`evaluate_board`](super::evaluate_board) exactly.

use std::panic;
use std::thread;
use std::time::Instant;

use mateline_core::{Board, Move, generate_legal_moves};
use tracing::{debug, trace};

use super::minimax::{is_better, minimax, terminal};
use super::stats::Statistics;
use super::{Evaluation, PositionEvaluation, evaluate_board};

/// Search `board` to `max_depth` plies using up to `threads` workers.
///
/// Falls back to the serial search for one thread or depth 0.
pub fn evaluate_board_parallel(board: &Board, max_depth: u32, threads: usize) -> Evaluation {
    let threads = threads.max(1);
    if threads == 1 || max_depth == 0 {
        return evaluate_board(&mut board.clone(), max_depth);
    }

    let start = Instant::now();
    let mut root = board.clone();
    let mut stats = Statistics {
        nodes: 1,
        ..Statistics::default()
    };
    let moves: Vec<Move> = generate_legal_moves(&mut root).into_iter().collect();
    if moves.is_empty() {
        let position = terminal(&root, &mut stats);
        stats.elapsed = start.elapsed();
        return Evaluation { stats, position };
    }

    let workers = threads.min(moves.len());
    let mut results: Vec<Option<PositionEvaluation>> = vec![None; moves.len()];

    thread::scope(|s| {
        let handles: Vec<_> = (0..workers)
            .map(|worker| {
                let moves = &moves;
                let mut local = root.clone();
                s.spawn(move || {
                    let mut local_stats = Statistics::default();
                    let mut found = Vec::new();
                    for index in (worker..moves.len()).step_by(workers) {
                        let mv = moves[index];
                        let child = minimax(&mut local.play(mv), max_depth - 1, &mut local_stats);
                        trace!(worker, %mv, score = %child, "root move searched");
                        found.push((index, child));
                    }
                    (found, local_stats)
                })
            })
            .collect();

        for handle in handles {
            match handle.join() {
                Ok((found, local_stats)) => {
                    stats += local_stats;
                    for (index, child) in found {
                        results[index] = Some(child);
                    }
                }
                Err(payload) => panic::resume_unwind(payload),
            }
        }
    });

    let mover = root.side_to_move();
    let mut best: Option<(Move, PositionEvaluation)> = None;
    for (mv, child) in moves.iter().zip(results) {
        let Some(child) = child else { continue };
        let replace = match &best {
            Some((_, current)) => is_better(&child, current, mover),
            None => true,
        };
        if replace {
            best = Some((*mv, child));
        }
    }

    let position = match best {
        Some((mv, mut eval)) => {
            eval.line.insert(0, mv);
            eval
        }
        None => terminal(&root, &mut stats),
    };
    stats.elapsed = start.elapsed();

    debug!(
        depth = max_depth,
        threads = workers,
        nodes = stats.nodes,
        elapsed_ms = stats.elapsed.as_millis() as u64,
        score = %position,
        "parallel search complete"
    );

    Evaluation { stats, position }
}
