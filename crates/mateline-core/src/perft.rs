//! Perft (performance test) for move generation correctness verification.

use tracing::{debug, trace};

use crate::board::Board;
use crate::movegen::generate_legal_moves;

/// Count the number of leaf nodes at the given depth.
///
/// Depth 0 returns 1 (the current position). Depth 1 returns the number
/// of legal moves without playing them.
pub fn perft(board: &mut Board, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = generate_legal_moves(board);

    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for mv in moves {
        let mut child = board.play(mv);
        nodes += perft(&mut child, depth - 1);
    }
    nodes
}

/// Run perft with per-move breakdown (useful for debugging).
///
/// Returns `(move_text, node_count)` pairs sorted alphabetically.
pub fn divide(board: &mut Board, depth: usize) -> Vec<(String, u64)> {
    let moves = generate_legal_moves(board);
    let mut results: Vec<(String, u64)> = moves
        .into_iter()
        .map(|mv| {
            let mut child = board.play(mv);
            let count = if depth <= 1 { 1 } else { perft(&mut child, depth - 1) };
            trace!(%mv, count, "divide");
            (mv.to_string(), count)
        })
        .collect();
    results.sort_by(|a, b| a.0.cmp(&b.0));
    debug!(
        depth,
        moves = results.len(),
        nodes = results.iter().map(|(_, count)| count).sum::<u64>(),
        "divide complete"
    );
    results
}
