//! Legal move generation.

mod check;
mod king;
mod knights;
mod pawns;
mod pins;
mod sliders;

use crate::board::Board;
use crate::cell::CellContent;
use crate::chess_move::{Capture, Move};
use crate::direction::Direction;
use crate::piece_kind::PieceKind;
use crate::square::Square;

use self::check::{CheckType, InCheck, NotInCheck};
use self::king::gen_king;
use self::knights::gen_knight;
use self::pawns::gen_pawn;
use self::sliders::{gen_slider, slider_rays};

pub use self::pawns::PROMOTION_KINDS;
pub use self::pins::PinState;

/// Growable buffer of generated moves, in generation order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    /// Create an empty move list.
    pub fn new() -> MoveList {
        MoveList {
            moves: Vec::with_capacity(64),
        }
    }

    /// Push a move onto the list.
    #[inline]
    pub fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    /// Return the number of moves in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Return `true` if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Return a slice of the moves.
    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    #[inline]
    pub fn contains(&self, mv: &Move) -> bool {
        self.moves.contains(mv)
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    pub(crate) fn retain(&mut self, keep: impl FnMut(&Move) -> bool) {
        self.moves.retain(keep);
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;
    #[inline]
    fn index(&self, index: usize) -> &Move {
        &self.moves[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;
    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;
    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

/// Build the move of `piece` from `from` to `to` for the side to move.
///
/// Returns `None` when `to` is off the board or holds a friendly piece.
pub(crate) fn target_move(board: &Board, piece: PieceKind, from: Square, to: Square) -> Option<Move> {
    let mv = Move::new(piece, from, to);
    match board.cell(to).content() {
        CellContent::Empty => Some(mv),
        CellContent::OffBoard => None,
        CellContent::Occupied { color, .. } if color == board.side_to_move() => None,
        CellContent::Occupied { color, index } => {
            let kind = board.pieces(color).get(index)?.kind?;
            Some(mv.with_capture(Some(Capture { kind, index })))
        }
    }
}

/// Generate all legal moves for the side to move.
///
/// The board is borrowed mutably because king moves, and every move while
/// in check, are verified by playing them. It is returned unchanged.
pub fn generate_legal_moves(board: &mut Board) -> MoveList {
    let pins = PinState::compute(board);
    generate_moves_with_pins(board, &pins)
}

/// Generate all legal moves for the side to move using precomputed pins.
pub fn generate_moves_with_pins(board: &mut Board, pins: &PinState) -> MoveList {
    if board.is_in_check(board.side_to_move()) {
        gen_all::<InCheck>(board, pins)
    } else {
        gen_all::<NotInCheck>(board, pins)
    }
}

/// Walk the side's registry in slot order, king first.
fn gen_all<T: CheckType>(board: &mut Board, pins: &PinState) -> MoveList {
    let us = board.side_to_move();
    let king_sq = board.king_square(us);
    let mut list = MoveList::new();

    for index in 0..board.pieces(us).len() {
        let piece = board.pieces(us)[index];
        let Some(kind) = piece.kind else {
            continue;
        };
        let from = piece.square;
        if kind == PieceKind::King {
            gen_king(board, from, &mut list);
            continue;
        }
        if pins.is_absolute(from) {
            continue;
        }

        match kind {
            PieceKind::Pawn => gen_pawn(board, from, &mut list),
            PieceKind::Knight => gen_knight(board, from, &mut list),
            _ if pins.is_partial(from) => {
                if let Some(ray) = Direction::toward(king_sq, from) {
                    gen_slider(board, kind, from, &[ray, ray.opposite()], &mut list);
                }
            }
            _ => gen_slider(board, kind, from, slider_rays(kind), &mut list),
        }
    }

    T::resolve(board, &mut list);
    list
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    #[test]
    fn starting_position_20_moves() {
        let mut board = Board::starting_position();
        let moves = generate_legal_moves(&mut board);
        assert_eq!(
            moves.len(),
            20,
            "starting position should have 20 legal moves, got {}",
            moves.len()
        );
    }

    #[test]
    fn generation_leaves_board_unchanged() {
        let original: Board = "4r2k/8/8/8/8/5n2/3P4/4K3 w".parse().unwrap();
        let mut board = original.clone();
        let _ = generate_legal_moves(&mut board);
        assert_eq!(board, original);
    }

    #[test]
    fn king_moves_come_first() {
        let mut board = Board::starting_position();
        let moves = generate_legal_moves(&mut board);
        // Only knights and pawns can move from the start.
        assert!(moves.iter().all(|mv| matches!(mv.piece(), PieceKind::Knight | PieceKind::Pawn)));

        let mut board: Board = "4k3/8/8/8/8/8/8/R3K3 w".parse().unwrap();
        let moves = generate_legal_moves(&mut board);
        assert_eq!(moves[0].piece(), PieceKind::King);
    }

    #[test]
    fn double_check_king_only() {
        // King e1, black knight f3 + black rook e8: double check.
        let mut board: Board = "4r1k1/8/8/8/8/5n2/3B4/4K3 w".parse().unwrap();
        let moves = generate_legal_moves(&mut board);
        assert!(!moves.is_empty());
        for mv in &moves {
            assert_eq!(
                mv.piece(),
                PieceKind::King,
                "in double check, only king moves should be legal, but got move from {:?}",
                mv.source()
            );
        }
    }

    #[test]
    fn single_check_block_or_capture() {
        // Rook on e8 checks along the e-file; the bishop on d2 can block on e3
        // and the knight on c3 can block on e2 or e4.
        let mut board: Board = "4r2k/8/8/8/8/2N5/3B4/4K3 w".parse().unwrap();
        let moves = generate_legal_moves(&mut board);
        let non_king: Vec<Square> = moves
            .iter()
            .filter(|mv| mv.piece() != PieceKind::King)
            .map(|mv| mv.dest())
            .collect();
        assert_eq!(non_king.len(), 3);
        assert!(non_king.contains(&Square::E3));
        assert!(non_king.contains(&Square::E2));
        assert!(non_king.contains(&Square::E4));
    }

    #[test]
    fn checkmate_has_no_moves() {
        // Fool's mate.
        let mut board: Board = "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w".parse().unwrap();
        assert!(board.is_in_check(Color::White));
        assert!(generate_legal_moves(&mut board).is_empty());
    }

    #[test]
    fn stalemate_has_no_moves() {
        let mut board: Board = "k7/Pp6/1K6/8/8/8/8/8 b".parse().unwrap();
        assert!(!board.is_in_check(Color::Black));
        assert!(generate_legal_moves(&mut board).is_empty());
    }

    #[test]
    fn move_list_queries() {
        let mut board = Board::starting_position();
        let moves = generate_legal_moves(&mut board);
        let e4 = Move::new(PieceKind::Pawn, Square::E2, Square::E4);
        assert!(moves.contains(&e4));
        assert_eq!(moves.as_slice().len(), moves.len());
        assert_eq!(moves.clone().into_iter().count(), 20);
    }
}
