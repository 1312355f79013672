//! In-place move application and reversal.

use std::ops::{Deref, DerefMut};

use crate::board::Board;
use crate::cell::{Cell, CellContent};
use crate::chess_move::Move;
use crate::piece_kind::PieceKind;
use crate::square::Square;

impl Board {
    /// Apply `mv` in place and pass the turn.
    ///
    /// No legality check is made. Any promotion turns the pawn into a queen,
    /// whatever kind the move requests.
    pub fn apply_move(&mut self, mv: Move) {
        let us = self.side_to_move;
        let them = !us;
        let cell = self.grid[mv.source().grid_index()];
        let index = self.occupant_index(mv.source());

        if let Some(capture) = mv.capture() {
            self.pieces[them.index()][capture.index].kind = None;
        }

        self.grid[mv.source().grid_index()] = Cell::EMPTY;
        self.grid[mv.dest().grid_index()] = cell;
        let piece = &mut self.pieces[us.index()][index];
        piece.square = mv.dest();
        if mv.promotion().is_some() {
            piece.kind = Some(PieceKind::Queen);
        }

        self.side_to_move = them;
    }

    /// Reverse `mv`, which must be the last move applied.
    pub fn undo_move(&mut self, mv: Move) {
        self.side_to_move = !self.side_to_move;
        let us = self.side_to_move;
        let them = !us;
        let cell = self.grid[mv.dest().grid_index()];
        let index = self.occupant_index(mv.dest());

        self.grid[mv.source().grid_index()] = cell;
        let piece = &mut self.pieces[us.index()][index];
        piece.square = mv.source();
        if mv.promotion().is_some() {
            piece.kind = Some(PieceKind::Pawn);
        }

        self.grid[mv.dest().grid_index()] = match mv.capture() {
            Some(capture) => {
                self.pieces[them.index()][capture.index].kind = Some(capture.kind);
                Cell::occupied(them, capture.index)
            }
            None => Cell::EMPTY,
        };
    }

    /// Apply `mv` and return a guard that undoes it when dropped.
    ///
    /// The guard dereferences to the board, so nested moves are played
    /// through it and unwind in order.
    #[must_use = "the move is undone as soon as the guard is dropped"]
    pub fn play(&mut self, mv: Move) -> MoveGuard<'_> {
        self.apply_move(mv);
        MoveGuard { board: self, mv }
    }

    fn occupant_index(&self, sq: Square) -> usize {
        match self.grid[sq.grid_index()].content() {
            CellContent::Occupied { index, .. } => index,
            _ => panic!("no piece on {sq} for move"),
        }
    }
}

/// Scoped move: the board shows the move while the guard lives.
pub struct MoveGuard<'a> {
    board: &'a mut Board,
    mv: Move,
}

impl MoveGuard<'_> {
    /// The move this guard holds.
    #[inline]
    pub fn applied(&self) -> Move {
        self.mv
    }
}

impl Deref for MoveGuard<'_> {
    type Target = Board;

    #[inline]
    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for MoveGuard<'_> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for MoveGuard<'_> {
    fn drop(&mut self) {
        self.board.undo_move(self.mv);
    }
}
