//! The chess board: padded cell grid, per-side piece registries, side to move.

use std::fmt;

use crate::bitboard::Bitboard;
use crate::cell::{Cell, CellContent};
use crate::color::Color;
use crate::error::BoardError;
use crate::file::File;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::rank::Rank;
use crate::square::{GRID_SIZE, Square};

/// Complete position state.
///
/// Equality compares the representation: every grid cell, both registries
/// slot by slot (captured entries included) and the side to move. Two boards
/// showing the same position with differently ordered registries are not
/// equal.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    /// Padded grid indexed by [`Square::grid_index()`].
    pub(crate) grid: [Cell; GRID_SIZE],
    /// Piece registry for each side, indexed by [`Color::index()`]. Slot 0 is the king.
    pub(crate) pieces: [Vec<Piece>; Color::COUNT],
    /// Which side moves next.
    pub(crate) side_to_move: Color,
}

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

impl Board {
    /// Return the standard starting position.
    pub fn starting_position() -> Board {
        let mut white = Vec::with_capacity(16);
        let mut black = Vec::with_capacity(16);
        for (file_idx, kind) in BACK_RANK.into_iter().enumerate() {
            let file = File::ALL[file_idx];
            white.push(Piece::new(kind, Square::new(Rank::Rank1, file)));
            white.push(Piece::new(PieceKind::Pawn, Square::new(Rank::Rank2, file)));
            black.push(Piece::new(kind, Square::new(Rank::Rank8, file)));
            black.push(Piece::new(PieceKind::Pawn, Square::new(Rank::Rank7, file)));
        }
        Board::assemble([white, black], Color::White)
    }

    /// Build a board from a list of placements.
    ///
    /// Each side's registry is stably sorted by kind, so the king lands in
    /// slot 0 and the remaining pieces keep their input order within a kind.
    pub fn from_pieces<I>(placements: I, side_to_move: Color) -> Result<Board, BoardError>
    where
        I: IntoIterator<Item = (Color, PieceKind, Square)>,
    {
        let mut lists: [Vec<Piece>; Color::COUNT] = [Vec::new(), Vec::new()];
        let mut seen = Bitboard::EMPTY;
        for (color, kind, square) in placements {
            if seen.contains(square) {
                return Err(BoardError::OverlappingPieces { square });
            }
            seen = seen.with(square);
            lists[color.index()].push(Piece::new(kind, square));
        }
        for color in Color::ALL {
            let count = lists[color.index()].len();
            if count > Cell::MAX_PIECES {
                return Err(BoardError::TooManyPieces { color, count });
            }
        }

        let board = Board::assemble(lists, side_to_move);
        board.validate()?;
        Ok(board)
    }

    /// Sort the registries and fill in the grid. Inputs must be overlap-free.
    fn assemble(mut lists: [Vec<Piece>; Color::COUNT], side_to_move: Color) -> Board {
        for list in &mut lists {
            list.sort_by_key(|piece| piece.kind);
        }
        let mut grid = [Cell::OFF_BOARD; GRID_SIZE];
        for sq in Square::all() {
            grid[sq.grid_index()] = Cell::EMPTY;
        }
        for color in Color::ALL {
            for (index, piece) in lists[color.index()].iter().enumerate() {
                grid[piece.square.grid_index()] = Cell::occupied(color, index);
            }
        }
        Board {
            grid,
            pieces: lists,
            side_to_move,
        }
    }

    /// Which side moves next.
    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Return the cell value at `sq`.
    #[inline]
    pub fn cell(&self, sq: Square) -> Cell {
        self.grid[sq.grid_index()]
    }

    /// Return the registry entry a cell refers to, if the cell is occupied.
    #[inline]
    pub fn piece(&self, cell: Cell) -> Option<&Piece> {
        match cell.content() {
            CellContent::Occupied { color, index } => self.pieces[color.index()].get(index),
            _ => None,
        }
    }

    /// Return the color and kind of the piece on `sq`, if any.
    pub fn occupant(&self, sq: Square) -> Option<(Color, PieceKind)> {
        let cell = self.cell(sq);
        let kind = self.piece(cell)?.kind?;
        Some((cell.color()?, kind))
    }

    /// Return `color`'s registry, captured entries included.
    #[inline]
    pub fn pieces(&self, color: Color) -> &[Piece] {
        &self.pieces[color.index()]
    }

    /// Return the square of `color`'s king.
    #[inline]
    pub fn king_square(&self, color: Color) -> Square {
        self.pieces[color.index()]
            .first()
            .expect("board must have a king for each side")
            .square
    }

    /// Validate structural invariants of the board.
    pub fn validate(&self) -> Result<(), BoardError> {
        for color in Color::ALL {
            let list = &self.pieces[color.index()];
            if list.len() > Cell::MAX_PIECES {
                return Err(BoardError::TooManyPieces {
                    color,
                    count: list.len(),
                });
            }
            let kings = list
                .iter()
                .filter(|p| p.kind == Some(PieceKind::King))
                .count();
            if kings != 1 || list[0].kind != Some(PieceKind::King) {
                return Err(BoardError::InvalidKingCount { color, count: kings });
            }
            let pawn_on_back_rank = list.iter().any(|p| {
                p.kind == Some(PieceKind::Pawn)
                    && matches!(p.square.rank(), Rank::Rank1 | Rank::Rank8)
            });
            if pawn_on_back_rank {
                return Err(BoardError::PawnsOnBackRank);
            }
        }
        Ok(())
    }

    /// Return a wrapper that displays the board as an 8x8 grid.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{}\")", self)
    }
}

/// Wrapper for pretty-printing a board as an 8x8 grid.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        for rank in Rank::ALL.into_iter().rev() {
            write!(f, "{rank}  ")?;
            for file in File::ALL {
                let c = match board.occupant(Square::new(rank, file)) {
                    Some((Color::White, kind)) => kind.fen_char().to_ascii_uppercase(),
                    Some((Color::Black, kind)) => kind.fen_char(),
                    None => '.',
                };
                if file.index() < 7 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

#[cfg(test)]
mod tests {
    use super::Board;
    use crate::cell::{Cell, CellContent};
    use crate::color::Color;
    use crate::error::BoardError;
    use crate::piece_kind::PieceKind;
    use crate::square::Square;

    #[test]
    fn starting_position_validates() {
        let board = Board::starting_position();
        board.validate().unwrap();
    }

    #[test]
    fn starting_position_occupants() {
        let board = Board::starting_position();
        assert_eq!(board.occupant(Square::E1), Some((Color::White, PieceKind::King)));
        assert_eq!(board.occupant(Square::D8), Some((Color::Black, PieceKind::Queen)));
        assert_eq!(board.occupant(Square::A2), Some((Color::White, PieceKind::Pawn)));
        assert_eq!(board.occupant(Square::E4), None);
        assert_eq!(board.side_to_move(), Color::White);
    }

    #[test]
    fn king_is_slot_zero() {
        let board = Board::starting_position();
        for color in Color::ALL {
            assert_eq!(board.pieces(color)[0].kind, Some(PieceKind::King));
            assert_eq!(board.pieces(color).len(), 16);
        }
        assert_eq!(board.king_square(Color::White), Square::E1);
        assert_eq!(board.king_square(Color::Black), Square::E8);
    }

    #[test]
    fn registry_sorted_by_kind() {
        let board = Board::starting_position();
        let kinds: Vec<_> = board.pieces(Color::White).iter().map(|p| p.kind).collect();
        let mut sorted = kinds.clone();
        sorted.sort();
        assert_eq!(kinds, sorted);
    }

    #[test]
    fn cells_point_back_at_registry() {
        let board = Board::starting_position();
        for color in Color::ALL {
            for (index, piece) in board.pieces(color).iter().enumerate() {
                let cell = board.cell(piece.square);
                assert_eq!(cell.content(), CellContent::Occupied { color, index });
                assert_eq!(board.piece(cell), Some(piece));
            }
        }
        assert_eq!(board.piece(Cell::EMPTY), None);
    }

    #[test]
    fn from_pieces_sorts_king_first() {
        let board = Board::from_pieces(
            [
                (Color::White, PieceKind::Rook, Square::A1),
                (Color::White, PieceKind::King, Square::E1),
                (Color::Black, PieceKind::Pawn, Square::D5),
                (Color::Black, PieceKind::King, Square::E8),
            ],
            Color::Black,
        )
        .unwrap();
        assert_eq!(board.king_square(Color::White), Square::E1);
        assert_eq!(board.king_square(Color::Black), Square::E8);
        assert_eq!(board.side_to_move(), Color::Black);
    }

    #[test]
    fn from_pieces_rejects_overlap() {
        let err = Board::from_pieces(
            [
                (Color::White, PieceKind::King, Square::E1),
                (Color::Black, PieceKind::King, Square::E1),
            ],
            Color::White,
        )
        .unwrap_err();
        assert_eq!(err, BoardError::OverlappingPieces { square: Square::E1 });
    }

    #[test]
    fn from_pieces_rejects_missing_king() {
        let err = Board::from_pieces(
            [
                (Color::White, PieceKind::King, Square::E1),
                (Color::Black, PieceKind::Queen, Square::E8),
            ],
            Color::White,
        )
        .unwrap_err();
        assert_eq!(
            err,
            BoardError::InvalidKingCount {
                color: Color::Black,
                count: 0
            }
        );
    }

    #[test]
    fn from_pieces_rejects_back_rank_pawn() {
        let err = Board::from_pieces(
            [
                (Color::White, PieceKind::King, Square::E1),
                (Color::White, PieceKind::Pawn, Square::A8),
                (Color::Black, PieceKind::King, Square::E8),
            ],
            Color::White,
        )
        .unwrap_err();
        assert_eq!(err, BoardError::PawnsOnBackRank);
    }

    #[test]
    fn pretty_print() {
        let board = Board::starting_position();
        let text = format!("{}", board.pretty());
        let expected = "\
8  r n b q k b n r
7  p p p p p p p p
6  . . . . . . . .
5  . . . . . . . .
4  . . . . . . . .
3  . . . . . . . .
2  P P P P P P P P
1  R N B Q K B N R
   a b c d e f g h";
        assert_eq!(text, expected);
    }
}
