//! Core chess types: padded-grid board, piece registries, make/unmake,
//! attack and pin analysis, and legal move generation.

mod attacks;
mod bitboard;
mod board;
mod cell;
mod chess_move;
mod color;
mod direction;
mod error;
mod fen;
mod file;
mod make_move;
pub mod movegen;
mod notation;
pub mod perft;
mod piece;
mod piece_kind;
mod rank;
mod square;

pub use bitboard::Bitboard;
pub use board::{Board, PrettyBoard};
pub use cell::{Cell, CellContent};
pub use chess_move::{Capture, Move};
pub use color::Color;
pub use direction::Direction;
pub use error::{BoardError, FenError, MoveParseError};
pub use fen::STARTING_FEN;
pub use file::File;
pub use make_move::MoveGuard;
pub use movegen::{MoveList, PinState, generate_legal_moves};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use rank::Rank;
pub use square::Square;
