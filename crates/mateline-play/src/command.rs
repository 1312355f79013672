//! Parsing of one line of player input.

use mateline_core::{Board, Move, generate_legal_moves};

use crate::error::PlayError;

/// A parsed line of player input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `quit`: end the game.
    Quit,
    /// `board`: print the position as a grid.
    Board,
    /// `fen`: print the position as FEN.
    Fen,
    /// A legal move for the side to move.
    Play(Move),
    /// Blank line.
    Empty,
}

/// Parse `line` against `board`. Moves must be legal in the position.
pub fn parse_command(line: &str, board: &mut Board) -> Result<Command, PlayError> {
    let text = line.trim();
    match text {
        "" => Ok(Command::Empty),
        "quit" => Ok(Command::Quit),
        "board" => Ok(Command::Board),
        "fen" => Ok(Command::Fen),
        _ => {
            let mv = Move::parse(text, board).map_err(|source| PlayError::InvalidMove {
                text: text.to_string(),
                source,
            })?;
            if !generate_legal_moves(board).contains(&mv) {
                return Err(PlayError::IllegalMove {
                    text: text.to_string(),
                });
            }
            Ok(Command::Play(mv))
        }
    }
}
