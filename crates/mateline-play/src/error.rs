//! Play loop errors.

use mateline_core::{FenError, MoveParseError};

/// Errors raised while configuring or running a game.
#[derive(Debug, thiserror::Error)]
pub enum PlayError {
    /// Not enough positional arguments.
    #[error("usage: mateline <fen> <w|b> <depth> [threads]")]
    Usage,

    /// The starting position could not be parsed.
    #[error("invalid FEN {fen:?}: {source}")]
    InvalidFen {
        fen: String,
        #[source]
        source: FenError,
    },

    /// The player color was neither `w` nor `b`.
    #[error("invalid color {value:?}, expected w or b")]
    InvalidColor { value: String },

    /// The engine depth is not a positive integer.
    #[error("invalid depth {value:?}, expected a positive integer")]
    InvalidDepth { value: String },

    /// The worker thread count is not a positive integer.
    #[error("invalid thread count {value:?}, expected a positive integer")]
    InvalidThreads { value: String },

    /// Input that is neither a command nor well-formed move text.
    #[error("invalid move {text:?}: {source}")]
    InvalidMove {
        text: String,
        #[source]
        source: MoveParseError,
    },

    /// Well-formed move text that is not legal in the current position.
    #[error("illegal move: {text}")]
    IllegalMove { text: String },

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}
