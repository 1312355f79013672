//! Game configuration from positional arguments.

use mateline_core::Color;

use crate::error::PlayError;

/// Settings for one game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayConfig {
    /// Starting position in FEN.
    pub fen: String,
    /// The side the human plays.
    pub human: Color,
    /// Engine search depth in plies.
    pub depth: u32,
    /// Worker threads for the engine's search.
    pub threads: usize,
}

impl PlayConfig {
    /// Build from `<fen> <w|b> <depth> [threads]`, program name excluded.
    pub fn from_args<I>(args: I) -> Result<PlayConfig, PlayError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let (Some(fen), Some(color), Some(depth)) = (args.next(), args.next(), args.next()) else {
            return Err(PlayError::Usage);
        };

        let human = match color.as_str() {
            "w" => Color::White,
            "b" => Color::Black,
            _ => return Err(PlayError::InvalidColor { value: color }),
        };
        let depth = match depth.parse::<u32>() {
            Ok(depth) if depth > 0 => depth,
            _ => return Err(PlayError::InvalidDepth { value: depth }),
        };
        let threads = match args.next() {
            None => 1,
            Some(value) => match value.parse::<usize>() {
                Ok(threads) if threads > 0 => threads,
                _ => return Err(PlayError::InvalidThreads { value }),
            },
        };

        Ok(PlayConfig {
            fen,
            human,
            depth,
            threads,
        })
    }
}
