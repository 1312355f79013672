//! The game loop: the human and the engine alternate until the game ends.

use std::io::{BufRead, Write};

use mateline_core::{Board, Color};
use mateline_engine::{Evaluation, evaluate_board, evaluate_board_parallel};
use tracing::{debug, info, warn};

use crate::command::{Command, parse_command};
use crate::config::PlayConfig;
use crate::error::PlayError;

/// How a session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The side to move had no legal move; holds the printed evaluation.
    GameOver(String),
    /// The human typed `quit`.
    Quit,
    /// Input ran out on the human's turn.
    EndOfInput,
}

/// A game in progress.
#[derive(Debug)]
pub struct Session {
    board: Board,
    human: Color,
    depth: u32,
    threads: usize,
}

impl Session {
    pub fn new(config: &PlayConfig) -> Result<Session, PlayError> {
        let board = config
            .fen
            .parse::<Board>()
            .map_err(|source| PlayError::InvalidFen {
                fen: config.fen.clone(),
                source,
            })?;
        Ok(Session {
            board,
            human: config.human,
            depth: config.depth,
            threads: config.threads,
        })
    }

    /// Current position.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Play until the game ends, the human quits, or input runs out.
    ///
    /// Engine moves and final evaluations are written one per line.
    /// Unparseable or illegal input is reported and the human is asked again.
    pub fn run<R, W>(&mut self, input: R, mut output: W) -> Result<Outcome, PlayError>
    where
        R: BufRead,
        W: Write,
    {
        let mut lines = input.lines();
        loop {
            if self.board.side_to_move() == self.human {
                let probe = evaluate_board(&mut self.board, 1);
                if probe.position.line.is_empty() {
                    return self.finish(&probe, &mut output);
                }

                let Some(line) = lines.next() else {
                    info!("input closed");
                    return Ok(Outcome::EndOfInput);
                };
                let line = line?;
                match parse_command(&line, &mut self.board) {
                    Ok(Command::Quit) => {
                        info!("quit requested");
                        return Ok(Outcome::Quit);
                    }
                    Ok(Command::Board) => writeln!(output, "{}", self.board.pretty())?,
                    Ok(Command::Fen) => writeln!(output, "{}", self.board)?,
                    Ok(Command::Empty) => {}
                    Ok(Command::Play(mv)) => {
                        debug!(%mv, "human move");
                        self.board.apply_move(mv);
                    }
                    Err(err) => {
                        warn!(error = %err, "rejected input");
                        writeln!(output, "error: {err}")?;
                    }
                }
            } else {
                let result = self.search();
                info!(
                    stats = %result.stats,
                    score = %result.position,
                    "engine search"
                );
                match result.position.best_move() {
                    Some(mv) => {
                        writeln!(output, "{mv}")?;
                        self.board.apply_move(mv);
                    }
                    None => return self.finish(&result, &mut output),
                }
            }
            output.flush()?;
        }
    }

    fn search(&mut self) -> Evaluation {
        if self.threads > 1 {
            evaluate_board_parallel(&self.board, self.depth, self.threads)
        } else {
            evaluate_board(&mut self.board, self.depth)
        }
    }

    fn finish<W: Write>(&self, result: &Evaluation, output: &mut W) -> Result<Outcome, PlayError> {
        let text = result.position.to_string();
        writeln!(output, "{text}")?;
        output.flush()?;
        info!(result = %text, "game over");
        Ok(Outcome::GameOver(text))
    }
}
