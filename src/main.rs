use std::io;

use anyhow::{Context, Result};
use mateline_play::{Outcome, PlayConfig, Session};
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let config = PlayConfig::from_args(std::env::args().skip(1))?;
    info!(
        fen = %config.fen,
        human = %config.human,
        depth = config.depth,
        threads = config.threads,
        "mateline starting"
    );

    let mut session = Session::new(&config)?;
    let outcome = session
        .run(io::stdin().lock(), io::stdout().lock())
        .context("game aborted")?;
    if let Outcome::GameOver(result) = &outcome {
        info!(%result, "finished");
    }
    Ok(())
}
