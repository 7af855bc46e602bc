//! Console Othello for two human players.
//!
//! Thin driver over the rules engine: renders the board, reads moves
//! from stdin, skips stuck players, and announces the result.

mod session;

use clap::Parser;
use session::Session;
use std::io;

/// Two-player console Othello.
#[derive(Parser)]
#[command(name = "othello-cli")]
#[command(about = "Two-player console Othello")]
struct Args {
    /// List the legal moves before each prompt
    #[arg(long)]
    hints: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    tracing::debug!(hints = args.hints, "starting session");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), args.hints);
    match session.run()? {
        Some(result) => tracing::debug!(?result, "game finished"),
        None => tracing::debug!("game aborted"),
    }

    Ok(())
}
