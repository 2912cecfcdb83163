//! Strictly Games - Unified CLI
//!
//! Play tic-tac-toe against a minimax opponent, or inspect how it scores a
//! position.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use strictly_games::{Cli, Command, Session, Settings, render};
use strictly_tictactoe::{Board, Player, analyze};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Logs go to stderr and default to warnings so they don't interleave
    // with the board.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let settings = Settings::load(cli.config.as_deref())?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => run_play(settings),
        Command::Analyze { board, mark } => run_analyze(board, mark.into()),
    }
}

/// Run an interactive game on stdin/stdout
#[instrument(skip(settings))]
fn run_play(settings: Settings) -> Result<()> {
    info!(?settings, "Starting interactive session");
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = Session::new(settings, stdin.lock(), stdout.lock());
    session.run()
}

/// Print the minimax score of every legal move on a board
#[instrument]
fn run_analyze(board: Board, mark: Player) -> Result<()> {
    let analysis = analyze(board, mark, mark.opponent());

    println!("{}\n", board);
    println!("{}\n", render::analysis_grid(&board, &analysis));
    match analysis.best() {
        Some(index) => println!(
            "Best move for {}: square {} (score {:+}, {} positions searched)",
            mark,
            index + 1,
            analysis.best_score().unwrap_or_default(),
            analysis.nodes()
        ),
        None => println!("No move available for {}: the round is over.", mark),
    }
    Ok(())
}
