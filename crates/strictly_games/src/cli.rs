//! Command-line interface for strictly_games.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use strictly_tictactoe::{Board, BoardParseError, Player};

/// Strictly Games - tic-tac-toe against a minimax opponent
#[derive(Parser, Debug)]
#[command(name = "strictly_games")]
#[command(about = "Play tic-tac-toe against a computer that never loses", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML settings file (falls back to $STRICTLY_GAMES_CONFIG)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively in the terminal
    Play,

    /// Show the minimax score of every legal move on a board
    Analyze {
        /// Nine cells of X, O or - (e.g. "XX-OO----"); `|` and spaces are ignored
        #[arg(short, long, allow_hyphen_values = true, value_parser = parse_board)]
        board: Board,

        /// Mark to find a move for
        #[arg(short, long, value_enum, default_value_t = MarkArg::O)]
        mark: MarkArg,
    },
}

/// Parses a `--board` value; a leading `-` is an empty square, not a flag.
pub fn parse_board(s: &str) -> Result<Board, BoardParseError> {
    s.parse()
}

/// Mark selector for the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MarkArg {
    /// Player X
    X,
    /// Player O
    O,
}

impl From<MarkArg> for Player {
    fn from(mark: MarkArg) -> Self {
        match mark {
            MarkArg::X => Player::X,
            MarkArg::O => Player::O,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_no_subcommand() {
        let cli = Cli::try_parse_from(["strictly_games"]).unwrap();
        assert_eq!(cli.command, None);
        assert_eq!(cli.config, None);
    }

    #[test]
    fn test_analyze_args() {
        let cli = Cli::try_parse_from([
            "strictly_games",
            "analyze",
            "--board",
            "XX-OO----",
            "--mark",
            "x",
            "--config",
            "game.toml",
        ])
        .unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Analyze {
                board: "XX-OO----".parse().unwrap(),
                mark: MarkArg::X,
            })
        );
        assert_eq!(cli.config, Some(PathBuf::from("game.toml")));
    }

    #[test]
    fn test_analyze_defaults_to_o() {
        let cli = Cli::try_parse_from(["strictly_games", "analyze", "-b", "---------"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Command::Analyze {
                mark: MarkArg::O,
                ..
            })
        ));
    }

    #[test]
    fn test_board_may_start_with_empty_square() {
        let cli =
            Cli::try_parse_from(["strictly_games", "analyze", "--board", "-X--O----"]).unwrap();
        let Some(Command::Analyze { board, mark }) = cli.command else {
            panic!("Expected analyze command");
        };
        assert_eq!(board, "-X--O----".parse::<Board>().unwrap());
        assert_eq!(board.get(0), Some(strictly_tictactoe::Square::Empty));

        let analysis = strictly_tictactoe::analyze(board, mark.into(), Player::X);
        assert!(analysis.best().is_some());
    }

    #[test]
    fn test_invalid_board_rejected_by_parser() {
        let err = Cli::try_parse_from(["strictly_games", "analyze", "--board", "XX"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }
}
