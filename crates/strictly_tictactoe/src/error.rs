//! Error types for the tic-tac-toe engine.

use super::position::Position;
use super::types::Player;
use derive_more::{Display, Error, From};
use tracing::instrument;

/// A move the engine refused to apply.
///
/// The board is untouched whenever one of these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum MoveError {
    /// The index is not a board square.
    #[display("Position {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The round is over; start a new game first.
    #[display("Game is already over")]
    GameOver,

    /// It's not this player's turn (only with turn enforcement enabled).
    #[display("It's not {}'s turn", _0)]
    WrongTurn(Player),
}

impl std::error::Error for MoveError {}

/// The computer was asked to move but cannot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum NoMoveAvailable {
    /// The round is over.
    #[display("No move available: game is already over")]
    GameOver,

    /// Every square is occupied.
    #[display("No move available: board is full")]
    BoardFull,

    /// It is the human's turn (only with turn enforcement enabled).
    #[display("No move available: it's {}'s turn", _0)]
    WrongTurn(Player),
}

impl std::error::Error for NoMoveAvailable {}

/// Failure to parse a board from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum BoardParseError {
    /// Not exactly nine cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongLength(usize),

    /// A cell that is not `X`, `O` or an empty marker.
    #[display("Invalid cell {:?} (use X, O, or - . _ for empty)", _0)]
    InvalidCell(char),
}

impl std::error::Error for BoardParseError {}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Any error the engine can report.
#[derive(Debug, Clone, Display, Error, From)]
pub enum EngineError {
    /// See [`MoveError`].
    #[display("{}", _0)]
    Move(MoveError),
    /// See [`NoMoveAvailable`].
    #[display("{}", _0)]
    NoMove(NoMoveAvailable),
    /// See [`BoardParseError`].
    #[display("{}", _0)]
    Parse(BoardParseError),
    /// See [`ConfigError`].
    #[display("{}", _0)]
    Config(ConfigError),
}
