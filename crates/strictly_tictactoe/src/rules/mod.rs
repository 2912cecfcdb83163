//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating a board. Rules are kept apart from board
//! storage so the search and the game state share one definition of a win.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner};

use super::{Board, TerminalStatus};
use tracing::instrument;

/// Classifies a board as ongoing, won or drawn.
///
/// Lines are checked before fullness, so a full board that contains a line
/// is a win.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> TerminalStatus {
    if let Some(winner) = check_winner(board) {
        TerminalStatus::Win(winner)
    } else if is_full(board) {
        TerminalStatus::Draw
    } else {
        TerminalStatus::Ongoing
    }
}
