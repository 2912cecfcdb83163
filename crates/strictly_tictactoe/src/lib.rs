//! Pure tic-tac-toe game logic with an exhaustive minimax opponent.
//!
//! # Architecture
//!
//! - **Types**: [`Board`], [`Player`], [`Square`], [`Move`], [`TerminalStatus`], [`Score`]
//! - **Rules**: pure win/draw detection over a board ([`rules`])
//! - **Search**: stateless minimax over a board snapshot ([`best_move`], [`analyze`])
//! - **Game state**: one session's board, turn and score ([`GameState`])
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{GameState, Player, TerminalStatus};
//!
//! let mut game = GameState::new();
//! game.apply_move(4, Player::X)?;
//! if game.check_terminal() == TerminalStatus::Ongoing {
//!     let reply = game.computer_move()?;
//!     assert_ne!(reply, 4);
//!     game.check_terminal();
//! }
//! # Ok::<(), strictly_tictactoe::EngineError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod error;
mod position;
pub mod rules;
mod search;
mod state;
mod types;

pub use config::EngineConfig;
pub use error::{BoardParseError, ConfigError, EngineError, MoveError, NoMoveAvailable};
pub use position::Position;
pub use search::{Analysis, analyze, best_move};
pub use state::GameState;
pub use types::{Board, Move, Player, Score, Square, TerminalStatus};
