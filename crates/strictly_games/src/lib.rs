//! Strictly Games - terminal front end for tic-tac-toe.
//!
//! The game rules and the computer opponent live in `strictly_tictactoe`.
//! This crate only turns keystrokes into engine calls and engine results
//! into text.
//!
//! # Architecture
//!
//! - **CLI**: argument parsing ([`Cli`], [`Command`])
//! - **Settings**: TOML settings wrapping the engine configuration ([`Settings`])
//! - **Session**: the interactive play loop ([`Session`])
//! - **Render**: messages, scoreboard and analysis grid ([`render`])

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
pub mod render;
mod session;
mod settings;

pub use cli::{Cli, Command, MarkArg, parse_board};
pub use session::{Input, Session};
pub use settings::{CONFIG_ENV, Settings};
