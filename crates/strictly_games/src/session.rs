//! Interactive terminal session: reads human input, drives the engine,
//! and prints what happened.

use crate::render;
use crate::settings::Settings;
use anyhow::Result;
use std::io::{BufRead, Write};
use strictly_tictactoe::{GameState, Position, analyze};
use tracing::{debug, instrument};

const HELP: &str = "Enter a square as 1-9 or by name (e.g. `center`, `top-left`).\n\
Commands: `new` starts another round, `reset` also clears the score, `quit` exits.";

/// A parsed line of human input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Play a square.
    Square(Position),
    /// Start a new round, keeping the score.
    New,
    /// Clear the score and start a new round.
    Reset,
    /// Show help.
    Help,
    /// Leave the session.
    Quit,
}

impl Input {
    /// Parses one line of input.
    #[instrument]
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().to_lowercase().as_str() {
            "new" | "n" => Some(Input::New),
            "reset" | "r" => Some(Input::Reset),
            "help" | "h" | "?" => Some(Input::Help),
            "quit" | "q" | "exit" => Some(Input::Quit),
            other => Position::parse_input(other).map(Input::Square),
        }
    }
}

/// A human-versus-computer session over any reader and writer.
pub struct Session<R, W> {
    game: GameState,
    settings: Settings,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session.
    pub fn new(settings: Settings, input: R, output: W) -> Self {
        Self {
            game: GameState::with_config(*settings.engine()),
            settings,
            input,
            output,
        }
    }

    /// Game state, for inspection after the session ends.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Runs until `quit` or end of input.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "{}\n", HELP)?;
        self.start_round()?;

        let mut line = String::new();
        loop {
            if self.game.is_active() {
                let prompt = render::turn_prompt(self.game.human(), &self.game.score());
                write!(self.output, "{}", prompt)?;
            } else {
                write!(self.output, "> ")?;
            }
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                debug!("End of input");
                break;
            }

            match Input::parse(&line) {
                Some(Input::Square(position)) => self.human_turn(position)?,
                Some(Input::New) => {
                    self.game.new_game();
                    self.start_round()?;
                }
                Some(Input::Reset) => {
                    self.game.reset_scores();
                    writeln!(self.output, "Score cleared.")?;
                    self.start_round()?;
                }
                Some(Input::Help) => writeln!(self.output, "{}", HELP)?,
                Some(Input::Quit) => break,
                None => writeln!(
                    self.output,
                    "Unrecognised input {:?}. Type `help` for options.",
                    line.trim()
                )?,
            }
        }

        writeln!(
            self.output,
            "\nFinal score: {}",
            render::scoreboard(&self.game.score())
        )?;
        Ok(())
    }

    /// Shows the empty board; the computer opens when it plays X.
    fn start_round(&mut self) -> Result<()> {
        writeln!(self.output, "New round. You play {}.", self.game.human())?;
        if self.game.computer() == self.game.turn() {
            self.computer_turn()?;
        } else {
            writeln!(self.output, "{}\n", self.game.board())?;
        }
        Ok(())
    }

    #[instrument(skip(self))]
    fn human_turn(&mut self, position: Position) -> Result<()> {
        if !self.game.is_active() {
            writeln!(self.output, "The round is over. Type `new` to play again.")?;
            return Ok(());
        }
        if let Err(err) = self.game.apply_move(position.to_index(), self.game.human()) {
            let open: Vec<String> = Position::valid_moves(self.game.board())
                .iter()
                .map(|pos| (pos.to_index() + 1).to_string())
                .collect();
            writeln!(self.output, "{}. Open squares: {}", err, open.join(", "))?;
            return Ok(());
        }
        if self.settle()? {
            return Ok(());
        }
        self.computer_turn()
    }

    fn computer_turn(&mut self) -> Result<()> {
        if *self.settings.show_analysis() {
            let analysis = analyze(*self.game.board(), self.game.computer(), self.game.human());
            writeln!(
                self.output,
                "Computer's view ({} positions searched):\n{}",
                analysis.nodes(),
                render::analysis_grid(self.game.board(), &analysis)
            )?;
        }

        let index = self.game.computer_move()?;
        if let Some(position) = Position::from_index(index) {
            writeln!(self.output, "Computer plays {}.", position)?;
        }
        self.settle()?;
        Ok(())
    }

    /// Prints the board and, if the round ended, the result. Returns true when
    /// the round is over.
    fn settle(&mut self) -> Result<bool> {
        let status = self.game.check_terminal();
        writeln!(self.output, "{}\n", self.game.board())?;
        if let Some(message) = render::status_message(status, self.game.human()) {
            writeln!(self.output, "{}", message)?;
            writeln!(self.output, "{}", render::scoreboard(&self.game.score()))?;
            writeln!(self.output, "Type `new` to play again or `quit` to exit.")?;
        }
        Ok(status.is_terminal())
    }
}
