//! Session game state: board, turn, round activity and running score.

use super::config::EngineConfig;
use super::error::{MoveError, NoMoveAvailable};
use super::position::Position;
use super::rules;
use super::search;
use super::types::{Board, Move, Player, Score, TerminalStatus};
use tracing::{debug, info, instrument, warn};

/// One human-versus-computer session.
///
/// A front end reports a human move with [`apply_move`](Self::apply_move),
/// calls [`check_terminal`](Self::check_terminal), and if the round goes on
/// asks for [`computer_move`](Self::computer_move) followed by another
/// `check_terminal`. Move application never ends a round by itself; only
/// `check_terminal` does.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: bool,
    turn: Player,
    score: Score,
    history: Vec<Move>,
    config: EngineConfig,
}

impl GameState {
    /// Creates a session with the default configuration (human plays X).
    #[instrument]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Creates a session with the given configuration.
    #[instrument]
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            board: Board::new(),
            active: true,
            turn: Player::X,
            score: Score::default(),
            history: Vec::new(),
            config,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// False once the round has reached a win or draw.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Mark expected to move next.
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Running score for the session.
    pub fn score(&self) -> Score {
        self.score
    }

    /// Moves applied this round, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Mark played by the human.
    pub fn human(&self) -> Player {
        *self.config.human_mark()
    }

    /// Mark played by the computer.
    pub fn computer(&self) -> Player {
        self.config.computer_mark()
    }

    /// Evaluates the board without touching `active` or the score.
    pub fn status(&self) -> TerminalStatus {
        rules::evaluate(&self.board)
    }

    /// Places `mark` at `index`.
    ///
    /// Fails if the index is off the board, the square is taken, the round is
    /// over, or (with turn enforcement) `mark` is not the mark to move. On
    /// failure nothing changes. On success `active` is left alone.
    #[instrument(skip(self), fields(active = self.active, turn = %self.turn))]
    pub fn apply_move(&mut self, index: usize, mark: Player) -> Result<(), MoveError> {
        let position = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        if !self.active {
            return Err(MoveError::GameOver);
        }
        if *self.config.enforce_turns() && mark != self.turn {
            return Err(MoveError::WrongTurn(mark));
        }

        self.board.place(index, mark)?;
        let mov = Move::new(mark, position);
        self.history.push(mov);
        self.turn = mark.opponent();
        debug!(%mov, "Move applied");
        Ok(())
    }

    /// Checks for a win or draw and settles the round.
    ///
    /// The first time a terminal status is seen the round becomes inactive
    /// and the score is updated: a human win counts for the player, a
    /// computer win for the computer, a draw for neither side. Later calls
    /// report the same status without scoring again.
    #[instrument(skip(self))]
    pub fn check_terminal(&mut self) -> TerminalStatus {
        let status = self.status();
        if status.is_terminal() && self.active {
            self.active = false;
            match status {
                TerminalStatus::Win(winner) if winner == self.human() => {
                    self.score.record_player_win()
                }
                TerminalStatus::Win(_) => self.score.record_computer_win(),
                TerminalStatus::Draw => self.score.record_draw(),
                TerminalStatus::Ongoing => {}
            }
            info!(
                ?status,
                player = self.score.player(),
                computer = self.score.computer(),
                "Round finished"
            );
        }
        status
    }

    /// Picks the computer's move by minimax, applies it and returns its index.
    #[instrument(skip(self))]
    pub fn computer_move(&mut self) -> Result<usize, NoMoveAvailable> {
        if !self.active {
            return Err(NoMoveAvailable::GameOver);
        }
        if rules::is_full(&self.board) {
            return Err(NoMoveAvailable::BoardFull);
        }
        let computer = self.computer();
        if *self.config.enforce_turns() && self.turn != computer {
            return Err(NoMoveAvailable::WrongTurn(computer));
        }

        // None here means the board already holds a line the caller has not
        // settled with check_terminal yet.
        let index = search::best_move(self.board, computer, self.human())
            .ok_or(NoMoveAvailable::GameOver)?;

        self.apply_move(index, computer).map_err(|err| {
            warn!(%err, index, "Search produced a move the board rejected");
            NoMoveAvailable::GameOver
        })?;
        Ok(index)
    }

    /// Clears the board for a new round; scores are kept.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) {
        self.board = Board::new();
        self.active = true;
        self.turn = Player::X;
        self.history.clear();
        debug!("New round started");
    }

    /// Zeroes the score, then starts a new round.
    #[instrument(skip(self))]
    pub fn reset_scores(&mut self) {
        self.score = Score::default();
        self.new_game();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    #[test]
    fn test_new_session() {
        let game = GameState::new();
        assert!(game.is_active());
        assert_eq!(game.board(), &Board::new());
        assert_eq!(game.turn(), Player::X);
        assert_eq!(game.score(), Score::default());
        assert_eq!(game.human(), Player::X);
        assert_eq!(game.computer(), Player::O);
    }

    #[test]
    fn test_apply_move_does_not_end_round() {
        let mut game = GameState::new();
        for (index, mark) in [(0, Player::X), (3, Player::O), (1, Player::X), (4, Player::O)] {
            game.apply_move(index, mark).unwrap();
        }
        game.apply_move(2, Player::X).unwrap();
        // Line complete, but only check_terminal settles it.
        assert!(game.is_active());
        assert_eq!(game.check_terminal(), TerminalStatus::Win(Player::X));
        assert!(!game.is_active());
        assert_eq!(game.apply_move(8, Player::O), Err(MoveError::GameOver));
    }

    #[test]
    fn test_out_of_bounds() {
        let mut game = GameState::new();
        assert_eq!(game.apply_move(9, Player::X), Err(MoveError::OutOfBounds(9)));
        assert_eq!(game.board(), &Board::new());
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_history_and_turn_tracking() {
        let mut game = GameState::new();
        game.apply_move(4, Player::X).unwrap();
        assert_eq!(game.turn(), Player::O);
        let index = game.computer_move().unwrap();
        assert_eq!(game.turn(), Player::X);
        assert_eq!(
            game.history(),
            &[
                Move::new(Player::X, Position::Center),
                Move::new(Player::O, Position::from_index(index).unwrap()),
            ]
        );
        assert_eq!(game.board().get(index), Some(Square::Occupied(Player::O)));
    }

    #[test]
    fn test_terminal_status_is_scored_once() {
        let mut game = GameState::new();
        for (index, mark) in [(0, Player::O), (1, Player::O), (2, Player::O)] {
            game.apply_move(index, mark).unwrap();
        }
        assert_eq!(game.check_terminal(), TerminalStatus::Win(Player::O));
        assert_eq!(game.check_terminal(), TerminalStatus::Win(Player::O));
        assert_eq!(game.score().computer(), 1);
        assert_eq!(game.score().player(), 0);
    }

    #[test]
    fn test_enforced_turns() {
        let mut game = GameState::with_config(EngineConfig::new(Player::X, true));
        assert_eq!(game.computer_move(), Err(NoMoveAvailable::WrongTurn(Player::O)));
        assert_eq!(game.apply_move(0, Player::O), Err(MoveError::WrongTurn(Player::O)));
        game.apply_move(0, Player::X).unwrap();
        assert_eq!(game.apply_move(1, Player::X), Err(MoveError::WrongTurn(Player::X)));
        assert!(game.computer_move().is_ok());
    }

    #[test]
    fn test_unenforced_turns_trust_the_caller() {
        let mut game = GameState::new();
        game.apply_move(0, Player::X).unwrap();
        game.apply_move(1, Player::X).unwrap();
        assert_eq!(game.board().count(Player::X), 2);
    }

    #[test]
    fn test_human_playing_o_is_scored_as_player() {
        let mut game = GameState::with_config(EngineConfig::new(Player::O, false));
        assert_eq!(game.computer(), Player::X);
        for index in [2, 4, 6] {
            game.apply_move(index, Player::O).unwrap();
        }
        assert_eq!(game.check_terminal(), TerminalStatus::Win(Player::O));
        assert_eq!(game.score().player(), 1);
        assert_eq!(game.score().computer(), 0);
    }
}
