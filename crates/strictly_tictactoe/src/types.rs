//! Core domain types for tic-tac-toe.

use super::error::{BoardParseError, MoveError};
use super::position::Position;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Player {
    /// Player X (opens every round).
    #[display("X")]
    X,
    /// Player O.
    #[display("O")]
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Small enough to copy, so search code can take it by value and never
/// touch the caller's board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Builds a board from squares in row-major order.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Checks if the square at `index` exists and is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Square::Empty))
    }

    /// Places a mark, rejecting out-of-range indices and occupied squares.
    pub fn place(&mut self, index: usize, player: Player) -> Result<(), MoveError> {
        let position = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        if !self.is_empty(index) {
            return Err(MoveError::SquareOccupied(position));
        }
        self.squares[index] = Square::Occupied(player);
        Ok(())
    }

    /// Returns a copy of this board with `player` placed at `index`.
    ///
    /// The caller guarantees `index` is an empty in-range square.
    pub(crate) fn with(mut self, index: usize, player: Player) -> Self {
        self.squares[index] = Square::Occupied(player);
        self
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Indices of empty squares, ascending.
    pub fn empty_squares(&self) -> impl Iterator<Item = usize> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, square)| **square == Square::Empty)
            .map(|(index, _)| index)
    }

    /// Number of squares occupied by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|square| **square == Square::Occupied(player))
            .count()
    }
}

impl std::fmt::Display for Board {
    /// Renders the grid with empty squares numbered 1-9.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.squares[pos] {
                    Square::Empty => write!(f, "{}", pos + 1)?,
                    Square::Occupied(player) => write!(f, "{}", player)?,
                }
                if col < 2 {
                    f.write_str("|")?;
                }
            }
            if row < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses nine cells of `X`, `O` or an empty marker (`-`, `.`, `_`).
    ///
    /// Whitespace and `|` separators are ignored, so `"XX-|OO-|---"` works.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|')
            .collect();
        if cells.len() != 9 {
            return Err(BoardParseError::WrongLength(cells.len()));
        }

        let mut squares = [Square::Empty; 9];
        for (square, cell) in squares.iter_mut().zip(cells) {
            *square = match cell {
                'X' | 'x' => Square::Occupied(Player::X),
                'O' | 'o' => Square::Occupied(Player::O),
                '-' | '.' | '_' => Square::Empty,
                other => return Err(BoardParseError::InvalidCell(other)),
            };
        }
        Ok(Self { squares })
    }
}

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Status of a round as reported by terminal-state detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TerminalStatus {
    /// No line and at least one empty square.
    Ongoing,
    /// A player completed a line.
    Win(Player),
    /// Board full with no line.
    Draw,
}

impl TerminalStatus {
    /// Returns true for `Win` and `Draw`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, TerminalStatus::Ongoing)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            TerminalStatus::Win(player) => Some(*player),
            _ => None,
        }
    }
}

/// Running session score.
///
/// Survives new rounds; only [`GameState::reset_scores`](crate::GameState::reset_scores)
/// clears it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Score {
    player: u32,
    computer: u32,
    draws: u32,
}

impl Score {
    /// Rounds won by the human.
    pub fn player(&self) -> u32 {
        self.player
    }

    /// Rounds won by the computer.
    pub fn computer(&self) -> u32 {
        self.computer
    }

    /// Rounds drawn.
    pub fn draws(&self) -> u32 {
        self.draws
    }

    pub(crate) fn record_player_win(&mut self) {
        self.player = self.player.saturating_add(1);
    }

    pub(crate) fn record_computer_win(&mut self) {
        self.computer = self.computer.saturating_add(1);
    }

    pub(crate) fn record_draw(&mut self) {
        self.draws = self.draws.saturating_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_counters_saturate() {
        let mut score = Score {
            player: u32::MAX,
            computer: u32::MAX,
            draws: u32::MAX,
        };
        score.record_player_win();
        score.record_computer_win();
        score.record_draw();
        assert_eq!(score.player(), u32::MAX);
        assert_eq!(score.computer(), u32::MAX);
        assert_eq!(score.draws(), u32::MAX);
    }

    #[test]
    fn test_parse_board() {
        let board: Board = "XX-|OO-|---".parse().unwrap();
        assert_eq!(board.get(0), Some(Square::Occupied(Player::X)));
        assert_eq!(board.get(4), Some(Square::Occupied(Player::O)));
        assert_eq!(board.get(2), Some(Square::Empty));
        assert_eq!(board.count(Player::X), 2);
        assert_eq!(board.empty_squares().collect::<Vec<_>>(), vec![2, 5, 6, 7, 8]);
    }

    #[test]
    fn test_parse_board_rejects_bad_input() {
        assert_eq!(
            "XX-OO".parse::<Board>(),
            Err(BoardParseError::WrongLength(5))
        );
        assert_eq!(
            "XX-OO-??-".parse::<Board>(),
            Err(BoardParseError::InvalidCell('?'))
        );
    }

    #[test]
    fn test_place_rejects_occupied_and_out_of_range() {
        let mut board = Board::new();
        board.place(4, Player::X).unwrap();
        assert_eq!(
            board.place(4, Player::O),
            Err(MoveError::SquareOccupied(Position::Center))
        );
        assert_eq!(board.place(9, Player::O), Err(MoveError::OutOfBounds(9)));
        assert_eq!(board.get(4), Some(Square::Occupied(Player::X)));
    }

    #[test]
    fn test_display_numbers_empty_squares() {
        let board: Board = "X--------".parse().unwrap();
        assert_eq!(board.to_string(), "X|2|3\n-+-+-\n4|5|6\n-+-+-\n7|8|9");
    }
}
