//! Exhaustive minimax search for the computer opponent.
//!
//! The search walks the whole game tree below a position. There is no
//! pruning and no depth limit; a tic-tac-toe tree is at most 9 plies deep.
//! Boards are passed by value, so the caller's board is never modified.
//!
//! Scores are +1 (maximizing mark wins), -1 (minimizing mark wins) and 0
//! (draw). Depth is counted for statistics only and never weighs a score,
//! so a win in five plies ranks the same as a win in one. Among equally
//! scored moves the lowest index is chosen, which keeps play deterministic.

use super::rules::{check_winner, is_full};
use super::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Result of searching one position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    scores: [Option<i8>; 9],
    best: Option<usize>,
    nodes: u64,
    max_depth: u8,
}

impl Analysis {
    /// Index chosen for the maximizing mark, if any move exists.
    pub fn best(&self) -> Option<usize> {
        self.best
    }

    /// Score of playing each square; `None` for occupied squares.
    pub fn scores(&self) -> &[Option<i8>; 9] {
        &self.scores
    }

    /// Score of the best move.
    pub fn best_score(&self) -> Option<i8> {
        self.best.and_then(|index| self.scores[index])
    }

    /// Positions evaluated, including the candidate moves themselves.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Deepest ply reached below the searched position.
    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }
}

#[derive(Debug, Default)]
struct SearchStats {
    nodes: u64,
    max_depth: u8,
}

impl SearchStats {
    fn visit(&mut self, depth: u8) {
        self.nodes += 1;
        self.max_depth = self.max_depth.max(depth);
    }
}

/// Returns the best square for `maximizing` to play, or `None` if the board
/// is full or already won.
#[instrument(skip(board))]
pub fn best_move(board: Board, maximizing: Player, minimizing: Player) -> Option<usize> {
    analyze(board, maximizing, minimizing).best()
}

/// Scores every legal move for `maximizing` and picks the best one.
#[instrument(skip(board))]
pub fn analyze(board: Board, maximizing: Player, minimizing: Player) -> Analysis {
    let mut stats = SearchStats::default();
    let mut scores = [None; 9];
    let mut best: Option<(usize, i8)> = None;

    if check_winner(&board).is_none() {
        for index in board.empty_squares() {
            let child = board.with(index, maximizing);
            let score = minimax(child, false, maximizing, minimizing, 1, &mut stats);
            scores[index] = Some(score);
            // Strictly greater: ties keep the lowest index.
            if best.is_none_or(|(_, top)| score > top) {
                best = Some((index, score));
            }
        }
    }

    let analysis = Analysis {
        scores,
        best: best.map(|(index, _)| index),
        nodes: stats.nodes,
        max_depth: stats.max_depth,
    };
    debug!(
        best = ?analysis.best,
        score = ?analysis.best_score(),
        nodes = analysis.nodes,
        max_depth = analysis.max_depth,
        "Search complete"
    );
    analysis
}

/// Recursive evaluation. `maximizing_to_move` says whose turn it is on `board`.
fn minimax(
    board: Board,
    maximizing_to_move: bool,
    maximizing: Player,
    minimizing: Player,
    depth: u8,
    stats: &mut SearchStats,
) -> i8 {
    stats.visit(depth);

    if let Some(winner) = check_winner(&board) {
        return if winner == maximizing { 1 } else { -1 };
    }
    if is_full(&board) {
        return 0;
    }

    let to_move = if maximizing_to_move {
        maximizing
    } else {
        minimizing
    };
    let children = board.empty_squares().map(|index| {
        minimax(
            board.with(index, to_move),
            !maximizing_to_move,
            maximizing,
            minimizing,
            depth + 1,
            stats,
        )
    });

    let score = if maximizing_to_move {
        children.max()
    } else {
        children.min()
    };
    score.unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_takes_immediate_win() {
        // X X - / O O - / X - -: O completes the middle row.
        let board: Board = "XX-OO-X--".parse().unwrap();
        assert_eq!(best_move(board, Player::O, Player::X), Some(5));
    }

    #[test]
    fn test_blocks_when_no_win_available() {
        // X X - / - O - / - - -: O must take 2.
        let board: Board = "XX--O----".parse().unwrap();
        let analysis = analyze(board, Player::O, Player::X);
        assert_eq!(analysis.best(), Some(2));
        assert_eq!(analysis.best_score(), Some(0));
        // Every other reply loses.
        for index in [3, 5, 6, 7, 8] {
            assert_eq!(analysis.scores()[index], Some(-1), "square {}", index);
        }
    }

    #[test]
    fn test_no_move_on_full_or_won_board() {
        let full: Board = "XOXOXXOXO".parse().unwrap();
        assert_eq!(best_move(full, Player::O, Player::X), None);

        let won: Board = "XXX-OO---".parse().unwrap();
        let analysis = analyze(won, Player::O, Player::X);
        assert_eq!(analysis.best(), None);
        assert_eq!(analysis.scores(), &[None; 9]);
    }

    #[test]
    fn test_occupied_squares_have_no_score() {
        let board: Board = "X---O----".parse().unwrap();
        let analysis = analyze(board, Player::X, Player::O);
        assert_eq!(analysis.scores()[0], None);
        assert_eq!(analysis.scores()[4], None);
        assert!(analysis.scores()[1].is_some());
    }

    #[test]
    fn test_stats_cover_whole_tree() {
        // One empty square: one node at depth 1.
        let board: Board = "XOXXOOOX-".parse().unwrap();
        let analysis = analyze(board, Player::X, Player::O);
        assert_eq!(analysis.best(), Some(8));
        assert_eq!(analysis.nodes(), 1);
        assert_eq!(analysis.max_depth(), 1);
    }
}
