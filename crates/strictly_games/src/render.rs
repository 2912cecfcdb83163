//! Text for the terminal front end, built from engine values.

use strictly_tictactoe::{Analysis, Board, Player, Score, Square, TerminalStatus};

/// Message announcing the end of a round, from the human's point of view.
pub fn status_message(status: TerminalStatus, human: Player) -> Option<&'static str> {
    match status {
        TerminalStatus::Ongoing => None,
        TerminalStatus::Win(winner) if winner == human => Some("You win!"),
        TerminalStatus::Win(_) => Some("Computer wins!"),
        TerminalStatus::Draw => Some("It's a draw!"),
    }
}

/// One-line scoreboard.
pub fn scoreboard(score: &Score) -> String {
    format!(
        "You {} - {} Computer (draws: {})",
        score.player(),
        score.computer(),
        score.draws()
    )
}

/// Prompt shown when the human is to move.
pub fn turn_prompt(human: Player, score: &Score) -> String {
    format!("Your move ({}) [{}]: ", human, scoreboard(score))
}

/// Grid of minimax scores: marks for occupied squares, signed scores otherwise.
pub fn analysis_grid(board: &Board, analysis: &Analysis) -> String {
    let mut out = String::new();
    for row in 0..3 {
        let cells: Vec<String> = (0..3)
            .map(|col| {
                let index = row * 3 + col;
                let cell = match (board.get(index), analysis.scores()[index]) {
                    (Some(Square::Occupied(player)), _) => player.to_string(),
                    (_, Some(0)) => "0".to_string(),
                    (_, Some(score)) => format!("{:+}", score),
                    _ => "?".to_string(),
                };
                format!("{:^4}", cell)
            })
            .collect();
        out.push_str(&cells.join("|"));
        if row < 2 {
            out.push_str("\n----+----+----\n");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_messages() {
        assert_eq!(status_message(TerminalStatus::Ongoing, Player::X), None);
        assert_eq!(
            status_message(TerminalStatus::Win(Player::X), Player::X),
            Some("You win!")
        );
        assert_eq!(
            status_message(TerminalStatus::Win(Player::X), Player::O),
            Some("Computer wins!")
        );
        assert_eq!(
            status_message(TerminalStatus::Draw, Player::X),
            Some("It's a draw!")
        );
    }

    #[test]
    fn test_scoreboard() {
        assert_eq!(
            scoreboard(&Score::default()),
            "You 0 - 0 Computer (draws: 0)"
        );
    }

    #[test]
    fn test_analysis_grid() {
        let board: Board = "XX-OO-X--".parse().unwrap();
        let analysis = strictly_tictactoe::analyze(board, Player::O, Player::X);
        let grid = analysis_grid(&board, &analysis);
        let rows: Vec<&str> = grid.lines().collect();
        assert_eq!(rows[0], " X  | X  | 0  ");
        assert_eq!(rows[2], " O  | O  | +1 ");
        assert_eq!(rows[4], " X  | -1 | -1 ");
    }
}
