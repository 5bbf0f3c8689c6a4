//! Outcome evaluation for tic-tac-toe boards.
//!
//! The evaluator is a pure pattern-match over the 8 winning lines.
//! It never validates or caches anything: callers hand it a board, it
//! reports what is on it, including boards that could not arise under
//! legal alternating play.

mod draw;
mod win;

pub use draw::is_full;
pub use win::{check_winner, winning_line, WinningLine, LINES};

use crate::types::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The evaluated status of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A player has three in a row.
    Win(Player),
    /// The board is full with no winner.
    Draw,
    /// Play continues.
    InProgress,
}

/// Evaluates a board: win, draw, or still in progress.
///
/// Lines are scanned in the declared [`LINES`] order; the first
/// completed line determines the winner. A win on a full board is
/// reported as a win, not a draw.
#[instrument]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(player) = check_winner(board) {
        return Outcome::Win(player);
    }
    if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use crate::types::Square;

    fn board_with(marks: &[(Position, Player)]) -> Board {
        let mut board = Board::new();
        for &(pos, player) in marks {
            board.set(pos, Square::Occupied(player));
        }
        board
    }

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(evaluate(&Board::new()), Outcome::InProgress);
    }

    #[test]
    fn test_win_with_unrelated_marks_elsewhere() {
        let board = board_with(&[
            (Position::MiddleLeft, Player::O),
            (Position::Center, Player::O),
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::X),
            (Position::TopRight, Player::X),
            (Position::BottomRight, Player::O),
        ]);
        assert_eq!(evaluate(&board), Outcome::Win(Player::X));
    }

    #[test]
    fn test_full_board_no_line_is_draw() {
        // X O X / O X X / O X O
        let board = board_with(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::O),
            (Position::TopRight, Player::X),
            (Position::MiddleLeft, Player::O),
            (Position::Center, Player::X),
            (Position::MiddleRight, Player::X),
            (Position::BottomLeft, Player::O),
            (Position::BottomCenter, Player::X),
            (Position::BottomRight, Player::O),
        ]);
        assert_eq!(evaluate(&board), Outcome::Draw);
    }

    #[test]
    fn test_win_on_full_board_beats_draw() {
        // X O X / O X O / X X O - diagonal 0,4,8 completes for X.
        let board = board_with(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::O),
            (Position::TopRight, Player::X),
            (Position::MiddleLeft, Player::O),
            (Position::Center, Player::X),
            (Position::MiddleRight, Player::O),
            (Position::BottomLeft, Player::X),
            (Position::BottomCenter, Player::X),
            (Position::BottomRight, Player::O),
        ]);
        // 2,4,6 is X,X,X here as well; 0,4,8 is X,X,O.
        assert_eq!(evaluate(&board), Outcome::Win(Player::X));
        let line = winning_line(&board).unwrap();
        assert_eq!(
            line.positions(),
            [Position::TopRight, Position::Center, Position::BottomLeft]
        );
    }

    #[test]
    fn test_diagonal_win_mid_game() {
        // X O X / O X O / _ _ X - diagonal 0,4,8 completes for X.
        let board = board_with(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::O),
            (Position::TopRight, Player::X),
            (Position::MiddleLeft, Player::O),
            (Position::Center, Player::X),
            (Position::MiddleRight, Player::O),
            (Position::BottomRight, Player::X),
        ]);
        assert_eq!(evaluate(&board), Outcome::Win(Player::X));
        let line = winning_line(&board).unwrap();
        assert_eq!(
            line.positions(),
            [Position::TopLeft, Position::Center, Position::BottomRight]
        );
    }
}
