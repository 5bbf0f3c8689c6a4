//! Exhaustive minimax move selection.
//!
//! The searcher explores the full game tree from the given board and
//! returns the move with the best worst-case score for its own mark.
//! Terminal scores are depth-adjusted so that faster wins beat slower
//! wins and slow losses beat fast ones. A small configurable blunder
//! probability instead picks a uniformly random legal move, giving the
//! opponent occasional winning chances.

use crate::position::Position;
use crate::rules::{evaluate, Outcome};
use crate::types::{Board, Player, Square};
use rand::Rng;
use tracing::instrument;

/// Default probability of playing a random move instead of searching.
///
/// A difficulty knob, not a contract: at 0.001 the engine blunders
/// roughly once per thousand moves.
pub const DEFAULT_BLUNDER_RATE: f64 = 0.001;

/// Error that can occur when asking the searcher for a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SearchError {
    /// The board has no empty squares.
    #[display("No empty squares to play")]
    BoardFull,

    /// The board is already won; there is no move to make.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for SearchError {}

/// Minimax move searcher for one side.
///
/// The opposing mark is derived via [`Player::opponent`]. The searcher
/// holds no board state; every call receives the caller's board and
/// leaves it untouched.
#[derive(Debug, Clone, Copy)]
pub struct Searcher {
    mark: Player,
    blunder_rate: f64,
}

impl Searcher {
    /// Creates a searcher for `mark` with the default blunder rate.
    pub fn new(mark: Player) -> Self {
        Self::with_blunder_rate(mark, DEFAULT_BLUNDER_RATE)
    }

    /// Creates a searcher for `mark` with an explicit blunder rate.
    ///
    /// A rate of 0.0 always searches; 1.0 always plays randomly.
    pub fn with_blunder_rate(mark: Player, blunder_rate: f64) -> Self {
        Self { mark, blunder_rate }
    }

    /// Returns the mark this searcher plays.
    pub fn mark(&self) -> Player {
        self.mark
    }

    /// Chooses a move for the searcher's mark on the given board.
    ///
    /// With probability `blunder_rate` the move is drawn uniformly from
    /// the empty squares; otherwise every continuation is searched and
    /// the best-scoring square wins. Ties break to the lowest index
    /// (ascending [`Position::ALL`] order) - a deliberate, test-visible
    /// contract. The returned position is always empty on the input
    /// board, and the input board is never mutated.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::BoardFull`] when no square is empty and
    /// [`SearchError::GameOver`] when the board already has a winner.
    #[instrument(skip(board, rng))]
    pub fn choose_move<R: Rng>(
        &self,
        board: &Board,
        rng: &mut R,
    ) -> Result<Position, SearchError> {
        let moves = Position::valid_moves(board);
        if moves.is_empty() {
            return Err(SearchError::BoardFull);
        }
        if !matches!(evaluate(board), Outcome::InProgress) {
            return Err(SearchError::GameOver);
        }

        if rng.gen_range(0.0..1.0) < self.blunder_rate {
            return Ok(moves[rng.gen_range(0..moves.len())]);
        }

        // Search runs on a scratch copy; the caller's board stays intact.
        let mut scratch = board.clone();
        let mut best_move = moves[0];
        let mut best_score = i32::MIN;

        for pos in moves {
            scratch.set(pos, Square::Occupied(self.mark));
            let score = self.minimax(&mut scratch, 0, false);
            scratch.set(pos, Square::Empty);

            if score > best_score {
                best_score = score;
                best_move = pos;
            }
        }

        Ok(best_move)
    }

    /// Scores a position by exhaustive search.
    ///
    /// `depth` counts plies below the candidate move already placed at
    /// the top level. Wins for the searcher score `10 - depth`, wins
    /// for the opponent `depth - 10`, draws 0.
    fn minimax(&self, board: &mut Board, depth: i32, maximizing: bool) -> i32 {
        match evaluate(board) {
            Outcome::Win(player) => {
                return if player == self.mark {
                    10 - depth
                } else {
                    depth - 10
                };
            }
            Outcome::Draw => return 0,
            Outcome::InProgress => {}
        }

        let to_place = if maximizing {
            self.mark
        } else {
            self.mark.opponent()
        };
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for pos in Position::ALL {
            if !board.is_empty(pos) {
                continue;
            }
            board.set(pos, Square::Occupied(to_place));
            let score = self.minimax(board, depth + 1, !maximizing);
            board.set(pos, Square::Empty);

            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }

        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    fn board_with(marks: &[(Position, Player)]) -> Board {
        let mut board = Board::new();
        for &(pos, player) in marks {
            board.set(pos, Square::Occupied(player));
        }
        board
    }

    fn no_blunder() -> StepRng {
        StepRng::new(u64::MAX, 0)
    }

    #[test]
    fn test_takes_immediate_win() {
        // X X _ / _ O _ / O _ _ - X to move wins at top-right.
        let board = board_with(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::X),
            (Position::Center, Player::O),
            (Position::BottomLeft, Player::O),
        ]);
        let searcher = Searcher::with_blunder_rate(Player::X, 0.0);
        let mov = searcher.choose_move(&board, &mut no_blunder()).unwrap();
        assert_eq!(mov, Position::TopRight);
    }

    #[test]
    fn test_blocks_opponent_win() {
        // X X _ / _ O _ / _ _ _ - O cannot win now and must block top-right.
        let board = board_with(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::X),
            (Position::Center, Player::O),
        ]);
        let searcher = Searcher::with_blunder_rate(Player::O, 0.0);
        let mov = searcher.choose_move(&board, &mut no_blunder()).unwrap();
        assert_eq!(mov, Position::TopRight);
    }

    #[test]
    fn test_errors_on_won_board() {
        let board = board_with(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::X),
            (Position::TopRight, Player::X),
            (Position::MiddleLeft, Player::O),
            (Position::Center, Player::O),
        ]);
        let searcher = Searcher::new(Player::O);
        assert_eq!(
            searcher.choose_move(&board, &mut no_blunder()),
            Err(SearchError::GameOver)
        );
    }

    #[test]
    fn test_errors_on_full_board() {
        // X O X / O X X / O X O - full, drawn.
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
        let searcher = Searcher::new(Player::X);
        assert_eq!(
            searcher.choose_move(&board, &mut no_blunder()),
            Err(SearchError::BoardFull)
        );
    }

    #[test]
    fn test_blunder_branch_returns_legal_move() {
        // StepRng at 0 makes the uniform draw 0.0, forcing the blunder
        // branch even at the default rate.
        let board = board_with(&[(Position::Center, Player::X)]);
        let searcher = Searcher::new(Player::O);
        let mut rng = StepRng::new(0, 0);
        let mov = searcher.choose_move(&board, &mut rng).unwrap();
        assert!(board.is_empty(mov));
    }
}
