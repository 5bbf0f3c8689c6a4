//! Contract-based validation for tic-tac-toe.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use crate::action::{Move, MoveError};
use crate::game::GameInProgress;
use crate::types::{Board, Player, Square};
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Precondition: The square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Checks that the target square is empty.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameInProgress) -> Result<(), MoveError> {
        if !game.board().is_empty(mov.position) {
            Err(MoveError::SquareOccupied(mov.position))
        } else {
            Ok(())
        }
    }
}

/// Precondition: It must be the player's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Checks that the move's player is the player to move.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameInProgress) -> Result<(), MoveError> {
        if mov.player != game.to_move() {
            Err(MoveError::WrongPlayer(mov.player))
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: A move is legal if the square is empty and it's the player's turn.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameInProgress) -> Result<(), MoveError> {
        SquareIsEmpty::check(mov, game)?;
        PlayersTurn::check(mov, game)?;
        Ok(())
    }
}

/// Contract for move actions.
///
/// Preconditions:
/// - Square must be empty
/// - Must be player's turn
///
/// Postconditions:
/// - Mark counts stay balanced
/// - History remains consistent with board
pub struct MoveContract;

impl Contract<GameInProgress, Move> for MoveContract {
    fn pre(game: &GameInProgress, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, game)
    }

    fn post(_before: &GameInProgress, after: &GameInProgress) -> Result<(), MoveError> {
        if !BoardConsistent::holds(after.board()) {
            return Err(MoveError::InvariantViolation(
                "mark counts differ by more than one".to_string(),
            ));
        }
        if !HistoryComplete::holds(after) {
            return Err(MoveError::InvariantViolation(
                "history length does not match filled squares".to_string(),
            ));
        }
        Ok(())
    }
}

/// Invariant: Board state is consistent (X's and O's differ by ≤ 1).
pub struct BoardConsistent;

impl BoardConsistent {
    /// Returns true if the mark counts are balanced.
    #[instrument(skip(board))]
    pub fn holds(board: &Board) -> bool {
        let x_count = board
            .squares()
            .iter()
            .filter(|s| matches!(s, Square::Occupied(Player::X)))
            .count();
        let o_count = board
            .squares()
            .iter()
            .filter(|s| matches!(s, Square::Occupied(Player::O)))
            .count();

        let diff = x_count.abs_diff(o_count);

        let valid = diff <= 1;
        if !valid {
            warn!(x_count, o_count, "Board consistency violated");
        }
        valid
    }
}

/// Invariant: History length matches filled squares.
pub struct HistoryComplete;

impl HistoryComplete {
    /// Returns true if every filled square has a history entry.
    #[instrument(skip(game))]
    pub fn holds(game: &GameInProgress) -> bool {
        let filled = game
            .board()
            .squares()
            .iter()
            .filter(|s| !matches!(s, Square::Empty))
            .count();
        let history_len = game.history().len();

        let valid = filled == history_len;
        if !valid {
            warn!(filled, history_len, "History completeness violated");
        }
        valid
    }
}

/// Asserts that all game invariants hold (panic on violation in debug builds).
#[instrument(skip(game))]
pub fn assert_invariants(game: &GameInProgress) {
    debug_assert!(
        BoardConsistent::holds(game.board()),
        "Board consistency violated"
    );
    debug_assert!(HistoryComplete::holds(game), "History completeness violated");
}
