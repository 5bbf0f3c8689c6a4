//! Tic-tac-toe engine with exhaustive minimax search.
//!
//! # Architecture
//!
//! - **Rules**: pure outcome evaluation over the 8 winning lines
//! - **Search**: full-tree minimax move selection with a configurable
//!   blunder probability and injected randomness
//! - **Game**: typestate turn cycle (setup / in-progress / finished)
//!   with contract-checked moves
//!
//! The board is always owned by the caller; the searcher never retains
//! or mutates it.
//!
//! # Example
//!
//! ```
//! use rand::rngs::mock::StepRng;
//! use tictactoe_engine::{Board, Player, Searcher};
//!
//! let board = Board::new();
//! let engine = Searcher::with_blunder_rate(Player::O, 0.0);
//! let mut rng = StepRng::new(0, 0);
//!
//! let reply = engine.choose_move(&board, &mut rng)?;
//! assert!(board.is_empty(reply));
//! # Ok::<(), tictactoe_engine::SearchError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod contracts;
mod game;
mod phases;
mod position;
mod rules;
mod search;
mod types;

// Crate-level exports - actions
pub use action::{Move, MoveError};

// Crate-level exports - contracts
pub use contracts::{assert_invariants, BoardConsistent, Contract, HistoryComplete, LegalMove, MoveContract, PlayersTurn, SquareIsEmpty};

// Crate-level exports - turn cycle
pub use game::{GameFinished, GameInProgress, GameResult, GameSetup};

// Crate-level exports - verdicts
pub use phases::Verdict;

// Crate-level exports - outcome evaluation
pub use rules::{check_winner, evaluate, is_full, winning_line, Outcome, WinningLine, LINES};

// Crate-level exports - move search
pub use search::{SearchError, Searcher, DEFAULT_BLUNDER_RATE};

// Crate-level exports - domain types
pub use position::Position;
pub use types::{Board, Player, Square};
