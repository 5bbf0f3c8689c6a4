//! Terminal verdict for finished games.

use crate::types::Player;
use serde::{Deserialize, Serialize};

/// Verdict of a finished game.
///
/// Distinct from [`crate::Outcome`]: a finished game cannot be in
/// progress, so the verdict is always present and always terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// Player won the game.
    Winner(Player),
    /// Game ended in a draw.
    Draw,
}

impl Verdict {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Verdict::Winner(player) => Some(*player),
            Verdict::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Verdict::Draw)
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Winner(player) => write!(f, "Player {} wins", player),
            Verdict::Draw => write!(f, "Draw"),
        }
    }
}
