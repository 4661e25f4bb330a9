//! Rules engine trait for game implementations.
//!
//! A rules engine answers three questions about a position:
//! - What moves are legal
//! - What position a move leads to
//! - Whether the game is over, and who won

use crate::core::{EngineError, GameConfig, PlayerId};

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Both players finished level.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: &PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => p == player,
            GameResult::Draw => false,
        }
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_moves`: Return empty vec if nobody can act
/// - `apply_move`: Must be deterministic and must not touch its input
/// - `is_terminal`: Return None if game continues
pub trait RulesEngine {
    type State;
    type Move: PartialEq;

    /// Get the game configuration.
    fn config(&self) -> &GameConfig;

    /// Enumerate the legal moves of the player to act.
    fn legal_moves(&self, state: &Self::State) -> Vec<Self::Move>;

    /// Apply a move, returning the next state.
    ///
    /// Fails with [`EngineError::InvalidMove`] for any move not returned by
    /// `legal_moves`.
    fn apply_move(&self, state: &Self::State, mv: &Self::Move) -> Result<Self::State, EngineError>;

    /// Check if the game is over.
    ///
    /// Returns `Some(result)` if the game has ended, `None` if it continues.
    fn is_terminal(&self, state: &Self::State) -> Option<GameResult>;

    /// Is `mv` in the legal set?
    fn is_legal(&self, state: &Self::State, mv: &Self::Move) -> bool {
        self.legal_moves(state).contains(mv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_result_is_winner() {
        let a = PlayerId::new("A");
        let b = PlayerId::new("B");

        let result = GameResult::Winner(b.clone());
        assert!(!result.is_winner(&a));
        assert!(result.is_winner(&b));

        let draw = GameResult::Draw;
        assert!(!draw.is_winner(&a));
        assert!(!draw.is_winner(&b));
    }
}
