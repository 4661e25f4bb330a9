//! Engine error types.
//!
//! Two kinds matter to a driver:
//!
//! - [`EngineError::InvalidMove`]: the move is not in the current legal set.
//!   Recoverable; re-prompt for a legal move.
//! - [`EngineError::Precondition`]: an operation was called in the wrong phase
//!   or on a malformed state or deck. A bug in the driver or the engine.
//!
//! Neither kind leaves a partially applied state behind.

use thiserror::Error;

use super::action::Move;
use super::state::Phase;
use crate::cards::Card;

/// Precondition failures.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("expected phase {expected:?}, found {found:?}")]
    PhaseMismatch { expected: Phase, found: Phase },

    #[error("deck must hold {expected} cards, got {found}")]
    DeckSize { expected: usize, found: usize },

    #[error("card {0} appears more than once")]
    DuplicateCard(Card),

    #[error("both seats were given the same player id {0:?}")]
    DuplicatePlayers(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("expected {expected} cards in play, found {found}")]
    CardCount { expected: usize, found: usize },

    #[error("current trick holds {0} plays")]
    TrickOverflow(usize),

    #[error("hand sizes {first} and {second} do not match the current trick")]
    HandSizes { first: usize, second: usize },

    #[error("stock holds {stock} cards in phase {phase:?}")]
    StockPhase { stock: usize, phase: Phase },
}

/// Error returned by engine operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("invalid move: {0}")]
    InvalidMove(Move),

    #[error("precondition violated: {0}")]
    Precondition(#[from] Violation),

    #[error("snapshot error: {0}")]
    Snapshot(String),
}

impl EngineError {
    /// Only an invalid move can be fixed by the driver choosing again.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, EngineError::InvalidMove(_))
    }
}

impl From<bincode::Error> for EngineError {
    fn from(err: bincode::Error) -> Self {
        EngineError::Snapshot(err.to_string())
    }
}
