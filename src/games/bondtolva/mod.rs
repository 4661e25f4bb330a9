//! Bondtolva: a two-player trick-taking game with a 20-card deck.
//!
//! - Ranks K, T, Q, J, 9 in four suits; Kings and Tens are matadors
//! - Six cards each, dealt in packets of three; the rest forms the stock
//! - While the stock is open, anything may be played and the trick winner
//!   draws first; the leader may declare a King-Queen marriage
//! - Once the stock is gone, follow suit, head if able, else trump if able
//! - Last trick, matador majority and card-point majority score at round end
//! - First to 12 points wins
//!
//! The free functions here use [`GameConfig::default`]; [`Bondtolva`] binds
//! a custom configuration.

mod apply;
mod dealing;
mod game;
mod integrity;
mod moves;
mod scoring;
mod trick;

#[cfg(test)]
pub(crate) mod fixtures;

pub use game::Bondtolva;
pub use integrity::{check_integrity, require_phase};
pub use moves::{declarable_marriages, follow_cards};
pub use scoring::{game_result, tally, target_reached, Tally};
pub use trick::{card_beats, trick_winner};
pub use dealing::next_round;

use crate::cards::Card;
use crate::core::{EngineError, GameConfig, GameState, Move, PlayerId, RandomSource};

/// Seat two players with a random dealer. See [`Bondtolva::initial_state`].
pub fn initial_state(
    player_a: PlayerId,
    player_b: PlayerId,
    rng: &mut impl RandomSource,
) -> Result<GameState, EngineError> {
    dealing::initial_state(player_a, player_b, rng)
}

/// Shuffle `deck` and deal a standard round.
pub fn deal(
    deck: &[Card],
    state: &GameState,
    rng: &mut impl RandomSource,
) -> Result<GameState, EngineError> {
    dealing::deal(deck, state, &GameConfig::default(), rng)
}

/// All legal moves for the player to act.
#[must_use]
pub fn valid_moves(state: &GameState) -> Vec<Move> {
    moves::valid_moves(state)
}

/// Apply a move under the standard rules.
pub fn make_move(state: &GameState, mv: &Move) -> Result<GameState, EngineError> {
    apply::make_move(state, mv, &GameConfig::default())
}
