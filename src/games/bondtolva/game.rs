//! Bondtolva engine bound to a configuration.

use super::{apply, dealing, moves, scoring};
use crate::cards::Card;
use crate::core::{EngineError, GameConfig, GameState, Move, PlayerId, RandomSource};
use crate::rules::{GameResult, RulesEngine};

/// A Bondtolva rules engine.
///
/// Holds only the configuration; every operation takes a state and returns a
/// new one, so one engine can drive any number of games.
#[derive(Clone, Debug, Default)]
pub struct Bondtolva {
    config: GameConfig,
}

impl Bondtolva {
    /// Create an engine, rejecting configurations that cannot be dealt.
    pub fn new(config: GameConfig) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Seat two players with a random dealer.
    pub fn initial_state(
        &self,
        player_a: PlayerId,
        player_b: PlayerId,
        rng: &mut impl RandomSource,
    ) -> Result<GameState, EngineError> {
        dealing::initial_state(player_a, player_b, rng)
    }

    /// Shuffle and deal a round.
    pub fn deal(
        &self,
        deck: &[Card],
        state: &GameState,
        rng: &mut impl RandomSource,
    ) -> Result<GameState, EngineError> {
        dealing::deal(deck, state, &self.config, rng)
    }

    /// All legal moves for the player to act.
    #[must_use]
    pub fn valid_moves(&self, state: &GameState) -> Vec<Move> {
        moves::valid_moves(state)
    }

    /// Apply a move under this engine's target score.
    pub fn make_move(&self, state: &GameState, mv: &Move) -> Result<GameState, EngineError> {
        apply::make_move(state, mv, &self.config)
    }

    /// Start the next round after a round has been scored.
    pub fn next_round(&self, state: &GameState) -> Result<GameState, EngineError> {
        dealing::next_round(state)
    }

    /// `Some` once the game has ended.
    pub fn result(&self, state: &GameState) -> Option<GameResult> {
        scoring::game_result(state)
    }
}

impl RulesEngine for Bondtolva {
    type State = GameState;
    type Move = Move;

    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn legal_moves(&self, state: &GameState) -> Vec<Move> {
        self.valid_moves(state)
    }

    fn apply_move(&self, state: &GameState, mv: &Move) -> Result<GameState, EngineError> {
        self.make_move(state, mv)
    }

    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        self.result(state)
    }
}
