//! Core engine types: players and seats, state, moves, RNG, configuration, errors.

pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod error;
pub mod state;

pub use player::{PlayerId, Seat, SeatMap};
pub use rng::{GameRng, GameRngState, RandomSource};
pub use config::GameConfig;
pub use action::Move;
pub use error::{EngineError, Violation};
pub use state::{GameState, Phase, PlayerState, TrickPlay};
