//! # bondtolva
//!
//! A rules engine for Bondtolva, a two-player trick-taking card game played
//! with a 20-card deck.
//!
//! ## Design Principles
//!
//! 1. **Pure transitions**: every operation takes a state and returns a new
//!    one. Inputs are never mutated, so any position can be kept, compared
//!    or explored further.
//!
//! 2. **One legality gate**: `make_move` applies a move only if `valid_moves`
//!    offers it. Drivers never need to re-check the rules.
//!
//! 3. **Injected randomness**: seating and shuffling draw from a
//!    [`RandomSource`], so seeded games replay exactly.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: hands, piles and the stock use `im-rs`,
//!   making state clones O(1).
//!
//! - **Errors as values**: illegal moves and malformed states come back as
//!   [`EngineError`], never as panics.
//!
//! ## Modules
//!
//! - `core`: Players and seats, state, moves, RNG, configuration, errors
//! - `cards`: Cards and the deck
//! - `rules`: RulesEngine trait for game implementations
//! - `games`: The Bondtolva rules
//!
//! ## Example
//!
//! ```
//! use bondtolva::{build_deck, deal, initial_state, make_move, valid_moves, GameRng, PlayerId};
//!
//! let mut rng = GameRng::new(1);
//! let seated = initial_state(PlayerId::new("ann"), PlayerId::new("bo"), &mut rng).unwrap();
//! let state = deal(&build_deck(), &seated, &mut rng).unwrap();
//!
//! let mv = valid_moves(&state)[0].clone();
//! let next = make_move(&state, &mv).unwrap();
//! assert_eq!(next.current_trick.len(), 1);
//! ```

pub mod core;
pub mod cards;
pub mod rules;
pub mod games;

// Re-export commonly used types
pub use crate::core::{
    PlayerId, Seat, SeatMap,
    GameRng, GameRngState, RandomSource,
    GameConfig, Move,
    EngineError, Violation,
    GameState, Phase, PlayerState, TrickPlay,
};

pub use crate::cards::{Card, ParseCardError, Rank, Suit, build_deck, DECK_SIZE};

pub use crate::rules::{RulesEngine, GameResult};

pub use crate::games::bondtolva::{
    Bondtolva,
    initial_state, deal, valid_moves, make_move, next_round,
    check_integrity, game_result, tally, Tally,
};
