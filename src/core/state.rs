//! Game state.
//!
//! ## PlayerState
//!
//! Per-seat round and game data: hand, declared marriages, won cards and
//! cumulative score.
//!
//! ## GameState
//!
//! The complete position: seats, per-seat state, current trick, trump, stock,
//! player to move, dealer and phase.
//!
//! Uses `im` persistent data structures, so cloning a state is O(1) and the
//! clone shares no mutable substructure with the original. Every transition
//! clones its input and returns the modified copy.

use im::{OrdSet, Vector};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::error::EngineError;
use super::player::{PlayerId, Seat, SeatMap};
use crate::cards::{Card, Suit};

/// Round and game progression.
///
/// `Dealing → StockOpen → StockClosed → RoundScoring`, with `GameEnd`
/// reachable from any playing phase once a score reaches the target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Before any cards are distributed.
    Dealing,
    /// Stock nonempty; any card may be played, marriages may be declared.
    StockOpen,
    /// Stock empty; follow suit, head if possible, otherwise trump.
    StockClosed,
    /// Both hands empty; round bonuses have been scored.
    RoundScoring,
    /// Terminal: a cumulative score reached the target.
    GameEnd,
}

impl Phase {
    /// Phases in which moves can be made.
    #[must_use]
    pub fn is_playing(self) -> bool {
        matches!(self, Phase::StockOpen | Phase::StockClosed)
    }
}

/// One card played into the current trick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrickPlay {
    pub seat: Seat,
    pub card: Card,
}

/// Per-seat state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Cards held.
    pub hand: OrdSet<Card>,
    /// Suits in which a marriage was declared this round.
    pub marriages: OrdSet<Suit>,
    /// Cards won in completed tricks, in play order.
    pub tricks_won: Vector<Card>,
    /// Cumulative score across rounds.
    pub score: u32,
}

impl PlayerState {
    #[must_use]
    pub fn holds(&self, card: Card) -> bool {
        self.hand.contains(&card)
    }
}

/// Complete game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Player ids by seat. Seat 0 is the elder hand of the first round.
    pub players: SeatMap<PlayerId>,

    /// Per-seat state.
    pub player_states: SeatMap<PlayerState>,

    /// Plays in the trick in progress (0 or 1 between moves).
    pub current_trick: SmallVec<[TrickPlay; 2]>,

    /// Trump suit, fixed by the first marriage of the round.
    pub trump: Option<Suit>,

    /// Undealt cards; drawn from the back.
    pub stock: Vector<Card>,

    /// Seat to move.
    pub current_player: Seat,

    /// Seat that dealt this round.
    pub dealer: Seat,

    pub phase: Phase,

    /// Round number, starting at 1.
    pub round: u32,
}

impl GameState {
    /// An empty table in `Dealing` with `dealer` dealing and the other seat to move.
    #[must_use]
    pub fn new(players: SeatMap<PlayerId>, dealer: Seat) -> Self {
        Self {
            players,
            player_states: SeatMap::with_default(),
            current_trick: SmallVec::new(),
            trump: None,
            stock: Vector::new(),
            current_player: dealer.other(),
            dealer,
            phase: Phase::Dealing,
            round: 1,
        }
    }

    /// Id of the player at `seat`.
    #[must_use]
    pub fn player_id(&self, seat: Seat) -> &PlayerId {
        &self.players[seat]
    }

    #[must_use]
    pub fn current_player_id(&self) -> &PlayerId {
        self.player_id(self.current_player)
    }

    #[must_use]
    pub fn dealer_id(&self) -> &PlayerId {
        self.player_id(self.dealer)
    }

    /// The non-dealer, who leads the first trick.
    #[must_use]
    pub fn elder(&self) -> Seat {
        self.dealer.other()
    }

    #[must_use]
    pub fn player_state(&self, seat: Seat) -> &PlayerState {
        &self.player_states[seat]
    }

    #[must_use]
    pub fn hand(&self, seat: Seat) -> &OrdSet<Card> {
        &self.player_states[seat].hand
    }

    #[must_use]
    pub fn score(&self, seat: Seat) -> u32 {
        self.player_states[seat].score
    }

    /// The card that opened the current trick.
    #[must_use]
    pub fn led_card(&self) -> Option<Card> {
        self.current_trick.first().map(|play| play.card)
    }

    /// Every card in play, zone by zone.
    pub fn all_cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.player_states
            .values()
            .flat_map(|ps| ps.hand.iter().chain(ps.tricks_won.iter()).copied())
            .chain(self.stock.iter().copied())
            .chain(self.current_trick.iter().map(|play| play.card))
    }

    /// Encode the state as a compact binary snapshot.
    pub fn to_bytes(&self) -> Result<Vec<u8>, EngineError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a snapshot produced by [`GameState::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, EngineError> {
        Ok(bincode::deserialize(bytes)?)
    }
}
