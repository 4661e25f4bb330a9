//! Move representation.
//!
//! A move is either a plain card play or a marriage declaration. Declaring a
//! marriage leads the King or Queen of the pair and banks the marriage bonus;
//! after scoring it is applied exactly like a play of the same card.
//!
//! ## Example
//!
//! ```
//! use bondtolva::cards::{Card, Rank, Suit};
//! use bondtolva::core::{Move, PlayerId};
//!
//! let king = Card::new(Rank::King, Suit::Hearts);
//! let mv = Move::declare_marriage(king, PlayerId::new("A"));
//!
//! assert!(mv.is_marriage());
//! assert_eq!(mv.card(), king);
//! assert_eq!(mv.to_string(), "A declares marriage with K-H");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use super::player::PlayerId;
use crate::cards::Card;

/// A complete move by one player.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Play a card from hand into the current trick.
    Play { card: Card, player: PlayerId },
    /// Lead a King or Queen while holding its partner, declaring the marriage.
    DeclareMarriage { card: Card, player: PlayerId },
}

impl Move {
    #[must_use]
    pub fn play(card: Card, player: PlayerId) -> Self {
        Move::Play { card, player }
    }

    #[must_use]
    pub fn declare_marriage(card: Card, player: PlayerId) -> Self {
        Move::DeclareMarriage { card, player }
    }

    /// The card that moves from hand to trick.
    #[must_use]
    pub fn card(&self) -> Card {
        match self {
            Move::Play { card, .. } | Move::DeclareMarriage { card, .. } => *card,
        }
    }

    /// The acting player.
    #[must_use]
    pub fn player(&self) -> &PlayerId {
        match self {
            Move::Play { player, .. } | Move::DeclareMarriage { player, .. } => player,
        }
    }

    #[must_use]
    pub fn is_marriage(&self) -> bool {
        matches!(self, Move::DeclareMarriage { .. })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Play { card, player } => write!(f, "{player} plays {card}"),
            Move::DeclareMarriage { card, player } => {
                write!(f, "{player} declares marriage with {card}")
            }
        }
    }
}
