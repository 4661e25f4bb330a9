//! Card model: ranks, suits and the card value itself.
//!
//! ## Rank order
//!
//! Bondtolva plays with a 20-card deck of five ranks per suit. The trick-taking
//! order is unusual: the Ten sits between the King and the Queen.
//!
//! | Rank  | Strength | Card points | Matador |
//! |-------|----------|-------------|---------|
//! | King  | 4        | 3           | yes     |
//! | Ten   | 3        | 4           | yes     |
//! | Queen | 2        | 2           | no      |
//! | Jack  | 1        | 1           | no      |
//! | Nine  | 0        | 0           | no      |
//!
//! `Ord` on `Rank`, `Suit` and `Card` exists for stable ordering of hands only.
//! Trick resolution and heading always go through [`Rank::strength`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Card rank, declared strongest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    King,
    Ten,
    Queen,
    Jack,
    Nine,
}

impl Rank {
    /// All ranks, strongest first.
    pub const ALL: [Rank; 5] = [Rank::King, Rank::Ten, Rank::Queen, Rank::Jack, Rank::Nine];

    /// Trick-taking strength. Higher wins.
    #[must_use]
    pub const fn strength(self) -> u8 {
        match self {
            Rank::King => 4,
            Rank::Ten => 3,
            Rank::Queen => 2,
            Rank::Jack => 1,
            Rank::Nine => 0,
        }
    }

    /// Card points counted by the round-end tie-break.
    #[must_use]
    pub const fn points(self) -> u32 {
        match self {
            Rank::Ten => 4,
            Rank::King => 3,
            Rank::Queen => 2,
            Rank::Jack => 1,
            Rank::Nine => 0,
        }
    }

    /// Kings and Tens are matadors.
    #[must_use]
    pub const fn is_matador(self) -> bool {
        matches!(self, Rank::King | Rank::Ten)
    }

    /// Does this rank head `other` (strictly stronger)?
    #[must_use]
    pub const fn beats(self, other: Rank) -> bool {
        self.strength() > other.strength()
    }

    const fn symbol(self) -> char {
        match self {
            Rank::King => 'K',
            Rank::Ten => 'T',
            Rank::Queen => 'Q',
            Rank::Jack => 'J',
            Rank::Nine => '9',
        }
    }
}

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Spades,
    Diamonds,
    Clubs,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Spades, Suit::Diamonds, Suit::Clubs];

    const fn symbol(self) -> char {
        match self {
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// An immutable (rank, suit) pair. Exactly one copy of each exists per deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { suit, rank }
    }

    #[must_use]
    pub const fn is_matador(self) -> bool {
        self.rank.is_matador()
    }

    #[must_use]
    pub const fn points(self) -> u32 {
        self.rank.points()
    }

    /// The other half of a marriage: Queen for a King and vice versa.
    #[must_use]
    pub const fn marriage_partner(self) -> Option<Card> {
        match self.rank {
            Rank::King => Some(Card::new(Rank::Queen, self.suit)),
            Rank::Queen => Some(Card::new(Rank::King, self.suit)),
            _ => None,
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.rank.symbol(), self.suit.symbol())
    }
}

/// Failure to parse the compact `R-S` card notation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("cannot parse card from {input:?}")]
pub struct ParseCardError {
    pub input: String,
}

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseCardError { input: s.to_string() };

        let (rank, suit) = s.trim().split_once('-').ok_or_else(err)?;
        let rank = match rank {
            "K" => Rank::King,
            "T" => Rank::Ten,
            "Q" => Rank::Queen,
            "J" => Rank::Jack,
            "9" => Rank::Nine,
            _ => return Err(err()),
        };
        let suit = match suit {
            "H" => Suit::Hearts,
            "S" => Suit::Spades,
            "D" => Suit::Diamonds,
            "C" => Suit::Clubs,
            _ => return Err(err()),
        };

        Ok(Card::new(rank, suit))
    }
}
