//! Cards and the deck.
//!
//! Cards are plain `Copy` values: a rank and a suit. There are no card ids or
//! registries; the 20 distinct cards identify themselves.

pub mod card;
pub mod deck;

pub use card::{Card, ParseCardError, Rank, Suit};
pub use deck::{build_deck, check_complete, DECK_SIZE};
