//! The fixed 20-card deck.

use rustc_hash::FxHashSet;

use super::card::{Card, Rank, Suit};
use crate::core::Violation;

/// Five ranks in four suits.
pub const DECK_SIZE: usize = 20;

/// Build the deck in a fixed order: suit by suit, strongest rank first.
///
/// No randomness; this is the input to the shuffle in `deal`.
#[must_use]
pub fn build_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            deck.push(Card::new(rank, suit));
        }
    }
    deck
}

/// Check that `cards` is exactly one copy of every card in the deck.
///
/// Since only 20 distinct cards exist, 20 cards without duplicates are
/// necessarily the full deck.
pub fn check_complete(cards: impl IntoIterator<Item = Card>) -> Result<(), Violation> {
    let mut seen = FxHashSet::default();
    for card in cards {
        if !seen.insert(card) {
            return Err(Violation::DuplicateCard(card));
        }
    }
    if seen.len() != DECK_SIZE {
        return Err(Violation::CardCount {
            expected: DECK_SIZE,
            found: seen.len(),
        });
    }
    Ok(())
}
