//! Trick resolution.

use crate::cards::{Card, Suit};
use crate::core::{Seat, TrickPlay};

/// Does `challenger` take the trick from `best`, the card currently winning it?
///
/// A card of the same suit must be strictly stronger. A card of another suit
/// wins only if it is trump, which `best` then cannot be.
#[must_use]
pub fn card_beats(challenger: Card, best: Card, trump: Option<Suit>) -> bool {
    if challenger.suit == best.suit {
        return challenger.rank.beats(best.rank);
    }
    trump == Some(challenger.suit)
}

/// Seat that wins a completed two-card trick.
#[must_use]
pub fn trick_winner(led: TrickPlay, follow: TrickPlay, trump: Option<Suit>) -> Seat {
    if card_beats(follow.card, led.card, trump) {
        follow.seat
    } else {
        led.seat
    }
}
