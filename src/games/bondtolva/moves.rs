//! Legal move enumeration.
//!
//! While the stock is open any card may be played, and the leader may declare
//! a marriage. Once the stock is closed the follower must follow suit, must
//! head the led card if able, and otherwise must trump if able.

use im::OrdSet;

use crate::cards::{Card, Rank, Suit};
use crate::core::{GameState, Move, Phase, PlayerState};

/// All legal moves for the player to act. Empty outside the playing phases.
#[must_use]
pub fn valid_moves(state: &GameState) -> Vec<Move> {
    let seat = state.current_player;
    let player = state.player_id(seat);
    let ps = state.player_state(seat);

    let cards: Vec<Card> = match (state.phase, state.led_card()) {
        (Phase::StockClosed, Some(led)) => follow_cards(&ps.hand, led, state.trump),
        (Phase::StockOpen | Phase::StockClosed, _) => ps.hand.iter().copied().collect(),
        (Phase::Dealing | Phase::RoundScoring | Phase::GameEnd, _) => return Vec::new(),
    };

    let mut moves: Vec<Move> = cards
        .into_iter()
        .map(|card| Move::play(card, player.clone()))
        .collect();

    if state.phase == Phase::StockOpen && state.current_trick.is_empty() {
        for suit in declarable_marriages(ps) {
            for rank in [Rank::King, Rank::Queen] {
                moves.push(Move::declare_marriage(Card::new(rank, suit), player.clone()));
            }
        }
    }

    moves
}

/// Cards a follower may play to `led` under closed-stock rules.
#[must_use]
pub fn follow_cards(hand: &OrdSet<Card>, led: Card, trump: Option<Suit>) -> Vec<Card> {
    let following: Vec<Card> = hand.iter().copied().filter(|c| c.suit == led.suit).collect();
    if !following.is_empty() {
        let heading: Vec<Card> = following
            .iter()
            .copied()
            .filter(|c| c.rank.beats(led.rank))
            .collect();
        return if heading.is_empty() { following } else { heading };
    }

    if let Some(trump) = trump {
        let trumps: Vec<Card> = hand.iter().copied().filter(|c| c.suit == trump).collect();
        if !trumps.is_empty() {
            return trumps;
        }
    }

    hand.iter().copied().collect()
}

/// Suits in which the player holds King and Queen and has not yet declared.
pub fn declarable_marriages(ps: &PlayerState) -> impl Iterator<Item = Suit> + '_ {
    Suit::ALL.into_iter().filter(move |&suit| {
        let king = Card::new(Rank::King, suit);
        !ps.marriages.contains(&suit)
            && ps.holds(king)
            && king.marriage_partner().is_some_and(|queen| ps.holds(queen))
    })
}
