// Hand-built positions for unit tests.
// Cards not placed explicitly are spread over the won-trick piles two at a
// time so every built position holds all 20 cards.

use crate::cards::{build_deck, Card, Suit};
use crate::core::{GameState, Phase, PlayerId, Seat, SeatMap, TrickPlay};

/// Parse a card in `R-S` notation.
pub fn c(text: &str) -> Card {
    text.parse().unwrap()
}

pub fn cards(texts: &[&str]) -> Vec<Card> {
    texts.iter().map(|t| c(t)).collect()
}

/// Builds a position with players "A" (seat 0, elder) and "B" (seat 1, dealer).
///
/// Defaults to `StockClosed` with seat 0 to move; setting a stock switches to
/// `StockOpen`, and a led card hands the move to the other seat.
pub struct PositionBuilder {
    state: GameState,
    fill_won: bool,
}

impl Default for PositionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionBuilder {
    pub fn new() -> Self {
        let players = SeatMap::from_array([PlayerId::new("A"), PlayerId::new("B")]);
        let mut state = GameState::new(players, Seat::SECOND);
        state.phase = Phase::StockClosed;
        Self { state, fill_won: true }
    }

    pub fn hand(mut self, seat: Seat, texts: &[&str]) -> Self {
        self.state.player_states[seat].hand = cards(texts).into_iter().collect();
        self
    }

    pub fn won(mut self, seat: Seat, texts: &[&str]) -> Self {
        self.state.player_states[seat].tricks_won = cards(texts).into_iter().collect();
        self
    }

    pub fn stock(mut self, texts: &[&str]) -> Self {
        self.state.stock = cards(texts).into_iter().collect();
        self.state.phase = Phase::StockOpen;
        self
    }

    pub fn led(mut self, seat: Seat, text: &str) -> Self {
        self.state.current_trick.clear();
        self.state.current_trick.push(TrickPlay { seat, card: c(text) });
        self.state.current_player = seat.other();
        self
    }

    pub fn trump(mut self, suit: Suit) -> Self {
        self.state.trump = Some(suit);
        self
    }

    pub fn marriage(mut self, seat: Seat, suit: Suit) -> Self {
        self.state.player_states[seat].marriages.insert(suit);
        self
    }

    pub fn score(mut self, seat: Seat, score: u32) -> Self {
        self.state.player_states[seat].score = score;
        self
    }

    pub fn to_move(mut self, seat: Seat) -> Self {
        self.state.current_player = seat;
        self
    }

    pub fn phase(mut self, phase: Phase) -> Self {
        self.state.phase = phase;
        self
    }

    /// Leave unplaced cards out of the position entirely.
    pub fn without_fill(mut self) -> Self {
        self.fill_won = false;
        self
    }

    pub fn build(self) -> GameState {
        let mut state = self.state;
        if self.fill_won {
            let placed: Vec<Card> = state.all_cards().collect();
            let missing: Vec<Card> = build_deck()
                .into_iter()
                .filter(|card| !placed.contains(card))
                .collect();
            for (i, pair) in missing.chunks(2).enumerate() {
                let seat = if i % 2 == 0 { Seat::FIRST } else { Seat::SECOND };
                for &card in pair {
                    state.player_states[seat].tricks_won.push_back(card);
                }
            }
        }
        state
    }
}
