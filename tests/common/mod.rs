//! Shared helpers for integration tests.

#![allow(dead_code)]

use bondtolva::{
    build_deck, Card, GameState, Move, Phase, PlayerId, RandomSource, Seat, SeatMap, TrickPlay,
};
use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Install a test subscriber once per binary.
///
/// Level comes from `TEST_LOG`, then `RUST_LOG`, then `warn`.
pub fn init_logging() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

/// Scripted source: fixed coin, identity shuffle.
pub struct Scripted(pub usize);

impl RandomSource for Scripted {
    fn gen_index(&mut self, _len: usize) -> usize {
        self.0
    }

    fn shuffle<T>(&mut self, _slice: &mut [T]) {}
}

pub fn card(text: &str) -> Card {
    text.parse().unwrap()
}

pub fn a() -> PlayerId {
    PlayerId::new("A")
}

pub fn b() -> PlayerId {
    PlayerId::new("B")
}

/// A mid-round position for players "A" (seat 0) and "B" (seat 1, dealer).
///
/// Every card not named in a hand, the stock or the trick goes to a won pile,
/// so the result passes the integrity check.
pub struct Position {
    hands: [Vec<Card>; 2],
    stock: Vec<Card>,
    led: Option<(Seat, Card)>,
    trump: Option<bondtolva::Suit>,
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

impl Position {
    pub fn new() -> Self {
        Self {
            hands: [Vec::new(), Vec::new()],
            stock: Vec::new(),
            led: None,
            trump: None,
        }
    }

    pub fn hand(mut self, seat: Seat, texts: &[&str]) -> Self {
        self.hands[seat.index()] = texts.iter().map(|t| card(t)).collect();
        self
    }

    pub fn stock(mut self, texts: &[&str]) -> Self {
        self.stock = texts.iter().map(|t| card(t)).collect();
        self
    }

    pub fn led(mut self, seat: Seat, text: &str) -> Self {
        self.led = Some((seat, card(text)));
        self
    }

    pub fn trump(mut self, suit: bondtolva::Suit) -> Self {
        self.trump = Some(suit);
        self
    }

    pub fn build(self) -> GameState {
        let mut state = GameState::new(SeatMap::from_array([a(), b()]), Seat::SECOND);
        for seat in Seat::all() {
            state.player_states[seat].hand = self.hands[seat.index()].iter().copied().collect();
        }
        state.stock = self.stock.iter().copied().collect();
        state.trump = self.trump;
        state.phase = if self.stock.is_empty() {
            Phase::StockClosed
        } else {
            Phase::StockOpen
        };
        state.current_player = Seat::FIRST;
        if let Some((seat, led)) = self.led {
            state.current_trick.push(TrickPlay { seat, card: led });
            state.current_player = seat.other();
        }

        let placed: Vec<Card> = state.all_cards().collect();
        let rest: Vec<Card> = build_deck().into_iter().filter(|c| !placed.contains(c)).collect();
        for (i, pair) in rest.chunks(2).enumerate() {
            let seat = if i % 2 == 0 { Seat::FIRST } else { Seat::SECOND };
            state.player_states[seat].tricks_won.extend(pair.iter().copied());
        }
        state
    }
}

/// Pick moves with `choose` until the round is over, checking every step.
pub fn play_out(
    mut state: GameState,
    mut choose: impl FnMut(&[Move]) -> usize,
) -> (GameState, Vec<GameState>) {
    let mut history = vec![state.clone()];
    while state.phase.is_playing() {
        let moves = bondtolva::valid_moves(&state);
        assert!(!moves.is_empty(), "no moves in {:?}", state.phase);
        let mv = &moves[choose(&moves) % moves.len()];
        state = bondtolva::make_move(&state, mv).unwrap();
        history.push(state.clone());
    }
    (state, history)
}
