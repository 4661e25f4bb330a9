//! Seating, dealing and starting the next round.

use im::{OrdSet, Vector};
use tracing::info;

use super::integrity::require_phase;
use crate::cards::{check_complete, Card, DECK_SIZE};
use crate::core::{
    EngineError, GameConfig, GameState, Phase, PlayerId, RandomSource, Seat, SeatMap, Violation,
};

/// Seat two players with a random dealer.
///
/// The non-dealer becomes the elder hand and takes seat 0. Consumes exactly one
/// `gen_index(2)` draw.
pub fn initial_state(
    player_a: PlayerId,
    player_b: PlayerId,
    rng: &mut impl RandomSource,
) -> Result<GameState, EngineError> {
    if player_a == player_b {
        return Err(Violation::DuplicatePlayers(player_a.to_string()).into());
    }

    let (elder, dealer) = if rng.gen_index(2) == 0 {
        (player_b, player_a)
    } else {
        (player_a, player_b)
    };
    info!(%elder, %dealer, "players seated");

    Ok(GameState::new(
        SeatMap::from_array([elder, dealer]),
        Seat::SECOND,
    ))
}

/// Shuffle `deck` and deal a round.
///
/// Hands are dealt from the back of the shuffled deck in packets, starting with
/// the elder hand and alternating; what is left becomes the stock.
pub fn deal(
    deck: &[Card],
    state: &GameState,
    config: &GameConfig,
    rng: &mut impl RandomSource,
) -> Result<GameState, EngineError> {
    require_phase(state, Phase::Dealing)?;
    if deck.len() != DECK_SIZE {
        return Err(Violation::DeckSize {
            expected: DECK_SIZE,
            found: deck.len(),
        }
        .into());
    }
    check_complete(deck.iter().copied())?;
    let already_dealt = state.all_cards().count();
    if already_dealt != 0 {
        return Err(Violation::CardCount {
            expected: 0,
            found: already_dealt,
        }
        .into());
    }

    let mut cards = deck.to_vec();
    rng.shuffle(&mut cards);

    let mut next = state.clone();
    let elder = next.elder();
    for i in 0..DECK_SIZE - config.stock_size() {
        let seat = if (i / config.packet_size) % 2 == 0 {
            elder
        } else {
            elder.other()
        };
        if let Some(card) = cards.pop() {
            next.player_states[seat].hand.insert(card);
        }
    }

    next.stock = cards.into_iter().collect();
    next.current_player = elder;
    next.phase = Phase::StockOpen;

    info!(
        round = next.round,
        dealer = %next.dealer_id(),
        stock = next.stock.len(),
        "round dealt"
    );
    Ok(next)
}

/// Clear the finished round and return to `Dealing` with the deal passing over.
///
/// Scores and seats carry over; hands, marriages, won tricks, trump and stock
/// are reset.
pub fn next_round(state: &GameState) -> Result<GameState, EngineError> {
    require_phase(state, Phase::RoundScoring)?;

    let mut next = state.clone();
    for (_, ps) in next.player_states.iter_mut() {
        ps.hand = OrdSet::new();
        ps.marriages = OrdSet::new();
        ps.tricks_won = Vector::new();
    }
    next.current_trick.clear();
    next.trump = None;
    next.stock = Vector::new();
    next.dealer = state.dealer.other();
    next.current_player = next.elder();
    next.round += 1;
    next.phase = Phase::Dealing;

    info!(round = next.round, dealer = %next.dealer_id(), "next round");
    Ok(next)
}
