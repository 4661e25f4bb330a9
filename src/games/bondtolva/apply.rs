//! Move application.
//!
//! `make_move` is the single legality gate: a move is applied only if
//! `valid_moves` offers it. The input state is never touched; the result is a
//! modified clone.

use tracing::{debug, info, warn};

use super::integrity::check_integrity;
use super::moves::valid_moves;
use super::scoring::{score_round, target_reached};
use super::trick::trick_winner;
use crate::cards::Suit;
use crate::core::{EngineError, GameConfig, GameState, Move, Phase, Seat, TrickPlay, Violation};

/// Apply `mv` to `state`, returning the next state.
pub fn make_move(state: &GameState, mv: &Move, config: &GameConfig) -> Result<GameState, EngineError> {
    if state.phase.is_playing() {
        check_integrity(state)?;
    }
    if !valid_moves(state).contains(mv) {
        warn!(%mv, phase = ?state.phase, "rejected move");
        return Err(EngineError::InvalidMove(mv.clone()));
    }

    let mut next = state.clone();
    let seat = next.current_player;
    let card = mv.card();
    debug!(round = next.round, %mv, "applying move");

    match mv {
        Move::DeclareMarriage { .. } => declare_marriage(&mut next, seat, card.suit),
        Move::Play { .. } => {}
    }

    next.player_states[seat].hand.remove(&card);
    next.current_trick.push(TrickPlay { seat, card });

    if next.current_trick.len() == 1 {
        next.current_player = seat.other();
        return Ok(next);
    }

    let winner = resolve_trick(&mut next)?;

    if next.phase == Phase::StockOpen {
        draw_from_stock(&mut next, winner);
    }

    let hands_empty = next.player_states.values().all(|ps| ps.hand.is_empty());
    if hands_empty {
        let outcome = score_round(&mut next, winner);
        next.phase = Phase::RoundScoring;
        info!(
            round = next.round,
            last_trick = %next.player_id(outcome.last_trick),
            matador_point = ?outcome.matador_point.map(|s| next.player_id(s).to_string()),
            card_point = ?outcome.card_point.map(|s| next.player_id(s).to_string()),
            tallies = ?outcome.tallies,
            "round scored"
        );
    }

    if target_reached(&next, config.target_score) {
        next.phase = Phase::GameEnd;
        info!(
            first = next.score(Seat::FIRST),
            second = next.score(Seat::SECOND),
            "game over"
        );
    }

    Ok(next)
}

/// Record the marriage and award its bonus. The first marriage of the round
/// names trump and is worth 2; later ones are worth 1.
fn declare_marriage(state: &mut GameState, seat: Seat, suit: Suit) {
    state.player_states[seat].marriages.insert(suit);
    let bonus = match state.trump {
        None => {
            state.trump = Some(suit);
            2
        }
        Some(_) => 1,
    };
    state.player_states[seat].score += bonus;
    debug!(player = %state.player_id(seat), %suit, bonus, trump = ?state.trump, "marriage declared");
}

/// Move a completed trick to its winner's pile and give the winner the lead.
fn resolve_trick(state: &mut GameState) -> Result<Seat, Violation> {
    let &[led, follow] = state.current_trick.as_slice() else {
        return Err(Violation::TrickOverflow(state.current_trick.len()));
    };

    let winner = trick_winner(led, follow, state.trump);
    let pile = &mut state.player_states[winner].tricks_won;
    pile.push_back(led.card);
    pile.push_back(follow.card);
    state.current_trick.clear();
    state.current_player = winner;

    debug!(
        winner = %state.player_id(winner),
        led = %led.card,
        follow = %follow.card,
        "trick resolved"
    );
    Ok(winner)
}

/// Winner draws first, then the other player. Closes the stock once empty.
fn draw_from_stock(state: &mut GameState, winner: Seat) {
    for seat in [winner, winner.other()] {
        if let Some(card) = state.stock.pop_back() {
            state.player_states[seat].hand.insert(card);
        }
    }
    if state.stock.is_empty() {
        state.phase = Phase::StockClosed;
        debug!(round = state.round, "stock closed");
    }
}
