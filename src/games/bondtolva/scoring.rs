//! Round-end bonuses and the game result.
//!
//! When both hands are empty:
//! 1. The winner of the last trick scores 1.
//! 2. The player who won more matadors (Kings and Tens) scores 1.
//! 3. Only if the matador counts are level, the player with more card points
//!    (Ten 4, King 3, Queen 2, Jack 1, Nine 0) scores 1. Level again: nobody.

use crate::core::{GameState, Phase, PlayerState, Seat, SeatMap};
use crate::rules::GameResult;

/// Matadors and card points in a won-trick pile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    pub matadors: usize,
    pub card_points: u32,
}

/// Count matadors and card points among the cards a player has won.
#[must_use]
pub fn tally(ps: &PlayerState) -> Tally {
    ps.tricks_won.iter().fold(Tally::default(), |acc, card| Tally {
        matadors: acc.matadors + usize::from(card.is_matador()),
        card_points: acc.card_points + card.points(),
    })
}

/// Who scored what at the end of a round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundOutcome {
    pub last_trick: Seat,
    pub matador_point: Option<Seat>,
    pub card_point: Option<Seat>,
    pub tallies: SeatMap<Tally>,
}

/// Seat with the strictly larger value, if any.
fn strictly_higher<T: Ord>(values: &SeatMap<T>) -> Option<Seat> {
    let (first, second) = (&values[Seat::FIRST], &values[Seat::SECOND]);
    match first.cmp(second) {
        std::cmp::Ordering::Greater => Some(Seat::FIRST),
        std::cmp::Ordering::Less => Some(Seat::SECOND),
        std::cmp::Ordering::Equal => None,
    }
}

/// Award the round-end bonuses on the working copy of a finished round.
pub(crate) fn score_round(state: &mut GameState, last_trick: Seat) -> RoundOutcome {
    let tallies = SeatMap::new(|seat| tally(state.player_state(seat)));

    let matador_point = strictly_higher(&SeatMap::new(|seat| tallies[seat].matadors));
    let card_point = match matador_point {
        Some(_) => None,
        None => strictly_higher(&SeatMap::new(|seat| tallies[seat].card_points)),
    };

    for seat in std::iter::once(last_trick).chain(matador_point).chain(card_point) {
        state.player_states[seat].score += 1;
    }

    RoundOutcome {
        last_trick,
        matador_point,
        card_point,
        tallies,
    }
}

/// Has either cumulative score reached `target`?
#[must_use]
pub fn target_reached(state: &GameState, target: u32) -> bool {
    state.player_states.values().any(|ps| ps.score >= target)
}

/// Winner by cumulative score once the game has ended.
#[must_use]
pub fn game_result(state: &GameState) -> Option<GameResult> {
    if state.phase != Phase::GameEnd {
        return None;
    }
    let scores = SeatMap::new(|seat| state.score(seat));
    Some(match strictly_higher(&scores) {
        Some(seat) => GameResult::Winner(state.player_id(seat).clone()),
        None => GameResult::Draw,
    })
}
