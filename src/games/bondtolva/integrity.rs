//! Structural checks on a position.
//!
//! A well-formed position in play holds all 20 cards exactly once, has at
//! most one card in the trick, balanced hands, and a stock that is nonempty
//! exactly while the stock is open.

use crate::cards::check_complete;
use crate::core::{GameState, Phase, Seat, Violation};

/// Fail unless the state is in `expected`.
pub fn require_phase(state: &GameState, expected: Phase) -> Result<(), Violation> {
    if state.phase != expected {
        return Err(Violation::PhaseMismatch {
            expected,
            found: state.phase,
        });
    }
    Ok(())
}

/// Validate a position in `StockOpen` or `StockClosed`.
pub fn check_integrity(state: &GameState) -> Result<(), Violation> {
    check_complete(state.all_cards())?;

    if state.current_trick.len() > 1 {
        return Err(Violation::TrickOverflow(state.current_trick.len()));
    }

    let sizes = |seat: Seat| state.hand(seat).len();
    let balanced = match state.current_trick.first() {
        None => sizes(state.current_player) == sizes(state.current_player.other()),
        Some(play) => {
            state.current_player == play.seat.other()
                && sizes(play.seat) + 1 == sizes(play.seat.other())
        }
    };
    if !balanced {
        return Err(Violation::HandSizes {
            first: sizes(Seat::FIRST),
            second: sizes(Seat::SECOND),
        });
    }

    if (state.phase == Phase::StockOpen) == state.stock.is_empty() {
        return Err(Violation::StockPhase {
            stock: state.stock.len(),
            phase: state.phase,
        });
    }

    Ok(())
}
