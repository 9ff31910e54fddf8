//! Round-end scoring.
//!
//! Rules:
//!   declare, strictly lowest:  every other player adds their own hand total
//!   declare, tied or higher:   declarer adds the failed-declare penalty (30)
//!   deck exhausted:            everyone adds their hand total, and the lowest
//!                              hand (first seat on ties) adds a further 15

use serde::{Deserialize, Serialize};

use crate::action::{SEAT_COUNT, Seat, next_seat};
use crate::state::GameSettings;

/// Why a round ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundEnd {
    Declared { seat: Seat, lowest: bool },
    DeckExhausted { seat: Seat },
}

/// Points awarded by a finished round and who leads the next one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub cause: RoundEnd,
    pub points: [u32; SEAT_COUNT],
    pub next_leader: Seat,
}

/// Scores a Tunk call by `declarer` given every seat's hand total.
pub fn resolve_declare(
    declarer: Seat,
    totals: &[u32; SEAT_COUNT],
    settings: &GameSettings,
) -> Resolution {
    let own = totals[declarer];
    let lowest = (0..SEAT_COUNT)
        .filter(|&seat| seat != declarer)
        .all(|seat| own < totals[seat]);

    let mut points = [0; SEAT_COUNT];
    let next_leader = if lowest {
        for seat in (0..SEAT_COUNT).filter(|&seat| seat != declarer) {
            points[seat] = totals[seat];
        }
        declarer
    } else {
        points[declarer] = settings.failed_declare_penalty;
        lowest_seat(totals, Some(declarer))
    };

    Resolution {
        cause: RoundEnd::Declared {
            seat: declarer,
            lowest,
        },
        points,
        next_leader,
    }
}

/// Scores a round that ran out of cards during `seat`'s turn.
pub fn resolve_exhaustion(
    seat: Seat,
    totals: &[u32; SEAT_COUNT],
    settings: &GameSettings,
) -> Resolution {
    let mut points = *totals;
    points[lowest_seat(totals, None)] += settings.exhaustion_penalty;
    Resolution {
        cause: RoundEnd::DeckExhausted { seat },
        points,
        next_leader: next_seat(seat),
    }
}

/// First seat holding the minimum total, optionally ignoring one seat.
fn lowest_seat(totals: &[u32; SEAT_COUNT], skip: Option<Seat>) -> Seat {
    let mut best: Option<Seat> = None;
    for seat in (0..SEAT_COUNT).filter(|&seat| Some(seat) != skip) {
        match best {
            Some(current) if totals[seat] >= totals[current] => {}
            _ => best = Some(seat),
        }
    }
    best.unwrap_or(0)
}
