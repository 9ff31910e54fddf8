//! Structured events emitted while a game is played.
//!
//! The engine pushes every event into an [`EventSink`]; where the events end up
//! (a log file, a vector for analysis, nowhere) is up to the caller.

use serde::Serialize;

use crate::action::{DrawSource, SEAT_COUNT, Seat};
use crate::card::Card;

/// Something that happened during a game.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    /// A fresh deck was dealt and one card seeded the discard pile.
    RoundStarted {
        round: u32,
        leader: Seat,
        seed_card: Card,
    },
    /// A player discarded and drew.
    TurnTaken {
        seat: Seat,
        discarded: Vec<Card>,
        drawn: Card,
        source: DrawSource,
    },
    /// Every seat has had one more turn this round.
    RotationCompleted {
        round: u32,
        rotation: u32,
        mean_hand_total: f64,
    },
    /// A player called Tunk.
    Declared {
        seat: Seat,
        hand_total: u32,
        lowest: bool,
    },
    /// The deck was empty at the start of `seat`'s turn.
    DeckExhausted { seat: Seat },
    /// Points were applied at the end of a round.
    RoundScored {
        round: u32,
        points: [u32; SEAT_COUNT],
        scores: [u32; SEAT_COUNT],
        next_leader: Seat,
    },
    /// A score reached the threshold.
    GameOver {
        rounds: u32,
        losers: Vec<Seat>,
        winners: Vec<Seat>,
        scores: [u32; SEAT_COUNT],
    },
}

/// Destination for game events.
pub trait EventSink {
    fn record(&mut self, event: Event);
}

/// Drops every event.
impl EventSink for () {
    fn record(&mut self, _event: Event) {}
}

impl EventSink for Vec<Event> {
    fn record(&mut self, event: Event) {
        self.push(event);
    }
}

/// Adapts a closure into a sink.
pub struct FnSink<F>(pub F);

impl<F: FnMut(Event)> EventSink for FnSink<F> {
    fn record(&mut self, event: Event) {
        (self.0)(event);
    }
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn record(&mut self, event: Event) {
        (**self).record(event);
    }
}
