use std::fmt::Write;

use crate::action::{DrawSource, Seat};
use crate::event::Event;

/// Fine tune the text game log.
#[derive(Clone, Copy, Debug)]
pub struct LogOptions {
    pub show_rotations: bool,
    pub show_scores: bool,
}

impl Default for LogOptions {
    fn default() -> Self {
        Self {
            show_rotations: false,
            show_scores: true,
        }
    }
}

pub fn seat_name(seat: Seat) -> String {
    format!("player_{}", seat + 1)
}

pub fn describe_event(event: &Event) -> String {
    describe_event_with_options(event, LogOptions::default())
}

/// Renders one event as the lines of the text game log. Returns an empty
/// string for events hidden by `options`.
pub fn describe_event_with_options(event: &Event, options: LogOptions) -> String {
    let mut out = String::new();
    match event {
        Event::RoundStarted {
            round,
            leader,
            seed_card,
        } => {
            let _ = writeln!(out, "Round {round}");
            let _ = writeln!(
                out,
                "{} leads, {seed_card} starts the discard pile.",
                seat_name(*leader)
            );
        }
        Event::TurnTaken {
            seat,
            discarded,
            drawn,
            source,
        } => {
            let name = seat_name(*seat);
            let _ = writeln!(out, "{name}'s turn:");
            for card in discarded {
                let _ = writeln!(out, "{name} is discarding {card}");
            }
            let from = match source {
                DrawSource::DiscardPile => "discard pile",
                DrawSource::Deck => "deck",
            };
            let _ = writeln!(out, "{name} drew {drawn} from the {from}");
        }
        Event::RotationCompleted {
            rotation,
            mean_hand_total,
            ..
        } => {
            if options.show_rotations {
                let _ = writeln!(
                    out,
                    "Rotation {rotation} average hand: {mean_hand_total:.2}"
                );
            }
        }
        Event::Declared {
            seat,
            hand_total,
            lowest,
        } => {
            let name = seat_name(*seat);
            let _ = writeln!(out, "{name} has called tunk with {hand_total}.");
            if *lowest {
                let _ = writeln!(
                    out,
                    "{name} was the lowest, all other players add their hand value to their score."
                );
            } else {
                let _ = writeln!(out, "{name} was not the lowest and is penalized.");
            }
        }
        Event::DeckExhausted { .. } => {
            let _ = writeln!(out, "Deck is empty, round ends with no player calling tunk.");
            let _ = writeln!(out, "All players add their hand value to their score.");
        }
        Event::RoundScored { points, scores, .. } => {
            if options.show_scores {
                for (seat, (added, total)) in points.iter().zip(scores).enumerate() {
                    let _ = writeln!(out, "{} +{added} = {total}", seat_name(seat));
                }
            }
        }
        Event::GameOver {
            rounds,
            losers,
            winners,
            scores,
        } => {
            let _ = writeln!(out, "Game is over after {rounds} rounds.");
            for &seat in losers {
                let _ = writeln!(
                    out,
                    "{} lost with a score of {} points.",
                    seat_name(seat),
                    scores[seat]
                );
            }
            for &seat in winners {
                let _ = writeln!(
                    out,
                    "{} won with a score of {} points.",
                    seat_name(seat),
                    scores[seat]
                );
            }
        }
    }
    out
}
