use serde::{Deserialize, Serialize};

use crate::action::{SEAT_COUNT, Seat};
use crate::card::{Card, DECK_SIZE};
use crate::error::GameError;

/// Tunable rule constants for a game.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GameSettings {
    /// Cards dealt to each player at the start of a round.
    pub hand_size: usize,
    /// A player whose hand total is at or below this value declares.
    pub declare_threshold: u32,
    /// Added to a declarer who did not hold the strictly lowest hand.
    pub failed_declare_penalty: u32,
    /// Extra points for the lowest hand when the deck runs out.
    pub exhaustion_penalty: u32,
    /// The game ends once any score reaches this value.
    pub score_threshold: u32,
    /// Expert pickup threshold for seat 0.
    pub lead_seat_beta: u8,
    /// Expert pickup threshold for every other seat.
    pub default_beta: u8,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            hand_size: 5,
            declare_threshold: 7,
            failed_declare_penalty: 30,
            exhaustion_penalty: 15,
            score_threshold: 150,
            lead_seat_beta: 9,
            default_beta: 6,
        }
    }
}

impl GameSettings {
    pub fn validate(&self) -> Result<(), GameError> {
        if self.score_threshold == 0 {
            return Err(GameError::config("score threshold must be positive"));
        }
        if self.hand_size == 0 {
            return Err(GameError::config("hand size must be positive"));
        }
        // Every player needs a hand and one card seeds the discard pile.
        if self.hand_size * SEAT_COUNT + 1 >= DECK_SIZE {
            return Err(GameError::config(format!(
                "hand size {} leaves no cards to draw",
                self.hand_size
            )));
        }
        Ok(())
    }

    /// Beta used by an expert in `seat` when no override is configured.
    pub fn beta_for_seat(&self, seat: Seat) -> u8 {
        if seat == 0 {
            self.lead_seat_beta
        } else {
            self.default_beta
        }
    }
}

/// What a player can see when deciding a turn.
#[derive(Clone, Copy, Debug)]
pub struct TurnView<'a> {
    pub seat: Seat,
    pub hand: &'a [Card],
    pub discard_top: Card,
    pub deck_remaining: usize,
}

/// Status of the whole game.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Finished,
}
