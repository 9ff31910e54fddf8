use serde::{Deserialize, Serialize};

use crate::card::Card;

/// Zero-based seat index in fixed turn order.
pub type Seat = usize;

pub const SEAT_COUNT: usize = 4;

/// Returns the seat that plays after `seat`.
#[inline]
pub fn next_seat(seat: Seat) -> Seat {
    (seat + 1) % SEAT_COUNT
}

/// Where the acting player takes their replacement card from.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum DrawSource {
    /// Take the visible top card of the discard pile.
    DiscardPile,
    /// Leave the discard pile alone and draw blind from the deck.
    Deck,
}

/// A complete turn decision: the cards to discard and where to draw from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnPlan {
    pub discards: Vec<Card>,
    pub draw: DrawSource,
    /// A held card to move behind the rest of the hand before the draw lands.
    #[serde(default)]
    pub kept: Option<Card>,
}

impl TurnPlan {
    pub fn new(discards: Vec<Card>, draw: DrawSource) -> Self {
        Self {
            discards,
            draw,
            kept: None,
        }
    }

    pub fn keeping(mut self, card: Card) -> Self {
        self.kept = Some(card);
        self
    }

    pub fn takes_discard(&self) -> bool {
        self.draw == DrawSource::DiscardPile
    }
}
