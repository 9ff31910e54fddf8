use crate::action::{DrawSource, TurnPlan};
use crate::bot::Bot;
use crate::card::Card;
use crate::state::TurnView;

/// Baseline tier that never looks at the discard pile.
///
/// Policy:
/// - Discard like every other tier (valuable multiples, else the highest card).
/// - Always draw blind from the deck.
pub struct BasicBot;

impl BasicBot {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BasicBot {
    fn default() -> Self {
        Self::new()
    }
}

impl Bot for BasicBot {
    fn label(&self) -> &'static str {
        "basic"
    }

    fn choose_draw(
        &self,
        _view: &TurnView<'_>,
        discards: Vec<Card>,
        _remaining: &[Card],
    ) -> TurnPlan {
        TurnPlan::new(discards, DrawSource::Deck)
    }
}
