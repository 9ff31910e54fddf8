use crate::action::{DrawSource, TurnPlan};
use crate::bot::Bot;
use crate::card::Card;
use crate::state::TurnView;

/// Takes the discard pile's top card when it is worth less than the card
/// being thrown away; otherwise draws from the deck.
pub struct IntermediateBot;

impl IntermediateBot {
    pub fn new() -> Self {
        Self
    }
}

impl Default for IntermediateBot {
    fn default() -> Self {
        Self::new()
    }
}

impl Bot for IntermediateBot {
    fn label(&self) -> &'static str {
        "intermediate"
    }

    fn choose_draw(
        &self,
        view: &TurnView<'_>,
        discards: Vec<Card>,
        _remaining: &[Card],
    ) -> TurnPlan {
        let takes = discards
            .first()
            .is_some_and(|first| view.discard_top.value() < first.value());
        let draw = if takes {
            DrawSource::DiscardPile
        } else {
            DrawSource::Deck
        };
        TurnPlan::new(discards, draw)
    }
}
