use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::error::GameError;

/// Cards held by one player during a round.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Sum of the penalty values of all held cards.
    pub fn total_value(&self) -> u32 {
        total_value(&self.cards)
    }

    /// The first card of maximal value, in hand order.
    pub fn highest_card(&self) -> Option<Card> {
        highest_card(&self.cards)
    }

    /// Moves a held card behind every other card, so it loses ties for
    /// [`Hand::highest_card`].
    pub fn move_to_back(&mut self, card: &Card) -> Result<(), GameError> {
        let index = self
            .cards
            .iter()
            .position(|held| held.is_same_card(card))
            .ok_or(GameError::CardNotInHand(*card))?;
        let held = self.cards.remove(index);
        self.cards.push(held);
        Ok(())
    }

    /// Moves the given physical cards from the hand onto `pile`, in order.
    pub fn discard(&mut self, cards: &[Card], pile: &mut Vec<Card>) -> Result<(), GameError> {
        for card in cards {
            let index = self
                .cards
                .iter()
                .position(|held| held.is_same_card(card))
                .ok_or(GameError::CardNotInHand(*card))?;
            pile.push(self.cards.remove(index));
        }
        Ok(())
    }
}

pub fn total_value(cards: &[Card]) -> u32 {
    cards.iter().map(|card| card.value() as u32).sum()
}

pub fn highest_card(cards: &[Card]) -> Option<Card> {
    let mut iter = cards.iter().copied();
    let mut best = iter.next()?;
    for card in iter {
        if card.value() > best.value() {
            best = card;
        }
    }
    Some(best)
}
