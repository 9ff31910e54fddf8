use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, full_deck};
use crate::error::GameError;

/// Draw pile for a single round. The top of the deck is the last card.
#[derive(Clone, Debug)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Builds the 54-card deck and shuffles it with the supplied generator.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards = full_deck();
        cards.shuffle(rng);
        Self { cards }
    }

    /// Uses the given cards as-is. The last card is drawn first.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Removes and returns the top card.
    pub fn draw(&mut self) -> Result<Card, GameError> {
        self.cards.pop().ok_or(GameError::EmptyDeck)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::card::DECK_SIZE;

    #[test]
    fn draw_takes_from_top() {
        let a: Card = "AS".parse().unwrap();
        let k: Card = "KH".parse().unwrap();
        let mut deck = Deck::from_cards(vec![a, k]);
        assert!(deck.draw().unwrap().is_same_card(&k));
        assert!(deck.draw().unwrap().is_same_card(&a));
        assert_eq!(deck.draw(), Err(GameError::EmptyDeck));
        assert!(deck.is_empty());
    }

    #[test]
    fn shuffle_is_seeded() {
        let first = Deck::shuffled(&mut StdRng::seed_from_u64(7));
        let second = Deck::shuffled(&mut StdRng::seed_from_u64(7));
        assert_eq!(first.len(), DECK_SIZE);
        assert!(
            first
                .cards()
                .iter()
                .zip(second.cards())
                .all(|(a, b)| a.is_same_card(b))
        );
    }
}
