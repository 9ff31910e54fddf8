use tracing::trace;

use crate::action::{DrawSource, TurnPlan};
use crate::bot::{Bot, remove_cards};
use crate::card::Card;
use crate::hand::highest_card;
use crate::state::TurnView;

/// Expert tier with pair matching and a per-seat pickup threshold (beta).
///
/// Policy:
/// - If a single card is being discarded and the discard pile's top card has the
///   same value, keep the high card, discard the next-highest instead and take
///   the top card. This trades a lower card for a copy of the high one.
/// - Otherwise take the top card if it matches a card still held, or if it is
///   worth less than beta and less than the highest card still held.
/// - Otherwise draw from the deck.
pub struct ExpertBot {
    beta: u8,
}

impl ExpertBot {
    pub fn new(beta: u8) -> Self {
        Self { beta }
    }

    pub fn beta(&self) -> u8 {
        self.beta
    }

    /// Swaps a lone high discard for the next-highest held card when the top of
    /// the discard pile has the same value. The kept card goes to the back of
    /// the hand.
    fn keep_high_card(
        discard_top: Card,
        discards: &[Card],
        remaining: &[Card],
    ) -> Option<TurnPlan> {
        let [high] = discards else {
            return None;
        };
        if high.value() != discard_top.value() {
            return None;
        }
        let next_highest = highest_card(remaining)?;
        Some(TurnPlan::new(vec![next_highest], DrawSource::DiscardPile).keeping(*high))
    }
}

impl Bot for ExpertBot {
    fn label(&self) -> &'static str {
        "expert"
    }

    fn choose_draw(
        &self,
        view: &TurnView<'_>,
        discards: Vec<Card>,
        remaining: &[Card],
    ) -> TurnPlan {
        let top = view.discard_top;
        if let Some(plan) = Self::keep_high_card(top, &discards, remaining) {
            trace!(seat = view.seat, %top, "keeping high card");
            return plan;
        }

        let matches_held = remaining.contains(&top);
        let below_beta = top.value() < self.beta
            && highest_card(remaining).is_some_and(|high| top.value() < high.value());
        let draw = if matches_held || below_beta {
            DrawSource::DiscardPile
        } else {
            DrawSource::Deck
        };
        trace!(
            seat = view.seat,
            beta = self.beta,
            deck_remaining = view.deck_remaining,
            %top,
            ?draw,
            "expert draw"
        );
        TurnPlan::new(discards, draw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(literals: &[&str]) -> Vec<Card> {
        literals.iter().map(|s| s.parse().unwrap()).collect()
    }

    fn view<'a>(hand: &'a [Card], top: &str) -> TurnView<'a> {
        TurnView {
            seat: 1,
            hand,
            discard_top: top.parse().unwrap(),
            deck_remaining: 20,
        }
    }

    #[test]
    fn swaps_discard_when_top_matches_value() {
        let hand = cards(&["KS", "9D", "4H", "2C", "AS"]);
        let plan = ExpertBot::new(6).plan_turn(&view(&hand, "QH"));
        assert_eq!(plan.draw, DrawSource::DiscardPile);
        assert_eq!(plan.discards.len(), 1);
        assert!(plan.discards[0].is_same_card(&"9D".parse().unwrap()));
        // The king stays in hand.
        let remaining = remove_cards(&hand, &plan.discards);
        assert!(remaining.iter().any(|c| c.is_same_card(&"KS".parse().unwrap())));
        assert!(plan.kept.is_some_and(|kept| kept.is_same_card(&"KS".parse().unwrap())));
    }

    #[test]
    fn beta_gates_pickup() {
        let hand = cards(&["KS", "9D", "4H", "2C", "AS"]);
        // 5 < 6 and below the nine left in hand.
        assert!(ExpertBot::new(6).plan_turn(&view(&hand, "5H")).takes_discard());
        // 7 is not below beta 6 ...
        assert!(!ExpertBot::new(6).plan_turn(&view(&hand, "7H")).takes_discard());
        // ... but is below beta 9.
        assert!(ExpertBot::new(9).plan_turn(&view(&hand, "7H")).takes_discard());
    }

    #[test]
    fn takes_matching_card() {
        let hand = cards(&["KS", "9D", "4H", "2C", "AS"]);
        // Nine matches the held nine even though it exceeds beta.
        assert!(ExpertBot::new(0).plan_turn(&view(&hand, "9C")).takes_discard());
    }

    #[test]
    fn pair_discard_skips_swap() {
        let hand = cards(&["KS", "KD", "4H", "2C", "AS"]);
        let plan = ExpertBot::new(6).plan_turn(&view(&hand, "QH"));
        assert_eq!(plan.discards.len(), 2);
        assert_eq!(plan.draw, DrawSource::Deck);
    }
}
