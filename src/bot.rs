use crate::action::{DrawSource, TurnPlan};
use crate::card::Card;
use crate::hand::highest_card;
use crate::state::TurnView;

/// Interface for Tunk turn policies.
///
/// Every policy discards the same way (see [`select_discards`]); tiers differ
/// only in how they pick the replacement card.
pub trait Bot {
    /// Short name used in logs and experiment summaries.
    fn label(&self) -> &'static str;

    /// Decides where to draw from once `discards` have been chosen.
    /// `remaining` is the hand with the discards already taken out and is never empty.
    fn choose_draw(&self, view: &TurnView<'_>, discards: Vec<Card>, remaining: &[Card]) -> TurnPlan;

    /// Plans a full turn for the player described by `view`.
    fn plan_turn(&self, view: &TurnView<'_>) -> TurnPlan {
        let discards = select_discards(view.hand);
        let remaining = remove_cards(view.hand, &discards);
        if remaining.is_empty() {
            return last_card_plan(view.discard_top, discards);
        }
        self.choose_draw(view, discards, &remaining)
    }
}

/// Picks the cards to throw away this turn.
///
/// The most frequent card is the starting candidate; any card seen at least as
/// often with a higher value replaces it. A candidate held more than once and
/// worth more than five is discarded in full, otherwise the single highest
/// card goes.
pub fn select_discards(hand: &[Card]) -> Vec<Card> {
    let mut counts: Vec<(Card, usize)> = Vec::with_capacity(hand.len());
    for card in hand {
        match counts.iter_mut().find(|(seen, _)| seen == card) {
            Some((_, count)) => *count += 1,
            None => counts.push((*card, 1)),
        }
    }
    // Stable: equal counts keep first-seen order.
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    let Some(&(first, first_count)) = counts.first() else {
        return Vec::new();
    };
    let (mut candidate, mut candidate_count) = (first, first_count);
    for &(card, count) in &counts {
        if card.value() > candidate.value() && count >= candidate_count {
            candidate = card;
            candidate_count = count;
        }
    }

    if candidate_count > 1 && candidate.value() > 5 {
        hand.iter().filter(|card| **card == candidate).copied().collect()
    } else {
        highest_card(hand).into_iter().collect()
    }
}

/// Returns `hand` without the given physical cards.
pub fn remove_cards(hand: &[Card], cards: &[Card]) -> Vec<Card> {
    let mut remaining = hand.to_vec();
    for card in cards {
        if let Some(index) = remaining.iter().position(|held| held.is_same_card(card)) {
            remaining.remove(index);
        }
    }
    remaining
}

/// A player who just discarded their whole hand takes the discard pile's top
/// card only when it is worth less than what they threw away.
fn last_card_plan(discard_top: Card, discards: Vec<Card>) -> TurnPlan {
    let takes = discards
        .first()
        .is_some_and(|first| discard_top.value() < first.value());
    let draw = if takes {
        DrawSource::DiscardPile
    } else {
        DrawSource::Deck
    };
    TurnPlan::new(discards, draw)
}
