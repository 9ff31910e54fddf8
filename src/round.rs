//! Round management.
//!
//! A round starts with a fresh deck: five cards are dealt to each seat, one at
//! a time in seat order, and the next card seeds the discard pile. Turns then
//! rotate from the leader. At the start of each turn the engine checks, in
//! order:
//!
//! 1. the deck is empty: the round ends by exhaustion;
//! 2. the player's hand total is at or below the declare threshold: the player
//!    calls Tunk and the round ends;
//! 3. otherwise the seat's [`Bot`] plans a discard and a draw, which the engine
//!    applies before passing the turn on.

use tracing::{debug, trace};

use crate::action::{DrawSource, SEAT_COUNT, Seat, next_seat};
use crate::bot::Bot;
use crate::card::Card;
use crate::deck::Deck;
use crate::error::GameError;
use crate::event::{Event, EventSink};
use crate::hand::Hand;
use crate::score::{Resolution, RoundEnd, resolve_declare, resolve_exhaustion};
use crate::state::{GameSettings, TurnView};

/// State of a single round. Dropped once the round is scored.
#[derive(Clone, Debug)]
pub struct Round {
    number: u32,
    settings: GameSettings,
    deck: Deck,
    discard_pile: Vec<Card>,
    hands: [Hand; SEAT_COUNT],
    current: Seat,
    turns_taken: u32,
    resolution: Option<Resolution>,
}

impl Round {
    /// Deals a new round from `deck`, with `leader` taking the first turn.
    pub fn deal(
        number: u32,
        mut deck: Deck,
        leader: Seat,
        settings: GameSettings,
        sink: &mut dyn EventSink,
    ) -> Result<Self, GameError> {
        let mut hands: [Hand; SEAT_COUNT] = Default::default();
        for _ in 0..settings.hand_size {
            for hand in hands.iter_mut() {
                hand.push(deck.draw()?);
            }
        }
        let seed_card = deck.draw()?;
        debug!(round = number, leader, %seed_card, "round started");
        sink.record(Event::RoundStarted {
            round: number,
            leader,
            seed_card,
        });
        Ok(Self {
            number,
            settings,
            deck,
            discard_pile: vec![seed_card],
            hands,
            current: leader % SEAT_COUNT,
            turns_taken: 0,
            resolution: None,
        })
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn current_seat(&self) -> Seat {
        self.current
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn discard_pile(&self) -> &[Card] {
        &self.discard_pile
    }

    pub fn hand(&self, seat: Seat) -> &Hand {
        &self.hands[seat]
    }

    pub fn hand_totals(&self) -> [u32; SEAT_COUNT] {
        std::array::from_fn(|seat| self.hands[seat].total_value())
    }

    pub fn turns_taken(&self) -> u32 {
        self.turns_taken
    }

    pub fn is_over(&self) -> bool {
        self.resolution.is_some()
    }

    pub fn resolution(&self) -> Option<Resolution> {
        self.resolution
    }

    /// Cards held, left in the deck, and on the discard pile.
    pub fn card_count(&self) -> usize {
        self.hands.iter().map(Hand::len).sum::<usize>() + self.deck.len() + self.discard_pile.len()
    }

    /// Advances the round by one turn step. Returns the resolution once the
    /// round is over; further calls keep returning it.
    pub fn step(
        &mut self,
        bots: &[Box<dyn Bot>],
        sink: &mut dyn EventSink,
    ) -> Result<Option<Resolution>, GameError> {
        if let Some(resolution) = self.resolution {
            return Ok(Some(resolution));
        }
        let seat = self.current;

        if self.deck.is_empty() {
            debug!(round = self.number, seat, "deck exhausted");
            sink.record(Event::DeckExhausted { seat });
            let resolution = resolve_exhaustion(seat, &self.hand_totals(), &self.settings);
            self.resolution = Some(resolution);
            return Ok(Some(resolution));
        }

        let hand_total = self.hands[seat].total_value();
        if hand_total <= self.settings.declare_threshold {
            let resolution = resolve_declare(seat, &self.hand_totals(), &self.settings);
            let lowest = matches!(resolution.cause, RoundEnd::Declared { lowest: true, .. });
            debug!(round = self.number, seat, hand_total, lowest, "tunk called");
            sink.record(Event::Declared {
                seat,
                hand_total,
                lowest,
            });
            self.resolution = Some(resolution);
            return Ok(Some(resolution));
        }

        let bot = bots
            .get(seat)
            .ok_or_else(|| GameError::config(format!("no strategy for seat {seat}")))?;
        self.play_turn(seat, bot.as_ref(), sink)?;
        self.turns_taken += 1;
        if self.turns_taken % SEAT_COUNT as u32 == 0 {
            let mean_hand_total = self.hand_totals().iter().sum::<u32>() as f64 / SEAT_COUNT as f64;
            sink.record(Event::RotationCompleted {
                round: self.number,
                rotation: self.turns_taken / SEAT_COUNT as u32,
                mean_hand_total,
            });
        }
        self.current = next_seat(seat);
        Ok(None)
    }

    /// Steps until the round is over.
    pub fn play_out(
        &mut self,
        bots: &[Box<dyn Bot>],
        sink: &mut dyn EventSink,
    ) -> Result<Resolution, GameError> {
        loop {
            if let Some(resolution) = self.step(bots, sink)? {
                return Ok(resolution);
            }
        }
    }

    fn play_turn(
        &mut self,
        seat: Seat,
        bot: &dyn Bot,
        sink: &mut dyn EventSink,
    ) -> Result<(), GameError> {
        let top = self.discard_pile.pop().ok_or(GameError::EmptyDiscardPile)?;
        let plan = bot.plan_turn(&TurnView {
            seat,
            hand: self.hands[seat].cards(),
            discard_top: top,
            deck_remaining: self.deck.len(),
        });

        let drawn = match plan.draw {
            DrawSource::DiscardPile => top,
            DrawSource::Deck => {
                self.discard_pile.push(top);
                self.deck.draw()?
            }
        };
        let hand = &mut self.hands[seat];
        hand.discard(&plan.discards, &mut self.discard_pile)?;
        if let Some(kept) = &plan.kept {
            hand.move_to_back(kept)?;
        }
        hand.push(drawn);

        trace!(
            round = self.number,
            seat,
            discarded = ?plan.discards,
            %drawn,
            source = ?plan.draw,
            "turn taken"
        );
        sink.record(Event::TurnTaken {
            seat,
            discarded: plan.discards,
            drawn,
            source: plan.draw,
        });
        Ok(())
    }
}
