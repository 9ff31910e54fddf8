use tunk::card::full_deck;
use tunk::{
    Bot, Card, Deck, DrawSource, Event, Game, GameConfig, GameError, GameSettings, GameStatus,
    Round, RoundEnd, SEAT_COUNT, SeatConfig, Tier, create_bot, play_game, play_game_with_events,
};

fn card(literal: &str) -> Card {
    literal.parse().expect("valid card literal")
}

fn cards(literals: &[&str]) -> Vec<Card> {
    literals.iter().map(|s| card(s)).collect()
}

fn holds(round: &Round, seat: usize, literal: &str) -> bool {
    let wanted = card(literal);
    round.hand(seat).cards().iter().any(|c| c.is_same_card(&wanted))
}

/// Orders cards so that dealing produces `hands`, then `seed` lands on the
/// discard pile, then `draws` come off the deck in order. With `pad`, the
/// unused remainder of the 54-card deck follows.
fn stacked_deck(hands: [&[&str]; SEAT_COUNT], seed: &str, draws: &[&str], pad: bool) -> Deck {
    let hands: Vec<Vec<Card>> = hands.iter().map(|h| cards(h)).collect();
    let mut order = Vec::new();
    for index in 0..hands[0].len() {
        for hand in &hands {
            order.push(hand[index]);
        }
    }
    order.push(card(seed));
    order.extend(cards(draws));
    if pad {
        for spare in full_deck() {
            if !order.iter().any(|used| used.is_same_card(&spare)) {
                order.push(spare);
            }
        }
    }
    order.reverse();
    Deck::from_cards(order)
}

fn bots(tiers: [Tier; SEAT_COUNT]) -> Vec<Box<dyn Bot>> {
    let settings = GameSettings::default();
    tiers
        .iter()
        .enumerate()
        .map(|(seat, &tier)| create_bot(SeatConfig::new(tier), seat, &settings))
        .collect()
}

const SPADES: &[&str] = &["KS", "QS", "JS", "9S", "8S"];
const HIGH_1: &[&str] = &["KH", "QH", "JH", "10H", "9H"];
const HIGH_2: &[&str] = &["KD", "QD", "JD", "10D", "9D"];
const HIGH_3: &[&str] = &["KC", "QC", "JC", "10C", "9C"];

#[test]
fn low_hand_declares_instead_of_playing() -> Result<(), GameError> {
    let deck = stacked_deck(
        [&["AD", "2C", "3S", "RJ", "BJ"], HIGH_1, HIGH_2, HIGH_3],
        "5S",
        &[],
        true,
    );
    let mut game = Game::builder([Tier::Basic; 4]).with_decks(vec![deck]).build()?;
    let mut events = Vec::new();
    let resolution = game.play_round(&mut events)?;

    assert!(!events.iter().any(|e| matches!(e, Event::TurnTaken { .. })));
    assert!(events.contains(&Event::Declared {
        seat: 0,
        hand_total: 6,
        lowest: true
    }));
    assert_eq!(
        resolution.cause,
        RoundEnd::Declared {
            seat: 0,
            lowest: true
        }
    );
    assert_eq!(game.scores(), [0, 49, 49, 49]);
    assert_eq!(game.next_leader(), 0);
    Ok(())
}

#[test]
fn tied_declare_costs_thirty_and_passes_lead() -> Result<(), GameError> {
    let deck = stacked_deck(
        [
            &["AD", "AC", "AH", "AS", "3S"],
            HIGH_1,
            &["2D", "2H", "3D", "RJ", "BJ"],
            HIGH_3,
        ],
        "6S",
        &[],
        true,
    );
    let mut game = Game::builder([Tier::Basic; 4]).with_decks(vec![deck]).build()?;
    let mut events = Vec::new();
    game.play_round(&mut events)?;

    assert!(events.contains(&Event::Declared {
        seat: 0,
        hand_total: 7,
        lowest: false
    }));
    assert_eq!(game.scores(), [30, 0, 0, 0]);
    assert_eq!(game.next_leader(), 2);

    // The next round opens with the lowest non-declarer.
    game.play_round(&mut events)?;
    assert!(events.iter().any(|e| matches!(
        e,
        Event::RoundStarted {
            round: 2,
            leader: 2,
            ..
        }
    )));
    Ok(())
}

#[test]
fn beaten_declare_only_penalizes_declarer() -> Result<(), GameError> {
    let deck = stacked_deck(
        [
            &["AD", "AC", "AH", "AS", "3S"],
            HIGH_1,
            HIGH_2,
            &["2D", "2H", "RJ", "BJ", "2S"],
        ],
        "6S",
        &[],
        true,
    );
    let mut events = Vec::new();
    let mut round = Round::deal(1, deck, 0, GameSettings::default(), &mut events)?;
    let resolution = round.play_out(&bots([Tier::Expert; 4]), &mut events)?;
    assert_eq!(
        resolution.cause,
        RoundEnd::Declared {
            seat: 0,
            lowest: false
        }
    );
    assert!(events.contains(&Event::Declared {
        seat: 0,
        hand_total: 7,
        lowest: false
    }));
    assert_eq!(resolution.points, [30, 0, 0, 0]);
    assert_eq!(resolution.next_leader, 3);
    assert_eq!(round.turns_taken(), 0);
    assert_eq!(round.resolution(), Some(resolution));
    Ok(())
}

#[test]
fn basic_turn_returns_top_card_and_draws_blind() -> Result<(), GameError> {
    let deck = stacked_deck([SPADES, HIGH_1, HIGH_2, HIGH_3], "2H", &["3C"], true);
    let mut events = Vec::new();
    let mut round = Round::deal(1, deck, 0, GameSettings::default(), &mut events)?;
    let bots = bots([Tier::Basic; 4]);

    assert_eq!(round.step(&bots, &mut events)?, None);
    assert!(round.discard_pile()[0].is_same_card(&card("2H")));
    assert!(round.discard_pile()[1].is_same_card(&card("KS")));
    assert_eq!(round.discard_pile().len(), 2);
    assert!(holds(&round, 0, "3C"));
    assert!(!holds(&round, 0, "KS"));
    assert_eq!(round.deck().len(), 32);
    assert_eq!(round.current_seat(), 1);
    assert_eq!(
        events.last(),
        Some(&Event::TurnTaken {
            seat: 0,
            discarded: vec![card("KS")],
            drawn: card("3C"),
            source: DrawSource::Deck,
        })
    );

    // Seat 1 sees the king it could take, declines it, and it stays put.
    round.step(&bots, &mut events)?;
    let pile = round.discard_pile();
    assert_eq!(pile.len(), 3);
    assert!(pile[1].is_same_card(&card("KS")));
    assert!(pile[2].is_same_card(&card("KH")));
    Ok(())
}

#[test]
fn intermediate_takes_lower_top_card() -> Result<(), GameError> {
    let deck = stacked_deck([SPADES, HIGH_1, HIGH_2, HIGH_3], "2H", &[], true);
    let mut round = Round::deal(1, deck, 0, GameSettings::default(), &mut ())?;
    let bots = bots([Tier::Intermediate, Tier::Basic, Tier::Basic, Tier::Basic]);

    round.step(&bots, &mut ())?;
    assert_eq!(round.discard_pile().len(), 1);
    assert!(round.discard_pile()[0].is_same_card(&card("KS")));
    assert!(holds(&round, 0, "2H"));
    assert_eq!(round.deck().len(), 33);
    Ok(())
}

#[test]
fn intermediate_returns_equal_top_card() -> Result<(), GameError> {
    let deck = stacked_deck([SPADES, HIGH_1, HIGH_2, HIGH_3], "10S", &["3C"], true);
    let mut events = Vec::new();
    let mut round = Round::deal(1, deck, 0, GameSettings::default(), &mut events)?;
    let bots = bots([Tier::Intermediate; 4]);

    round.step(&bots, &mut events)?;
    let pile = round.discard_pile();
    assert_eq!(pile.len(), 2);
    assert!(pile[0].is_same_card(&card("10S")));
    assert!(pile[1].is_same_card(&card("KS")));
    assert!(holds(&round, 0, "3C"));
    assert!(!holds(&round, 0, "10S"));
    assert_eq!(round.deck().len(), 32);
    assert!(matches!(
        events.last(),
        Some(Event::TurnTaken {
            source: DrawSource::Deck,
            ..
        })
    ));
    Ok(())
}

#[test]
fn expert_keeps_high_card_when_top_matches_value() -> Result<(), GameError> {
    let deck = stacked_deck(
        [&["KS", "9S", "4S", "8S", "7S"], HIGH_1, HIGH_2, HIGH_3],
        "QS",
        &[],
        true,
    );
    let mut round = Round::deal(1, deck, 0, GameSettings::default(), &mut ())?;
    let bots = bots([Tier::Expert; 4]);

    round.step(&bots, &mut ())?;
    assert_eq!(round.discard_pile().len(), 1);
    assert!(round.discard_pile()[0].is_same_card(&card("9S")));
    assert!(holds(&round, 0, "KS"));
    assert!(holds(&round, 0, "QS"));
    assert_eq!(round.hand(0).total_value(), 39);
    Ok(())
}

#[test]
fn kept_high_card_moves_behind_the_hand() -> Result<(), GameError> {
    let deck = stacked_deck(
        [&["KS", "QS", "JS", "4S", "2S"], HIGH_1, HIGH_2, HIGH_3],
        "10S",
        &[],
        true,
    );
    let mut round = Round::deal(1, deck, 0, GameSettings::default(), &mut ())?;
    round.step(&bots([Tier::Expert; 4]), &mut ())?;

    assert!(round.discard_pile()[0].is_same_card(&card("QS")));
    let order: Vec<Card> = cards(&["JS", "4S", "2S", "KS", "10S"]);
    let hand = round.hand(0).cards();
    assert_eq!(hand.len(), order.len());
    assert!(hand.iter().zip(&order).all(|(held, want)| held.is_same_card(want)));
    // The jack now wins the tie for the next discard.
    let next = round.hand(0).highest_card();
    assert!(next.is_some_and(|c| c.is_same_card(&card("JS"))));
    Ok(())
}

#[test]
fn deck_exhaustion_scores_every_hand() -> Result<(), GameError> {
    let deck = stacked_deck(
        [&["KS", "QS", "JS", "10S", "9S"], HIGH_1, HIGH_2, HIGH_3],
        "8S",
        &["AS", "2S"],
        false,
    );
    let mut events = Vec::new();
    let mut round = Round::deal(1, deck, 0, GameSettings::default(), &mut events)?;
    let resolution = round.play_out(&bots([Tier::Basic; 4]), &mut events)?;

    assert_eq!(round.hand_totals(), [40, 41, 49, 49]);
    assert_eq!(resolution.cause, RoundEnd::DeckExhausted { seat: 2 });
    assert_eq!(resolution.points, [55, 41, 49, 49]);
    assert_eq!(resolution.next_leader, 3);
    assert!(events.contains(&Event::DeckExhausted { seat: 2 }));
    Ok(())
}

#[test]
fn last_card_takes_lower_top() -> Result<(), GameError> {
    let settings = GameSettings {
        hand_size: 1,
        ..GameSettings::default()
    };
    let deck = stacked_deck([&["KS"], &["KH"], &["KD"], &["KC"]], "2H", &[], true);
    let mut round = Round::deal(1, deck, 0, settings, &mut ())?;
    round.step(&bots([Tier::Basic; 4]), &mut ())?;
    assert!(holds(&round, 0, "2H"));
    assert_eq!(round.hand(0).len(), 1);
    assert!(round.discard_pile()[0].is_same_card(&card("KS")));
    Ok(())
}

#[test]
fn last_card_keeps_pile_when_top_is_not_lower() -> Result<(), GameError> {
    let settings = GameSettings {
        hand_size: 1,
        ..GameSettings::default()
    };
    let deck = stacked_deck([&["KS"], &["KH"], &["KD"], &["KC"]], "QS", &["4D"], true);
    let mut round = Round::deal(1, deck, 0, settings, &mut ())?;
    round.step(&bots([Tier::Expert; 4]), &mut ())?;
    assert!(holds(&round, 0, "4D"));
    let pile = round.discard_pile();
    assert_eq!(pile.len(), 2);
    assert!(pile[0].is_same_card(&card("QS")));
    assert!(pile[1].is_same_card(&card("KS")));
    Ok(())
}

#[test]
fn same_seed_same_game() -> Result<(), GameError> {
    let config = GameConfig::uniform(Tier::Basic, 2024);
    assert_eq!(play_game(&config)?, play_game(&config)?);

    let mut first = Vec::new();
    let mut second = Vec::new();
    play_game_with_events(&config, &mut first)?;
    play_game_with_events(&config, &mut second)?;
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn low_threshold_ends_after_one_round() -> Result<(), GameError> {
    let mut game = Game::builder([Tier::Expert; 4])
        .with_seed(3)
        .with_score_threshold(1)
        .build()?;
    let result = game.play(&mut ())?;
    assert_eq!(result.rounds_played, 1);
    assert_eq!(game.status(), GameStatus::Finished);
    assert!(!result.losing_seats.is_empty());
    for &seat in &result.losing_seats {
        assert!(result.final_scores[seat] >= 1);
    }
    assert_eq!(game.start_round(&mut ()).err(), Some(GameError::GameOver));
    Ok(())
}

#[test]
fn game_over_event_lists_losers_and_winners() -> Result<(), GameError> {
    let config = GameConfig::uniform(Tier::Expert, 11);
    let mut events = Vec::new();
    let result = play_game_with_events(&config, &mut events)?;
    match events.last() {
        Some(Event::GameOver {
            rounds,
            losers,
            winners,
            scores,
        }) => {
            assert_eq!(*rounds, result.rounds_played);
            assert_eq!(losers, &result.losing_seats);
            assert_eq!(winners, &result.winning_seats);
            assert_eq!(scores, &result.final_scores);
        }
        other => panic!("expected game over, got {other:?}"),
    }
    Ok(())
}

#[test]
fn rejects_wrong_seat_count() {
    let seats = vec![SeatConfig::new(Tier::Basic); 5];
    assert!(matches!(
        GameConfig::new(seats, 1),
        Err(GameError::InvalidConfiguration(_))
    ));
}
