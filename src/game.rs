use std::collections::VecDeque;

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::action::{SEAT_COUNT, Seat};
use crate::bot::Bot;
use crate::bots::{SeatConfig, Tier, create_bot};
use crate::deck::Deck;
use crate::error::GameError;
use crate::event::{Event, EventSink};
use crate::round::Round;
use crate::score::Resolution;
use crate::state::{GameSettings, GameStatus};

const DEFAULT_SEED: u64 = 0x5EED_5EED_5EED_5EED;

/// Everything needed to play one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub seats: Vec<SeatConfig>,
    #[serde(default)]
    pub settings: GameSettings,
    #[serde(default = "default_seed")]
    pub seed: u64,
}

fn default_seed() -> u64 {
    DEFAULT_SEED
}

impl GameConfig {
    pub fn new(seats: Vec<SeatConfig>, seed: u64) -> Result<Self, GameError> {
        let config = Self {
            seats,
            settings: GameSettings::default(),
            seed,
        };
        config.validate()?;
        Ok(config)
    }

    /// Four seats of the same tier.
    pub fn uniform(tier: Tier, seed: u64) -> Self {
        Self {
            seats: vec![SeatConfig::new(tier); SEAT_COUNT],
            settings: GameSettings::default(),
            seed,
        }
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if self.seats.len() != SEAT_COUNT {
            return Err(GameError::config(format!(
                "expected {SEAT_COUNT} seats, received {}",
                self.seats.len()
            )));
        }
        self.settings.validate()
    }
}

/// Builder that enables deterministic deck injection for tests.
pub struct GameBuilder {
    config: GameConfig,
    decks: Vec<Deck>,
}

impl GameBuilder {
    pub fn new<I, S>(seats: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SeatConfig>,
    {
        Self {
            config: GameConfig {
                seats: seats.into_iter().map(Into::into).collect(),
                settings: GameSettings::default(),
                seed: DEFAULT_SEED,
            },
            decks: Vec::new(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    pub fn with_settings(mut self, settings: GameSettings) -> Self {
        self.config.settings = settings;
        self
    }

    pub fn with_score_threshold(mut self, threshold: u32) -> Self {
        self.config.settings.score_threshold = threshold;
        self
    }

    /// Uses the given decks, in order, for the first rounds. Later rounds fall
    /// back to seeded shuffles.
    pub fn with_decks(mut self, decks: Vec<Deck>) -> Self {
        self.decks = decks;
        self
    }

    pub fn build(self) -> Result<Game, GameError> {
        let mut game = Game::new(self.config)?;
        game.stacked_decks = self.decks.into();
        Ok(game)
    }
}

/// A seat's identity and running score.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Player {
    pub name: String,
    pub seat: Seat,
    pub config: SeatConfig,
    pub score: u32,
}

/// Final outcome of a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub final_scores: [u32; SEAT_COUNT],
    pub losing_seats: Vec<Seat>,
    pub winning_seats: Vec<Seat>,
    pub rounds_played: u32,
}

/// Core Tunk game engine. Owns all state for one game.
pub struct Game {
    settings: GameSettings,
    status: GameStatus,
    players: Vec<Player>,
    bots: Vec<Box<dyn Bot>>,
    rng: StdRng,
    stacked_decks: VecDeque<Deck>,
    rounds_played: u32,
    next_leader: Seat,
}

impl Game {
    pub fn builder<I, S>(seats: I) -> GameBuilder
    where
        I: IntoIterator<Item = S>,
        S: Into<SeatConfig>,
    {
        GameBuilder::new(seats)
    }

    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        let settings = config.settings;
        let players = config
            .seats
            .iter()
            .enumerate()
            .map(|(seat, &seat_config)| Player {
                name: format!("player_{}", seat + 1),
                seat,
                config: seat_config,
                score: 0,
            })
            .collect();
        let bots = config
            .seats
            .iter()
            .enumerate()
            .map(|(seat, &seat_config)| create_bot(seat_config, seat, &settings))
            .collect();
        Ok(Self {
            settings,
            status: GameStatus::Ongoing,
            players,
            bots,
            rng: StdRng::seed_from_u64(config.seed),
            stacked_decks: VecDeque::new(),
            rounds_played: 0,
            next_leader: 0,
        })
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status == GameStatus::Finished
    }

    pub fn settings(&self) -> GameSettings {
        self.settings
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn scores(&self) -> [u32; SEAT_COUNT] {
        std::array::from_fn(|seat| self.players[seat].score)
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Seat that will take the first turn of the next round.
    pub fn next_leader(&self) -> Seat {
        self.next_leader
    }

    /// Deals the next round without playing it.
    pub fn start_round(&mut self, sink: &mut dyn EventSink) -> Result<Round, GameError> {
        if self.is_finished() {
            return Err(GameError::GameOver);
        }
        let deck = match self.stacked_decks.pop_front() {
            Some(deck) => deck,
            None => Deck::shuffled(&mut self.rng),
        };
        Round::deal(
            self.rounds_played + 1,
            deck,
            self.next_leader,
            self.settings,
            sink,
        )
    }

    /// Plays one full round and applies its scores.
    pub fn play_round(&mut self, sink: &mut dyn EventSink) -> Result<Resolution, GameError> {
        let mut round = self.start_round(sink)?;
        let resolution = round.play_out(&self.bots, sink)?;
        self.finish_round(&round, resolution, sink);
        Ok(resolution)
    }

    /// Plays rounds until a score reaches the threshold.
    pub fn play(&mut self, sink: &mut dyn EventSink) -> Result<GameResult, GameError> {
        while !self.is_finished() {
            self.play_round(sink)?;
        }
        self.result().ok_or(GameError::GameOver)
    }

    /// The outcome, once the game is over.
    pub fn result(&self) -> Option<GameResult> {
        if !self.is_finished() {
            return None;
        }
        let (losing_seats, winning_seats) = self.partition_seats();
        Some(GameResult {
            final_scores: self.scores(),
            losing_seats,
            winning_seats,
            rounds_played: self.rounds_played,
        })
    }

    fn finish_round(&mut self, round: &Round, resolution: Resolution, sink: &mut dyn EventSink) {
        for (player, points) in self.players.iter_mut().zip(resolution.points) {
            player.score += points;
        }
        self.rounds_played = round.number();
        self.next_leader = resolution.next_leader;
        let scores = self.scores();
        debug!(
            round = round.number(),
            points = ?resolution.points,
            ?scores,
            next_leader = resolution.next_leader,
            "round scored"
        );
        sink.record(Event::RoundScored {
            round: round.number(),
            points: resolution.points,
            scores,
            next_leader: resolution.next_leader,
        });

        if scores.iter().any(|&score| score >= self.settings.score_threshold) {
            self.status = GameStatus::Finished;
            let (losers, winners) = self.partition_seats();
            debug!(rounds = self.rounds_played, ?losers, ?winners, "game over");
            sink.record(Event::GameOver {
                rounds: self.rounds_played,
                losers,
                winners,
                scores,
            });
        }
    }

    /// Splits seats into (at or above threshold, below threshold).
    fn partition_seats(&self) -> (Vec<Seat>, Vec<Seat>) {
        self.players
            .iter()
            .map(|player| player.seat)
            .partition(|&seat| self.players[seat].score >= self.settings.score_threshold)
    }
}

/// Runs one game to completion.
pub fn play_game(config: &GameConfig) -> Result<GameResult, GameError> {
    play_game_with_events(config, &mut ())
}

/// Runs one game to completion, recording every event into `sink`.
pub fn play_game_with_events(
    config: &GameConfig,
    sink: &mut dyn EventSink,
) -> Result<GameResult, GameError> {
    Game::new(config.clone())?.play(sink)
}
