//! Tunk card game engine with tiered heuristic players, built for batch strategy experiments.

pub mod action;
pub mod bot;
pub mod bots;
pub mod card;
pub mod deck;
pub mod error;
pub mod event;
pub mod game;
pub mod hand;
pub mod round;
pub mod score;
pub mod state;
pub mod stats;
pub mod visualize;

pub use crate::action::{DrawSource, SEAT_COUNT, Seat, TurnPlan};
pub use crate::bot::{Bot, select_discards};
pub use crate::bots::{
    BasicBot, ExpertBot, IntermediateBot, Lineup, SeatConfig, Tier, create_bot, parse_seat_spec,
};
pub use crate::card::{Card, Rank, Suit};
pub use crate::deck::Deck;
pub use crate::error::GameError;
pub use crate::event::{Event, EventSink, FnSink};
pub use crate::game::{
    Game, GameBuilder, GameConfig, GameResult, Player, play_game, play_game_with_events,
};
pub use crate::hand::Hand;
pub use crate::round::Round;
pub use crate::score::{Resolution, RoundEnd};
pub use crate::state::{GameSettings, GameStatus, TurnView};
pub use crate::stats::{RotationAverages, Tally};
pub use crate::visualize::{LogOptions, describe_event, describe_event_with_options};
