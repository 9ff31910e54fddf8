use thiserror::Error;

use crate::card::Card;

/// Errors that can occur while setting up or running a game.
///
/// Everything except [`GameError::InvalidConfiguration`] signals a broken
/// engine invariant and aborts the game.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("attempted to draw from an empty deck")]
    EmptyDeck,
    #[error("discard pile has no top card")]
    EmptyDiscardPile,
    #[error("{0} is not in the player's hand")]
    CardNotInHand(Card),
    #[error("game is already over")]
    GameOver,
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl GameError {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        GameError::InvalidConfiguration(message.into())
    }
}
