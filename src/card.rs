use std::fmt::{self, Display};
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const STANDARD_SUITS: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];
pub const JOKER_SUITS: [Suit; 2] = [Suit::Red, Suit::Black];
pub const STANDARD_RANKS: [Rank; 13] = [
    Rank::Ace,
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
];
pub const DECK_SIZE: usize = 54;

/// Card suit. Jokers carry one of the two colour suits.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
    Red,
    Black,
}

impl Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sym = match self {
            Suit::Spades => "♠",
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Red => "Red",
            Suit::Black => "Black",
        };
        f.write_str(sym)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Joker,
}

impl Rank {
    /// Penalty points for holding a card of this rank.
    pub fn value(self) -> u8 {
        match self {
            Rank::Ace => 1,
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 10,
            Rank::Joker => 0,
        }
    }
}

impl Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sym = match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Joker => "Joker",
        };
        f.write_str(sym)
    }
}

/// A single playing card.
///
/// Two cards compare equal when their rank and value match, regardless of suit.
/// Pair detection and discard-pile matching rely on this, so a King of Spades
/// "matches" a King of Hearts. Use [`Card::is_same_card`] to tell physical
/// cards apart.
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
pub struct Card {
    suit: Suit,
    rank: Rank,
}

impl Card {
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    pub const fn joker(suit: Suit) -> Self {
        Self {
            suit,
            rank: Rank::Joker,
        }
    }

    #[inline]
    pub fn suit(&self) -> Suit {
        self.suit
    }

    #[inline]
    pub fn rank(&self) -> Rank {
        self.rank
    }

    #[inline]
    pub fn value(&self) -> u8 {
        self.rank.value()
    }

    /// True when both cards are the same physical card (suit and rank).
    #[inline]
    pub fn is_same_card(&self, other: &Card) -> bool {
        self.suit == other.suit && self.rank == other.rank
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank && self.value() == other.value()
    }
}

impl Eq for Card {}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rank.hash(state);
        self.value().hash(state);
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rank {
            Rank::Joker => write!(f, "{} Joker", self.suit),
            rank => write!(f, "{rank}{}", self.suit),
        }
    }
}

/// Error returned when a card literal cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid card literal: {0}")]
pub struct ParseCardError(String);

/// Parses short literals such as `AS`, `10h`, `td`, `kc`, `RJ` (red joker) or `BJ`,
/// as well as the symbol form printed by `Display` (`K♠`, `Red Joker`).
impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        match upper.as_str() {
            "RJ" | "RED JOKER" => return Ok(Card::joker(Suit::Red)),
            "BJ" | "BLACK JOKER" => return Ok(Card::joker(Suit::Black)),
            _ => {}
        }
        let err = || ParseCardError(s.to_string());
        let (split, suit) = upper.char_indices().next_back().ok_or_else(err)?;
        let rank = match &upper[..split] {
            "A" => Rank::Ace,
            "2" => Rank::Two,
            "3" => Rank::Three,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "10" | "T" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            _ => return Err(err()),
        };
        let suit = match suit {
            'S' | '♠' => Suit::Spades,
            'H' | '♥' => Suit::Hearts,
            'D' | '♦' => Suit::Diamonds,
            'C' | '♣' => Suit::Clubs,
            _ => return Err(err()),
        };
        Ok(Card::new(suit, rank))
    }
}

/// Builds the 54-card deck in a fixed order (unshuffled): four suits of
/// thirteen ranks followed by the red and black jokers.
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in STANDARD_SUITS {
        for rank in STANDARD_RANKS {
            deck.push(Card::new(suit, rank));
        }
    }
    deck.extend(JOKER_SUITS.into_iter().map(Card::joker));
    deck
}
