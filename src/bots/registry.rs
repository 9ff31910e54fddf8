use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Bot;
use crate::action::{SEAT_COUNT, Seat};
use crate::bots::{BasicBot, ExpertBot, IntermediateBot};
use crate::error::GameError;
use crate::state::GameSettings;

/// Decision policy tier for a seat.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Basic,
    Intermediate,
    Expert,
}

impl Tier {
    pub fn label(self) -> &'static str {
        match self {
            Tier::Basic => "basic",
            Tier::Intermediate => "intermediate",
            Tier::Expert => "expert",
        }
    }
}

impl Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Tier {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" => Ok(Tier::Basic),
            "intermediate" => Ok(Tier::Intermediate),
            "expert" => Ok(Tier::Expert),
            other => Err(GameError::config(format!("unknown strategy tier: {other}"))),
        }
    }
}

/// Strategy for one seat, with an optional beta override for experts.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct SeatConfig {
    pub tier: Tier,
    #[serde(default)]
    pub beta: Option<u8>,
}

impl SeatConfig {
    pub fn new(tier: Tier) -> Self {
        Self { tier, beta: None }
    }

    pub fn with_beta(mut self, beta: u8) -> Self {
        self.beta = Some(beta);
        self
    }
}

impl From<Tier> for SeatConfig {
    fn from(tier: Tier) -> Self {
        Self::new(tier)
    }
}

impl Display for SeatConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.beta {
            Some(beta) => write!(f, "{}:{beta}", self.tier),
            None => write!(f, "{}", self.tier),
        }
    }
}

impl FromStr for SeatConfig {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_seat_spec(s)
    }
}

/// Parses a CLI-style seat spec.
/// Supported specs:
/// - basic
/// - intermediate
/// - expert[:beta]
pub fn parse_seat_spec(spec: &str) -> Result<SeatConfig, GameError> {
    let (head, beta) = match spec.split_once(':') {
        Some((head, value)) => {
            let beta = value
                .trim()
                .parse::<u8>()
                .map_err(|_| GameError::config(format!("invalid beta in seat spec: {spec}")))?;
            (head, Some(beta))
        }
        None => (spec, None),
    };
    let tier: Tier = head.parse()?;
    if beta.is_some() && tier != Tier::Expert {
        return Err(GameError::config(format!(
            "beta only applies to expert seats: {spec}"
        )));
    }
    Ok(SeatConfig { tier, beta })
}

/// Creates the policy for `seat`, resolving the beta from `settings` when the
/// seat has no override.
pub fn create_bot(config: SeatConfig, seat: Seat, settings: &GameSettings) -> Box<dyn Bot> {
    match config.tier {
        Tier::Basic => Box::new(BasicBot::new()),
        Tier::Intermediate => Box::new(IntermediateBot::new()),
        Tier::Expert => {
            let beta = config.beta.unwrap_or_else(|| settings.beta_for_seat(seat));
            Box::new(ExpertBot::new(beta))
        }
    }
}

/// Named seat arrangements used by the strategy experiments.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Lineup {
    /// Every seat plays the same tier.
    Uniform(Tier),
    /// Seat 0 plays `challenger`, the other three play `field`.
    Versus { challenger: Tier, field: Tier },
}

impl Lineup {
    /// The nine arrangements compared by the win-rate experiment.
    pub fn standard() -> Vec<Lineup> {
        let tiers = [Tier::Basic, Tier::Intermediate, Tier::Expert];
        let mut lineups: Vec<Lineup> = tiers.iter().map(|&tier| Lineup::Uniform(tier)).collect();
        for challenger in tiers {
            for field in tiers {
                if challenger != field {
                    lineups.push(Lineup::Versus { challenger, field });
                }
            }
        }
        lineups
    }

    pub fn seats(self) -> [SeatConfig; SEAT_COUNT] {
        match self {
            Lineup::Uniform(tier) => [SeatConfig::new(tier); SEAT_COUNT],
            Lineup::Versus { challenger, field } => {
                let mut seats = [SeatConfig::new(field); SEAT_COUNT];
                seats[0] = SeatConfig::new(challenger);
                seats
            }
        }
    }

    pub fn name(self) -> String {
        match self {
            Lineup::Uniform(tier) => format!("all-{tier}"),
            Lineup::Versus { challenger, field } => format!("{challenger}-vs-{field}"),
        }
    }
}

impl FromStr for Lineup {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        if let Some(tier) = lower.strip_prefix("all-") {
            return Ok(Lineup::Uniform(tier.parse()?));
        }
        if let Some((challenger, field)) = lower.split_once("-vs-") {
            return Ok(Lineup::Versus {
                challenger: challenger.parse()?,
                field: field.parse()?,
            });
        }
        Err(GameError::config(format!("unknown lineup: {s}")))
    }
}
