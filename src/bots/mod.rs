pub mod basic;
pub mod expert;
pub mod intermediate;
pub mod registry;

pub use basic::BasicBot;
pub use expert::ExpertBot;
pub use intermediate::IntermediateBot;
pub use registry::{Lineup, SeatConfig, Tier, create_bot, parse_seat_spec};
