//! Aggregates for batch simulations.
//!
//! A [`Tally`] counts wins and losses per seat over many games; a
//! [`RotationAverages`] tracks the mean hand total after each full table
//! rotation, averaged over every round that lasted that long.

use serde::Serialize;

use crate::action::SEAT_COUNT;
use crate::event::{Event, EventSink};
use crate::game::GameResult;

/// Win/loss counts per seat.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Tally {
    pub games: u32,
    pub wins: [u32; SEAT_COUNT],
    pub losses: [u32; SEAT_COUNT],
    pub total_rounds: u64,
}

impl Tally {
    pub fn record(&mut self, result: &GameResult) {
        self.games += 1;
        self.total_rounds += u64::from(result.rounds_played);
        for &seat in &result.winning_seats {
            self.wins[seat] += 1;
        }
        for &seat in &result.losing_seats {
            self.losses[seat] += 1;
        }
    }

    pub fn merge(mut self, other: Tally) -> Tally {
        self.games += other.games;
        self.total_rounds += other.total_rounds;
        for seat in 0..SEAT_COUNT {
            self.wins[seat] += other.wins[seat];
            self.losses[seat] += other.losses[seat];
        }
        self
    }

    /// Fraction of games in which `seat` finished below the threshold.
    pub fn win_ratio(&self, seat: usize) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.wins[seat] as f64 / self.games as f64
    }

    pub fn mean_rounds(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.total_rounds as f64 / self.games as f64
    }
}

/// Mean hand total per rotation index.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct RotationAverages {
    sums: Vec<f64>,
    counts: Vec<u32>,
}

impl RotationAverages {
    pub fn observe(&mut self, rotation: u32, mean_hand_total: f64) {
        let Some(index) = (rotation as usize).checked_sub(1) else {
            return;
        };
        if self.sums.len() <= index {
            self.sums.resize(index + 1, 0.0);
            self.counts.resize(index + 1, 0);
        }
        self.sums[index] += mean_hand_total;
        self.counts[index] += 1;
    }

    /// Average for each rotation, starting with the first.
    pub fn averages(&self) -> Vec<f64> {
        self.sums
            .iter()
            .zip(&self.counts)
            .map(|(sum, &count)| if count == 0 { 0.0 } else { sum / count as f64 })
            .collect()
    }

    pub fn merge(mut self, other: RotationAverages) -> RotationAverages {
        if self.sums.len() < other.sums.len() {
            self.sums.resize(other.sums.len(), 0.0);
            self.counts.resize(other.counts.len(), 0);
        }
        for (index, (sum, count)) in other.sums.iter().zip(other.counts).enumerate() {
            self.sums[index] += sum;
            self.counts[index] += count;
        }
        self
    }
}

impl EventSink for RotationAverages {
    fn record(&mut self, event: Event) {
        if let Event::RotationCompleted {
            rotation,
            mean_hand_total,
            ..
        } = event
        {
            self.observe(rotation, mean_hand_total);
        }
    }
}
