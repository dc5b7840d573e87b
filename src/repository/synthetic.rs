//! Deterministic placeholder trainings for the load calendar
//!
//! Stands in for a real training log behind [`TrainingSource`]. Each day is
//! generated from its own seeded RNG, so any window of days yields the same
//! trainings regardless of how the range is sliced.

use chrono::{Datelike, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{DayData, Training, TrainingSource};
use crate::range::DateRange;

/// Chance of training on a given day
const TRAINING_DAY_PROBABILITY: f64 = 0.55;
/// Chance of a second training on a training day
const DOUBLE_SESSION_PROBABILITY: f64 = 0.15;

#[derive(Debug, Clone, Copy)]
pub struct SyntheticTrainings {
    seed: u64,
}

impl SyntheticTrainings {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    fn rng_for(&self, date: NaiveDate) -> StdRng {
        let day = date.num_days_from_ce() as u64;
        StdRng::seed_from_u64(self.seed ^ day.wrapping_mul(0x9E37_79B9_7F4A_7C15))
    }

    /// Trainings for a single day, empty on rest days
    pub fn day(&self, date: NaiveDate) -> DayData {
        let mut rng = self.rng_for(date);
        if !rng.gen_bool(TRAINING_DAY_PROBABILITY) {
            return DayData::empty(date);
        }

        let count = if rng.gen_bool(DOUBLE_SESSION_PROBABILITY) { 2 } else { 1 };
        let trainings = (0..count)
            .map(|n| Training {
                id: format!("t{}-{}", date.format("%Y%m%d"), n + 1),
                duration_mins: rng.gen_range(30..=90),
                intensity: f64::from(rng.gen_range(4u8..=9)),
                volume: f64::from(rng.gen_range(20u32..=80) * 100),
                note: None,
            })
            .collect();

        DayData { date, trainings }
    }
}

impl TrainingSource for SyntheticTrainings {
    fn training_days(&self, range: &DateRange) -> Vec<DayData> {
        range
            .days()
            .map(|date| self.day(date))
            .filter(|d| !d.is_rest_day())
            .collect()
    }
}
