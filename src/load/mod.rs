//! Load module - volume and training-load aggregation
//!
//! Features:
//! - Session and day volume rollups
//! - Acute:Chronic Workload Ratio per week
//! - Weekly microcycles for the load calendar

pub mod acwr;
pub mod microcycle;

pub use acwr::{Acwr, AcwrBand, classify_acwr, compute_week_acwr};
pub use microcycle::{WeeklyMicrocycle, generate_microcycles};

use serde::{Deserialize, Serialize};

use crate::exercises::{BodyPart, Exercise};
use crate::repository::{DayData, WorkoutSession};

/// Σ sets × reps × weight over every entry of the session
pub fn compute_session_volume(session: &WorkoutSession) -> f64 {
    session.exercises.iter().map(|e| e.volume()).sum()
}

/// Load and volume of one calendar day
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DayTotals {
    pub total_load: f64,
    pub total_volume: f64,
}

pub fn compute_day_totals(day: &DayData) -> DayTotals {
    day.trainings.iter().fold(DayTotals::default(), |acc, t| DayTotals {
        total_load: acc.total_load + t.load(),
        total_volume: acc.total_volume + t.volume,
    })
}

/// Headline numbers for the stats cards
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StatsSummary {
    pub total_workouts: usize,
    pub total_exercises: usize,
    pub total_volume: f64,
}

/// Summarize sessions restricted to one body part.
///
/// A session counts as a workout when any of its entries targets the body
/// part. Entries whose exercise is missing from the catalog never match.
pub fn summarize(
    sessions: &[WorkoutSession],
    catalog: &[Exercise],
    body_part: BodyPart,
) -> StatsSummary {
    let relevant: Vec<&str> = catalog
        .iter()
        .filter(|e| body_part.matches(e.body_part))
        .map(|e| e.id.as_str())
        .collect();

    let mut summary = StatsSummary::default();
    for session in sessions {
        let entries: Vec<_> = session
            .exercises
            .iter()
            .filter(|e| relevant.contains(&e.exercise_id.as_str()))
            .collect();

        if entries.is_empty() {
            continue;
        }

        summary.total_workouts += 1;
        summary.total_exercises += entries.len();
        summary.total_volume += entries.iter().map(|e| e.volume()).sum::<f64>();
    }
    summary
}
