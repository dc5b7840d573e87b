//! Repository module - injected sources of exercises, sessions and trainings

pub mod mock;
pub mod synthetic;

pub use synthetic::SyntheticTrainings;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::exercises::{Exercise, default_catalog};
use crate::range::{DateRange, filter_sessions};

/// One exercise performed within a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseEntry {
    pub exercise_id: String,
    pub sets: u32,
    pub reps: u32,
    pub weight: f64, // kg, 0 for bodyweight
}

impl ExerciseEntry {
    pub fn new(exercise_id: &str, sets: u32, reps: u32, weight: f64) -> Self {
        Self {
            exercise_id: exercise_id.to_string(),
            sets,
            reps,
            weight,
        }
    }

    /// sets × reps × weight
    pub fn volume(&self) -> f64 {
        f64::from(self.sets) * f64::from(self.reps) * self.weight
    }
}

/// Historical workout session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSession {
    pub id: String,
    pub date: NaiveDate,
    pub exercises: Vec<ExerciseEntry>,
}

/// Calendar-level training unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Training {
    pub id: String,
    pub duration_mins: u32,
    pub intensity: f64, // RPE 1-10
    pub volume: f64,    // kg
    pub note: Option<String>,
}

impl Training {
    /// duration × intensity
    pub fn load(&self) -> f64 {
        f64::from(self.duration_mins) * self.intensity
    }
}

/// Trainings of a single calendar day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayData {
    pub date: NaiveDate,
    pub trainings: Vec<Training>,
}

impl DayData {
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            trainings: Vec::new(),
        }
    }

    pub fn is_rest_day(&self) -> bool {
        self.trainings.is_empty()
    }

    /// Day volume, `None` for a rest day
    pub fn volume(&self) -> Option<f64> {
        if self.is_rest_day() {
            None
        } else {
            Some(self.trainings.iter().map(|t| t.volume).sum())
        }
    }
}

/// Source of exercise definitions and workout sessions
pub trait WorkoutRepository {
    fn list_exercises(&self) -> Vec<Exercise>;

    /// Sessions inside the range, sorted by date
    fn list_sessions(&self, range: &DateRange) -> Vec<WorkoutSession>;

    /// Every session in insertion order
    fn history(&self) -> Vec<WorkoutSession>;
}

/// Source of per-day trainings for the load calendar
pub trait TrainingSource {
    /// Days with at least one training inside the range, sorted by date
    fn training_days(&self, range: &DateRange) -> Vec<DayData>;
}

/// Repository over in-memory records
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    exercises: Vec<Exercise>,
    sessions: Vec<WorkoutSession>,
    days: Vec<DayData>,
}

impl InMemoryRepository {
    pub fn new(exercises: Vec<Exercise>, sessions: Vec<WorkoutSession>) -> Self {
        Self {
            exercises,
            sessions,
            days: Vec::new(),
        }
    }

    /// Built-in catalog with sample history ending at `today`
    pub fn mock(today: NaiveDate) -> Self {
        Self::new(default_catalog(), mock::workout_history(today))
    }

    pub fn with_training_days(mut self, days: Vec<DayData>) -> Self {
        self.days = days;
        self
    }
}

impl WorkoutRepository for InMemoryRepository {
    fn list_exercises(&self) -> Vec<Exercise> {
        self.exercises.clone()
    }

    fn list_sessions(&self, range: &DateRange) -> Vec<WorkoutSession> {
        filter_sessions(&self.sessions, range)
            .into_iter()
            .cloned()
            .collect()
    }

    fn history(&self) -> Vec<WorkoutSession> {
        self.sessions.clone()
    }
}

impl TrainingSource for InMemoryRepository {
    fn training_days(&self, range: &DateRange) -> Vec<DayData> {
        let mut days: Vec<DayData> = self
            .days
            .iter()
            .filter(|d| range.contains(d.date) && !d.is_rest_day())
            .cloned()
            .collect();
        days.sort_by_key(|d| d.date);
        days
    }
}
