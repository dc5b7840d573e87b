//! Sample workout history relative to a given day

use chrono::{Duration, NaiveDate};

use super::{ExerciseEntry, WorkoutSession};

fn session(
    id: &str,
    today: NaiveDate,
    days_ago: i64,
    entries: &[(&str, u32, u32, f64)],
) -> WorkoutSession {
    WorkoutSession {
        id: id.to_string(),
        date: today - Duration::days(days_ago),
        exercises: entries
            .iter()
            .map(|(ex, sets, reps, weight)| ExerciseEntry::new(ex, *sets, *reps, *weight))
            .collect(),
    }
}

/// Twelve sessions spread over the four weeks before `today`
pub fn workout_history(today: NaiveDate) -> Vec<WorkoutSession> {
    vec![
        session("w1", today, 28, &[("5", 4, 10, 80.0), ("6", 3, 12, 20.0), ("7", 3, 15, 0.0)]),
        session("w2", today, 26, &[("9", 5, 5, 100.0), ("10", 4, 6, 120.0), ("11", 3, 12, 60.0)]),
        session("w3", today, 24, &[("13", 4, 8, 70.0), ("14", 4, 8, 0.0), ("17", 4, 10, 40.0)]),
        session("w4", today, 21, &[("5", 4, 10, 82.5), ("6", 3, 12, 22.0), ("1", 3, 12, 30.0)]),
        session("w5", today, 18, &[("9", 5, 5, 105.0), ("10", 4, 6, 125.0), ("11", 3, 12, 65.0)]),
        session("w6", today, 15, &[("13", 4, 8, 72.5), ("14", 4, 10, 0.0), ("17", 4, 10, 42.5)]),
        session("w7", today, 12, &[("5", 4, 10, 85.0), ("7", 4, 20, 0.0), ("2", 3, 12, 25.0)]),
        session("w8", today, 9, &[("9", 5, 5, 110.0), ("10", 4, 6, 130.0)]),
        session("w9", today, 7, &[("17", 4, 10, 45.0), ("18", 4, 12, 12.0), ("19", 3, 10, 16.0)]),
        session("w10", today, 5, &[("5", 4, 10, 87.5), ("6", 4, 12, 24.0)]),
        session("w11", today, 3, &[("9", 5, 5, 115.0), ("11", 4, 12, 70.0)]),
        session("w12", today, 1, &[("13", 4, 8, 75.0), ("15", 4, 10, 55.0)]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_shape() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        let history = workout_history(today);
        assert_eq!(history.len(), 12);
        assert_eq!(history[0].date, today - Duration::days(28));
        assert!(history.iter().all(|s| s.date < today));
        assert_eq!(history.iter().map(|s| s.exercises.len()).sum::<usize>(), 32);
    }
}
