//! Chart-ready series built from workout sessions
//!
//! Every point carries an ordered list of `{label, value}` pairs instead of
//! exercise-name keyed maps, so consumers can rely on a stable shape.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::exercises::{Exercise, exercise_label, find_exercise};
use crate::range::week_start;
use crate::repository::WorkoutSession;

/// Bucket name when volume is combined across exercises
pub const VOLUME_LABEL: &str = "Wolumen";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesValue {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// Grouping key: session date, or Monday of the week
    pub date: NaiveDate,
    /// Axis label, "dd.MM"
    pub label: String,
    pub values: Vec<SeriesValue>,
}

impl SeriesPoint {
    fn new(date: NaiveDate, values: Vec<SeriesValue>) -> Self {
        Self {
            date,
            label: date.format("%d.%m").to_string(),
            values,
        }
    }

    pub fn value(&self, label: &str) -> Option<f64> {
        self.values.iter().find(|v| v.label == label).map(|v| v.value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Grouping {
    #[default]
    Daily,
    Weekly,
}

impl Grouping {
    fn key(&self, date: NaiveDate) -> NaiveDate {
        match self {
            Grouping::Daily => date,
            Grouping::Weekly => week_start(date),
        }
    }
}

/// Exercise ids followed by the progress chart.
///
/// The explicit selection wins; otherwise the first `auto_limit` distinct
/// catalog exercises in order of first appearance across `history`.
pub fn tracked_exercises(
    history: &[WorkoutSession],
    catalog: &[Exercise],
    selected: &[String],
    auto_limit: usize,
) -> Vec<String> {
    let mut tracked: Vec<String> = Vec::new();

    if !selected.is_empty() {
        for id in selected {
            if !tracked.contains(id) {
                tracked.push(id.clone());
            }
        }
        return tracked;
    }

    for entry in history.iter().flat_map(|s| &s.exercises) {
        if tracked.len() >= auto_limit {
            break;
        }
        let known = find_exercise(catalog, &entry.exercise_id).is_some();
        if known && !tracked.contains(&entry.exercise_id) {
            tracked.push(entry.exercise_id.clone());
        }
    }
    tracked
}

/// Display labels for `ids`, unique within the list.
///
/// A label already taken (two unknown ids, or two catalog entries sharing a
/// name) gets its exercise id appended.
pub fn series_labels(catalog: &[Exercise], ids: &[String]) -> Vec<String> {
    let mut labels: Vec<String> = Vec::with_capacity(ids.len());
    for id in ids {
        let label = exercise_label(catalog, id);
        if labels.contains(&label) {
            labels.push(format!("{} ({})", label, id));
        } else {
            labels.push(label);
        }
    }
    labels
}

/// Sessions keyed by date, insertion order kept within a day
fn by_date<'a>(
    sessions: &[&'a WorkoutSession],
) -> BTreeMap<NaiveDate, Vec<&'a WorkoutSession>> {
    let mut grouped: BTreeMap<NaiveDate, Vec<&WorkoutSession>> = BTreeMap::new();
    for &session in sessions {
        grouped.entry(session.date).or_default().push(session);
    }
    grouped
}

/// Running volume totals per tracked exercise, one point per session date.
///
/// Exercises untouched on a date carry their last total forward; before the
/// first occurrence the total is 0.
pub fn cumulative_progress(
    sessions: &[&WorkoutSession],
    history: &[WorkoutSession],
    catalog: &[Exercise],
    selected: &[String],
    auto_limit: usize,
) -> Vec<SeriesPoint> {
    let tracked = tracked_exercises(history, catalog, selected, auto_limit);
    let labels = series_labels(catalog, &tracked);
    let mut running = vec![0.0; tracked.len()];

    by_date(sessions)
        .into_iter()
        .map(|(date, day_sessions)| {
            for entry in day_sessions.iter().flat_map(|s| &s.exercises) {
                if let Some(idx) = tracked.iter().position(|id| *id == entry.exercise_id) {
                    running[idx] += entry.volume();
                }
            }

            let values = labels
                .iter()
                .zip(&running)
                .map(|(label, total)| SeriesValue {
                    label: label.clone(),
                    value: *total,
                })
                .collect();
            SeriesPoint::new(date, values)
        })
        .collect()
}

/// Volume bars per day or per week.
///
/// Exactly one selected exercise gives a bucket named after it; none or
/// several give a single combined [`VOLUME_LABEL`] bucket. Every key that
/// has a session yields a point, with 0 when nothing matched.
pub fn grouped_volume(
    sessions: &[&WorkoutSession],
    catalog: &[Exercise],
    selected: &[String],
    grouping: Grouping,
) -> Vec<SeriesPoint> {
    let bucket = match selected {
        [only] => exercise_label(catalog, only),
        _ => VOLUME_LABEL.to_string(),
    };

    let mut totals: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for session in sessions {
        let total = totals.entry(grouping.key(session.date)).or_insert(0.0);
        *total += session
            .exercises
            .iter()
            .filter(|e| selected.is_empty() || selected.contains(&e.exercise_id))
            .map(|e| e.volume())
            .sum::<f64>();
    }

    totals
        .into_iter()
        .map(|(date, value)| {
            SeriesPoint::new(
                date,
                vec![SeriesValue {
                    label: bucket.clone(),
                    value,
                }],
            )
        })
        .collect()
}
