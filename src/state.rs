//! Dashboard selection state as explicit transitions
//!
//! Every change goes through [`DashboardState::apply`], which consumes the
//! old state and returns the new one.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::DashboardConfig;
use crate::exercises::{BodyPart, Category};
use crate::range::Period;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardState {
    pub body_part: BodyPart,
    pub period: Period,
    /// First date of a custom range still waiting for its end
    pub pending_from: Option<NaiveDate>,
    pub selected_exercises: Vec<String>,
    pub category: Option<Category>,
    /// Calendar weeks unfolded by the user
    pub expanded_weeks: BTreeSet<u32>,
    pub selection_limit: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SelectBodyPart(BodyPart),
    SelectPeriod(Period),
    /// One click in the range picker: first pick starts, second completes
    PickCustomDate(NaiveDate),
    ToggleExercise(String),
    /// Add without toggling; repeating an id is a no-op
    SelectExercise(String),
    ClearExercises,
    SelectCategory(Option<Category>),
    ToggleWeek(u32),
}

impl DashboardState {
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            body_part: BodyPart::All,
            period: Period::default(),
            pending_from: None,
            selected_exercises: Vec::new(),
            category: None,
            expanded_weeks: BTreeSet::new(),
            selection_limit: config.max_selected_exercises,
        }
    }

    pub fn apply(mut self, action: Action) -> Self {
        match action {
            Action::SelectBodyPart(part) => {
                self.body_part = part;
                self.selected_exercises.clear();
                self.category = None;
            }
            Action::SelectPeriod(period) => {
                if let Period::Custom { from, to } = period
                    && from > to
                {
                    debug!(%from, %to, "ignoring inverted custom period");
                    return self;
                }
                self.period = period;
                self.pending_from = None;
            }
            Action::PickCustomDate(date) => match self.pending_from {
                Some(from) if date >= from => {
                    self.period = Period::Custom { from, to: date };
                    self.pending_from = None;
                }
                // First pick, or an end before the start: restart from here
                _ => self.pending_from = Some(date),
            },
            Action::ToggleExercise(id) => {
                if let Some(pos) = self.selected_exercises.iter().position(|e| *e == id) {
                    self.selected_exercises.remove(pos);
                } else if self.selected_exercises.len() < self.selection_limit {
                    self.selected_exercises.push(id);
                } else {
                    debug!(exercise_id = %id, limit = self.selection_limit, "selection full");
                }
            }
            Action::SelectExercise(id) => {
                if self.selected_exercises.contains(&id) {
                    return self;
                }
                if self.selected_exercises.len() < self.selection_limit {
                    self.selected_exercises.push(id);
                } else {
                    debug!(exercise_id = %id, limit = self.selection_limit, "selection full");
                }
            }
            Action::ClearExercises => self.selected_exercises.clear(),
            Action::SelectCategory(category) => self.category = category,
            Action::ToggleWeek(week) => {
                if !self.expanded_weeks.remove(&week) {
                    self.expanded_weeks.insert(week);
                }
            }
        }
        self
    }
}

/// Apply an action without consuming the current state
pub fn reduce(state: &DashboardState, action: Action) -> DashboardState {
    state.clone().apply(action)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn initial() -> DashboardState {
        DashboardState::new(&DashboardConfig::default())
    }

    fn toggle(id: &str) -> Action {
        Action::ToggleExercise(id.to_string())
    }

    #[test]
    fn test_initial_state() {
        let state = initial();
        assert_eq!(state.body_part, BodyPart::All);
        assert_eq!(state.period, Period::Last30Days);
        assert!(state.selected_exercises.is_empty());
    }

    #[test]
    fn test_selection_limited_to_two() {
        let state = initial().apply(toggle("5")).apply(toggle("6")).apply(toggle("9"));
        assert_eq!(state.selected_exercises, vec!["5", "6"]);
    }

    #[test]
    fn test_toggle_removes_selected() {
        let state = initial().apply(toggle("5")).apply(toggle("6")).apply(toggle("5"));
        assert_eq!(state.selected_exercises, vec!["6"]);
        let state = state.apply(toggle("9"));
        assert_eq!(state.selected_exercises, vec!["6", "9"]);
    }

    #[test]
    fn test_select_exercise_is_idempotent() {
        let select = |id: &str| Action::SelectExercise(id.to_string());
        let state = initial().apply(select("5")).apply(select("5"));
        assert_eq!(state.selected_exercises, vec!["5"]);

        let state = state.apply(select("6")).apply(select("9"));
        assert_eq!(state.selected_exercises, vec!["5", "6"]);
    }

    #[test]
    fn test_body_part_change_clears_selection() {
        let state = initial()
            .apply(toggle("5"))
            .apply(Action::SelectCategory(Some(Category::Mobility)))
            .apply(Action::SelectBodyPart(BodyPart::Legs));
        assert_eq!(state.body_part, BodyPart::Legs);
        assert!(state.selected_exercises.is_empty());
        assert_eq!(state.category, None);
    }

    #[test]
    fn test_custom_range_two_picks() {
        let state = initial().apply(Action::PickCustomDate(date(2025, 3, 1)));
        assert_eq!(state.pending_from, Some(date(2025, 3, 1)));
        assert_eq!(state.period, Period::Last30Days);

        let state = state.apply(Action::PickCustomDate(date(2025, 3, 11)));
        assert_eq!(state.pending_from, None);
        assert_eq!(state.period, Period::Custom { from: date(2025, 3, 1), to: date(2025, 3, 11) });
    }

    #[test]
    fn test_custom_range_end_before_start_restarts() {
        let state = initial()
            .apply(Action::PickCustomDate(date(2025, 3, 10)))
            .apply(Action::PickCustomDate(date(2025, 3, 2)));
        assert_eq!(state.pending_from, Some(date(2025, 3, 2)));
        assert_eq!(state.period, Period::Last30Days);
    }

    #[test]
    fn test_inverted_custom_period_ignored() {
        let state = initial().apply(Action::SelectPeriod(Period::Custom {
            from: date(2025, 3, 10),
            to: date(2025, 3, 2),
        }));
        assert_eq!(state.period, Period::Last30Days);
    }

    #[test]
    fn test_preset_period_cancels_pending_pick() {
        let state = initial()
            .apply(Action::PickCustomDate(date(2025, 3, 10)))
            .apply(Action::SelectPeriod(Period::Last7Days));
        assert_eq!(state.period, Period::Last7Days);
        assert_eq!(state.pending_from, None);
    }

    #[test]
    fn test_toggle_week() {
        let state = initial().apply(Action::ToggleWeek(3)).apply(Action::ToggleWeek(5));
        assert!(state.expanded_weeks.contains(&3));
        let state = state.apply(Action::ToggleWeek(3));
        assert!(!state.expanded_weeks.contains(&3));
        assert!(state.expanded_weeks.contains(&5));
    }

    #[test]
    fn test_reduce_keeps_original() {
        let state = initial();
        let next = reduce(&state, toggle("5"));
        assert!(state.selected_exercises.is_empty());
        assert_eq!(next.selected_exercises, vec!["5"]);
    }
}
