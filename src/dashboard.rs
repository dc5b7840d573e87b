//! Dashboard facade - everything a presentation layer needs in one call

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, info};

use crate::config::DashboardConfig;
use crate::error::{Result, StatsError};
use crate::exercises::{BodyPart, Category, Exercise};
use crate::load::{StatsSummary, WeeklyMicrocycle, generate_microcycles, summarize};
use crate::range::{DateRange, categories_for, filter_by_body_part, filter_by_category};
use crate::repository::{TrainingSource, WorkoutRepository};
use crate::series::{Grouping, SeriesPoint, cumulative_progress, grouped_volume};
use crate::state::DashboardState;

/// Computed view for one dashboard state
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub period_label: String,
    pub range: DateRange,
    pub body_part: BodyPart,
    pub summary: StatsSummary,
    pub daily_volume: Vec<SeriesPoint>,
    pub weekly_volume: Vec<SeriesPoint>,
    pub progress: Vec<SeriesPoint>,
    pub microcycles: Vec<WeeklyMicrocycle>,
}

impl DashboardView {
    /// False when the period holds no sessions ("no data" state)
    pub fn has_data(&self) -> bool {
        !self.daily_volume.is_empty()
    }
}

/// Exercises offered by the picker for the current filters
#[derive(Debug, Clone, Serialize)]
pub struct ExercisePicker {
    pub categories: Vec<Category>,
    pub exercises: Vec<Exercise>,
    pub selected: Vec<Exercise>,
    pub selection_full: bool,
}

pub struct Dashboard<R, T> {
    repository: R,
    trainings: T,
    config: DashboardConfig,
}

impl<R: WorkoutRepository, T: TrainingSource> Dashboard<R, T> {
    pub fn new(repository: R, trainings: T, config: DashboardConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            repository,
            trainings,
            config,
        })
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Reject selections with more distinct ids than the configured limit
    pub fn check_selection(&self, selected: &[String]) -> Result<()> {
        let distinct: BTreeSet<&String> = selected.iter().collect();
        if distinct.len() > self.config.max_selected_exercises {
            return Err(StatsError::TooManyExercises {
                max: self.config.max_selected_exercises,
                got: distinct.len(),
            });
        }
        Ok(())
    }

    /// Stats cards over the whole history for a body part
    pub fn summary(&self, body_part: BodyPart) -> StatsSummary {
        summarize(&self.repository.history(), &self.repository.list_exercises(), body_part)
    }

    pub fn volume(
        &self,
        state: &DashboardState,
        today: NaiveDate,
        grouping: Grouping,
    ) -> Result<Vec<SeriesPoint>> {
        self.check_selection(&state.selected_exercises)?;
        let range = state.period.resolve(today, &self.config)?;
        let sessions = self.repository.list_sessions(&range);
        let refs: Vec<_> = sessions.iter().collect();
        Ok(grouped_volume(
            &refs,
            &self.repository.list_exercises(),
            &state.selected_exercises,
            grouping,
        ))
    }

    pub fn progress(&self, state: &DashboardState, today: NaiveDate) -> Result<Vec<SeriesPoint>> {
        self.check_selection(&state.selected_exercises)?;
        let range = state.period.resolve(today, &self.config)?;
        let sessions = self.repository.list_sessions(&range);
        let refs: Vec<_> = sessions.iter().collect();
        Ok(cumulative_progress(
            &refs,
            &self.repository.history(),
            &self.repository.list_exercises(),
            &state.selected_exercises,
            self.config.auto_tracked_exercises,
        ))
    }

    /// Load calendar ending with the current week
    pub fn calendar(
        &self,
        state: &DashboardState,
        today: NaiveDate,
    ) -> Result<Vec<WeeklyMicrocycle>> {
        let weeks = state.period.weeks_needed(&self.config);
        generate_microcycles(&self.trainings, today, weeks, self.config.chronic_weeks)
    }

    pub fn exercise_picker(&self, state: &DashboardState) -> ExercisePicker {
        let catalog = self.repository.list_exercises();
        let for_body_part = filter_by_body_part(&catalog, state.body_part);
        let exercises = filter_by_category(&for_body_part, state.category)
            .into_iter()
            .cloned()
            .collect();
        let selected = state
            .selected_exercises
            .iter()
            .filter_map(|id| catalog.iter().find(|e| e.id == *id).cloned())
            .collect();

        ExercisePicker {
            categories: categories_for(&catalog, state.body_part),
            exercises,
            selected,
            selection_full: state.selected_exercises.len() >= state.selection_limit,
        }
    }

    pub fn view(&self, state: &DashboardState, today: NaiveDate) -> Result<DashboardView> {
        self.check_selection(&state.selected_exercises)?;
        let range = state.period.resolve(today, &self.config)?;

        let catalog = self.repository.list_exercises();
        let history = self.repository.history();
        let sessions = self.repository.list_sessions(&range);
        let refs: Vec<_> = sessions.iter().collect();
        let selected = &state.selected_exercises;

        let view = DashboardView {
            period_label: state.period.label(),
            range,
            body_part: state.body_part,
            summary: summarize(&history, &catalog, state.body_part),
            daily_volume: grouped_volume(&refs, &catalog, selected, Grouping::Daily),
            weekly_volume: grouped_volume(&refs, &catalog, selected, Grouping::Weekly),
            progress: cumulative_progress(
                &refs,
                &history,
                &catalog,
                selected,
                self.config.auto_tracked_exercises,
            ),
            microcycles: self.calendar(state, today)?,
        };

        if view.has_data() {
            info!(
                from = %range.from,
                to = %range.to,
                sessions = sessions.len(),
                weeks = view.microcycles.len(),
                "dashboard view computed"
            );
        } else {
            debug!(from = %range.from, to = %range.to, "no sessions in range");
        }

        Ok(view)
    }
}
