//! Period resolution and date-range filtering

use chrono::{Datelike, Duration, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::{DashboardConfig, MAX_CALENDAR_WEEKS};
use crate::error::{Result, StatsError};
use crate::exercises::{BodyPart, Category, Exercise};
use crate::repository::WorkoutSession;

/// Inclusive date interval, `from <= to`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    /// Fails with [`StatsError::InvalidRange`] when `from > to`
    pub fn new(from: NaiveDate, to: NaiveDate) -> Result<Self> {
        if from > to {
            warn!(%from, %to, "rejected inverted date range");
            return Err(StatsError::InvalidRange { from, to });
        }
        Ok(Self { from, to })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.from && date <= self.to
    }

    /// Whole days between the bounds (0 for a single-day range)
    pub fn span_days(&self) -> i64 {
        (self.to - self.from).num_days()
    }

    /// Every date in the range, ascending
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        let from = self.from;
        (0..=self.span_days()).map(move |offset| from + Duration::days(offset))
    }
}

/// Period selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Period {
    Last7Days,
    #[default]
    Last30Days,
    Last3Months,
    AllTime,
    Custom { from: NaiveDate, to: NaiveDate },
}

impl Period {
    pub fn label(&self) -> String {
        match self {
            Period::Last7Days => "7 dni".to_string(),
            Period::Last30Days => "30 dni".to_string(),
            Period::Last3Months => "3 mies.".to_string(),
            Period::AllTime => "Wszystko".to_string(),
            Period::Custom { from, to } => {
                format!("{} - {}", from.format("%d.%m"), to.format("%d.%m"))
            }
        }
    }

    /// Concrete interval ending at `today`
    pub fn resolve(&self, today: NaiveDate, config: &DashboardConfig) -> Result<DateRange> {
        match *self {
            Period::Last7Days => DateRange::new(today - Duration::days(7), today),
            Period::Last30Days => DateRange::new(today - Duration::days(30), today),
            Period::Last3Months => {
                let from = today.checked_sub_months(Months::new(3)).unwrap_or(NaiveDate::MIN);
                DateRange::new(from, today)
            }
            // An epoch after today degenerates to a single day instead of failing
            Period::AllTime => DateRange::new(config.dataset_epoch.min(today), today),
            Period::Custom { from, to } => DateRange::new(from, to),
        }
    }

    /// Number of calendar weeks the load calendar shows for this period,
    /// at most [`MAX_CALENDAR_WEEKS`]
    pub fn weeks_needed(&self, config: &DashboardConfig) -> u32 {
        match *self {
            Period::Last7Days => 1,
            Period::Last30Days => 4,
            Period::Last3Months => 12,
            Period::AllTime => config.all_time_weeks.clamp(1, MAX_CALENDAR_WEEKS),
            Period::Custom { from, to } => {
                let days = (to - from).num_days().unsigned_abs();
                days.div_ceil(7).clamp(1, u64::from(MAX_CALENDAR_WEEKS)) as u32
            }
        }
    }
}

/// Period as chosen by name; `Custom` still needs its two dates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PeriodKind {
    Last7Days,
    #[default]
    Last30Days,
    Last3Months,
    AllTime,
    Custom,
}

impl PeriodKind {
    /// Attach the custom dates. They are ignored by the presets.
    pub fn into_period(self, custom: Option<(NaiveDate, NaiveDate)>) -> Result<Period> {
        match self {
            PeriodKind::Last7Days => Ok(Period::Last7Days),
            PeriodKind::Last30Days => Ok(Period::Last30Days),
            PeriodKind::Last3Months => Ok(Period::Last3Months),
            PeriodKind::AllTime => Ok(Period::AllTime),
            PeriodKind::Custom => {
                let (from, to) = custom.ok_or(StatsError::MissingCustomDates)?;
                let range = DateRange::new(from, to)?;
                Ok(Period::Custom {
                    from: range.from,
                    to: range.to,
                })
            }
        }
    }
}

impl std::str::FromStr for PeriodKind {
    type Err = String;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "7d" => Ok(Self::Last7Days),
            "30d" => Ok(Self::Last30Days),
            "3m" => Ok(Self::Last3Months),
            "all" => Ok(Self::AllTime),
            "custom" => Ok(Self::Custom),
            _ => Err(format!("Unknown period: {} (use 7d, 30d, 3m, all or custom)", s)),
        }
    }
}

/// Monday of the ISO week containing `date`
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

/// Sessions dated within the range, sorted by date
pub fn filter_sessions<'a>(
    sessions: &'a [WorkoutSession],
    range: &DateRange,
) -> Vec<&'a WorkoutSession> {
    let mut filtered: Vec<_> = sessions.iter().filter(|s| range.contains(s.date)).collect();
    filtered.sort_by_key(|s| s.date);
    filtered
}

pub fn filter_by_body_part(exercises: &[Exercise], body_part: BodyPart) -> Vec<&Exercise> {
    exercises.iter().filter(|e| body_part.matches(e.body_part)).collect()
}

/// `None` matches every category
pub fn filter_by_category<'a>(
    exercises: &[&'a Exercise],
    category: Option<Category>,
) -> Vec<&'a Exercise> {
    exercises
        .iter()
        .filter(|e| category.is_none_or(|c| e.category == c))
        .copied()
        .collect()
}

/// Distinct categories available for a body part, in catalog order
pub fn categories_for(exercises: &[Exercise], body_part: BodyPart) -> Vec<Category> {
    let mut categories = Vec::new();
    for exercise in filter_by_body_part(exercises, body_part) {
        if !categories.contains(&exercise.category) {
            categories.push(exercise.category);
        }
    }
    categories
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exercises::default_catalog;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn create_session(id: &str, date: NaiveDate) -> WorkoutSession {
        WorkoutSession {
            id: id.to_string(),
            date,
            exercises: vec![],
        }
    }

    #[test]
    fn test_resolve_presets() {
        let config = DashboardConfig::default();
        let today = date(2025, 5, 31);

        let week = Period::Last7Days.resolve(today, &config).unwrap();
        assert_eq!(week, DateRange { from: date(2025, 5, 24), to: today });

        let month = Period::Last30Days.resolve(today, &config).unwrap();
        assert_eq!(month.from, date(2025, 5, 1));

        // Calendar months, clamped to the end of a shorter month
        let quarter = Period::Last3Months.resolve(today, &config).unwrap();
        assert_eq!(quarter.from, date(2025, 2, 28));

        let all = Period::AllTime.resolve(today, &config).unwrap();
        assert_eq!(all.from, date(2024, 1, 1));
        assert_eq!(all.to, today);
    }

    #[test]
    fn test_all_time_uses_configured_epoch() {
        let config = DashboardConfig {
            dataset_epoch: date(2020, 6, 1),
            ..Default::default()
        };
        let all = Period::AllTime.resolve(date(2025, 1, 1), &config).unwrap();
        assert_eq!(all.from, date(2020, 6, 1));
    }

    #[test]
    fn test_custom_inverted_range_rejected() {
        let config = DashboardConfig::default();
        let period = Period::Custom { from: date(2025, 3, 10), to: date(2025, 3, 1) };
        assert_eq!(
            period.resolve(date(2025, 4, 1), &config),
            Err(StatsError::InvalidRange { from: date(2025, 3, 10), to: date(2025, 3, 1) })
        );
    }

    #[test]
    fn test_weeks_needed_presets() {
        let config = DashboardConfig::default();
        assert_eq!(Period::Last7Days.weeks_needed(&config), 1);
        assert_eq!(Period::Last30Days.weeks_needed(&config), 4);
        assert_eq!(Period::Last3Months.weeks_needed(&config), 12);
        assert_eq!(Period::AllTime.weeks_needed(&config), 16);
    }

    #[test]
    fn test_weeks_needed_custom_ten_days() {
        let config = DashboardConfig::default();
        let period = Period::Custom { from: date(2025, 3, 1), to: date(2025, 3, 11) };
        assert_eq!(period.weeks_needed(&config), 2);
    }

    #[test]
    fn test_weeks_needed_custom_monotonic_and_positive() {
        let config = DashboardConfig::default();
        let from = date(2025, 1, 1);
        let mut previous = 0;
        for span in 0..120 {
            let period = Period::Custom { from, to: from + Duration::days(span) };
            let weeks = period.weeks_needed(&config);
            assert!(weeks >= 1);
            assert!(weeks >= previous, "span {} gave {} < {}", span, weeks, previous);
            previous = weeks;
        }
    }

    #[test]
    fn test_weeks_needed_capped() {
        let config = DashboardConfig {
            all_time_weeks: 100_000_000,
            ..Default::default()
        };
        assert_eq!(Period::AllTime.weeks_needed(&config), MAX_CALENDAR_WEEKS);

        let period = Period::Custom { from: NaiveDate::MIN, to: NaiveDate::MAX };
        assert_eq!(period.weeks_needed(&config), MAX_CALENDAR_WEEKS);
    }

    #[test]
    fn test_filter_sessions_inclusive_bounds() {
        let sessions = vec![
            create_session("late", date(2025, 3, 31)),
            create_session("before", date(2025, 2, 28)),
            create_session("first", date(2025, 3, 1)),
            create_session("after", date(2025, 4, 1)),
        ];
        let range = DateRange::new(date(2025, 3, 1), date(2025, 3, 31)).unwrap();
        let ids: Vec<_> = filter_sessions(&sessions, &range)
            .iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(ids, vec!["first", "late"]);
    }

    #[test]
    fn test_filter_sessions_empty() {
        let range = DateRange::new(date(2025, 3, 1), date(2025, 3, 31)).unwrap();
        assert!(filter_sessions(&[], &range).is_empty());
    }

    #[test]
    fn test_filter_by_body_part() {
        let catalog = default_catalog();
        assert_eq!(filter_by_body_part(&catalog, BodyPart::All).len(), catalog.len());

        let legs = filter_by_body_part(&catalog, BodyPart::Legs);
        assert_eq!(legs.len(), 4);
        assert!(legs.iter().all(|e| e.body_part == BodyPart::Legs));
    }

    #[test]
    fn test_filter_by_category() {
        let catalog = default_catalog();
        let arms = filter_by_body_part(&catalog, BodyPart::Arms);
        assert_eq!(filter_by_category(&arms, None).len(), 4);
        let mobility = filter_by_category(&arms, Some(Category::Mobility));
        assert_eq!(mobility.len(), 1);
        assert_eq!(mobility[0].id, "4");
    }

    #[test]
    fn test_categories_for_body_part() {
        let catalog = default_catalog();
        assert_eq!(
            categories_for(&catalog, BodyPart::Legs),
            vec![Category::Strength, Category::Mobility]
        );
        assert!(!categories_for(&catalog, BodyPart::All).contains(&Category::Cardio));
    }

    #[test]
    fn test_days_iterates_inclusive() {
        let range = DateRange::new(date(2025, 3, 30), date(2025, 4, 2)).unwrap();
        let days: Vec<_> = range.days().collect();
        assert_eq!(days.len(), 4);
        assert_eq!(days[3], date(2025, 4, 2));
    }

    #[test]
    fn test_week_start_is_monday() {
        // 2025-03-05 is a Wednesday
        assert_eq!(week_start(date(2025, 3, 5)), date(2025, 3, 3));
        assert_eq!(week_start(date(2025, 3, 3)), date(2025, 3, 3));
        assert_eq!(week_start(date(2025, 3, 9)), date(2025, 3, 3));
        // Crosses a year boundary
        assert_eq!(week_start(date(2025, 1, 1)), date(2024, 12, 30));
    }

    #[test]
    fn test_parse_period_kind() {
        assert_eq!("3m".parse::<PeriodKind>(), Ok(PeriodKind::Last3Months));
        assert_eq!("custom".parse::<PeriodKind>(), Ok(PeriodKind::Custom));
        assert!("1y".parse::<PeriodKind>().is_err());
    }

    #[test]
    fn test_custom_kind_takes_dates() {
        let dates = Some((date(2025, 3, 1), date(2025, 3, 11)));
        assert_eq!(
            PeriodKind::Custom.into_period(dates),
            Ok(Period::Custom { from: date(2025, 3, 1), to: date(2025, 3, 11) })
        );
        assert_eq!(PeriodKind::AllTime.into_period(dates), Ok(Period::AllTime));
        assert_eq!(
            PeriodKind::Custom.into_period(None),
            Err(StatsError::MissingCustomDates)
        );

        let inverted = Some((date(2025, 3, 11), date(2025, 3, 1)));
        assert!(matches!(
            PeriodKind::Custom.into_period(inverted),
            Err(StatsError::InvalidRange { .. })
        ));
    }
}
