//! Weekly microcycles for the load-monitoring calendar

use std::collections::BTreeMap;

use chrono::{Datelike, Days, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::acwr::{AcwrBand, classify_acwr, compute_week_acwr};
use crate::config::MAX_CALENDAR_WEEKS;
use crate::error::{Result, StatsError};
use crate::range::DateRange;
use crate::repository::{DayData, TrainingSource};

pub const DAYS_PER_WEEK: usize = 7;

/// One Monday-to-Sunday week of training
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyMicrocycle {
    /// 1-based, earliest generated week first
    pub week_number: u32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Always seven entries, Monday first
    pub days: Vec<DayData>,
    pub total_volume: f64,
    pub acwr: f64,
    pub acwr_band: AcwrBand,
}

/// Seven days starting at `monday`, filled from `by_date`
fn build_week(monday: NaiveDate, by_date: &BTreeMap<NaiveDate, DayData>) -> Vec<DayData> {
    (0..DAYS_PER_WEEK as i64)
        .map(|offset| {
            let date = monday + Duration::days(offset);
            by_date.get(&date).cloned().unwrap_or_else(|| DayData::empty(date))
        })
        .collect()
}

/// Generate `weeks` microcycles ending with the week containing `today`.
///
/// The `chronic_weeks` before the first generated week are read as well so
/// the earliest week's ACWR has history to compare against. Days after
/// `today` are left empty and the current week's acute load only averages
/// the days elapsed so far.
///
/// `weeks` is clamped to [`MAX_CALENDAR_WEEKS`]. Fails when the calendar
/// would reach outside the representable date range.
pub fn generate_microcycles<S: TrainingSource + ?Sized>(
    source: &S,
    today: NaiveDate,
    weeks: u32,
    chronic_weeks: usize,
) -> Result<Vec<WeeklyMicrocycle>> {
    if weeks > MAX_CALENDAR_WEEKS {
        warn!(weeks, max = MAX_CALENDAR_WEEKS, "clamping calendar length");
    }
    let weeks = weeks.clamp(1, MAX_CALENDAR_WEEKS) as usize;
    let total_weeks = weeks.saturating_add(chronic_weeks);
    let out_of_range = StatsError::CalendarOutOfRange {
        today,
        weeks: total_weeks,
    };

    let weekday = u64::from(today.weekday().num_days_from_monday());
    let current_monday = today
        .checked_sub_days(Days::new(weekday))
        .ok_or_else(|| out_of_range.clone())?;
    // The current week's Sunday must exist for every week to have seven days
    current_monday
        .checked_add_days(Days::new(DAYS_PER_WEEK as u64 - 1))
        .ok_or_else(|| out_of_range.clone())?;
    let history_start = current_monday
        .checked_sub_days(Days::new((total_weeks as u64 - 1).saturating_mul(7)))
        .ok_or(out_of_range)?;

    let range = DateRange {
        from: history_start,
        to: today,
    };
    let by_date: BTreeMap<NaiveDate, DayData> = source
        .training_days(&range)
        .into_iter()
        .filter(|d| range.contains(d.date))
        .map(|d| (d.date, d))
        .collect();

    let all_weeks: Vec<Vec<DayData>> = (0..total_weeks)
        .map(|i| build_week(history_start + Duration::weeks(i as i64), &by_date))
        .collect();

    let elapsed_today = (today - current_monday).num_days() as usize + 1;

    let microcycles: Vec<WeeklyMicrocycle> = (chronic_weeks..all_weeks.len())
        .enumerate()
        .map(|(n, i)| {
            let days = &all_weeks[i];
            let acute_days = if i == all_weeks.len() - 1 {
                &days[..elapsed_today]
            } else {
                &days[..]
            };
            let preceding: Vec<&[DayData]> = all_weeks[i - chronic_weeks..i]
                .iter()
                .map(|w| w.as_slice())
                .collect();
            let acwr = compute_week_acwr(acute_days, &preceding, chronic_weeks);

            WeeklyMicrocycle {
                week_number: n as u32 + 1,
                start_date: days[0].date,
                end_date: days[DAYS_PER_WEEK - 1].date,
                days: days.clone(),
                total_volume: days.iter().filter_map(|d| d.volume()).sum(),
                acwr,
                acwr_band: classify_acwr(acwr),
            }
        })
        .collect();

    debug!(
        weeks = microcycles.len(),
        training_days = by_date.len(),
        first_week = %microcycles[0].start_date,
        "generated microcycles"
    );

    Ok(microcycles)
}
