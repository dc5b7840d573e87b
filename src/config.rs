//! Dashboard configuration

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Result, StatsError};

/// Longest load calendar, in weeks
pub const MAX_CALENDAR_WEEKS: u32 = 520;
/// Longest chronic window, in weeks
pub const MAX_CHRONIC_WEEKS: usize = 52;

/// Tunables shared by the range filter, series builder and calendar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Lower bound of the "all time" period
    pub dataset_epoch: NaiveDate,
    /// Number of calendar weeks shown for the "all time" period
    pub all_time_weeks: u32,
    /// Trailing weeks averaged into the chronic load
    pub chronic_weeks: usize,
    /// Upper bound on exercises compared at once
    pub max_selected_exercises: usize,
    /// Exercises tracked by the progress chart when nothing is selected
    pub auto_tracked_exercises: usize,
    /// Seed of the synthetic training source
    pub seed: u64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            dataset_epoch: NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid constant date"),
            all_time_weeks: 16,
            chronic_weeks: 4,
            max_selected_exercises: 2,
            auto_tracked_exercises: 4,
            seed: 42,
        }
    }
}

impl DashboardConfig {
    /// Reject values that would make the aggregations meaningless
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_CALENDAR_WEEKS).contains(&self.all_time_weeks) {
            return Err(StatsError::InvalidConfig(format!(
                "all_time_weeks must be between 1 and {}",
                MAX_CALENDAR_WEEKS
            )));
        }
        if !(1..=MAX_CHRONIC_WEEKS).contains(&self.chronic_weeks) {
            return Err(StatsError::InvalidConfig(format!(
                "chronic_weeks must be between 1 and {}",
                MAX_CHRONIC_WEEKS
            )));
        }
        if self.max_selected_exercises == 0 {
            return Err(StatsError::InvalidConfig(
                "max_selected_exercises must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::default();
        assert_eq!(config.dataset_epoch, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(config.all_time_weeks, 16);
        assert_eq!(config.chronic_weeks, 4);
        assert_eq!(config.max_selected_exercises, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_weeks() {
        let config = DashboardConfig {
            all_time_weeks: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(StatsError::InvalidConfig(_))));
    }

    #[test]
    fn test_validate_rejects_oversized_windows() {
        let config = DashboardConfig {
            all_time_weeks: 100_000_000,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(StatsError::InvalidConfig(_))));

        let config = DashboardConfig {
            chronic_weeks: MAX_CHRONIC_WEEKS + 1,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(StatsError::InvalidConfig(_))));

        let config = DashboardConfig {
            all_time_weeks: MAX_CALENDAR_WEEKS,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
