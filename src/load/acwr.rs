//! Acute:Chronic Workload Ratio
//!
//! - acute: average daily load of the week under consideration
//! - chronic: mean of the average daily load of up to N preceding weeks
//!
//! With no chronic load the ratio is reported as `0.0` (undertraining band)
//! instead of dividing by zero.

use serde::{Deserialize, Serialize};

use super::compute_day_totals;
use crate::repository::DayData;

/// Lower bound of the optimal band (inclusive)
pub const OPTIMAL_MIN: f64 = 0.8;
/// Upper bound of the optimal band (inclusive)
pub const OPTIMAL_MAX: f64 = 1.3;

/// Returned when there is no chronic load to compare against
pub const NO_HISTORY_ACWR: f64 = 0.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AcwrBand {
    /// < 0.8: undertraining
    Low,
    /// 0.8 - 1.3 inclusive: optimal
    Normal,
    /// > 1.3: overreaching risk
    High,
}

impl AcwrBand {
    pub fn label(&self) -> &'static str {
        match self {
            AcwrBand::Low => "< 0.8",
            AcwrBand::Normal => "0.8 - 1.3",
            AcwrBand::High => "> 1.3",
        }
    }

    /// RGB for calendar cells
    pub fn color(&self) -> (u8, u8, u8) {
        match self {
            AcwrBand::Low => (96, 165, 250),
            AcwrBand::Normal => (74, 222, 128),
            AcwrBand::High => (248, 113, 113),
        }
    }

    pub fn recommendation(&self) -> &'static str {
        match self {
            AcwrBand::Low => "Obciążenie niskie. Stopniowo zwiększaj objętość treningową.",
            AcwrBand::Normal => "Obciążenie w optymalnym zakresie.",
            AcwrBand::High => "Gwałtowny wzrost obciążenia. Rozważ dzień regeneracji.",
        }
    }
}

pub fn classify_acwr(ratio: f64) -> AcwrBand {
    if ratio < OPTIMAL_MIN {
        AcwrBand::Low
    } else if ratio <= OPTIMAL_MAX {
        AcwrBand::Normal
    } else {
        AcwrBand::High
    }
}

/// Ratio together with its band
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Acwr {
    pub ratio: f64,
    pub band: AcwrBand,
}

impl Acwr {
    pub fn new(ratio: f64) -> Self {
        Self {
            ratio,
            band: classify_acwr(ratio),
        }
    }
}

/// Average daily load over the given days, 0 for no days
pub fn average_daily_load(days: &[DayData]) -> f64 {
    if days.is_empty() {
        return 0.0;
    }
    let total: f64 = days.iter().map(|d| compute_day_totals(d).total_load).sum();
    total / days.len() as f64
}

/// ACWR of `week` against the last `chronic_weeks` of `preceding_weeks`.
///
/// `preceding_weeks` is ordered oldest first; only its tail is used.
pub fn compute_week_acwr(
    week: &[DayData],
    preceding_weeks: &[&[DayData]],
    chronic_weeks: usize,
) -> f64 {
    let window = &preceding_weeks[preceding_weeks.len().saturating_sub(chronic_weeks)..];
    if window.is_empty() {
        return NO_HISTORY_ACWR;
    }

    let chronic = window.iter().map(|w| average_daily_load(w)).sum::<f64>() / window.len() as f64;
    if chronic <= 0.0 {
        return NO_HISTORY_ACWR;
    }

    let ratio = average_daily_load(week) / chronic;
    if ratio.is_finite() { ratio } else { NO_HISTORY_ACWR }
}
