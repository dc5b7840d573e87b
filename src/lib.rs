//! loadboard - Training statistics dashboard engine
//!
//! Turns workout history into stats cards, volume and progress series, and a
//! weekly load calendar with ACWR.

pub mod config;
pub mod dashboard;
pub mod error;
pub mod exercises;
pub mod load;
pub mod range;
pub mod repository;
pub mod series;
pub mod state;

pub use config::DashboardConfig;
pub use dashboard::{Dashboard, DashboardView};
pub use error::StatsError;
pub use range::{DateRange, Period, PeriodKind};
pub use state::{Action, DashboardState};
