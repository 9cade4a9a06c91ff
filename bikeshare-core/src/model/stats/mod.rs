//! descriptive statistics over a [`crate::model::TripDataset`]. each report is
//! built from a dataset without modifying it, and renders itself via `Display`.
mod group_duration_stats;
mod station_stats;
mod time_stats;
mod trip_duration_stats;
mod trip_report;
mod user_stats;

pub use group_duration_stats::{GroupDuration, GroupDurationStats, INSUFFICIENT_DATA};
pub use station_stats::StationStats;
pub use time_stats::TimeStats;
pub use trip_duration_stats::TripDurationStats;
pub use trip_report::{TripReport, NO_MATCHING_TRIPS};
pub use user_stats::{BirthYearStats, UserStats};
