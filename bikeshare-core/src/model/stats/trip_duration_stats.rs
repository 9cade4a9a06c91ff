use std::fmt::Display;

use crate::{
    model::{stats::NO_MATCHING_TRIPS, BikeshareConfig, TripDataset},
    util::duration_format::DurationParts,
};

use super::TripReport;

/// total and mean trip duration in seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct TripDurationStats {
    pub trips: usize,
    pub total_seconds: f64,
    /// None when the dataset is empty
    pub mean_seconds: Option<f64>,
}

impl TripDurationStats {
    pub fn total(&self) -> DurationParts {
        DurationParts::from_seconds(self.total_seconds)
    }

    pub fn mean(&self) -> Option<DurationParts> {
        self.mean_seconds.map(DurationParts::from_seconds)
    }
}

impl TripReport for TripDurationStats {
    fn heading() -> &'static str {
        "Calculating Trip Duration..."
    }

    fn build(dataset: &TripDataset, _config: &BikeshareConfig) -> Self {
        let trips = dataset.len();
        let total_seconds: f64 = dataset.iter().map(|r| r.trip_duration).sum();
        let mean_seconds = if trips == 0 {
            None
        } else {
            Some(total_seconds / trips as f64)
        };
        TripDurationStats {
            trips,
            total_seconds,
            mean_seconds,
        }
    }
}

impl Display for TripDurationStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "The total trip duration is: {}", self.total())?;
        match self.mean() {
            Some(mean) => write!(f, "The average trip duration is: {mean}"),
            None => write!(f, "The average trip duration is: {NO_MATCHING_TRIPS}"),
        }
    }
}
