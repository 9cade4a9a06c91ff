use std::fmt::Display;

use crate::{
    model::{stats::NO_MATCHING_TRIPS, BikeshareConfig, TripDataset},
    util::mode_ops,
};

use super::TripReport;

/// most popular start station, end station and start/end combination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationStats {
    pub start_station: Option<String>,
    pub end_station: Option<String>,
    pub station_pair: Option<String>,
}

impl TripReport for StationStats {
    fn heading() -> &'static str {
        "Calculating The Most Popular Stations and Trip..."
    }

    fn build(dataset: &TripDataset, _config: &BikeshareConfig) -> Self {
        let start_station = mode_ops::mode(dataset.iter().map(|r| r.start_station.as_str()));
        let end_station = mode_ops::mode(dataset.iter().map(|r| r.end_station.as_str()));
        let station_pair = mode_ops::mode(dataset.iter().map(|r| r.station_pair()));
        StationStats {
            start_station: start_station.map(String::from),
            end_station: end_station.map(String::from),
            station_pair,
        }
    }
}

impl Display for StationStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "The most commonly used start station is: {}",
            self.start_station.as_deref().unwrap_or(NO_MATCHING_TRIPS)
        )?;
        writeln!(
            f,
            "The most commonly used end station is: {}",
            self.end_station.as_deref().unwrap_or(NO_MATCHING_TRIPS)
        )?;
        write!(
            f,
            "The most frequent combination of start station and end station trip is: {}",
            self.station_pair.as_deref().unwrap_or(NO_MATCHING_TRIPS)
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::stats::test_fixture;

    #[test]
    fn test_station_stats() {
        let config = BikeshareConfig::default();
        let dataset = test_fixture::load("chicago.csv", &config);
        let stats = StationStats::build(&dataset, &config);
        assert_eq!(
            stats.start_station.as_deref(),
            Some("Streeter Dr & Grand Ave")
        );
        assert_eq!(
            stats.end_station.as_deref(),
            Some("Lake Shore Dr & Monroe St")
        );
        assert_eq!(
            stats.station_pair.as_deref(),
            Some("Streeter Dr & Grand Ave - Lake Shore Dr & Monroe St")
        );
    }

    #[test]
    fn test_ties_pick_smallest_name() {
        let config = BikeshareConfig::default();
        // each washington trip uses a distinct pair of stations
        let dataset = test_fixture::load("washington.csv", &config);
        let stats = StationStats::build(&dataset, &config);
        assert_eq!(stats.start_station.as_deref(), Some("14th & Belmont St NW"));
        assert_eq!(stats.end_station.as_deref(), Some("15th & K St NW"));
    }
}
