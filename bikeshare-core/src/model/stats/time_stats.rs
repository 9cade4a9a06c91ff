use std::fmt::Display;

use crate::{
    model::{stats::NO_MATCHING_TRIPS, BikeshareConfig, DayColumn, TripDataset},
    util::mode_ops,
};

use super::TripReport;

/// most frequent month, day and start hour.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeStats {
    pub month: Option<u32>,
    pub month_name: Option<String>,
    pub day: Option<u32>,
    pub day_label: Option<String>,
    pub day_column: DayColumn,
    pub hour: Option<u32>,
}

impl TripReport for TimeStats {
    fn heading() -> &'static str {
        "Displaying the statistics on the most frequent times of travel"
    }

    fn build(dataset: &TripDataset, config: &BikeshareConfig) -> Self {
        let month = mode_ops::mode(dataset.iter().map(|r| r.month));
        let day = mode_ops::mode(dataset.iter().map(|r| r.day));
        let hour = mode_ops::mode(dataset.iter().map(|r| r.hour));
        log::debug!("time stats: month={month:?} day={day:?} hour={hour:?}");
        TimeStats {
            month,
            month_name: month.map(|m| {
                config
                    .month_name(m)
                    .map(String::from)
                    .unwrap_or_else(|| m.to_string())
            }),
            day,
            day_label: day.map(|d| config.day_label(d)),
            day_column: config.day_column,
            hour,
        }
    }
}

impl Display for TimeStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let day_description = match self.day_column {
            DayColumn::Weekday => "day of the week",
            DayColumn::DayOfMonth => "day of the month",
        };
        let hour = self.hour.map(|h| h.to_string());
        writeln!(
            f,
            "The month with the most travels is: {}",
            self.month_name.as_deref().unwrap_or(NO_MATCHING_TRIPS)
        )?;
        writeln!(
            f,
            "The most common {day_description} is: {}",
            self.day_label.as_deref().unwrap_or(NO_MATCHING_TRIPS)
        )?;
        write!(
            f,
            "The most common start hour is: {}",
            hour.as_deref().unwrap_or(NO_MATCHING_TRIPS)
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::{stats::test_fixture, Selector};

    #[test]
    fn test_time_stats() {
        let config = BikeshareConfig::default();
        let dataset = test_fixture::load("chicago.csv", &config);
        let stats = TimeStats::build(&dataset, &config);
        assert_eq!(stats.month, Some(1));
        assert_eq!(stats.month_name.as_deref(), Some("January"));
        assert_eq!(stats.day, Some(1));
        assert_eq!(stats.day_label.as_deref(), Some("Monday"));
        assert_eq!(stats.hour, Some(8));
        let text = stats.to_string();
        assert!(text.contains("The month with the most travels is: January"));
        assert!(text.contains("The most common day of the week is: Monday"));
        assert!(text.contains("The most common start hour is: 8"));
    }

    #[test]
    fn test_day_of_month_mode() {
        let config = BikeshareConfig {
            day_column: DayColumn::DayOfMonth,
            ..Default::default()
        };
        let dataset = test_fixture::load("chicago.csv", &config);
        let stats = TimeStats::build(&dataset, &config);
        assert_eq!(stats.day, Some(2));
        assert!(stats
            .to_string()
            .contains("The most common day of the month is: 2"));
    }

    #[test]
    fn test_mode_frequency_is_maximal() {
        let config = BikeshareConfig::default();
        let dataset = test_fixture::load("chicago.csv", &config);
        let stats = TimeStats::build(&dataset, &config);
        let hour = stats.hour.unwrap();
        let count = |h: u32| dataset.iter().filter(|r| r.hour == h).count();
        assert!((0..24).all(|h| count(h) <= count(hour)));
    }

    #[test]
    fn test_empty_dataset() {
        let config = BikeshareConfig::default();
        let dataset = test_fixture::load("chicago.csv", &config)
            .filter(Selector::Only(4), Selector::All);
        let stats = TimeStats::build(&dataset, &config);
        assert_eq!(stats.month, None);
        assert!(stats.to_string().contains(NO_MATCHING_TRIPS));
    }
}
