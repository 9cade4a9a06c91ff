use chrono::{Datelike, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// chooses how the derived "day" column is computed from a trip's start time.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DayColumn {
    /// day of week, 1 (Monday) through 7 (Sunday)
    #[default]
    Weekday,
    /// calendar day of month, 1 through 31. kept for compatibility with
    /// reports produced by the legacy explorer.
    DayOfMonth,
}

impl DayColumn {
    pub fn derive(&self, datetime: &NaiveDateTime) -> u32 {
        match self {
            DayColumn::Weekday => datetime.weekday().number_from_monday(),
            DayColumn::DayOfMonth => datetime.day(),
        }
    }

    /// largest value a day selector may take under this policy.
    pub fn max_selector(&self) -> u32 {
        match self {
            DayColumn::Weekday => 7,
            DayColumn::DayOfMonth => 31,
        }
    }
}

#[cfg(test)]
mod test {
    use super::DayColumn;
    use chrono::NaiveDateTime;

    #[test]
    fn test_derive_weekday_and_day_of_month() {
        // 2017-06-12 was a Monday
        let dt = NaiveDateTime::parse_from_str("2017-06-12 18:20:00", "%Y-%m-%d %H:%M:%S")
            .expect("test invariant failed: literal timestamp is valid");
        assert_eq!(DayColumn::Weekday.derive(&dt), 1);
        assert_eq!(DayColumn::DayOfMonth.derive(&dt), 12);
    }

    #[test]
    fn test_sunday_is_seven() {
        let dt = NaiveDateTime::parse_from_str("2017-01-01 00:07:57", "%Y-%m-%d %H:%M:%S")
            .expect("test invariant failed: literal timestamp is valid");
        assert_eq!(DayColumn::Weekday.derive(&dt), 7);
    }
}
