use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::{
    model::{BikeshareError, DayColumn},
    util::date_deserialization_ops::parse_naive_datetime,
};

/// a row as it appears in a city trip file. columns missing from the header, and
/// empty cells, deserialize as None.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawTripRow {
    #[serde(rename = "Start Time")]
    pub start_time: String,
    #[serde(rename = "End Time", default)]
    pub end_time: Option<String>,
    #[serde(rename = "Trip Duration")]
    pub trip_duration: f64,
    #[serde(rename = "Start Station")]
    pub start_station: String,
    #[serde(rename = "End Station")]
    pub end_station: String,
    #[serde(rename = "User Type", default)]
    pub user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    pub gender: Option<String>,
    #[serde(rename = "Birth Year", default)]
    pub birth_year: Option<f64>,
}

/// a trip with parsed timestamps and the month, day and hour columns derived
/// from its start time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripRecord {
    /// zero-based position of the row in its source file
    pub row_index: usize,
    pub start_time: NaiveDateTime,
    pub end_time: Option<NaiveDateTime>,
    /// seconds
    pub trip_duration: f64,
    pub start_station: String,
    pub end_station: String,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,
    /// 1-12
    pub month: u32,
    /// weekday or day of month, see [`DayColumn`]
    pub day: u32,
    /// 0-23
    pub hour: u32,
}

impl TripRecord {
    pub fn try_from_raw(
        row_index: usize,
        raw: RawTripRow,
        datetime_format: &str,
        day_column: DayColumn,
    ) -> Result<TripRecord, BikeshareError> {
        let start_time = parse_naive_datetime(&raw.start_time, datetime_format).map_err(|e| {
            BikeshareError::InvalidTimestamp(format!("row {row_index} 'Start Time' {e}"))
        })?;
        let end_time = raw
            .end_time
            .as_deref()
            .map(|t| parse_naive_datetime(t, datetime_format))
            .transpose()
            .map_err(|e| {
                BikeshareError::InvalidTimestamp(format!("row {row_index} 'End Time' {e}"))
            })?;
        Ok(TripRecord {
            row_index,
            start_time,
            end_time,
            trip_duration: raw.trip_duration,
            start_station: raw.start_station,
            end_station: raw.end_station,
            user_type: non_blank(raw.user_type),
            gender: non_blank(raw.gender),
            birth_year: raw.birth_year.filter(|y| y.is_finite()).map(|y| y as i32),
            month: start_time.month(),
            day: day_column.derive(&start_time),
            hour: start_time.hour(),
        })
    }

    /// start and end station joined as "start - end"
    pub fn station_pair(&self) -> String {
        format!("{} - {}", self.start_station, self.end_station)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::util::date_deserialization_ops::APP_DATETIME_FORMAT;

    fn raw(start_time: &str) -> RawTripRow {
        RawTripRow {
            start_time: start_time.to_string(),
            end_time: None,
            trip_duration: 489.066,
            start_station: String::from("14th & Belmont St NW"),
            end_station: String::from("15th & K St NW"),
            user_type: Some(String::from("Subscriber")),
            gender: Some(String::from("  ")),
            birth_year: Some(1989.0),
        }
    }

    #[test]
    fn test_derived_columns() {
        let record = TripRecord::try_from_raw(
            4,
            raw("2017-06-21 08:36:34"),
            APP_DATETIME_FORMAT,
            DayColumn::Weekday,
        )
        .unwrap();
        assert_eq!(record.row_index, 4);
        assert_eq!(record.month, 6);
        // 2017-06-21 was a Wednesday
        assert_eq!(record.day, 3);
        assert_eq!(record.hour, 8);
        assert_eq!(record.birth_year, Some(1989));
        assert_eq!(record.gender, None);
        assert_eq!(
            record.station_pair(),
            "14th & Belmont St NW - 15th & K St NW"
        );
    }

    #[test]
    fn test_day_of_month_column() {
        let record = TripRecord::try_from_raw(
            0,
            raw("2017-06-21 08:36:34"),
            APP_DATETIME_FORMAT,
            DayColumn::DayOfMonth,
        )
        .unwrap();
        assert_eq!(record.day, 21);
    }

    #[test]
    fn test_bad_timestamp() {
        let result = TripRecord::try_from_raw(
            9,
            raw("not a time"),
            APP_DATETIME_FORMAT,
            DayColumn::Weekday,
        );
        match result {
            Err(BikeshareError::InvalidTimestamp(msg)) => {
                assert!(msg.contains("row 9"));
                assert!(msg.contains("not a time"));
            }
            other => panic!("expected InvalidTimestamp, found {other:?}"),
        }
    }
}
