use std::io::Read;

use csv::StringRecord;
use serde::{Deserialize, Serialize};

use crate::model::{BikeshareConfig, BikeshareError, RawTripRow, Selector, TripRecord};

const REQUIRED_COLUMNS: [&str; 5] = [
    "Start Time",
    "Trip Duration",
    "Start Station",
    "End Station",
    "User Type",
];

/// records which optional columns appeared in the header of the source file.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DatasetColumns {
    pub end_time: bool,
    pub gender: bool,
    pub birth_year: bool,
}

impl DatasetColumns {
    fn from_headers(headers: &StringRecord) -> DatasetColumns {
        let has = |name: &str| headers.iter().any(|h| h == name);
        DatasetColumns {
            end_time: has("End Time"),
            gender: has("Gender"),
            birth_year: has("Birth Year"),
        }
    }
}

/// the trips for one city in file order, possibly restricted by a month/day filter.
///
/// a dataset is never modified once built. [`TripDataset::filter`] returns a new
/// dataset and leaves the source untouched.
#[derive(Debug, Clone)]
pub struct TripDataset {
    city: String,
    columns: DatasetColumns,
    records: Vec<TripRecord>,
}

impl TripDataset {
    pub fn new(city: &str, columns: DatasetColumns, records: Vec<TripRecord>) -> TripDataset {
        TripDataset {
            city: city.to_string(),
            columns,
            records,
        }
    }

    /// reads every row of a trip file and derives the month, day and hour columns.
    pub fn from_reader<R>(
        city: &str,
        reader: R,
        config: &BikeshareConfig,
    ) -> Result<TripDataset, BikeshareError>
    where
        R: Read,
    {
        let mut csv_reader = trip_csv_reader(reader);
        let columns = read_columns(&mut csv_reader)?;
        let records = read_records(csv_reader.into_deserialize::<RawTripRow>(), config)?;
        Ok(TripDataset::new(city, columns, records))
    }

    pub(crate) fn from_csv_parts<I>(
        city: &str,
        columns: DatasetColumns,
        rows: I,
        config: &BikeshareConfig,
    ) -> Result<TripDataset, BikeshareError>
    where
        I: Iterator<Item = Result<RawTripRow, csv::Error>>,
    {
        let records = read_records(rows, config)?;
        Ok(TripDataset::new(city, columns, records))
    }

    /// keeps only the rows whose derived month and day match the selectors.
    pub fn filter(&self, month: Selector, day: Selector) -> TripDataset {
        let records = self
            .records
            .iter()
            .filter(|r| month.matches(r.month) && day.matches(r.day))
            .cloned()
            .collect();
        TripDataset {
            city: self.city.clone(),
            columns: self.columns,
            records,
        }
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn columns(&self) -> DatasetColumns {
        self.columns
    }

    pub fn records(&self) -> &[TripRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TripRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// up to `size` records starting at `offset`. an offset at or past the end
    /// yields an empty slice.
    pub fn batch(&self, offset: usize, size: usize) -> &[TripRecord] {
        let start = offset.min(self.records.len());
        let end = offset.saturating_add(size).min(self.records.len());
        &self.records[start..end]
    }
}

/// csv reader over a trip file. header names are trimmed, so the column checks
/// and the row deserializer agree on them.
pub(crate) fn trip_csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(reader)
}

pub(crate) fn read_columns<R: Read>(
    reader: &mut csv::Reader<R>,
) -> Result<DatasetColumns, BikeshareError> {
    let headers = reader
        .headers()
        .map_err(|e| BikeshareError::DeserializeError(format!("failure reading header: {e}")))?;
    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|c| !headers.iter().any(|h| h == *c))
        .collect();
    if !missing.is_empty() {
        return Err(BikeshareError::DeserializeError(format!(
            "trip file is missing required columns: [{}]",
            missing.join(", ")
        )));
    }
    Ok(DatasetColumns::from_headers(headers))
}

fn read_records<I>(rows: I, config: &BikeshareConfig) -> Result<Vec<TripRecord>, BikeshareError>
where
    I: Iterator<Item = Result<RawTripRow, csv::Error>>,
{
    rows.enumerate()
        .map(|(idx, row)| {
            let raw = row.map_err(|e| {
                BikeshareError::DeserializeError(format!("failure reading row {idx}: {e}"))
            })?;
            TripRecord::try_from_raw(idx, raw, &config.datetime_format, config.day_column)
        })
        .collect::<Result<Vec<_>, _>>()
}
