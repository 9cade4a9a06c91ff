use std::path::{Path, PathBuf};

use config::{Config, File};
use serde::{Deserialize, Serialize};

use crate::{
    model::{BikeshareError, CitySource, DayColumn},
    util::date_deserialization_ops::APP_DATETIME_FORMAT,
};

/// immutable lookup tables and data locations shared by the loader and the reports.
///
/// every field has a default, so a configuration file only needs to list the
/// values it overrides.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct BikeshareConfig {
    /// directory holding the city trip files
    pub data_directory: PathBuf,
    /// cities in menu order. a city selector is an index into this list.
    pub cities: Vec<CitySource>,
    /// month names, January first. must hold all 12 months.
    pub month_names: Vec<String>,
    /// weekday names, Monday first. must hold all 7 days.
    pub weekday_names: Vec<String>,
    /// how the derived day column is computed
    pub day_column: DayColumn,
    /// rows shown per page when browsing raw records
    pub page_size: usize,
    /// chrono format string for the `Start Time` and `End Time` columns
    pub datetime_format: String,
}

impl Default for BikeshareConfig {
    fn default() -> Self {
        let month_names = [
            "January",
            "February",
            "March",
            "April",
            "May",
            "June",
            "July",
            "August",
            "September",
            "October",
            "November",
            "December",
        ];
        let weekday_names = [
            "Monday",
            "Tuesday",
            "Wednesday",
            "Thursday",
            "Friday",
            "Saturday",
            "Sunday",
        ];
        Self {
            data_directory: PathBuf::from("."),
            cities: vec![
                CitySource::new("Chicago", "chicago.csv"),
                CitySource::new("New York City", "new_york_city.csv"),
                CitySource::new("Washington", "washington.csv"),
            ],
            month_names: month_names.iter().map(|m| m.to_string()).collect(),
            weekday_names: weekday_names.iter().map(|d| d.to_string()).collect(),
            day_column: DayColumn::default(),
            page_size: 5,
            datetime_format: APP_DATETIME_FORMAT.to_string(),
        }
    }
}

impl BikeshareConfig {
    /// reads a configuration file, filling any missing keys with defaults.
    pub fn from_file<P>(path: P) -> Result<BikeshareConfig, BikeshareError>
    where
        P: AsRef<Path>,
    {
        let filepath = path.as_ref();
        let filename = filepath.to_str().unwrap_or_default();
        let config = Config::builder()
            .add_source(File::from(filepath))
            .build()
            .map_err(|e| {
                let msg = format!("file '{filename}' produced error: {e}");
                BikeshareError::InvalidConfiguration(msg)
            })?;
        let result: BikeshareConfig = config.try_deserialize().map_err(|e| {
            let msg = format!("error reading bikeshare configuration in '{filename}': {e}");
            BikeshareError::InvalidConfiguration(msg)
        })?;
        result.validate()?;
        Ok(result)
    }

    pub fn validate(&self) -> Result<(), BikeshareError> {
        if self.cities.is_empty() {
            return Err(BikeshareError::InvalidConfiguration(String::from(
                "at least one city must be configured",
            )));
        }
        if self.month_names.len() != 12 {
            return Err(BikeshareError::InvalidConfiguration(format!(
                "expected 12 month names, found {}",
                self.month_names.len()
            )));
        }
        if self.weekday_names.len() != 7 {
            return Err(BikeshareError::InvalidConfiguration(format!(
                "expected 7 weekday names, found {}",
                self.weekday_names.len()
            )));
        }
        if self.page_size == 0 {
            return Err(BikeshareError::InvalidConfiguration(String::from(
                "page_size must be positive",
            )));
        }
        Ok(())
    }

    pub fn city(&self, selector: usize) -> Result<&CitySource, BikeshareError> {
        self.cities.get(selector).ok_or_else(|| {
            BikeshareError::InvalidSelection(format!(
                "city selector {selector} not in [0, {})",
                self.cities.len()
            ))
        })
    }

    pub fn city_path(&self, city: &CitySource) -> PathBuf {
        city.path(&self.data_directory)
    }

    /// name of a 1-based month number
    pub fn month_name(&self, month: u32) -> Option<&str> {
        let index = (month as usize).checked_sub(1)?;
        self.month_names.get(index).map(String::as_str)
    }

    /// name of a 1-based weekday number, Monday first
    pub fn weekday_name(&self, weekday: u32) -> Option<&str> {
        let index = (weekday as usize).checked_sub(1)?;
        self.weekday_names.get(index).map(String::as_str)
    }

    /// label for a derived day value, following the configured [`DayColumn`].
    pub fn day_label(&self, day: u32) -> String {
        match self.day_column {
            DayColumn::Weekday => self
                .weekday_name(day)
                .map(String::from)
                .unwrap_or_else(|| day.to_string()),
            DayColumn::DayOfMonth => day.to_string(),
        }
    }
}
