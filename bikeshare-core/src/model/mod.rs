mod bikeshare_config;
mod bikeshare_error;
mod city_source;
mod day_column;
mod filter_selection;
mod trip_dataset;
mod trip_record;
mod trip_source;

pub mod stats;

pub use bikeshare_config::BikeshareConfig;
pub use bikeshare_error::BikeshareError;
pub use city_source::CitySource;
pub use day_column::DayColumn;
pub use filter_selection::{FilterSelection, Selector, MAX_MONTH_SELECTOR};
pub use trip_dataset::{DatasetColumns, TripDataset};
pub use trip_record::{RawTripRow, TripRecord};
pub use trip_source::{CsvTripSource, TripSource};
