use std::{fs::File, time::Instant};

use kdam::tqdm;

use crate::model::{
    trip_dataset::{read_columns, trip_csv_reader},
    BikeshareConfig, BikeshareError, FilterSelection, RawTripRow, TripDataset,
};

/// provides the filtered trip dataset for a [`FilterSelection`].
pub trait TripSource {
    fn load(&self, selection: &FilterSelection) -> Result<TripDataset, BikeshareError>;
}

/// loads trips from the per-city CSV files named in a [`BikeshareConfig`].
pub struct CsvTripSource<'a> {
    config: &'a BikeshareConfig,
}

impl<'a> CsvTripSource<'a> {
    pub fn new(config: &'a BikeshareConfig) -> CsvTripSource<'a> {
        CsvTripSource { config }
    }
}

impl TripSource for CsvTripSource<'_> {
    fn load(&self, selection: &FilterSelection) -> Result<TripDataset, BikeshareError> {
        let start = Instant::now();
        let city = self.config.city(selection.city)?;
        let path = self.config.city_path(city);
        log::info!("reading {} trips from {}", city.name, path.display());

        let file = File::open(&path).map_err(|e| BikeshareError::ReadError {
            path: path.clone(),
            message: e.to_string(),
        })?;
        let mut reader = trip_csv_reader(file);
        let columns = read_columns(&mut reader).map_err(|e| BikeshareError::ReadError {
            path: path.clone(),
            message: e.to_string(),
        })?;
        let desc = format!("read {} trips", city.name);
        let rows = tqdm!(reader.into_deserialize::<RawTripRow>(), desc = desc);
        let full = TripDataset::from_csv_parts(&city.name, columns, rows, self.config);
        eprintln!();
        let full = full?;

        let filtered = full.filter(selection.month, selection.day);
        log::info!(
            "loaded {} of {} {} trips in {:.3} seconds",
            filtered.len(),
            full.len(),
            city.name,
            start.elapsed().as_secs_f64()
        );
        Ok(filtered)
    }
}
