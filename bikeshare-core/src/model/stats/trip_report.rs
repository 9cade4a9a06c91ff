use std::fmt::Display;

use crate::model::{BikeshareConfig, TripDataset};

pub const NO_MATCHING_TRIPS: &str = "not available, no trips match the selected filters";

/// a category of statistics computed from a trip dataset.
pub trait TripReport: Display + Sized {
    /// heading printed before the report is computed
    fn heading() -> &'static str;

    fn build(dataset: &TripDataset, config: &BikeshareConfig) -> Self;
}
