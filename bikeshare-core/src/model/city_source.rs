use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// a city offered by the explorer along with the file holding its trip records.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct CitySource {
    /// display name, e.g. "New York City"
    pub name: String,
    /// trip file name, relative to the configured data directory
    pub filename: String,
}

impl CitySource {
    pub fn new(name: &str, filename: &str) -> CitySource {
        CitySource {
            name: name.to_string(),
            filename: filename.to_string(),
        }
    }

    pub fn path(&self, data_directory: &Path) -> PathBuf {
        data_directory.join(&self.filename)
    }
}
