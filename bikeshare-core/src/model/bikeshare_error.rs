use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum BikeshareError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("Error reading from '{path}': {message}")]
    ReadError { path: PathBuf, message: String },
    #[error("Failed to deserialize trip row: {0}")]
    DeserializeError(String),
    #[error("Failed to parse timestamp: {0}")]
    InvalidTimestamp(String),
    #[error("Invalid selection: {0}")]
    InvalidSelection(String),
    #[error("input stream closed before a valid selection was made")]
    InputClosed,
    #[error("console i/o failed: {0}")]
    Io(#[from] std::io::Error),
}

impl BikeshareError {
    /// true for failures caused by the contents of a city data file. the session
    /// reports these and asks for a new selection instead of exiting.
    pub fn is_load_failure(&self) -> bool {
        matches!(
            self,
            BikeshareError::ReadError { .. }
                | BikeshareError::DeserializeError(_)
                | BikeshareError::InvalidTimestamp(_)
        )
    }
}
