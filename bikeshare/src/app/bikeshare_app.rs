use std::path::PathBuf;

use bikeshare_core::model::{BikeshareConfig, BikeshareError, CsvTripSource};
use clap::Parser;

use crate::app::{Prompter, Session};

/// Interactive explorer for US bikeshare trip data
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct BikeshareApp {
    /// TOML file overriding the default cities, label tables and paging options.
    #[arg(short, long)]
    pub config_file: Option<String>,

    /// directory containing the city trip files. if not provided, uses the
    /// configured directory, which defaults to the current working directory.
    #[arg(short, long)]
    pub data_directory: Option<String>,
}

impl BikeshareApp {
    pub fn build_config(&self) -> Result<BikeshareConfig, BikeshareError> {
        let mut config = match &self.config_file {
            Some(file) => BikeshareConfig::from_file(file)?,
            None => BikeshareConfig::default(),
        };
        if let Some(dir) = &self.data_directory {
            config.data_directory = PathBuf::from(dir);
        }
        config.validate()?;
        log::debug!("running with configuration {config:?}");
        Ok(config)
    }

    /// runs the interactive session on stdin/stdout until the user exits.
    pub fn run(&self) -> Result<(), BikeshareError> {
        let config = self.build_config()?;
        let mut session = Session::new(&config, CsvTripSource::new(&config));
        let stdin = std::io::stdin();
        let mut prompter = Prompter::new(stdin.lock(), std::io::stdout());
        match session.run(&mut prompter) {
            Err(BikeshareError::InputClosed) => {
                log::warn!("input closed, exiting");
                Ok(())
            }
            Err(e) => {
                log::error!("{e}");
                Err(e)
            }
            Ok(()) => Ok(()),
        }
    }
}
