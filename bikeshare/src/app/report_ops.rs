use std::{io::Write, time::Duration, time::Instant};

use bikeshare_core::model::{stats::TripReport, BikeshareConfig, BikeshareError, TripDataset};

/// builds a report over the dataset, prints it, and prints how long it took.
pub fn run_report<T, W>(
    dataset: &TripDataset,
    config: &BikeshareConfig,
    out: &mut W,
) -> Result<(), BikeshareError>
where
    T: TripReport,
    W: Write,
{
    let start = Instant::now();
    writeln!(out, "\n{}\n", T::heading())?;
    let report = T::build(dataset, config);
    writeln!(out, "{report}")?;
    write_elapsed(out, start.elapsed())?;
    Ok(())
}

/// the timing footer that closes every report and load.
pub fn write_elapsed<W: Write>(out: &mut W, elapsed: Duration) -> Result<(), BikeshareError> {
    writeln!(out, "\nThis took {:.3} seconds.", elapsed.as_secs_f64())?;
    writeln!(out, "{}", "-".repeat(100))?;
    Ok(())
}
