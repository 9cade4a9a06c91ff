use std::{
    io::{BufRead, Write},
    time::Instant,
};

use bikeshare_core::model::{
    stats::{GroupDurationStats, StationStats, TimeStats, TripDurationStats, UserStats},
    BikeshareConfig, BikeshareError, FilterSelection, TripDataset, TripSource,
    MAX_MONTH_SELECTOR,
};

use crate::app::{
    display_records,
    menu::{self, MenuOption, EXIT_PROMPT, GREETING},
    report_ops::{run_report, write_elapsed},
    Prompter,
};

/// the interactive loop. holds the dataset loaded for the current filter selection
/// and reuses it for every report until the user asks for a new selection.
pub struct Session<'a, S> {
    config: &'a BikeshareConfig,
    source: S,
    dataset: Option<TripDataset>,
    needs_reload: bool,
}

impl<'a, S> Session<'a, S>
where
    S: TripSource,
{
    pub fn new(config: &'a BikeshareConfig, source: S) -> Session<'a, S> {
        Session {
            config,
            source,
            dataset: None,
            needs_reload: true,
        }
    }

    pub fn dataset(&self) -> Option<&TripDataset> {
        self.dataset.as_ref()
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// runs until the user confirms the exit option.
    pub fn run<R, W>(&mut self, prompter: &mut Prompter<R, W>) -> Result<(), BikeshareError>
    where
        R: BufRead,
        W: Write,
    {
        writeln!(prompter.output(), "{GREETING}")?;
        loop {
            if self.needs_reload {
                self.reload(prompter)?;
                continue;
            }
            let Some(dataset) = self.dataset.as_ref() else {
                self.needs_reload = true;
                continue;
            };
            let config = self.config;
            let choice = prompter.numeric_in_range(&MenuOption::prompt(), 1, 8)?;
            match MenuOption::try_from(choice)? {
                MenuOption::TimeStats => {
                    run_report::<TimeStats, _>(dataset, config, prompter.output())?
                }
                MenuOption::StationStats => {
                    run_report::<StationStats, _>(dataset, config, prompter.output())?
                }
                MenuOption::TripDurationStats => {
                    run_report::<TripDurationStats, _>(dataset, config, prompter.output())?
                }
                MenuOption::UserStats => {
                    run_report::<UserStats, _>(dataset, config, prompter.output())?
                }
                MenuOption::GroupDurationStats => {
                    run_report::<GroupDurationStats, _>(dataset, config, prompter.output())?
                }
                MenuOption::DisplayRecords => {
                    let shown = display_records(dataset, config.page_size, prompter)?;
                    log::info!("displayed {shown} of {} {} trips", dataset.len(), dataset.city());
                }
                MenuOption::SelectAnotherCity => self.needs_reload = true,
                MenuOption::Exit => {
                    if prompter.confirm(EXIT_PROMPT)? {
                        break;
                    }
                }
            }
        }
        Ok(())
    }

    /// asks for a filter selection and loads it. a load failure is reported to the
    /// user and leaves the session waiting for another selection.
    fn reload<R, W>(&mut self, prompter: &mut Prompter<R, W>) -> Result<(), BikeshareError>
    where
        R: BufRead,
        W: Write,
    {
        let selection = select_filters(self.config, prompter)?;
        let start = Instant::now();
        match self.source.load(&selection) {
            Ok(dataset) => {
                write_elapsed(prompter.output(), start.elapsed())?;
                self.dataset = Some(dataset);
                self.needs_reload = false;
                Ok(())
            }
            Err(e) if e.is_load_failure() => {
                log::error!("failure loading trips for {selection:?}: {e}");
                writeln!(prompter.output(), "\nUnable to load trip data: {e}")?;
                writeln!(prompter.output(), "{}", "-".repeat(100))?;
                Ok(())
            }
            Err(e) => Err(e),
        }
    }
}

fn select_filters<R, W>(
    config: &BikeshareConfig,
    prompter: &mut Prompter<R, W>,
) -> Result<FilterSelection, BikeshareError>
where
    R: BufRead,
    W: Write,
{
    let max_city = config.cities.len().saturating_sub(1) as i64;
    let city = prompter.numeric_in_range(&menu::city_prompt(config), 0, max_city)?;
    let month = prompter.numeric_in_range(
        &menu::month_prompt(config),
        0,
        MAX_MONTH_SELECTOR as i64,
    )?;
    let day = prompter.numeric_in_range(
        &menu::day_prompt(config),
        0,
        config.day_column.max_selector() as i64,
    )?;
    writeln!(prompter.output(), "{}", "-".repeat(100))?;
    FilterSelection::new(city as usize, month as u32, day as u32, config)
}
