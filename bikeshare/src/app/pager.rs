use std::io::{BufRead, Write};

use bikeshare_core::model::{BikeshareError, DatasetColumns, TripDataset, TripRecord};
use itertools::Itertools;

use crate::app::Prompter;

pub const END_OF_RECORDS: &str = "There are no more records to display.";

/// prints the dataset `page_size` rows at a time, asking after each page whether to
/// continue. an empty page ends the listing without another question.
///
/// returns the number of rows shown.
pub fn display_records<R, W>(
    dataset: &TripDataset,
    page_size: usize,
    prompter: &mut Prompter<R, W>,
) -> Result<usize, BikeshareError>
where
    R: BufRead,
    W: Write,
{
    let question = format!(
        "Would you like to view the next {page_size} rows of raw data? Please select\n\n[y] Yes\n[n] No\n\n"
    );
    let mut offset = 0;
    loop {
        let page = dataset.batch(offset, page_size);
        if page.is_empty() {
            writeln!(prompter.output(), "{END_OF_RECORDS}")?;
            break;
        }
        writeln!(prompter.output(), "{}\n", render_page(page, dataset.columns()))?;
        offset += page.len();
        if !prompter.confirm(&question)? {
            break;
        }
    }
    Ok(offset)
}

/// lays out a page of records as a table with one row per trip, labelled by its
/// position in the source file.
fn render_page(page: &[TripRecord], columns: DatasetColumns) -> String {
    let mut headers = vec!["", "Start Time"];
    if columns.end_time {
        headers.push("End Time");
    }
    headers.extend(["Trip Duration", "Start Station", "End Station", "User Type"]);
    if columns.gender {
        headers.push("Gender");
    }
    if columns.birth_year {
        headers.push("Birth Year");
    }
    headers.extend(["Month", "Day", "Start Hour"]);

    let rows = page
        .iter()
        .map(|record| {
            let mut cells = vec![
                record.row_index.to_string(),
                record.start_time.to_string(),
            ];
            if columns.end_time {
                cells.push(optional(record.end_time.map(|t| t.to_string())));
            }
            cells.extend([
                record.trip_duration.to_string(),
                record.start_station.clone(),
                record.end_station.clone(),
                optional(record.user_type.clone()),
            ]);
            if columns.gender {
                cells.push(optional(record.gender.clone()));
            }
            if columns.birth_year {
                cells.push(optional(record.birth_year.map(|y| y.to_string())));
            }
            cells.extend([
                record.month.to_string(),
                record.day.to_string(),
                record.hour.to_string(),
            ]);
            cells
        })
        .collect_vec();

    let widths = headers
        .iter()
        .enumerate()
        .map(|(col, header)| {
            rows.iter()
                .map(|cells| cells[col].chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or_default()
        })
        .collect_vec();

    std::iter::once(format_line(&headers, &widths))
        .chain(rows.iter().map(|cells| {
            let cells = cells.iter().map(String::as_str).collect_vec();
            format_line(&cells, &widths)
        }))
        .join("\n")
}

fn format_line(cells: &[&str], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths.iter())
        .map(|(cell, width)| format!("{cell:>width$}", width = *width))
        .join("  ")
}

fn optional(value: Option<String>) -> String {
    value.unwrap_or_else(|| String::from("NaN"))
}
