use std::{collections::BTreeMap, fmt::Display};

use crate::{
    model::{BikeshareConfig, TripDataset},
    util::duration_format::DurationParts,
};

use super::TripReport;

pub const INSUFFICIENT_DATA: &str =
    "Unable to compute the trip duration by user type and gender due to insufficient data.";

/// trip duration totals for one (user type, gender) group.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupDuration {
    pub user_type: String,
    pub gender: String,
    pub trips: usize,
    pub total_seconds: f64,
}

impl GroupDuration {
    pub fn mean_seconds(&self) -> f64 {
        self.total_seconds / self.trips as f64
    }
}

/// mean and total trip duration grouped by user type and gender, ordered by user
/// type then gender. rows missing either key are left out. `groups` is None when
/// the source has no `Gender` column or no row carries both keys.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupDurationStats {
    pub groups: Option<Vec<GroupDuration>>,
}

impl TripReport for GroupDurationStats {
    fn heading() -> &'static str {
        "Calculating Trip Duration By Gender and User Type..."
    }

    fn build(dataset: &TripDataset, _config: &BikeshareConfig) -> Self {
        if !dataset.columns().gender {
            log::debug!(
                "cannot group {} trips by gender, no Gender column",
                dataset.city()
            );
            return GroupDurationStats { groups: None };
        }
        let mut accumulators: BTreeMap<(&str, &str), (usize, f64)> = BTreeMap::new();
        for record in dataset.iter() {
            if let (Some(user_type), Some(gender)) = (&record.user_type, &record.gender) {
                let acc = accumulators
                    .entry((user_type.as_str(), gender.as_str()))
                    .or_insert((0, 0.0));
                acc.0 += 1;
                acc.1 += record.trip_duration;
            }
        }
        if accumulators.is_empty() {
            return GroupDurationStats { groups: None };
        }
        let groups = accumulators
            .into_iter()
            .map(|((user_type, gender), (trips, total_seconds))| GroupDuration {
                user_type: user_type.to_string(),
                gender: gender.to_string(),
                trips,
                total_seconds,
            })
            .collect();
        GroupDurationStats {
            groups: Some(groups),
        }
    }
}

fn write_table<F>(
    f: &mut std::fmt::Formatter<'_>,
    groups: &[GroupDuration],
    duration_of: F,
) -> std::fmt::Result
where
    F: Fn(&GroupDuration) -> f64,
{
    let user_type_width = groups
        .iter()
        .map(|g| g.user_type.chars().count())
        .chain(std::iter::once("User Type".len()))
        .max()
        .unwrap_or_default();
    let gender_width = groups
        .iter()
        .map(|g| g.gender.chars().count())
        .chain(std::iter::once("Gender".len()))
        .max()
        .unwrap_or_default();
    writeln!(
        f,
        "{:<user_type_width$}  {:<gender_width$}  Trip Duration",
        "User Type", "Gender"
    )?;
    for group in groups {
        writeln!(
            f,
            "{:<user_type_width$}  {:<gender_width$}  {}",
            group.user_type,
            group.gender,
            DurationParts::from_seconds(duration_of(group))
        )?;
    }
    Ok(())
}

impl Display for GroupDurationStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.groups {
            None => write!(f, "{INSUFFICIENT_DATA}"),
            Some(groups) => {
                writeln!(f, "The total duration by gender and subscriber is as follows:\n")?;
                write_table(f, groups, |g| g.total_seconds)?;
                writeln!(f, "\nThe mean duration by gender and subscriber is as follows:\n")?;
                write_table(f, groups, GroupDuration::mean_seconds)
            }
        }
    }
}
