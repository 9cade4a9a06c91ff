use std::fmt::Display;

use indexmap::IndexMap;
use itertools::Itertools;

use crate::{
    model::{BikeshareConfig, TripDataset},
    util::mode_ops,
};

use super::TripReport;

/// earliest, most recent and most common rider birth year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthYearStats {
    pub earliest: i32,
    pub most_recent: i32,
    pub most_common: i32,
}

/// counts of riders by user type and gender, plus birth year statistics. gender
/// counts are None when the source has no `Gender` column. birth year statistics
/// are None when there is no `Birth Year` column or it holds no values.
#[derive(Debug, Clone, PartialEq)]
pub struct UserStats {
    pub user_types: IndexMap<String, usize>,
    pub genders: Option<IndexMap<String, usize>>,
    pub birth_years: Option<BirthYearStats>,
}

impl TripReport for UserStats {
    fn heading() -> &'static str {
        "Calculating User Stats..."
    }

    fn build(dataset: &TripDataset, _config: &BikeshareConfig) -> Self {
        let columns = dataset.columns();
        let user_types = owned_counts(dataset.iter().filter_map(|r| r.user_type.as_deref()));
        let genders = if columns.gender {
            Some(owned_counts(
                dataset.iter().filter_map(|r| r.gender.as_deref()),
            ))
        } else {
            log::debug!("no Gender column for {}", dataset.city());
            None
        };
        let birth_years = if columns.birth_year {
            birth_year_stats(dataset)
        } else {
            log::debug!("no Birth Year column for {}", dataset.city());
            None
        };
        UserStats {
            user_types,
            genders,
            birth_years,
        }
    }
}

fn owned_counts<'a, I>(values: I) -> IndexMap<String, usize>
where
    I: Iterator<Item = &'a str>,
{
    mode_ops::value_counts(values)
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
}

fn birth_year_stats(dataset: &TripDataset) -> Option<BirthYearStats> {
    let years = dataset.iter().filter_map(|r| r.birth_year).collect_vec();
    let (earliest, most_recent) = years.iter().minmax().into_option()?;
    let most_common = mode_ops::mode(years.iter().copied())?;
    Some(BirthYearStats {
        earliest: *earliest,
        most_recent: *most_recent,
        most_common,
    })
}

fn write_counts(
    f: &mut std::fmt::Formatter<'_>,
    counts: &IndexMap<String, usize>,
) -> std::fmt::Result {
    let label_width = counts
        .keys()
        .map(|k| k.chars().count())
        .max()
        .unwrap_or_default();
    let count_width = counts
        .values()
        .map(|c| c.to_string().len())
        .max()
        .unwrap_or_default();
    for (label, count) in counts.iter() {
        writeln!(f, "{label:<label_width$}    {count:>count_width$}")?;
    }
    Ok(())
}

impl Display for UserStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "The count of user types:\n")?;
        write_counts(f, &self.user_types)?;

        match &self.genders {
            Some(genders) => {
                writeln!(f, "\nThe count of each gender:\n")?;
                write_counts(f, genders)?;
            }
            None => writeln!(f, "\nMetrics on gender are not available!")?,
        }

        match &self.birth_years {
            Some(years) => {
                writeln!(
                    f,
                    "\nThe oldest person to ride a bike was born in: {}",
                    years.earliest
                )?;
                writeln!(
                    f,
                    "The youngest person to ride a bike was born in: {}",
                    years.most_recent
                )?;
                write!(
                    f,
                    "The most common year of birth among riders is: {}",
                    years.most_common
                )
            }
            None => write!(f, "\nMetrics on riders' year of birth are not available!"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::stats::test_fixture;

    #[test]
    fn test_user_stats() {
        let config = BikeshareConfig::default();
        let dataset = test_fixture::load("chicago.csv", &config);
        let stats = UserStats::build(&dataset, &config);
        let user_types = stats.user_types.iter().collect_vec();
        assert_eq!(
            user_types,
            vec![
                (&String::from("Subscriber"), &5),
                (&String::from("Customer"), &2)
            ]
        );
        let genders = stats.genders.clone().expect("chicago has a Gender column");
        assert_eq!(genders.get("Male"), Some(&4));
        assert_eq!(genders.get("Female"), Some(&2));
        assert_eq!(
            stats.birth_years,
            Some(BirthYearStats {
                earliest: 1975,
                most_recent: 1999,
                most_common: 1980
            })
        );
        let text = stats.to_string();
        assert!(text.contains("Subscriber    5"));
        assert!(text.contains("The oldest person to ride a bike was born in: 1975"));
        assert!(text.contains("The youngest person to ride a bike was born in: 1999"));
        assert!(text.contains("The most common year of birth among riders is: 1980"));
    }

    #[test]
    fn test_missing_gender_and_birth_year() {
        let config = BikeshareConfig::default();
        let dataset = test_fixture::load("washington.csv", &config);
        let stats = UserStats::build(&dataset, &config);
        assert_eq!(stats.genders, None);
        assert_eq!(stats.birth_years, None);
        assert_eq!(stats.user_types.get("Customer"), Some(&2));
        let text = stats.to_string();
        assert!(text.contains("Metrics on gender are not available!"));
        assert!(text.contains("Metrics on riders' year of birth are not available!"));
    }

    #[test]
    fn test_birth_year_column_without_values() {
        let config = BikeshareConfig::default();
        let dataset = test_fixture::load("chicago.csv", &config)
            .filter(crate::model::Selector::Only(1), crate::model::Selector::Only(2));
        // a single customer trip with blank gender and birth year
        assert_eq!(dataset.len(), 1);
        let stats = UserStats::build(&dataset, &config);
        assert_eq!(stats.genders.map(|g| g.len()), Some(0));
        assert_eq!(stats.birth_years, None);
    }

    #[test]
    fn test_counts_align_non_ascii_labels() {
        let csv = "Start Time,Trip Duration,Start Station,End Station,User Type,Gender\n\
                   2017-01-02 08:00:00,60,A,B,Abonné,Männlich\n\
                   2017-01-03 09:00:00,120,A,B,Customer,Female\n";
        let config = BikeshareConfig::default();
        let dataset = TripDataset::from_reader("x", csv.as_bytes(), &config).unwrap();
        let text = UserStats::build(&dataset, &config).to_string();
        assert!(text.contains("Abonné      1\n"));
        assert!(text.contains("Customer    1\n"));
        assert!(text.contains("Männlich    1\n"));
        assert!(text.contains("Female      1\n"));
    }
}
