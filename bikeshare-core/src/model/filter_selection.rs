use serde::{Deserialize, Serialize};

use crate::model::{BikeshareConfig, BikeshareError};

/// months offered by the explorer, January through June.
pub const MAX_MONTH_SELECTOR: u32 = 6;

/// a month or day filter. menu value 0 selects every row.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Selector {
    #[default]
    All,
    Only(u32),
}

impl Selector {
    pub fn from_menu_value(value: u32) -> Selector {
        match value {
            0 => Selector::All,
            v => Selector::Only(v),
        }
    }

    pub fn matches(&self, value: u32) -> bool {
        match self {
            Selector::All => true,
            Selector::Only(expected) => *expected == value,
        }
    }
}

/// the city, month and day chosen for one loading cycle.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct FilterSelection {
    /// index into [`BikeshareConfig::cities`]
    pub city: usize,
    pub month: Selector,
    pub day: Selector,
}

impl FilterSelection {
    /// builds a selection from the numeric menu answers, rejecting values outside
    /// the ranges the menu offers for this configuration.
    pub fn new(
        city: usize,
        month: u32,
        day: u32,
        config: &BikeshareConfig,
    ) -> Result<FilterSelection, BikeshareError> {
        let _ = config.city(city)?;
        if month > MAX_MONTH_SELECTOR {
            return Err(BikeshareError::InvalidSelection(format!(
                "month selector {month} not in [0, {MAX_MONTH_SELECTOR}]"
            )));
        }
        let max_day = config.day_column.max_selector();
        if day > max_day {
            return Err(BikeshareError::InvalidSelection(format!(
                "day selector {day} not in [0, {max_day}]"
            )));
        }
        Ok(FilterSelection {
            city,
            month: Selector::from_menu_value(month),
            day: Selector::from_menu_value(day),
        })
    }

    /// every trip for a city.
    pub fn all(city: usize) -> FilterSelection {
        FilterSelection {
            city,
            month: Selector::All,
            day: Selector::All,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::DayColumn;

    #[test]
    fn test_menu_zero_is_all() {
        assert_eq!(Selector::from_menu_value(0), Selector::All);
        assert_eq!(Selector::from_menu_value(4), Selector::Only(4));
        assert!(Selector::All.matches(11));
        assert!(Selector::Only(4).matches(4));
        assert!(!Selector::Only(4).matches(5));
    }

    #[test]
    fn test_new_validates_ranges() {
        let config = BikeshareConfig::default();
        let selection = FilterSelection::new(1, 6, 7, &config).unwrap();
        assert_eq!(selection.month, Selector::Only(6));
        assert_eq!(selection.day, Selector::Only(7));
        assert!(FilterSelection::new(3, 0, 0, &config).is_err());
        assert!(FilterSelection::new(0, 7, 0, &config).is_err());
        assert!(FilterSelection::new(0, 0, 8, &config).is_err());
    }

    #[test]
    fn test_day_of_month_accepts_calendar_days() {
        let config = BikeshareConfig {
            day_column: DayColumn::DayOfMonth,
            ..Default::default()
        };
        let selection = FilterSelection::new(0, 0, 31, &config).unwrap();
        assert_eq!(selection.day, Selector::Only(31));
        assert!(FilterSelection::new(0, 0, 32, &config).is_err());
    }
}
