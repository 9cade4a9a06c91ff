use bikeshare_core::model::{BikeshareConfig, BikeshareError, DayColumn, MAX_MONTH_SELECTOR};
use itertools::Itertools;

pub const GREETING: &str = "Hello! Let's explore some US bikeshare data!";

pub const EXIT_PROMPT: &str = "\nAre you sure you want to exit? Please specify:\n\n[y] Yes\n[n] No\n\n";

/// an entry of the main menu. the discriminant is the number the user types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    TimeStats = 1,
    StationStats = 2,
    TripDurationStats = 3,
    UserStats = 4,
    GroupDurationStats = 5,
    DisplayRecords = 6,
    SelectAnotherCity = 7,
    Exit = 8,
}

impl MenuOption {
    pub const ALL: [MenuOption; 8] = [
        MenuOption::TimeStats,
        MenuOption::StationStats,
        MenuOption::TripDurationStats,
        MenuOption::UserStats,
        MenuOption::GroupDurationStats,
        MenuOption::DisplayRecords,
        MenuOption::SelectAnotherCity,
        MenuOption::Exit,
    ];

    pub fn description(&self) -> &'static str {
        match self {
            MenuOption::TimeStats => "Statistics on the most frequent times of travel",
            MenuOption::StationStats => "Statistics on the most popular stations and trip",
            MenuOption::TripDurationStats => "Statistics on the total and average trip duration",
            MenuOption::UserStats => "Statistics on bikeshare users",
            MenuOption::GroupDurationStats => {
                "Statistics on average trip duration by gender and subscriber"
            }
            MenuOption::DisplayRecords => "Display records",
            MenuOption::SelectAnotherCity => "Select another city, month and weekday",
            MenuOption::Exit => "Exit",
        }
    }

    pub fn prompt() -> String {
        let options = MenuOption::ALL
            .iter()
            .map(|o| format!(" [{}] {}", *o as i64, o.description()))
            .join("\n");
        format!("\nPlease select one of the numeric options below to view specific metrics:\n\n{options}\n\n")
    }
}

impl TryFrom<i64> for MenuOption {
    type Error = BikeshareError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        MenuOption::ALL
            .iter()
            .find(|o| **o as i64 == value)
            .copied()
            .ok_or_else(|| {
                BikeshareError::InvalidSelection(format!("menu option {value} not in [1, 8]"))
            })
    }
}

pub fn city_prompt(config: &BikeshareConfig) -> String {
    let options = config
        .cities
        .iter()
        .enumerate()
        .map(|(idx, city)| format!("[{idx}] {}", city.name))
        .join("\n");
    format!("\n Please select a city by entering its assigned number:\n\n{options}\n\n")
}

pub fn month_prompt(config: &BikeshareConfig) -> String {
    let options = config
        .month_names
        .iter()
        .take(MAX_MONTH_SELECTOR as usize)
        .enumerate()
        .map(|(idx, month)| format!("[{}] {month}", idx + 1))
        .join("\n");
    format!("\n Please select a month by entering its assigned number: \n\n[0] All\n{options}\n\n")
}

pub fn day_prompt(config: &BikeshareConfig) -> String {
    match config.day_column {
        DayColumn::Weekday => {
            let options = config
                .weekday_names
                .iter()
                .enumerate()
                .map(|(idx, day)| format!("[{}] {day}", idx + 1))
                .join("\n");
            format!("\n Please select a day by entering its assigned number: \n\n[0] All\n{options}\n\n")
        }
        DayColumn::DayOfMonth => String::from(
            "\n Please enter a day of the month between 1 and 31, or 0 for all days: \n\n",
        ),
    }
}
