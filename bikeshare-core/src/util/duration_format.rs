use std::fmt::Display;

pub const SECONDS_PER_DAY: u64 = 86_400;
pub const SECONDS_PER_HOUR: u64 = 3_600;
pub const SECONDS_PER_MINUTE: u64 = 60;

/// a trip duration split into whole days, hours, minutes and seconds.
///
/// displays each non-zero component followed by its unit letter and a space, in
/// descending unit order, e.g. `1d 2h 52m 1s ` or `30m `. a zero duration displays
/// as the empty string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DurationParts {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl DurationParts {
    /// splits a duration in seconds. fractional seconds are truncated, and negative
    /// or non-finite values are treated as zero.
    pub fn from_seconds(seconds: f64) -> DurationParts {
        let whole = if seconds.is_finite() && seconds > 0.0 {
            seconds.trunc() as u64
        } else {
            0
        };
        let days = whole / SECONDS_PER_DAY;
        let remainder = whole % SECONDS_PER_DAY;
        DurationParts {
            days,
            hours: remainder / SECONDS_PER_HOUR,
            minutes: (remainder % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE,
            seconds: remainder % SECONDS_PER_MINUTE,
        }
    }

    pub fn total_seconds(&self) -> u64 {
        self.days * SECONDS_PER_DAY
            + self.hours * SECONDS_PER_HOUR
            + self.minutes * SECONDS_PER_MINUTE
            + self.seconds
    }
}

impl Display for DurationParts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let components = [
            (self.days, 'd'),
            (self.hours, 'h'),
            (self.minutes, 'm'),
            (self.seconds, 's'),
        ];
        for (value, unit) in components {
            if value > 0 {
                write!(f, "{value}{unit} ")?;
            }
        }
        Ok(())
    }
}

/// formats a duration in seconds as a `DurationParts` string.
pub fn format_duration(seconds: f64) -> String {
    DurationParts::from_seconds(seconds).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_components() {
        // 1 day, 2 hours, 52 minutes, 1 second
        assert_eq!(format_duration(96_721.0), "1d 2h 52m 1s ");
    }

    #[test]
    fn test_zero_components_are_omitted() {
        assert_eq!(format_duration(5_400.0), "1h 30m ");
        assert_eq!(format_duration(86_400.0), "1d ");
        assert_eq!(format_duration(86_401.0), "1d 1s ");
        assert_eq!(format_duration(0.0), "");
    }

    #[test]
    fn test_fraction_is_truncated() {
        assert_eq!(format_duration(13_817.2857), "3h 50m 17s ");
        assert_eq!(format_duration(59.999), "59s ");
        assert_eq!(format_duration(0.5), "");
    }

    #[test]
    fn test_negative_and_nan_are_zero() {
        assert_eq!(DurationParts::from_seconds(-30.0), DurationParts::default());
        assert_eq!(DurationParts::from_seconds(f64::NAN), DurationParts::default());
    }

    #[test]
    fn test_components_reconstruct_truncated_value() {
        for value in [0.0, 1.0, 59.0, 61.5, 3_599.9, 3_600.0, 90_061.0, 1_234_567.89] {
            let parts = DurationParts::from_seconds(value);
            assert_eq!(parts.total_seconds(), value.trunc() as u64, "value {value}");
            assert!(parts.hours < 24 && parts.minutes < 60 && parts.seconds < 60);
        }
    }

    #[test]
    fn test_display_reparses_to_same_seconds() {
        let formatted = format_duration(200_000.0);
        let total: u64 = formatted
            .split_whitespace()
            .map(|token| {
                let (digits, unit) = token.split_at(token.len() - 1);
                let n: u64 = digits.parse().unwrap();
                match unit {
                    "d" => n * SECONDS_PER_DAY,
                    "h" => n * SECONDS_PER_HOUR,
                    "m" => n * SECONDS_PER_MINUTE,
                    "s" => n,
                    other => panic!("unexpected unit {other}"),
                }
            })
            .sum();
        assert_eq!(total, 200_000);
        assert!(formatted.ends_with(' '));
    }
}
