use chrono::NaiveDateTime;

/// accepts both whole-second and fractional-second timestamps, e.g.
/// "2017-01-01 00:07:57" and "2017-01-01 00:07:57.123".
pub const APP_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

/// parses a timestamp cell from a trip file. the error message names the offending
/// value and format so load failures can be traced back to the source row.
pub fn parse_naive_datetime(value: &str, format: &str) -> Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(value.trim(), format)
        .map_err(|e| format!("'{value}' does not match format '{format}': {e}"))
}
