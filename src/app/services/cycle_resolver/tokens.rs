//! File-name token formatting
//!
//! The publisher's path template is an external convention; the tokens built
//! here must satisfy it bit-for-bit (two-digit issuance hours, two- or
//! three-digit offsets, minute components only off the hour).

use crate::constants::DATE_DIRECTORY_FORMAT;
use chrono::{DateTime, Duration, NaiveDate, Utc};

/// Calendar-date directory token, e.g. "20220415"
pub fn date_directory(date: NaiveDate) -> String {
    date.format(DATE_DIRECTORY_FORMAT).to_string()
}

/// Issuance-hour token, e.g. "t16z"
pub fn issuance_token(hour: u32) -> String {
    format!("t{:02}z", hour)
}

/// Hours-ago token for analyses: "tm03", or "tm0115" with a minute component
/// for sub-hourly valid times
pub fn analysis_offset_token(hours: i64, minutes: Option<u32>) -> String {
    match minutes {
        Some(minutes) => format!("tm{:02}{:02}", hours, minutes),
        None => format!("tm{:02}", hours),
    }
}

/// Forward lead-time token for forecasts: "f018", or "f00015" with a minute
/// component for sub-hourly leads
pub fn forecast_offset_token(hours: i64, minutes: Option<u32>) -> String {
    match minutes {
        Some(minutes) => format!("f{:03}{:02}", hours, minutes),
        None => format!("f{:03}", hours),
    }
}

/// Valid time of timestep `index` relative to the window start.
///
/// When the start timestep is excluded (analysis windows aligned with a
/// forecast, whose product supplies the start timestep itself) every index
/// shifts forward by one step.
pub fn step_valid_time(
    start_time: DateTime<Utc>,
    timestep: Duration,
    index: usize,
    include_start: bool,
) -> DateTime<Utc> {
    let steps = if include_start { index } else { index + 1 };
    start_time + timestep * steps as i32
}

/// UTC instant at an exact hour of `date`; hour values come from schedule
/// constants and are always in range
pub fn date_at_hour(date: NaiveDate, hour: u32) -> DateTime<Utc> {
    date.and_hms_opt(hour, 0, 0)
        .expect("schedule hours are within 0..24")
        .and_utc()
}
