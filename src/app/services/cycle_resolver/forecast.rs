//! Forecast branch
//!
//! Forecast cycles anchor at the configuration's base run hour plus
//! multiples of the daily cycle interval; every timestep of the window is a
//! forward lead from the single covering issuance, so no day-boundary
//! fallback is involved.

use super::tokens;
use crate::app::models::{ConfigRecord, FilePartRecord};
use crate::{Error, Result};
use chrono::{Duration, Timelike};

use super::CycleRequest;

pub(super) fn resolve(
    request: &CycleRequest,
    record: &ConfigRecord,
) -> Result<Vec<FilePartRecord>> {
    if record.runs_per_day == 0 || 24 % record.runs_per_day != 0 {
        return Err(Error::invalid_argument(format!(
            "forecast configuration '{}' has an invalid cycle cadence ({} runs/day)",
            record.configuration, record.runs_per_day
        )));
    }
    let interval_hours = (24 / record.runs_per_day) as i64;

    // Latest cycle anchor at or before the window start. Anchors repeat
    // daily from the base run hour, so a start before today's base hour
    // falls into yesterday's cycle sequence (puertorico runs 06z/18z; a 03z
    // start belongs to the previous day's 18z run).
    let day_anchor = tokens::date_at_hour(request.start_time.date_naive(), record.base_run_hour);
    let day_anchor = if request.start_time < day_anchor {
        day_anchor - Duration::days(1)
    } else {
        day_anchor
    };
    let cycles = (request.start_time - day_anchor).num_hours() / interval_hours;
    let issuance = day_anchor + Duration::hours(cycles * interval_hours);

    let timestep = record.timestep();
    let mut parts = Vec::with_capacity(request.timestep_count);
    for i in 0..request.timestep_count {
        let valid_time =
            tokens::step_valid_time(request.start_time, timestep, i, request.include_start);
        let lead = valid_time - issuance;
        let lead_hours = lead.num_hours();
        let lead_minutes = (lead.num_minutes() - lead_hours * 60) as u32;
        let minute_component = (lead_minutes > 0).then_some(lead_minutes);

        parts.push(FilePartRecord {
            date_directory: tokens::date_directory(issuance.date_naive()),
            issuance_token: tokens::issuance_token(issuance.hour()),
            offset_token: tokens::forecast_offset_token(lead_hours, minute_component),
            valid_time,
            configuration: request.configuration,
        });
    }

    Ok(parts)
}
