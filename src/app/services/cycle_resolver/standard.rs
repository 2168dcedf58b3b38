//! Standard-analysis branch
//!
//! The standard analysis runs every cycle, but its most recent offsets are
//! provisional before data assimilation settles. Bulk queries therefore read
//! each valid time at tm02 from the issuance two hours later; latest-mode
//! queries override only the trailing timesteps down to tm01 and tm00, where
//! provisional data is the point.

use super::tokens;
use crate::app::models::{ConfigRecord, Configuration, FilePartRecord};
use crate::constants::STANDARD_DEFAULT_OFFSET_HOURS;
use crate::{Error, Result};
use chrono::{Duration, Timelike};

use super::CycleRequest;

pub(super) fn resolve(
    request: &CycleRequest,
    record: &ConfigRecord,
) -> Result<Vec<FilePartRecord>> {
    if request.prefer_recent_offset && (record.is_subhourly() || request.start_time.minute() != 0) {
        // tm00 from the covering run cannot represent a mid-hour valid time
        return Err(Error::invalid_argument(
            "prefer_recent_offset requires hour-aligned timesteps",
        ));
    }

    let timestep = record.timestep();
    let steps_per_hour = record.steps_per_hour();
    let count = request.timestep_count;

    let mut parts = Vec::with_capacity(count);
    for i in 0..count {
        let valid_time =
            tokens::step_valid_time(request.start_time, timestep, i, request.include_start);

        let part = if request.prefer_recent_offset {
            FilePartRecord {
                date_directory: tokens::date_directory(valid_time.date_naive()),
                issuance_token: tokens::issuance_token(valid_time.hour()),
                offset_token: tokens::analysis_offset_token(0, None),
                valid_time,
                configuration: Configuration::AnalysisAssim,
            }
        } else {
            let mut offset_hours = STANDARD_DEFAULT_OFFSET_HOURS;
            let mut issuance = valid_time + Duration::hours(offset_hours);

            if request.latest {
                // The trailing hour's worth of timesteps comes from tm01 of
                // the freshest available issuance, and the final timestep
                // from tm00, ending the window at the most recent data.
                if i + steps_per_hour + 1 >= count {
                    offset_hours = 1;
                    issuance = valid_time + Duration::hours(1);
                }
                if i == count - 1 {
                    offset_hours = 0;
                    issuance = valid_time;
                }
            }

            // Offsets count backward in time, so a mid-hour valid time sits
            // one hour-token earlier plus a minute component of 60 - minutes.
            let minutes_past = valid_time.minute();
            let minute_component = if minutes_past > 0 {
                offset_hours -= 1;
                Some(60 - minutes_past)
            } else {
                None
            };

            FilePartRecord {
                date_directory: tokens::date_directory(issuance.date_naive()),
                issuance_token: tokens::issuance_token(issuance.hour()),
                offset_token: tokens::analysis_offset_token(offset_hours, minute_component),
                valid_time,
                configuration: Configuration::AnalysisAssim,
            }
        };

        parts.push(part);
    }

    Ok(parts)
}
