//! Extended-analysis branch
//!
//! The extended analysis is issued once per day at 16z and covers offsets
//! tm00..tm27, so a single run reaches back past midnight into the previous
//! calendar date. Valid hours 00..=13 are served from the same date's run;
//! hours 14..=23 nominally belong to the next date's run, which may not be
//! published yet at query time.

use super::tokens;
use crate::app::models::{ConfigRecord, FilePartRecord};
use crate::constants::{
    EXTENDED_AVAILABLE_HOUR, EXTENDED_ISSUANCE_HOUR, EXTENDED_SAME_DAY_LAST_HOUR,
};
use chrono::{Days, Timelike};

use super::CycleRequest;

pub(super) fn resolve(request: &CycleRequest, record: &ConfigRecord) -> Vec<FilePartRecord> {
    let timestep = record.timestep();
    let issuance_hour = EXTENDED_ISSUANCE_HOUR as i64;

    let mut parts = Vec::with_capacity(request.timestep_count);
    for i in 0..request.timestep_count {
        let valid_time =
            tokens::step_valid_time(request.start_time, timestep, i, request.include_start);
        let hour = valid_time.hour() as i64;
        let same_day = valid_time.date_naive();
        let next_day = same_day + Days::new(1);
        let next_day_offset = issuance_hour + 24 - hour;

        let (date, offset) = if valid_time.hour() <= EXTENDED_SAME_DAY_LAST_HOUR {
            (same_day, issuance_hour - hour)
        } else {
            // The next-day run is expected once its issuance-plus-latency
            // instant has passed. `available_at` is on the hour, so comparing
            // the raw clock is equivalent to comparing it truncated.
            let available_at = tokens::date_at_hour(next_day, EXTENDED_AVAILABLE_HOUR);
            if request.now < available_at {
                let fallback = issuance_hour - hour;
                if fallback < 0 {
                    // Not reachable from the current-day run either; name the
                    // next-day file and let the fetch layer report it missing.
                    (next_day, next_day_offset)
                } else {
                    (same_day, fallback)
                }
            } else {
                (next_day, next_day_offset)
            }
        };

        parts.push(FilePartRecord {
            date_directory: tokens::date_directory(date),
            issuance_token: tokens::issuance_token(EXTENDED_ISSUANCE_HOUR),
            offset_token: tokens::analysis_offset_token(offset, None),
            valid_time,
            configuration: request.configuration,
        });
    }

    parts
}
