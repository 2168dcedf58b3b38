//! Application constants for the NWM resolver
//!
//! This module contains the fixed scheduling facts of the NWM publishing
//! cadence and the naming conventions the resolver's output must satisfy
//! bit-for-bit.

// =============================================================================
// Publisher object store
// =============================================================================

/// Google Cloud Storage bucket the NWM publishes to
pub const NWM_BUCKET: &str = "national-water-model";

/// Product prefix used in both the date directory and the file name
pub const PRODUCT_PREFIX: &str = "nwm";

/// NetCDF file extension carried by every published file
pub const FILE_EXTENSION: &str = "nc";

/// Date-directory format (calendar date of the source run)
pub const DATE_DIRECTORY_FORMAT: &str = "%Y%m%d";

// =============================================================================
// Extended analysis (analysis_assim_extend) schedule
// =============================================================================

/// Hour-of-day (UTC) of the single daily extended-analysis issuance
pub const EXTENDED_ISSUANCE_HOUR: u32 = 16;

/// Largest hours-ago offset the extended analysis publishes (tm00..tm27)
pub const EXTENDED_MAX_OFFSET_HOURS: i64 = 27;

/// Last valid hour-of-day still covered from the same calendar date's run.
/// Hours 14..=23 are nominally served from the next date's issuance.
pub const EXTENDED_SAME_DAY_LAST_HOUR: u32 = 13;

/// Hour-of-day (UTC) at which the next day's extended run is expected to be
/// published (issuance hour plus expected latency)
pub const EXTENDED_AVAILABLE_HOUR: u32 = 19;

// =============================================================================
// Standard analysis (analysis_assim) schedule
// =============================================================================

/// Default hours-ago offset used for standard-analysis lookups. The most
/// recent offsets of a standard cycle are provisional, so bulk queries read
/// tm02 from the issuance two hours after the valid time.
pub const STANDARD_DEFAULT_OFFSET_HOURS: i64 = 2;

// =============================================================================
// Ensemble configuration
// =============================================================================

/// Valid ensemble member range for the medium-range configuration
pub const MEDIUM_RANGE_MEMBERS: std::ops::RangeInclusive<u32> = 1..=7;
