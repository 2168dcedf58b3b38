//! Reference-time to NWM software version resolution
//!
//! The NWM has switched software versions at fixed instants; the version in
//! effect governs schedule and parameter differences everywhere else in the
//! resolver. This is a pure step function over the cutover table.

use crate::app::models::NwmVersion;
use chrono::{DateTime, TimeZone, Utc};

/// Ordered cutover table: the instant each version took effect.
///
/// Reference times before the earliest cutover resolve to v2.0. That is a
/// documented simplification carried over from the upstream schedule notes,
/// not an error case.
pub fn cutovers() -> [(DateTime<Utc>, NwmVersion); 2] {
    [
        (
            Utc.with_ymd_and_hms(2021, 4, 20, 14, 0, 0).unwrap(),
            NwmVersion::V2_1,
        ),
        (
            Utc.with_ymd_and_hms(2022, 7, 9, 0, 0, 0).unwrap(),
            NwmVersion::V2_2,
        ),
    ]
}

/// Resolve the NWM software version in effect at `reference_time`.
///
/// A reference time exactly equal to a cutover resolves to the new version.
pub fn resolve_version(reference_time: DateTime<Utc>) -> NwmVersion {
    let mut version = NwmVersion::V2_0;
    for (cutover, candidate) in cutovers() {
        if reference_time >= cutover {
            version = candidate;
        }
    }
    version
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_version_before_first_cutover() {
        let t = Utc.with_ymd_and_hms(2019, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(resolve_version(t), NwmVersion::V2_0);
    }

    #[test]
    fn test_version_boundary_exactness() {
        for (cutover, version) in cutovers() {
            assert_eq!(resolve_version(cutover), version);
            assert_ne!(resolve_version(cutover - Duration::seconds(1)), version);
        }
    }

    #[test]
    fn test_version_between_cutovers() {
        let t = Utc.with_ymd_and_hms(2021, 12, 25, 6, 0, 0).unwrap();
        assert_eq!(resolve_version(t), NwmVersion::V2_1);
    }

    #[test]
    fn test_version_after_last_cutover() {
        let t = Utc.with_ymd_and_hms(2023, 3, 1, 12, 0, 0).unwrap();
        assert_eq!(resolve_version(t), NwmVersion::V2_2);
    }
}
