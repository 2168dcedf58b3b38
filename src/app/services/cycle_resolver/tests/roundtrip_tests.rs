//! Round-trip tests: every produced record's tokens must reconstruct the
//! valid time they were derived from, on every branch

use super::{named_request, test_registry, utc};
use crate::app::models::{ConfigRequest, Configuration, Domain, FilePartRecord};
use crate::app::services::cycle_resolver::{CycleRequest, CycleResolver};
use chrono::{DateTime, Duration, NaiveDate, Utc};

/// Rebuild the valid time from date_directory + issuance_token +/- offset_token
fn reconstruct(part: &FilePartRecord) -> DateTime<Utc> {
    let date = NaiveDate::parse_from_str(&part.date_directory, "%Y%m%d").unwrap();
    let hour: u32 = part.issuance_token[1..3].parse().unwrap();
    let issuance = date.and_hms_opt(hour, 0, 0).unwrap().and_utc();

    if let Some(body) = part.offset_token.strip_prefix("tm") {
        let hours: i64 = body[..2].parse().unwrap();
        let minutes: i64 = if body.len() > 2 {
            body[2..].parse().unwrap()
        } else {
            0
        };
        issuance - Duration::hours(hours) - Duration::minutes(minutes)
    } else {
        let body = part.offset_token.strip_prefix('f').unwrap();
        let hours: i64 = body[..3].parse().unwrap();
        let minutes: i64 = if body.len() > 3 {
            body[3..].parse().unwrap()
        } else {
            0
        };
        issuance + Duration::hours(hours) + Duration::minutes(minutes)
    }
}

fn assert_roundtrip(parts: &[FilePartRecord]) {
    for part in parts {
        assert_eq!(
            reconstruct(part),
            part.valid_time,
            "token round-trip failed for {:?}",
            part
        );
    }
}

#[test]
fn test_roundtrip_extended_analysis() {
    let registry = test_registry();
    let resolver = CycleResolver::new(&registry);

    // spans morning, boundary, and fallback hours
    let mut request = named_request(
        Domain::Conus,
        Configuration::AnalysisAssimExtend,
        utc(2022, 4, 15, 10, 0),
        10,
    );
    assert_roundtrip(&resolver.resolve(&request).unwrap());

    // same window while the next-day run is not yet due
    request.now = utc(2022, 4, 16, 12, 0);
    assert_roundtrip(&resolver.resolve(&request).unwrap());
}

#[test]
fn test_roundtrip_standard_analysis_all_domains() {
    let registry = test_registry();
    let resolver = CycleResolver::new(&registry);

    for domain in [Domain::Conus, Domain::Hawaii, Domain::PuertoRico] {
        let request = named_request(
            domain,
            Configuration::AnalysisAssim,
            utc(2022, 4, 15, 22, 0),
            8,
        );
        assert_roundtrip(&resolver.resolve(&request).unwrap());
    }
}

#[test]
fn test_roundtrip_latest_analysis() {
    let registry = test_registry();
    let resolver = CycleResolver::new(&registry);

    let request = CycleRequest::new(
        Domain::Conus,
        ConfigRequest::LatestAnalysis,
        utc(2022, 4, 15, 1, 0),
        5,
        utc(2022, 4, 15, 5, 30),
    );
    assert_roundtrip(&resolver.resolve(&request).unwrap());
}

#[test]
fn test_roundtrip_forecasts() {
    let registry = test_registry();
    let resolver = CycleResolver::new(&registry);

    for (domain, configuration) in [
        (Domain::Conus, Configuration::ShortRange),
        (Domain::Conus, Configuration::MediumRange),
        (Domain::Hawaii, Configuration::ShortRange),
        (Domain::PuertoRico, Configuration::ShortRange),
    ] {
        let mut request = named_request(domain, configuration, utc(2022, 4, 15, 3, 0), 6);
        request.include_start = false;
        assert_roundtrip(&resolver.resolve(&request).unwrap());
    }
}

#[test]
fn test_resolution_is_idempotent() {
    let registry = test_registry();
    let resolver = CycleResolver::new(&registry);

    let request = CycleRequest::new(
        Domain::Conus,
        ConfigRequest::LatestAnalysis,
        utc(2022, 4, 15, 1, 0),
        5,
        utc(2022, 4, 15, 5, 30),
    );
    let first = resolver.resolve(&request).unwrap();
    let second = resolver.resolve(&request).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_output_is_in_ascending_valid_time_order() {
    let registry = test_registry();
    let resolver = CycleResolver::new(&registry);

    let request = named_request(
        Domain::Hawaii,
        Configuration::AnalysisAssim,
        utc(2022, 4, 15, 5, 0),
        12,
    );
    let parts = resolver.resolve(&request).unwrap();
    assert!(parts.windows(2).all(|w| w[0].valid_time < w[1].valid_time));
}
