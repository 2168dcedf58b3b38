//! Forecast branch tests: cycle anchors, lead tokens, version-dependent
//! timesteps

use super::{named_request, test_registry, utc};
use crate::app::models::{Configuration, Domain, NwmVersion};
use crate::app::services::cycle_resolver::CycleResolver;

#[test]
fn test_short_range_hourly_cycle() {
    let registry = test_registry();
    let resolver = CycleResolver::new(&registry);

    let mut request = named_request(
        Domain::Conus,
        Configuration::ShortRange,
        utc(2022, 4, 15, 7, 0),
        3,
    );
    request.include_start = false;
    let parts = resolver.resolve(&request).unwrap();

    let tokens: Vec<(&str, &str, &str)> = parts
        .iter()
        .map(|p| {
            (
                p.date_directory.as_str(),
                p.issuance_token.as_str(),
                p.offset_token.as_str(),
            )
        })
        .collect();
    assert_eq!(
        tokens,
        vec![
            ("20220415", "t07z", "f001"),
            ("20220415", "t07z", "f002"),
            ("20220415", "t07z", "f003"),
        ]
    );
}

#[test]
fn test_medium_range_six_hour_anchors() {
    let registry = test_registry();
    let resolver = CycleResolver::new(&registry);

    // four cycles a day anchor at 00z/06z/12z/18z; a 13z start belongs to 12z
    let request = named_request(
        Domain::Conus,
        Configuration::MediumRange,
        utc(2022, 4, 15, 13, 0),
        2,
    );
    let parts = resolver.resolve(&request).unwrap();

    assert_eq!(parts[0].issuance_token, "t12z");
    assert_eq!(parts[0].offset_token, "f001");
    assert_eq!(parts[1].offset_token, "f002");
    assert_eq!(parts[0].date_directory, "20220415");
}

#[test]
fn test_medium_range_v2_0_three_hour_timestep() {
    let registry = test_registry();
    let resolver = CycleResolver::new(&registry);

    let mut request = named_request(
        Domain::Conus,
        Configuration::MediumRange,
        utc(2021, 1, 1, 0, 0),
        2,
    );
    request.include_start = false;
    // start time predates the v2.1 cutover, so the 3-hour timestep applies
    let parts = resolver.resolve(&request).unwrap();

    assert_eq!(parts[0].valid_time, utc(2021, 1, 1, 3, 0));
    assert_eq!(parts[0].offset_token, "f003");
    assert_eq!(parts[1].offset_token, "f006");
}

#[test]
fn test_puertorico_anchor_wraps_to_previous_day() {
    let registry = test_registry();
    let resolver = CycleResolver::new(&registry);

    // puertorico runs 06z/18z; a 03z start falls in the previous day's 18z run
    let request = named_request(
        Domain::PuertoRico,
        Configuration::ShortRange,
        utc(2022, 4, 15, 3, 0),
        2,
    );
    let parts = resolver.resolve(&request).unwrap();

    assert_eq!(parts[0].date_directory, "20220414");
    assert_eq!(parts[0].issuance_token, "t18z");
    assert_eq!(parts[0].offset_token, "f009");
    assert_eq!(parts[1].offset_token, "f010");
}

#[test]
fn test_puertorico_anchor_at_base_hour() {
    let registry = test_registry();
    let resolver = CycleResolver::new(&registry);

    let mut request = named_request(
        Domain::PuertoRico,
        Configuration::ShortRange,
        utc(2022, 4, 15, 6, 0),
        2,
    );
    request.include_start = false;
    let parts = resolver.resolve(&request).unwrap();

    assert_eq!(parts[0].date_directory, "20220415");
    assert_eq!(parts[0].issuance_token, "t06z");
    assert_eq!(parts[0].offset_token, "f001");
}

#[test]
fn test_hawaii_subhourly_lead_tokens() {
    let registry = test_registry();
    let resolver = CycleResolver::new(&registry);

    let mut request = named_request(
        Domain::Hawaii,
        Configuration::ShortRange,
        utc(2022, 4, 15, 0, 0),
        4,
    );
    request.include_start = false;
    let parts = resolver.resolve(&request).unwrap();

    let tokens: Vec<&str> = parts.iter().map(|p| p.offset_token.as_str()).collect();
    assert_eq!(tokens, vec!["f00015", "f00030", "f00045", "f001"]);
    assert!(parts.iter().all(|p| p.issuance_token == "t00z"));
}

#[test]
fn test_forecast_records_keep_requested_configuration() {
    let registry = test_registry();
    let resolver = CycleResolver::new(&registry);

    let request = named_request(
        Domain::Conus,
        Configuration::MediumRange,
        utc(2022, 4, 15, 0, 0),
        1,
    );
    let parts = resolver.resolve(&request).unwrap();
    assert_eq!(parts[0].configuration, Configuration::MediumRange);
}

#[test]
fn test_explicit_version_overrides_start_time_resolution() {
    let registry = test_registry();
    let resolver = CycleResolver::new(&registry);

    // a 2022 start resolves to v2.2 hourly steps, but pinning v2.0 restores
    // the 3-hour medium-range cadence
    let mut request = named_request(
        Domain::Conus,
        Configuration::MediumRange,
        utc(2022, 4, 15, 0, 0),
        2,
    );
    request.include_start = false;
    let parts = resolver.resolve_at(&request, NwmVersion::V2_0).unwrap();
    assert_eq!(parts[0].offset_token, "f003");
}
