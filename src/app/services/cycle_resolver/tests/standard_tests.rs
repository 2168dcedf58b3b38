//! Standard-analysis branch tests: default tm02 offsets, latest-mode
//! asymmetry, sub-hourly minute tokens

use super::{named_request, test_registry, utc};
use crate::app::models::{ConfigRequest, Configuration, Domain};
use crate::app::services::cycle_resolver::{CycleRequest, CycleResolver};
use crate::Error;

#[test]
fn test_default_offset_is_tm02() {
    let registry = test_registry();
    let resolver = CycleResolver::new(&registry);

    let request = named_request(
        Domain::Conus,
        Configuration::AnalysisAssim,
        utc(2022, 4, 15, 5, 0),
        1,
    );
    let parts = resolver.resolve(&request).unwrap();

    assert_eq!(parts[0].date_directory, "20220415");
    assert_eq!(parts[0].issuance_token, "t07z");
    assert_eq!(parts[0].offset_token, "tm02");
    assert_eq!(parts[0].configuration, Configuration::AnalysisAssim);
}

#[test]
fn test_covering_issuance_crosses_midnight() {
    let registry = test_registry();
    let resolver = CycleResolver::new(&registry);

    let request = named_request(
        Domain::Conus,
        Configuration::AnalysisAssim,
        utc(2022, 4, 15, 23, 0),
        1,
    );
    let parts = resolver.resolve(&request).unwrap();

    assert_eq!(parts[0].date_directory, "20220416");
    assert_eq!(parts[0].issuance_token, "t01z");
    assert_eq!(parts[0].offset_token, "tm02");
}

#[test]
fn test_latest_query_asymmetry() {
    let registry = test_registry();
    let resolver = CycleResolver::new(&registry);

    let request = CycleRequest::new(
        Domain::Conus,
        ConfigRequest::LatestAnalysis,
        utc(2022, 4, 15, 1, 0),
        5,
        utc(2022, 4, 15, 5, 30),
    );
    let parts = resolver.resolve(&request).unwrap();

    let tokens: Vec<(&str, &str)> = parts
        .iter()
        .map(|p| (p.issuance_token.as_str(), p.offset_token.as_str()))
        .collect();
    assert_eq!(
        tokens,
        vec![
            ("t03z", "tm02"),
            ("t04z", "tm02"),
            ("t05z", "tm02"),
            ("t05z", "tm01"),
            ("t05z", "tm00"),
        ]
    );
    // latest records always report the standard analysis configuration
    assert!(
        parts
            .iter()
            .all(|p| p.configuration == Configuration::AnalysisAssim)
    );
}

#[test]
fn test_subhourly_minute_tokens() {
    let registry = test_registry();
    let resolver = CycleResolver::new(&registry);

    // hawaii at v2.2 steps every 15 minutes
    let request = named_request(
        Domain::Hawaii,
        Configuration::AnalysisAssim,
        utc(2022, 4, 15, 5, 0),
        4,
    );
    let parts = resolver.resolve(&request).unwrap();

    let tokens: Vec<&str> = parts.iter().map(|p| p.offset_token.as_str()).collect();
    assert_eq!(tokens, vec!["tm02", "tm0145", "tm0130", "tm0115"]);
    // the covering issuance hour truncates to t07z for the whole hour
    assert!(parts.iter().all(|p| p.issuance_token == "t07z"));
}

#[test]
fn test_minute_suffix_table() {
    let registry = test_registry();
    let resolver = CycleResolver::new(&registry);

    // (valid minute, expected token): minute suffix is 60 - minutes, with no
    // suffix at the top of the hour
    for (minute, expected) in [(0, "tm02"), (15, "tm0145"), (30, "tm0130"), (45, "tm0115")] {
        let request = named_request(
            Domain::Hawaii,
            Configuration::AnalysisAssim,
            utc(2022, 4, 15, 5, minute),
            1,
        );
        let parts = resolver.resolve(&request).unwrap();
        assert_eq!(parts[0].offset_token, expected, "minute {}", minute);
    }
}

#[test]
fn test_subhourly_latest_trailing_group() {
    let registry = test_registry();
    let resolver = CycleResolver::new(&registry);

    // 9 quarter-hour steps from 03:00 end at 05:00; the trailing hour's
    // worth resolves at tm01 and the final step at tm00
    let request = CycleRequest::new(
        Domain::Hawaii,
        ConfigRequest::LatestAnalysis,
        utc(2022, 4, 15, 3, 0),
        9,
        utc(2022, 4, 15, 5, 30),
    );
    let parts = resolver.resolve(&request).unwrap();

    assert_eq!(parts[0].offset_token, "tm02");
    assert_eq!(parts[3].offset_token, "tm0115");
    assert_eq!(parts[4].offset_token, "tm01"); // 04:00, first of the tm01 group
    assert_eq!(parts[5].offset_token, "tm0045"); // 04:15
    assert_eq!(parts[8].offset_token, "tm00"); // 05:00
    assert_eq!(parts[8].issuance_token, "t05z");
}

#[test]
fn test_prefer_recent_offset_reads_tm00() {
    let registry = test_registry();
    let resolver = CycleResolver::new(&registry);

    let mut request = named_request(
        Domain::Conus,
        Configuration::AnalysisAssim,
        utc(2022, 4, 15, 5, 0),
        2,
    );
    request.prefer_recent_offset = true;
    let parts = resolver.resolve(&request).unwrap();

    assert_eq!(parts[0].issuance_token, "t05z");
    assert_eq!(parts[0].offset_token, "tm00");
    assert_eq!(parts[1].issuance_token, "t06z");
    assert_eq!(parts[1].offset_token, "tm00");
}

#[test]
fn test_prefer_recent_offset_rejects_subhourly() {
    let registry = test_registry();
    let resolver = CycleResolver::new(&registry);

    let mut request = named_request(
        Domain::Hawaii,
        Configuration::AnalysisAssim,
        utc(2022, 4, 15, 5, 0),
        2,
    );
    request.prefer_recent_offset = true;
    let err = resolver.resolve(&request).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));
}

#[test]
fn test_latest_rejected_for_forecasts() {
    let registry = test_registry();
    let resolver = CycleResolver::new(&registry);

    let mut request = named_request(
        Domain::Conus,
        Configuration::ShortRange,
        utc(2022, 4, 15, 5, 0),
        2,
    );
    request.latest = true;
    let err = resolver.resolve(&request).unwrap_err();
    match err {
        Error::InvalidLatestQuery { configuration } => {
            assert_eq!(configuration, Configuration::ShortRange);
        }
        other => panic!("expected InvalidLatestQuery, got {other:?}"),
    }
}
