//! Tests for the cycle resolver branches

pub mod forecast_tests;
pub mod roundtrip_tests;
pub mod standard_tests;

use crate::app::models::{ConfigRequest, Configuration, Domain};
use crate::app::services::config_registry::ConfigRegistry;
use crate::app::services::cycle_resolver::CycleRequest;
use chrono::{DateTime, TimeZone, Utc};

pub fn utc(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0).unwrap()
}

pub fn test_registry() -> ConfigRegistry {
    ConfigRegistry::new()
}

/// A full-window request for a named configuration with `now` far enough in
/// the future that no availability fallback triggers
pub fn named_request(
    domain: Domain,
    configuration: Configuration,
    start_time: DateTime<Utc>,
    timestep_count: usize,
) -> CycleRequest {
    CycleRequest::new(
        domain,
        ConfigRequest::Named(configuration),
        start_time,
        timestep_count,
        utc(2030, 1, 1, 0, 0),
    )
}
