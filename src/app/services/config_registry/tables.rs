//! Base schedule tables per domain
//!
//! One row per configuration the publisher actually runs in each domain,
//! expressed at the current software version. Older-version differences live
//! in `overrides`, not here.

use crate::app::models::{
    ConfigRecord, Configuration, Domain, VariableGroup, VariableRecord,
};
use crate::constants::EXTENDED_ISSUANCE_HOUR;
use std::collections::HashMap;

/// Configurations the publisher only runs for the continental domain
const CONUS_ONLY_CONFIGS: &[Configuration] = &[
    Configuration::MediumRange,
    Configuration::LongRange,
    Configuration::AnalysisAssimExtend,
];

/// Whether a configuration is gated off for an island domain
pub fn is_unsupported_island_config(configuration: Configuration, domain: Domain) -> bool {
    domain != Domain::Conus && CONUS_ONLY_CONFIGS.contains(&configuration)
}

/// The standard base tables for all three domains
pub fn base_tables() -> HashMap<Domain, Vec<ConfigRecord>> {
    HashMap::from([
        (Domain::Conus, conus_base()),
        (Domain::Hawaii, hawaii_base()),
        (Domain::PuertoRico, puertorico_base()),
    ])
}

fn conus_base() -> Vec<ConfigRecord> {
    vec![
        ConfigRecord {
            configuration: Configuration::ShortRange,
            dir_suffix: String::new(),
            var_str_suffix: String::new(),
            duration_hours: 18,
            timestep_minutes: 60,
            runs_per_day: 24,
            base_run_hour: 0,
            latency_minutes: 90,
            is_forecast: true,
            abbrev: "srf",
        },
        // medium range records describe member 1; members 2-7 are patched in
        // at lookup time
        ConfigRecord {
            configuration: Configuration::MediumRange,
            dir_suffix: "_mem1".to_string(),
            var_str_suffix: "_1".to_string(),
            duration_hours: 240,
            timestep_minutes: 60,
            runs_per_day: 4,
            base_run_hour: 0,
            latency_minutes: 360,
            is_forecast: true,
            abbrev: "mrf",
        },
        ConfigRecord {
            configuration: Configuration::AnalysisAssim,
            dir_suffix: String::new(),
            var_str_suffix: String::new(),
            duration_hours: 3,
            timestep_minutes: 60,
            runs_per_day: 24,
            base_run_hour: 0,
            latency_minutes: 30,
            is_forecast: false,
            abbrev: "stana",
        },
        ConfigRecord {
            configuration: Configuration::AnalysisAssimExtend,
            dir_suffix: String::new(),
            var_str_suffix: String::new(),
            duration_hours: 28,
            timestep_minutes: 60,
            runs_per_day: 1,
            base_run_hour: EXTENDED_ISSUANCE_HOUR,
            latency_minutes: 180,
            is_forecast: false,
            abbrev: "exana",
        },
    ]
}

fn hawaii_base() -> Vec<ConfigRecord> {
    vec![
        ConfigRecord {
            configuration: Configuration::ShortRange,
            dir_suffix: Domain::Hawaii.dir_suffix(),
            var_str_suffix: String::new(),
            duration_hours: 48,
            timestep_minutes: 15,
            runs_per_day: 2,
            base_run_hour: 0,
            latency_minutes: 90,
            is_forecast: true,
            abbrev: "srf",
        },
        ConfigRecord {
            configuration: Configuration::AnalysisAssim,
            dir_suffix: Domain::Hawaii.dir_suffix(),
            var_str_suffix: String::new(),
            duration_hours: 3,
            timestep_minutes: 15,
            runs_per_day: 24,
            base_run_hour: 0,
            latency_minutes: 30,
            is_forecast: false,
            abbrev: "stana",
        },
    ]
}

fn puertorico_base() -> Vec<ConfigRecord> {
    vec![
        // runs at 06z and 18z rather than from midnight
        ConfigRecord {
            configuration: Configuration::ShortRange,
            dir_suffix: Domain::PuertoRico.dir_suffix(),
            var_str_suffix: String::new(),
            duration_hours: 48,
            timestep_minutes: 60,
            runs_per_day: 2,
            base_run_hour: 6,
            latency_minutes: 90,
            is_forecast: true,
            abbrev: "srf",
        },
        ConfigRecord {
            configuration: Configuration::AnalysisAssim,
            dir_suffix: Domain::PuertoRico.dir_suffix(),
            var_str_suffix: String::new(),
            duration_hours: 3,
            timestep_minutes: 60,
            runs_per_day: 24,
            base_run_hour: 0,
            latency_minutes: 30,
            is_forecast: false,
            abbrev: "stana",
        },
    ]
}

/// Per-variable-group naming records.
///
/// In conus the directory suffix only matters for the medium-range member
/// directories; island domains carry their domain suffix on every
/// configuration directory, so both groups turn it on.
pub fn variable_specs(domain: Domain) -> Vec<VariableRecord> {
    let island = domain != Domain::Conus;
    vec![
        VariableRecord {
            group: VariableGroup::Forcing,
            dir_prefix: "forcing_",
            use_suffix: island,
            var_string: "forcing",
            units: "mm hr-1",
        },
        VariableRecord {
            group: VariableGroup::Channel,
            dir_prefix: "",
            use_suffix: true,
            var_string: "channel_rt",
            units: "cms",
        },
    ]
}
