//! Core data structures and types for NWM file-identifier resolution.
//!
//! Defines the domain, configuration, and version enumerations, the static
//! per-configuration scheduling record, and the per-timestep file-part
//! record produced by the cycle resolver.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Geographic modeling domains published by the NWM
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    Conus,
    Hawaii,
    PuertoRico,
}

impl Domain {
    /// Publisher-side domain token as it appears in file names
    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::Conus => "conus",
            Domain::Hawaii => "hawaii",
            Domain::PuertoRico => "puertorico",
        }
    }

    /// Directory suffix appended to island-domain configuration directories
    pub fn dir_suffix(&self) -> String {
        match self {
            Domain::Conus => String::new(),
            Domain::Hawaii | Domain::PuertoRico => format!("_{}", self.as_str()),
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Domain {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "conus" => Ok(Domain::Conus),
            "hawaii" => Ok(Domain::Hawaii),
            "puertorico" | "puerto_rico" => Ok(Domain::PuertoRico),
            other => Err(crate::Error::invalid_argument(format!(
                "unknown domain '{}' (expected conus, hawaii, or puertorico)",
                other
            ))),
        }
    }
}

/// NWM run configurations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Configuration {
    ShortRange,
    MediumRange,
    LongRange,
    AnalysisAssim,
    AnalysisAssimExtend,
}

impl Configuration {
    /// Publisher-side configuration token as it appears in directory and
    /// file names (before any domain or member suffix)
    pub fn as_str(&self) -> &'static str {
        match self {
            Configuration::ShortRange => "short_range",
            Configuration::MediumRange => "medium_range",
            Configuration::LongRange => "long_range",
            Configuration::AnalysisAssim => "analysis_assim",
            Configuration::AnalysisAssimExtend => "analysis_assim_extend",
        }
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Configuration {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "short_range" => Ok(Configuration::ShortRange),
            "medium_range" => Ok(Configuration::MediumRange),
            "long_range" => Ok(Configuration::LongRange),
            "analysis_assim" => Ok(Configuration::AnalysisAssim),
            "analysis_assim_extend" => Ok(Configuration::AnalysisAssimExtend),
            other => Err(crate::Error::invalid_argument(format!(
                "unknown configuration '{}'",
                other
            ))),
        }
    }
}

/// How the caller names the configuration to resolve.
///
/// The "most recent analysis" request is its own variant rather than a
/// sentinel configuration name; it is resolved to the standard analysis
/// configuration (with latest mode switched on) at the API boundary, before
/// any registry lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigRequest {
    /// Resolve a named configuration
    Named(Configuration),
    /// Resolve the freshest obtainable standard-analysis data
    LatestAnalysis,
}

impl ConfigRequest {
    /// Resolve the request into a concrete configuration and a latest-mode flag
    pub fn resolve(&self) -> (Configuration, bool) {
        match self {
            ConfigRequest::Named(config) => (*config, false),
            ConfigRequest::LatestAnalysis => (Configuration::AnalysisAssim, true),
        }
    }
}

/// NWM software versions, ordered by release
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum NwmVersion {
    V2_0,
    V2_1,
    V2_2,
}

impl NwmVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            NwmVersion::V2_0 => "2.0",
            NwmVersion::V2_1 => "2.1",
            NwmVersion::V2_2 => "2.2",
        }
    }
}

impl fmt::Display for NwmVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NwmVersion {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.trim() {
            "2.0" => Ok(NwmVersion::V2_0),
            "2.1" => Ok(NwmVersion::V2_1),
            "2.2" => Ok(NwmVersion::V2_2),
            other => Err(crate::Error::invalid_argument(format!(
                "unknown NWM version '{}' (expected 2.0, 2.1, or 2.2)",
                other
            ))),
        }
    }
}

/// Static scheduling record for one (configuration, domain, version, member)
///
/// Records are read-only reference data: the registry constructs them once
/// from its base tables plus version/member overrides and hands out copies.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfigRecord {
    /// Configuration this record describes
    pub configuration: Configuration,
    /// Suffix appended to the configuration's storage directory
    /// (encodes domain or ensemble member, e.g. "_mem1", "_hawaii")
    pub dir_suffix: String,
    /// Suffix appended to the variable token inside the file name
    /// (e.g. "_1" for ensemble member 1)
    pub var_str_suffix: String,
    /// Total forecast/analysis horizon in hours
    pub duration_hours: u32,
    /// Spacing between timesteps in minutes (15 for the sub-hourly domains)
    pub timestep_minutes: u32,
    /// Number of issuances per calendar day
    pub runs_per_day: u32,
    /// Hour-of-day (UTC) of the first/reference issuance, for configurations
    /// that run less than once per hour
    pub base_run_hour: u32,
    /// Expected publication delay after nominal issuance, in minutes
    pub latency_minutes: u32,
    /// True for forward-looking forecasts, false for backward-looking analyses
    pub is_forecast: bool,
    /// Short label for display and column naming; not used in resolution
    pub abbrev: &'static str,
}

impl ConfigRecord {
    /// Timestep spacing as a duration
    pub fn timestep(&self) -> Duration {
        Duration::minutes(self.timestep_minutes as i64)
    }

    /// Expected publication latency as a duration
    pub fn latency(&self) -> Duration {
        Duration::minutes(self.latency_minutes as i64)
    }

    /// Whether this record's timesteps fall between hour boundaries
    pub fn is_subhourly(&self) -> bool {
        self.timestep_minutes % 60 != 0
    }

    /// Number of timesteps in one hour of this record's cadence
    pub fn steps_per_hour(&self) -> usize {
        (60 / self.timestep_minutes.min(60)) as usize
    }

    /// Total number of timesteps across the full horizon
    pub fn total_timesteps(&self) -> usize {
        (self.duration_hours as usize * 60) / self.timestep_minutes as usize
    }
}

/// Per-variable-group naming record
///
/// The forcing and channel variable groups live under differently-prefixed
/// directories and use different variable tokens in the file name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariableRecord {
    /// Variable group this record describes
    pub group: VariableGroup,
    /// Prefix to the configuration directory (e.g. "forcing_")
    pub dir_prefix: &'static str,
    /// Whether the configuration record's dir_suffix participates in the key
    pub use_suffix: bool,
    /// Variable token inside the file name
    pub var_string: &'static str,
    /// Units of the decoded data
    pub units: &'static str,
}

/// Variable groups published per configuration directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariableGroup {
    Forcing,
    Channel,
}

impl FromStr for VariableGroup {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "forcing" => Ok(VariableGroup::Forcing),
            "channel" => Ok(VariableGroup::Channel),
            other => Err(crate::Error::invalid_argument(format!(
                "unknown variable group '{}' (expected forcing or channel)",
                other
            ))),
        }
    }
}

/// One resolved timestep, naming the publisher file that should hold it
///
/// Instances are created fresh per resolution call and consumed by the fetch
/// layer; nothing here is persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilePartRecord {
    /// Calendar date (YYYYMMDD) under which the publisher stores the source run
    pub date_directory: String,
    /// "t<HH>z" token identifying the run's issuance hour within the date directory
    pub issuance_token: String,
    /// "tm<NN>"/"tm<NN><MM>" hours-ago token for analyses, or "f<NNN>"
    /// forward-lead token for forecasts
    pub offset_token: String,
    /// Resolved calendar valid time of this timestep
    pub valid_time: DateTime<Utc>,
    /// Configuration this record actually belongs to (latest-analysis
    /// requests substitute the standard analysis configuration)
    pub configuration: Configuration,
}
