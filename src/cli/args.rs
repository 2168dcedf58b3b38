//! Command-line argument definitions for the NWM resolver
//!
//! This module defines the complete CLI interface using the clap derive API.
//! Domain, configuration, and timestamp arguments parse through the model
//! types' `FromStr` implementations so the CLI and library reject the same
//! inputs with the same messages.

use crate::app::models::{ConfigRequest, Configuration, Domain, NwmVersion, VariableGroup};
use crate::{Error, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use std::str::FromStr;

/// CLI arguments for the NWM file-identifier resolver
///
/// Computes the publisher-side file names covering a valid-time window of a
/// National Water Model run configuration, without fetching anything.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "nwm-resolver",
    version,
    about = "Resolve National Water Model publisher file names for a valid-time window",
    long_about = "Computes the exact date-directory, issuance, and offset tokens naming the \
                  National Water Model files that cover a requested valid-time window, for a \
                  given domain, run configuration, and software version. Handles the \
                  version-dependent schedule changes, island-domain cadences, the once-daily \
                  extended analysis straddling midnight, and latest-available queries racing \
                  publication latency."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Increase logging verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Available subcommands for the NWM resolver
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Resolve the file identifiers covering a valid-time window
    Resolve(ResolveArgs),
    /// Show the schedule records defined for a domain at a version
    Configs(ConfigsArgs),
    /// Show the software-version cutover table
    Versions(VersionsArgs),
}

/// Arguments for the resolve command
#[derive(Debug, Clone, Parser)]
pub struct ResolveArgs {
    /// Modeling domain: conus, hawaii, or puertorico
    #[arg(short, long, value_name = "DOMAIN", default_value = "conus")]
    pub domain: Domain,

    /// Configuration to resolve: short_range, medium_range, analysis_assim,
    /// or analysis_assim_extend
    #[arg(short, long, value_name = "CONFIG", conflicts_with = "latest")]
    pub config: Option<Configuration>,

    /// Resolve the freshest obtainable standard-analysis data instead of a
    /// named configuration
    #[arg(long)]
    pub latest: bool,

    /// Valid time of the window's first timestep (UTC),
    /// e.g. 2022-04-15T06:00 or "2022-04-15 06:00:00"
    #[arg(short, long, value_name = "TIME")]
    pub start: UtcTimestamp,

    /// Number of timesteps to resolve; defaults to the configuration's full
    /// horizon
    #[arg(short = 'n', long, value_name = "N")]
    pub count: Option<usize>,

    /// Medium-range ensemble member (1-7)
    #[arg(short, long, value_name = "M", default_value_t = 1)]
    pub member: u32,

    /// Exclude the start timestep (for analysis windows aligned with a
    /// forecast, whose product supplies the start timestep itself)
    #[arg(long)]
    pub exclude_start: bool,

    /// Standard analysis only: read offset 0 from every covering run instead
    /// of the best-available offset 2
    #[arg(long)]
    pub prefer_recent: bool,

    /// Wall-clock override for the extended-analysis availability check
    /// (defaults to the system clock)
    #[arg(long, value_name = "TIME")]
    pub now: Option<UtcTimestamp>,

    /// Variable group used when printing object keys: channel or forcing
    #[arg(long, value_name = "GROUP", default_value = "channel")]
    pub variable: VariableGroup,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

impl ResolveArgs {
    /// The boundary-level configuration request this invocation asks for
    pub fn config_request(&self) -> Result<ConfigRequest> {
        if self.latest {
            Ok(ConfigRequest::LatestAnalysis)
        } else {
            self.config.map(ConfigRequest::Named).ok_or_else(|| {
                Error::invalid_argument("either --config or --latest is required")
            })
        }
    }
}

/// Arguments for the configs command
#[derive(Debug, Clone, Parser)]
pub struct ConfigsArgs {
    /// Modeling domain: conus, hawaii, or puertorico
    #[arg(short, long, value_name = "DOMAIN", default_value = "conus")]
    pub domain: Domain,

    /// Software version to show the schedule for (2.0, 2.1, 2.2)
    #[arg(long, value_name = "VERSION", conflicts_with = "at")]
    pub version: Option<NwmVersion>,

    /// Reference time to derive the version from (defaults to now)
    #[arg(long, value_name = "TIME")]
    pub at: Option<UtcTimestamp>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

impl ConfigsArgs {
    /// Version to list, from --version, --at, or the current clock
    pub fn resolved_version(&self) -> NwmVersion {
        match (self.version, &self.at) {
            (Some(version), _) => version,
            (None, Some(at)) => crate::resolve_version(at.0),
            (None, None) => crate::resolve_version(Utc::now()),
        }
    }
}

/// Arguments for the versions command
#[derive(Debug, Clone, Parser)]
pub struct VersionsArgs {
    /// Also resolve the version in effect at this reference time
    #[arg(long, value_name = "TIME")]
    pub at: Option<UtcTimestamp>,
}

/// Output format options for machine-readable results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    Human,
    /// JSON for scripting
    Json,
    /// One publisher object key per line
    Keys,
}

/// Wrapper parsing UTC timestamps in the handful of shapes users type
#[derive(Debug, Clone, Copy)]
pub struct UtcTimestamp(pub DateTime<Utc>);

impl FromStr for UtcTimestamp {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();

        if let Ok(parsed) = DateTime::parse_from_rfc3339(s) {
            return Ok(UtcTimestamp(parsed.with_timezone(&Utc)));
        }
        for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"] {
            if let Ok(parsed) = NaiveDateTime::parse_from_str(s, format) {
                return Ok(UtcTimestamp(parsed.and_utc()));
            }
        }
        match NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            Ok(date) => Ok(UtcTimestamp(
                date.and_hms_opt(0, 0, 0).expect("midnight is valid").and_utc(),
            )),
            Err(source) => Err(Error::datetime_parsing(
                format!("could not parse '{}' as a UTC timestamp", s),
                source,
            )),
        }
    }
}

impl Args {
    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
