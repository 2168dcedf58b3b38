//! Valid-time window to publisher file-identifier resolution
//!
//! Given a scheduling record from the registry and a requested window of
//! timesteps, this module computes the exact date-directory, issuance, and
//! offset tokens naming each timestep's source file. Three branches carry
//! the logic:
//! - extended analysis: once-daily issuance whose backward window straddles
//!   midnight, with a wall-clock-aware next-day fallback (`extended`)
//! - standard analysis: every-cycle issuance read at a fixed best-available
//!   offset, with latest-mode overrides for the trailing timesteps (`standard`)
//! - forecasts: fixed cycle anchors with forward lead tokens (`forecast`)
//!
//! Each timestep is resolved independently of the others; the only
//! non-deterministic input is the injected `now`, read by the extended
//! branch's availability check.

use crate::app::models::{ConfigRequest, Configuration, Domain, FilePartRecord, NwmVersion};
use crate::app::services::config_registry::ConfigRegistry;
use crate::app::services::version_resolver::resolve_version;
use crate::{Error, Result};
use chrono::{DateTime, Utc};
use tracing::debug;

mod extended;
mod forecast;
mod standard;
pub mod tokens;

#[cfg(test)]
pub mod tests;

/// One resolution request: which configuration, over which window, as of when
#[derive(Debug, Clone)]
pub struct CycleRequest {
    pub domain: Domain,
    pub configuration: Configuration,
    /// Latest-available mode; only defined for the standard analysis
    pub latest: bool,
    /// Ensemble member, meaningful for the medium-range configuration only
    pub member: u32,
    /// Valid time of the window's first timestep
    pub start_time: DateTime<Utc>,
    /// Number of timesteps to resolve
    pub timestep_count: usize,
    /// Whether the start timestep itself is part of the window
    pub include_start: bool,
    /// Standard analysis only: read offset 0 from every covering run instead
    /// of the best-available offset 2
    pub prefer_recent_offset: bool,
    /// Injected wall clock for the extended-analysis availability check
    pub now: DateTime<Utc>,
}

impl CycleRequest {
    /// Build a request from a boundary-level configuration request. The
    /// latest-analysis variant resolves to the standard analysis with latest
    /// mode on; everything else defaults to a plain full-window request.
    pub fn new(
        domain: Domain,
        config: ConfigRequest,
        start_time: DateTime<Utc>,
        timestep_count: usize,
        now: DateTime<Utc>,
    ) -> Self {
        let (configuration, latest) = config.resolve();
        Self {
            domain,
            configuration,
            latest,
            member: 1,
            start_time,
            timestep_count,
            include_start: true,
            prefer_recent_offset: false,
            now,
        }
    }
}

/// Resolves cycle requests against a schedule registry
#[derive(Debug, Clone, Copy)]
pub struct CycleResolver<'a> {
    registry: &'a ConfigRegistry,
}

impl<'a> CycleResolver<'a> {
    pub fn new(registry: &'a ConfigRegistry) -> Self {
        Self { registry }
    }

    /// Resolve a request at the software version in effect at its start time
    pub fn resolve(&self, request: &CycleRequest) -> Result<Vec<FilePartRecord>> {
        self.resolve_at(request, resolve_version(request.start_time))
    }

    /// Resolve a request at an explicit software version
    pub fn resolve_at(
        &self,
        request: &CycleRequest,
        version: NwmVersion,
    ) -> Result<Vec<FilePartRecord>> {
        let record = self.registry.lookup(
            request.configuration,
            request.domain,
            version,
            request.member,
        )?;

        if request.latest && record.is_forecast {
            return Err(Error::invalid_latest_query(request.configuration));
        }

        debug!(
            "Resolving {} timesteps of {} ({}, v{}) from {}",
            request.timestep_count, request.configuration, request.domain, version,
            request.start_time
        );

        if record.is_forecast {
            forecast::resolve(request, &record)
        } else if request.configuration == Configuration::AnalysisAssimExtend {
            Ok(extended::resolve(request, &record))
        } else {
            standard::resolve(request, &record)
        }
    }
}
