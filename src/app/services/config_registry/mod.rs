//! Static schedule registry for NWM run configurations
//!
//! This module answers "what are the scheduling parameters of configuration X
//! in domain Y at version Z" from table-driven reference data: a base table
//! per domain, a declarative list of version override patches, and a member
//! patch for the medium-range ensemble. Adding a new software version means
//! adding override entries, never rewriting a base table.
//!
//! The registry is an explicit object constructed once at startup and passed
//! by reference; tests can build one from substituted tables without touching
//! any process-wide state.

use crate::app::models::{ConfigRecord, Configuration, Domain, NwmVersion, VariableRecord};
use crate::constants::MEDIUM_RANGE_MEMBERS;
use crate::{Error, Result};
use std::collections::HashMap;
use tracing::debug;

pub mod overrides;
pub mod tables;

#[cfg(test)]
pub mod tests;

pub use overrides::{FieldPatch, OverridePatch, VersionRule};

/// Table-driven lookup of per-(configuration, domain, version, member)
/// scheduling records
#[derive(Debug, Clone)]
pub struct ConfigRegistry {
    base_tables: HashMap<Domain, Vec<ConfigRecord>>,
    overrides: Vec<OverridePatch>,
}

impl ConfigRegistry {
    /// Build the registry over the standard NWM schedule tables
    pub fn new() -> Self {
        Self::with_tables(tables::base_tables(), overrides::standard_overrides())
    }

    /// Build a registry over caller-supplied tables, e.g. a hypothetical
    /// future version under test
    pub fn with_tables(
        base_tables: HashMap<Domain, Vec<ConfigRecord>>,
        overrides: Vec<OverridePatch>,
    ) -> Self {
        Self {
            base_tables,
            overrides,
        }
    }

    /// Look up the scheduling record for one configuration.
    ///
    /// Gating is checked before any table access: configurations that do not
    /// exist for island domains fail with `ConfigurationNotSupported`, and
    /// puertorico below its introduction version fails with
    /// `DomainNotSupportedForVersion`. Version and member overrides are
    /// applied as a patch step after the base row is selected.
    pub fn lookup(
        &self,
        configuration: Configuration,
        domain: Domain,
        version: NwmVersion,
        member: u32,
    ) -> Result<ConfigRecord> {
        if tables::is_unsupported_island_config(configuration, domain) {
            return Err(Error::configuration_not_supported(configuration, domain));
        }

        if domain == Domain::PuertoRico && version < NwmVersion::V2_1 {
            return Err(Error::domain_not_supported(domain, version));
        }

        let table = self
            .base_tables
            .get(&domain)
            .ok_or_else(|| Error::configuration_not_supported(configuration, domain))?;

        let mut record = table
            .iter()
            .find(|r| r.configuration == configuration)
            .cloned()
            .ok_or_else(|| Error::configuration_not_supported(configuration, domain))?;

        for patch in &self.overrides {
            if patch.applies_to(domain, configuration, version) {
                patch.apply(&mut record);
            }
        }

        if configuration == Configuration::MediumRange {
            if !MEDIUM_RANGE_MEMBERS.contains(&member) {
                return Err(Error::invalid_argument(format!(
                    "medium_range ensemble member must be in {}..={}, got {}",
                    MEDIUM_RANGE_MEMBERS.start(),
                    MEDIUM_RANGE_MEMBERS.end(),
                    member
                )));
            }
            overrides::apply_member_patch(&mut record, member);
        }

        debug!(
            "Resolved schedule record: {} {} v{} member {}",
            configuration, domain, version, member
        );

        Ok(record)
    }

    /// All records defined for a domain at a version, with overrides applied
    /// (member 1 throughout). Used by the CLI schedule listing.
    pub fn records_for(&self, domain: Domain, version: NwmVersion) -> Result<Vec<ConfigRecord>> {
        if domain == Domain::PuertoRico && version < NwmVersion::V2_1 {
            return Err(Error::domain_not_supported(domain, version));
        }

        let table = self.base_tables.get(&domain).cloned().unwrap_or_default();
        Ok(table
            .into_iter()
            .map(|mut record| {
                for patch in &self.overrides {
                    if patch.applies_to(domain, record.configuration, version) {
                        patch.apply(&mut record);
                    }
                }
                record
            })
            .collect())
    }

    /// Per-variable-group naming records for a domain
    pub fn variable_specs(&self, domain: Domain) -> Vec<VariableRecord> {
        tables::variable_specs(domain)
    }
}

impl Default for ConfigRegistry {
    fn default() -> Self {
        Self::new()
    }
}
