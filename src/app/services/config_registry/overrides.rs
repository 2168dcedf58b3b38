//! Version and member override patches
//!
//! Base tables describe the current software version; these patches rewrite
//! individual fields for older versions and for medium-range ensemble members
//! beyond the first. A patch never re-derives a record, it only overwrites
//! the fields it names.

use crate::app::models::{ConfigRecord, Configuration, Domain, NwmVersion};

/// Which versions an override applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionRule {
    /// Applies to every version strictly before the named one
    Below(NwmVersion),
    /// Applies to exactly the named version
    Exactly(NwmVersion),
}

impl VersionRule {
    fn matches(&self, version: NwmVersion) -> bool {
        match self {
            VersionRule::Below(threshold) => version < *threshold,
            VersionRule::Exactly(target) => version == *target,
        }
    }
}

/// Field values an override replaces; `None` fields are left untouched
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldPatch {
    pub timestep_minutes: Option<u32>,
    pub duration_hours: Option<u32>,
    pub runs_per_day: Option<u32>,
}

/// One version override entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverridePatch {
    pub domain: Domain,
    /// `None` applies the patch to every configuration in the domain
    pub configuration: Option<Configuration>,
    pub rule: VersionRule,
    pub patch: FieldPatch,
}

impl OverridePatch {
    pub fn applies_to(
        &self,
        domain: Domain,
        configuration: Configuration,
        version: NwmVersion,
    ) -> bool {
        self.domain == domain
            && self.configuration.is_none_or(|c| c == configuration)
            && self.rule.matches(version)
    }

    pub fn apply(&self, record: &mut ConfigRecord) {
        if let Some(timestep_minutes) = self.patch.timestep_minutes {
            record.timestep_minutes = timestep_minutes;
        }
        if let Some(duration_hours) = self.patch.duration_hours {
            record.duration_hours = duration_hours;
        }
        if let Some(runs_per_day) = self.patch.runs_per_day {
            record.runs_per_day = runs_per_day;
        }
    }
}

/// The override entries for the known schedule history:
/// - conus medium range stepped 3-hourly before v2.1
/// - hawaii ran hourly timesteps in v2.0 (15-minute from v2.1)
/// - hawaii short range reached 60 hours, four times a day, in v2.0
pub fn standard_overrides() -> Vec<OverridePatch> {
    vec![
        OverridePatch {
            domain: Domain::Conus,
            configuration: Some(Configuration::MediumRange),
            rule: VersionRule::Below(NwmVersion::V2_1),
            patch: FieldPatch {
                timestep_minutes: Some(180),
                ..FieldPatch::default()
            },
        },
        OverridePatch {
            domain: Domain::Hawaii,
            configuration: None,
            rule: VersionRule::Exactly(NwmVersion::V2_0),
            patch: FieldPatch {
                timestep_minutes: Some(60),
                ..FieldPatch::default()
            },
        },
        OverridePatch {
            domain: Domain::Hawaii,
            configuration: Some(Configuration::ShortRange),
            rule: VersionRule::Exactly(NwmVersion::V2_0),
            patch: FieldPatch {
                duration_hours: Some(60),
                runs_per_day: Some(4),
                ..FieldPatch::default()
            },
        },
    ]
}

/// Rewrite a medium-range record for ensemble members beyond the first:
/// shorter horizon and member-numbered suffixes.
pub fn apply_member_patch(record: &mut ConfigRecord, member: u32) {
    if member > 1 {
        record.duration_hours = 204;
        record.dir_suffix = format!("_mem{}", member);
        record.var_str_suffix = format!("_{}", member);
    }
}
