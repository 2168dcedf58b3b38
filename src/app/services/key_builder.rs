//! Publisher object-key assembly
//!
//! The fetch layer concatenates resolved file parts with the publisher's
//! fixed path template:
//!
//! `nwm.<YYYYMMDD>/<prefix><configuration><dir_suffix>/nwm.<tHHz>.<configuration>.<variable><var_suffix>.<offset>.<domain>.nc`
//!
//! e.g. `nwm.20220415/analysis_assim/nwm.t16z.analysis_assim.channel_rt.tm02.conus.nc`.
//! The template is an external convention; everything variable in it comes
//! from the registry's records and the resolver's tokens.

use crate::app::models::{ConfigRecord, Domain, FilePartRecord, VariableRecord};
use crate::constants::{FILE_EXTENSION, PRODUCT_PREFIX};

/// Assemble the object key naming one resolved timestep's file.
///
/// `part.configuration` drives both the directory and file-name tokens, so
/// latest-analysis substitution carries through to the key.
pub fn object_key(
    part: &FilePartRecord,
    record: &ConfigRecord,
    variable: &VariableRecord,
    domain: Domain,
) -> String {
    let dir_suffix = if variable.use_suffix {
        record.dir_suffix.as_str()
    } else {
        ""
    };

    format!(
        "{prefix}.{date}/{var_prefix}{config}{dir_suffix}/{prefix}.{issuance}.{config}.{var}{var_suffix}.{offset}.{domain}.{ext}",
        prefix = PRODUCT_PREFIX,
        date = part.date_directory,
        var_prefix = variable.dir_prefix,
        config = part.configuration,
        dir_suffix = dir_suffix,
        issuance = part.issuance_token,
        var = variable.var_string,
        var_suffix = record.var_str_suffix,
        offset = part.offset_token,
        domain = domain.as_str(),
        ext = FILE_EXTENSION,
    )
}
