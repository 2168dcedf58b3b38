//! Configs command implementation
//!
//! Lists the schedule records defined for a domain at a software version,
//! with version overrides already applied.

use crate::app::services::config_registry::ConfigRegistry;
use crate::cli::args::{ConfigsArgs, OutputFormat};
use crate::{Error, Result};
use colored::Colorize;
use tracing::debug;

/// Configs command runner
pub fn run_configs(args: &ConfigsArgs) -> Result<()> {
    debug!("Configs arguments: {:?}", args);

    let registry = ConfigRegistry::new();
    let version = args.resolved_version();
    let records = registry.records_for(args.domain, version)?;

    match args.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&records).map_err(|e| {
                Error::invalid_argument(format!("failed to serialize output: {}", e))
            })?);
        }
        _ => {
            println!(
                "Schedule for domain '{}' at version {}",
                args.domain.to_string().bold(),
                version.to_string().bold()
            );
            println!(
                "{:<22} {:<9} {:<9} {:<9} {:<9} {:<8} {:<9} {}",
                "CONFIGURATION".bold(),
                "HORIZON".bold(),
                "STEP".bold(),
                "RUNS/DAY".bold(),
                "BASE HR".bold(),
                "LATENCY".bold(),
                "KIND".bold(),
                "ABBREV".bold()
            );
            for record in &records {
                println!(
                    "{:<22} {:<9} {:<9} {:<9} {:<9} {:<8} {:<9} {}",
                    record.configuration.to_string(),
                    format!("{}h", record.duration_hours),
                    format!("{}min", record.timestep_minutes),
                    record.runs_per_day,
                    format!("{:02}z", record.base_run_hour),
                    format!("{}min", record.latency_minutes),
                    if record.is_forecast { "forecast" } else { "analysis" },
                    record.abbrev
                );
            }
        }
    }

    Ok(())
}
