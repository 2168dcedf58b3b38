//! Resolve command implementation
//!
//! Resolves the file identifiers covering a requested valid-time window and
//! prints them as a table, JSON, or ready-to-fetch object keys.

use crate::app::services::config_registry::ConfigRegistry;
use crate::app::services::cycle_resolver::{CycleRequest, CycleResolver};
use crate::app::services::key_builder;
use crate::app::services::version_resolver::resolve_version;
use crate::cli::args::{OutputFormat, ResolveArgs};
use crate::{Error, Result};
use chrono::Utc;
use colored::Colorize;
use tracing::{debug, info};

/// Resolve command runner
pub fn run_resolve(args: &ResolveArgs) -> Result<()> {
    debug!("Resolve arguments: {:?}", args);

    let registry = ConfigRegistry::new();
    let resolver = CycleResolver::new(&registry);

    let config_request = args.config_request()?;
    let start_time = args.start.0;
    let now = args.now.map(|t| t.0).unwrap_or_else(Utc::now);
    let version = resolve_version(start_time);

    let (configuration, _) = config_request.resolve();
    let record = registry.lookup(configuration, args.domain, version, args.member)?;
    let count = args.count.unwrap_or_else(|| record.total_timesteps());

    let mut request = CycleRequest::new(args.domain, config_request, start_time, count, now);
    request.member = args.member;
    request.include_start = !args.exclude_start;
    request.prefer_recent_offset = args.prefer_recent;

    let parts = resolver.resolve_at(&request, version)?;

    info!(
        "Resolved {} timesteps of {} ({}, v{}) starting {}",
        parts.len(),
        configuration,
        args.domain,
        version,
        start_time
    );

    match args.format {
        OutputFormat::Human => print_table(&parts),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&parts).map_err(|e| {
                Error::invalid_argument(format!("failed to serialize output: {}", e))
            })?);
        }
        OutputFormat::Keys => {
            let variable = registry
                .variable_specs(args.domain)
                .into_iter()
                .find(|v| v.group == args.variable)
                .ok_or_else(|| {
                    Error::invalid_argument(format!(
                        "no variable spec for group {:?} in domain {}",
                        args.variable, args.domain
                    ))
                })?;
            for part in &parts {
                println!(
                    "{}",
                    key_builder::object_key(part, &record, &variable, args.domain)
                );
            }
        }
    }

    Ok(())
}

fn print_table(parts: &[crate::app::models::FilePartRecord]) {
    println!(
        "{:<12} {:<10} {:<8} {:<22} {}",
        "DATE DIR".bold(),
        "ISSUANCE".bold(),
        "OFFSET".bold(),
        "VALID TIME".bold(),
        "CONFIGURATION".bold()
    );
    for part in parts {
        println!(
            "{:<12} {:<10} {:<8} {:<22} {}",
            part.date_directory,
            part.issuance_token,
            part.offset_token,
            part.valid_time.format("%Y-%m-%d %H:%M UTC"),
            part.configuration
        );
    }
}
