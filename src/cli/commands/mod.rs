//! Command implementations for the NWM resolver CLI
//!
//! Each subcommand lives in its own module; this module dispatches and owns
//! logging setup so every command logs the same way.

pub mod configs;
pub mod resolve;
pub mod shared;
pub mod versions;

use crate::cli::args::{Args, Commands};
use crate::{Error, Result};

/// Main command runner for the NWM resolver
pub fn run(args: Args) -> Result<()> {
    shared::setup_logging(args.get_log_level());

    match &args.command {
        Some(Commands::Resolve(resolve_args)) => resolve::run_resolve(resolve_args),
        Some(Commands::Configs(configs_args)) => configs::run_configs(configs_args),
        Some(Commands::Versions(versions_args)) => versions::run_versions(versions_args),
        None => Err(Error::invalid_argument("no subcommand provided")),
    }
}
