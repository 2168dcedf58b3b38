//! Versions command implementation
//!
//! Prints the software-version cutover table and optionally resolves the
//! version in effect at a reference time.

use crate::app::services::version_resolver::{cutovers, resolve_version};
use crate::cli::args::VersionsArgs;
use crate::Result;
use colored::Colorize;

/// Versions command runner
pub fn run_versions(args: &VersionsArgs) -> Result<()> {
    println!("{:<12} {}", "VERSION".bold(), "IN EFFECT FROM".bold());
    println!("{:<12} {}", "2.0", "(all earlier reference times)");
    for (cutover, version) in cutovers() {
        println!(
            "{:<12} {}",
            version.to_string(),
            cutover.format("%Y-%m-%d %H:%M UTC")
        );
    }

    if let Some(at) = &args.at {
        let version = resolve_version(at.0);
        println!();
        println!(
            "Reference time {} resolves to version {}",
            at.0.format("%Y-%m-%d %H:%M UTC"),
            version.to_string().bold()
        );
    }

    Ok(())
}
