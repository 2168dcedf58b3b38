use clap::Parser;
use nwm_resolver::cli::{args::Args, commands};
use std::process;

fn main() {
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(()) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("NWM Resolver - National Water Model File Name Resolver");
    println!("======================================================");
    println!();
    println!("Compute the publisher-side file names covering a valid-time window of a");
    println!("National Water Model run, for a given domain and configuration.");
    println!();
    println!("USAGE:");
    println!("    nwm-resolver <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    resolve     Resolve the file identifiers covering a valid-time window");
    println!("    configs     Show the schedule records defined for a domain at a version");
    println!("    versions    Show the software-version cutover table");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("EXAMPLES:");
    println!("    # 18 hours of the conus short-range forecast issued around 06z:");
    println!("    nwm-resolver resolve --config short_range --start 2022-04-15T06:00");
    println!();
    println!("    # The freshest available analysis window, as object keys:");
    println!("    nwm-resolver resolve --latest --start 2022-04-15T01:00 -n 5 --format keys");
    println!();
    println!("    # Hawaii schedule as of a 2020 reference time:");
    println!("    nwm-resolver configs --domain hawaii --at 2020-06-01");
    println!();
    println!("For detailed help on any command, use:");
    println!("    nwm-resolver <COMMAND> --help");
}
