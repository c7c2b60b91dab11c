//! config-py CLI
//!
//! Main entry point for the config-py command-line tool.

use clap::Parser;
use config_py::{cli, logging, CliArgs, Scaffolder};
use std::process::ExitCode;
use tracing::debug;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    if let Err(e) = logging::init(args.log_level()) {
        eprintln!("Warning: {e}");
    }

    let result = Scaffolder::from_current_dir()
        .and_then(|scaffolder| cli::run(&args, scaffolder.root()));

    match result {
        Ok(layout) => {
            if !args.quiet {
                for path in layout.paths() {
                    println!("✓ Created {}", path.display());
                }
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            debug!(error = ?e, "Scaffolding failed");
            eprintln!("Error: {e}");
            if e.is_usage_error() {
                eprintln!("\nFor more information, try '--help'.");
            }
            ExitCode::from(e.exit_code())
        }
    }
}
