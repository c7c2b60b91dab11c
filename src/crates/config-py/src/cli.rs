//! Command-line arguments and the command entry point.

use crate::error::Result;
use crate::options::ScaffoldOptions;
use crate::scaffold::{GeneratedLayout, Scaffolder};
use clap::{ArgAction, Parser};
use std::path::Path;
use tracing::level_filters::LevelFilter;

/// Command-line interface of the `config-py` binary.
///
/// `--package` and `--env_var` are kept as raw strings so that `--version`
/// wins over a malformed value; they are validated by [`CliArgs::options`].
#[derive(Debug, Parser)]
#[command(name = "config-py")]
#[command(about = "Create a config package inside a Python project", long_about = None)]
#[command(version = crate::VERSION)]
pub struct CliArgs {
    /// Package directory to nest the config package under (relative to the current directory)
    #[arg(long, value_name = "PATH")]
    pub package: Option<String>,

    /// Environment variable that selects the settings module at import time
    #[arg(long = "env_var", visible_alias = "env-var", value_name = "NAME")]
    pub env_var: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only print errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl CliArgs {
    /// Validated scaffolding options.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::InvalidPackage`](crate::ScaffoldError::InvalidPackage) or
    /// [`ScaffoldError::InvalidEnvVar`](crate::ScaffoldError::InvalidEnvVar), both exit code 2.
    pub fn options(&self) -> Result<ScaffoldOptions> {
        ScaffoldOptions::from_raw(self.package.as_deref(), self.env_var.as_deref())
    }

    /// Log level selected by `--verbose` / `--quiet`.
    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::ERROR;
        }
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}

/// Validate the arguments and run the scaffolding command against `root`.
///
/// Nothing is written when validation fails.
///
/// # Errors
///
/// See [`CliArgs::options`] and [`Scaffolder::generate`].
pub fn run(args: &CliArgs, root: &Path) -> Result<GeneratedLayout> {
    let options = args.options()?;
    Scaffolder::new(root).generate(&options)
}
