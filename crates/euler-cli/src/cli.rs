use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "euler - solve Project Euler style puzzles from the eulerlab library.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads used to run several problems at once.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,

    #[command(flatten)]
    pub settings: SettingsArgs,
}

/// Options shared by every subcommand that resolves a configuration.
#[derive(Args, Debug, Clone, Default)]
pub struct SettingsArgs {
    /// Path to a configuration file in TOML format.
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory holding the fixture files (pNNN_*.txt). Defaults to `data`.
    #[arg(short = 'd', long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Solve one or more problems and print their answers.
    Solve(SolveArgs),
    /// List the available problems with their parameters and fixtures.
    List(ListArgs),
}

/// Arguments for the `solve` subcommand.
#[derive(Args, Debug)]
pub struct SolveArgs {
    /// Problem ids, comma-separated lists or ranges (e.g. `3 7 10-12,67`).
    #[arg(value_name = "IDS", required_unless_present = "all", conflicts_with = "all")]
    pub ids: Vec<String>,

    /// Solve every registered problem.
    #[arg(long)]
    pub all: bool,

    /// Override a problem parameter or configuration value.
    /// Can be used multiple times. Example: -S p010.limit=100
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE")]
    pub set_values: Vec<String>,

    /// Do not draw progress bars.
    #[arg(long)]
    pub no_progress: bool,
}

/// Arguments for the `list` subcommand.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only list problems that read a fixture file.
    #[arg(long)]
    pub fixtures: bool,
}
