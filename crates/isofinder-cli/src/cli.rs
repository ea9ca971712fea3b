use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Tony Kan, Ted Yu",
    version,
    about = "isofinder - Estimate nuclear binding energies and stability, and search isotope space for medically relevant candidates.",
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

    /// Set the number of threads for parallel computation.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,

    /// Path to a calibration and search configuration file in TOML format.
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S search.max-candidates=10
    #[arg(short = 'S', long = "set", global = true, value_name = "KEY=VALUE")]
    pub set_values: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Estimate binding energy and stability for a single nuclide.
    Estimate(EstimateArgs),
    /// Search isotope space for medically relevant candidates.
    Search(SearchArgs),
    /// Compare estimated binding energies against reference values.
    Validate(ValidateArgs),
    /// Cross-check search predictions against a reference dataset.
    Crosscheck(CrosscheckArgs),
    /// Manage the local data directory (reference datasets).
    Data(DataArgs),
}

/// Arguments for the `estimate` subcommand.
#[derive(Args, Debug)]
pub struct EstimateArgs {
    /// Proton count Z.
    #[arg(allow_negative_numbers = true, value_name = "Z")]
    pub protons: i64,

    /// Neutron count N.
    #[arg(allow_negative_numbers = true, value_name = "N")]
    pub neutrons: i64,
}

/// Output format for tabular results.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
}

/// Arguments for the `search` subcommand.
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Maximum number of candidates to return, overriding the config file.
    #[arg(short, long, value_name = "INT")]
    pub limit: Option<usize>,

    /// Write the ranked candidates to a CSV file.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Format for the console listing.
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

/// Arguments for the `validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Reference dataset (CSV or TOML). Defaults to the built-in six-nuclide set.
    #[arg(short, long, value_name = "PATH")]
    pub reference: Option<PathBuf>,

    /// Write the validation records to a CSV file.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Arguments for the `crosscheck` subcommand.
#[derive(Args, Debug)]
pub struct CrosscheckArgs {
    /// Reference dataset (CSV or TOML). Defaults to the dataset in the data directory.
    #[arg(short, long, value_name = "PATH")]
    pub reference: Option<PathBuf>,
}

/// Arguments for the `data` subcommand.
#[derive(Args, Debug)]
pub struct DataArgs {
    #[command(subcommand)]
    pub command: DataCommands,
}

/// Available commands for data management.
#[derive(Subcommand, Debug)]
pub enum DataCommands {
    /// Write the bundled reference dataset into the local data directory.
    Init {
        /// Overwrite an existing dataset.
        #[arg(long)]
        force: bool,
    },
    /// Show the absolute path to the local data directory.
    Path,
    /// Set a custom absolute path for the local data directory.
    SetPath {
        /// The new path to use for storing data files.
        #[arg(required = true)]
        path: PathBuf,
    },
    /// Reset the data path to its default, OS-specific location.
    ResetPath,
}
