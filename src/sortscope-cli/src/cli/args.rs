//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use sortscope_core::{Algorithm, BarScale, SortOrder, StartPolicy};

use super::styles::{AFTER_HELP, get_styles};
use crate::config::Validation;

/// Log level for the subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Only show errors
    Error,
    /// Show warnings and errors
    Warn,
    /// Show informational messages, warnings, and errors (default)
    #[default]
    Info,
    /// Show debug messages and above
    Debug,
    /// Show all messages including trace-level details
    Trace,
}

impl LogLevel {
    /// Convert to tracing filter string.
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// What happens when a sort starts while another one runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    /// Stop the running sort, then start the new one
    Preempt,
    /// Refuse the new sort
    Reject,
}

impl From<PolicyArg> for StartPolicy {
    fn from(policy: PolicyArg) -> Self {
        match policy {
            PolicyArg::Preempt => StartPolicy::Preempt,
            PolicyArg::Reject => StartPolicy::Reject,
        }
    }
}

/// Sortscope - watch sorting algorithms work, one step at a time.
///
/// Without a subcommand, starts the interactive visualizer.
#[derive(Parser, Debug)]
#[command(name = "sortscope")]
#[command(author, version)]
#[command(about = "Sortscope - animated sorting algorithms", long_about = None)]
#[command(styles = get_styles(), after_help = AFTER_HELP)]
pub struct Cli {
    #[clap(flatten)]
    pub settings: SettingsArgs,

    /// Config file (default: $SORTSCOPE_CONFIG or <config dir>/sortscope/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log level (overrides SORTSCOPE_LOG and RUST_LOG)
    #[arg(long, global = true, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Log file used while the visualizer runs
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Seed for reproducible arrays
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Redraw rate of the visualizer
    #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u32).range(1..=240))]
    pub fps: u32,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Settings checks needed by the selected command.
    ///
    /// `sort --values` never generates an array, so size and range are
    /// not checked.
    pub fn validation(&self) -> Validation {
        match &self.command {
            Some(Commands::Sort(args)) if args.values.is_some() => Validation::DelayOnly,
            _ => Validation::Full,
        }
    }
}

/// Overrides for the array and runner settings.
#[derive(Args, Debug, Default, Clone)]
pub struct SettingsArgs {
    /// Number of elements
    #[arg(long, global = true, value_name = "N")]
    pub size: Option<usize>,

    /// Smallest generated value
    #[arg(long, global = true, value_name = "A", allow_negative_numbers = true)]
    pub min: Option<i32>,

    /// Largest generated value
    #[arg(long, global = true, value_name = "B", allow_negative_numbers = true)]
    pub max: Option<i32>,

    /// Pause after each step, in milliseconds
    #[arg(long, global = true, value_name = "MS")]
    pub delay: Option<u64>,

    /// Sort smallest first
    #[arg(long, global = true, conflicts_with = "descending")]
    pub ascending: bool,

    /// Sort largest first
    #[arg(long, global = true)]
    pub descending: bool,

    /// Bar heights: fit the tallest value or use values as rows
    #[arg(long, global = true, value_name = "fit|absolute")]
    pub scale: Option<BarScale>,

    /// Behaviour when a sort starts during another
    #[arg(long, global = true, value_enum)]
    pub policy: Option<PolicyArg>,
}

impl SettingsArgs {
    /// Order requested on the command line, if any.
    pub fn order(&self) -> Option<SortOrder> {
        if self.ascending {
            Some(SortOrder::Ascending)
        } else if self.descending {
            Some(SortOrder::Descending)
        } else {
            None
        }
    }
}

/// CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run one sort without the visualizer and print the result
    Sort(SortArgs),
}

/// Arguments of `sortscope sort`.
#[derive(Args, Debug, Clone)]
pub struct SortArgs {
    /// Algorithm to run (bubble, selection, merge)
    #[arg(value_name = "ALGORITHM")]
    pub algorithm: Algorithm,

    /// Values to sort instead of a generated array
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    pub values: Option<Vec<i32>>,

    /// Print the outcome as JSON
    #[arg(long)]
    pub json: bool,

    /// Print every step
    #[arg(long)]
    pub steps: bool,

    /// Pause for the configured delay between steps
    #[arg(long)]
    pub paced: bool,
}
